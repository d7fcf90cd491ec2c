//! # 8-bit Color Math
//!
//! Scaling and blending on single channels, as used by FastLED-style
//! color code. Every function is a few multiplies and shifts and never
//! overflows its inputs' width.

/// Scales `i` by `scale / 256`, treating `scale = 255` as "almost 1".
///
/// Computes `(i * (1 + scale)) >> 8`, so `scale8(i, 255) == i`.
#[inline]
#[must_use]
pub const fn scale8(i: u8, scale: u8) -> u8 {
    ((i as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Like [`scale8`], but never turns a nonzero input into zero.
///
/// The result is zero only if `i` or `scale` is zero, which keeps dimmed
/// LEDs from switching off entirely.
#[inline]
#[must_use]
pub const fn scale8_video(i: u8, scale: u8) -> u8 {
    let scaled = ((i as u16 * scale as u16) >> 8) as u8;
    if i != 0 && scale != 0 {
        scaled + 1
    } else {
        scaled
    }
}

/// Blends `top` into `bottom` with weight `alpha / 256`.
///
/// `alpha = 255` gives almost exactly `top`; `alpha = 0` gives `bottom`.
#[inline]
#[must_use]
pub const fn blend8(bottom: u8, top: u8, alpha: u8) -> u8 {
    let a = alpha as u16;
    ((bottom as u16 * (256 - a) + top as u16 * a) >> 8) as u8
}
