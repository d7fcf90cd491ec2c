//! # RGBA Pixels
//!
//! 8-bit straight-alpha RGBA, laid out as four bytes so a whole strip can
//! be handed to an LED driver with [`bytemuck::cast_slice`].

use std::fmt;
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};

use crate::error::{ColorError, ColorResult};
use crate::math8::blend8;

/// An 8-bit RGBA color.
///
/// Colors produced by this crate are opaque (`a == 255`) unless stated
/// otherwise. Channels are assumed to be linear, not sRGB.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Rgba {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha (coverage).
    pub a: u8,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::from_rgba(0, 0, 0, 0);

    /// Creates an opaque color.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color with explicit alpha.
    #[inline]
    #[must_use]
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from `0x00RRGGBB`.
    #[inline]
    #[must_use]
    pub const fn from_rgb_u32(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Packs the color channels as `0x00RRGGBB`, dropping alpha.
    #[inline]
    #[must_use]
    pub const fn to_rgb_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Parses `#RRGGBB` (opaque) or `#RRGGBBAA`. The `#` is optional.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] for any other length or a
    /// non-hex digit.
    pub fn from_hex(text: &str) -> ColorResult<Self> {
        let digits = text.strip_prefix('#').unwrap_or(text);
        let invalid = || ColorError::InvalidHex(text.to_owned());

        if !matches!(digits.len(), 6 | 8) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).map_err(|_| invalid());

        let alpha = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::from_rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    /// Blends `top` over this color with weight `alpha / 256` per channel.
    ///
    /// The result is opaque.
    #[inline]
    #[must_use]
    pub const fn blend(self, top: Self, alpha: u8) -> Self {
        Self::new(
            blend8(self.r, top.r, alpha),
            blend8(self.g, top.g, alpha),
            blend8(self.b, top.b, alpha),
        )
    }

    /// Scales every channel, alpha included, by `alpha / 255`.
    ///
    /// The result carries its coverage in the color channels, ready to be
    /// composited with [`Rgba::over`].
    #[inline]
    #[must_use]
    pub const fn apply_alpha(self, alpha: u8) -> Self {
        const fn mul(c: u8, alpha: u8) -> u8 {
            (c as u32 * alpha as u32 / 255) as u8
        }
        Self::from_rgba(
            mul(self.r, alpha),
            mul(self.g, alpha),
            mul(self.b, alpha),
            mul(self.a, alpha),
        )
    }

    /// Composites `top` over an opaque `bottom`.
    ///
    /// `top` must already be scaled by its own alpha (see
    /// [`Rgba::apply_alpha`]). Each channel is
    /// `bottom * (255 - top.a) / 255 + top`, saturating at 255.
    #[inline]
    #[must_use]
    pub const fn over(bottom: Self, top: Self) -> Self {
        const fn channel(bottom: u8, top: u8, coverage: u8) -> u8 {
            let sum = bottom as u32 * (255 - coverage as u32) / 255 + top as u32;
            if sum > 255 {
                255
            } else {
                sum as u8
            }
        }
        Self::new(
            channel(bottom.r, top.r, top.a),
            channel(bottom.g, top.g, top.a),
            channel(bottom.b, top.b, top.a),
        )
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Debug for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl fmt::Display for Rgba {
    /// Formats as `#rrggbb`, or `#rrggbbaa` when not opaque.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_four_bytes() {
        assert_eq!(std::mem::size_of::<Rgba>(), 4);
        let pixels = [Rgba::new(1, 2, 3), Rgba::from_rgba(4, 5, 6, 7)];
        let bytes: &[u8] = bytemuck::cast_slice(&pixels);
        assert_eq!(bytes, &[1, 2, 3, 255, 4, 5, 6, 7]);
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Rgba::from_hex("#FF8000").unwrap(), Rgba::new(255, 128, 0));
        assert_eq!(Rgba::from_hex("00ff0080").unwrap(), Rgba::from_rgba(0, 255, 0, 128));
        assert_eq!("#0a0B0c".parse::<Rgba>().unwrap(), Rgba::new(10, 11, 12));

        for bad in ["", "#", "#12345", "#1234567", "#GG0000", "#+10000", "#123456789", "#ééé"] {
            assert!(
                matches!(Rgba::from_hex(bad), Err(ColorError::InvalidHex(ref s)) if s == bad),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_display_round_trips() {
        for color in [Rgba::new(255, 128, 0), Rgba::from_rgba(1, 2, 3, 4), Rgba::BLACK] {
            assert_eq!(color.to_string().parse::<Rgba>().unwrap(), color);
        }
        assert_eq!(Rgba::new(255, 128, 0).to_string(), "#ff8000");
    }

    #[test]
    fn test_u32_packing() {
        let c = Rgba::from_rgb_u32(0x12_3456);
        assert_eq!(c, Rgba::new(0x12, 0x34, 0x56));
        assert_eq!(c.to_rgb_u32(), 0x12_3456);
    }

    #[test]
    fn test_blend() {
        let bottom = Rgba::from_rgba(10, 0, 255, 7);
        let top = Rgba::new(200, 255, 0);
        assert_eq!(bottom.blend(top, 255), Rgba::new(199, 254, 0));
        assert_eq!(bottom.blend(top, 0), Rgba::new(10, 0, 255));
    }

    #[test]
    fn test_apply_alpha() {
        assert_eq!(Rgba::WHITE.apply_alpha(255), Rgba::WHITE);
        assert_eq!(Rgba::WHITE.apply_alpha(0), Rgba::TRANSPARENT);
        assert_eq!(Rgba::new(255, 100, 0).apply_alpha(128), Rgba::from_rgba(128, 50, 0, 128));
    }

    #[test]
    fn test_over() {
        let bottom = Rgba::new(200, 100, 50);

        // Transparent top leaves the bottom.
        assert_eq!(Rgba::over(bottom, Rgba::TRANSPARENT), bottom);
        // Opaque top replaces it.
        let top = Rgba::new(1, 2, 3);
        assert_eq!(Rgba::over(bottom, top), top);
        // Half coverage.
        let half = Rgba::new(255, 0, 0).apply_alpha(128);
        assert_eq!(Rgba::over(bottom, half), Rgba::new(99 + 128, 49, 24));
    }

    #[test]
    fn test_over_saturates() {
        // Straight-alpha input is not what `over` expects, but stays in range.
        let top = Rgba::from_rgba(255, 255, 255, 0);
        assert_eq!(Rgba::over(Rgba::WHITE, top), Rgba::WHITE);
    }
}
