//! # Gradient Selection
//!
//! Maps a permutation hash to one of a small set of integer gradient
//! directions and returns its dot product with a corner-relative offset.
//!
//! Only bit tests and additions are used, so the result keeps the
//! fixed-point format of the offsets (gradient components are small
//! integers, not fractions). None of these are unit length; each noise
//! dimension compensates in its final scaling constant.

/// 1D gradient: one of `±1..=±8` times `x`.
///
/// `x` is `.12`; the result is `.12`.
#[inline]
#[must_use]
pub const fn grad1(hash: u8, x: i32) -> i32 {
    let h = hash & 15;
    let grad = 1 + (h & 7) as i32;
    if h & 8 != 0 {
        -grad * x
    } else {
        grad * x
    }
}

/// 2D gradient: one of 8 directions `(±1, ±2)` / `(±2, ±1)`.
#[inline]
#[must_use]
pub const fn grad2(hash: u8, x: i32, y: i32) -> i32 {
    let h = hash & 7;
    let (u, v) = if h < 4 { (x, y) } else { (y, x) };
    let u = if h & 1 != 0 { -u } else { u };
    let v = if h & 2 != 0 { -2 * v } else { 2 * v };
    u + v
}

/// 3D gradient: the 12 edge midpoints of a cube, with four repeats.
#[inline]
#[must_use]
pub const fn grad3(hash: u8, x: i32, y: i32, z: i32) -> i32 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    // h = 12..15 repeat four of the directions.
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    let u = if h & 1 != 0 { -u } else { u };
    let v = if h & 2 != 0 { -v } else { v };
    u + v
}

/// 4D gradient: the 32 edge midpoints of a tesseract.
#[inline]
#[must_use]
pub const fn grad4(hash: u8, x: i32, y: i32, z: i32, t: i32) -> i32 {
    let h = hash & 31;
    let u = if h < 24 { x } else { y };
    let v = if h < 16 { y } else { z };
    let w = if h < 8 { z } else { t };
    let u = if h & 1 != 0 { -u } else { u };
    let v = if h & 2 != 0 { -v } else { v };
    let w = if h & 4 != 0 { -w } else { w };
    u + v + w
}
