//! # Fixed-Point Types
//!
//! **NO FLOATING POINT ON THE SAMPLING PATH**
//!
//! Many LED controllers have no FPU, so every noise input and output is
//! an integer with an implicit binary point.
//!
//! ## Formats
//!
//! - `FixedCoord`: Q19.12 in an `i32` (noise input)
//! - `NoiseSample`: Q0.15 in an `i16` (noise output, nominally [-1, 1))
//!
//! The `f64` conversions exist for host-side setup and testing only.

use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Number of fractional bits in a [`FixedCoord`].
pub const COORD_FRACTION_BITS: u32 = 12;

/// Number of fractional bits in a [`NoiseSample`].
pub const SAMPLE_FRACTION_BITS: u32 = 15;

/// The value 1.0 as a raw [`FixedCoord`].
const COORD_ONE: i32 = 1 << COORD_FRACTION_BITS;

// =============================================================================
// FixedCoord - Q19.12 noise input
// =============================================================================

/// Signed Q19.12 fixed-point coordinate.
///
/// One lattice cell of the 1D noise is exactly `1.0` (raw `0x1000`), so
/// the caller chooses the feature size by scaling world coordinates
/// before converting.
///
/// # Range
///
/// - Minimum: -524288.0
/// - Maximum: 524287.999755859375
///
/// # Example
///
/// ```rust
/// use ledwave_noise::FixedCoord;
///
/// let x = FixedCoord::from_int(3);
/// assert_eq!(x.raw(), 3 << 12);
/// assert_eq!(FixedCoord::from_f64(0.5).raw(), 0x800);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct FixedCoord(i32);

impl FixedCoord {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// One lattice unit (1.0).
    pub const ONE: Self = Self(COORD_ONE);

    /// Creates a coordinate from its raw Q19.12 representation.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Creates a coordinate from a whole number, wrapping outside the
    /// Q19.12 range.
    #[inline]
    #[must_use]
    pub const fn from_int(whole: i32) -> Self {
        Self(whole.wrapping_shl(COORD_FRACTION_BITS))
    }

    /// Converts from a float, rounding to nearest and saturating.
    #[inline]
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        // `as` saturates on overflow and maps NaN to zero.
        Self((value * f64::from(COORD_ONE)).round() as i32)
    }

    /// Returns the raw Q19.12 value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Returns the lattice cell (floor of the value).
    #[inline]
    #[must_use]
    pub const fn whole(self) -> i32 {
        self.0 >> COORD_FRACTION_BITS
    }

    /// Returns the fractional part as raw `.12` (0..=0xFFF).
    #[inline]
    #[must_use]
    pub const fn fraction(self) -> i32 {
        self.0 & (COORD_ONE - 1)
    }

    /// Converts to a float.
    #[inline]
    #[must_use]
    pub fn to_f64(self) -> f64 {
        f64::from(self.0) / f64::from(COORD_ONE)
    }

    /// Wrapping addition.
    #[inline]
    #[must_use]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }

    /// Wrapping multiplication by an integer factor.
    #[inline]
    #[must_use]
    pub const fn wrapping_mul_int(self, factor: i32) -> Self {
        Self(self.0.wrapping_mul(factor))
    }
}

impl Add for FixedCoord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.wrapping_add(rhs)
    }
}

impl Sub for FixedCoord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl fmt::Debug for FixedCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedCoord({:#x} = {})", self.0, self.to_f64())
    }
}

impl fmt::Display for FixedCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}

// =============================================================================
// NoiseSample - Q0.15 noise output
// =============================================================================

/// Signed Q0.15 noise value, nominally in [-1, 1).
///
/// Every noise function scales its natural range onto the full `i16`
/// range, so `raw() / 32768` tracks the floating-point reference.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct NoiseSample(i16);

impl NoiseSample {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// Smallest representable value (-1.0).
    pub const MIN: Self = Self(i16::MIN);

    /// Largest representable value (just below 1.0).
    pub const MAX: Self = Self(i16::MAX);

    /// Creates a sample from its raw Q0.15 representation.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: i16) -> Self {
        Self(raw)
    }

    /// Creates a sample from a wide intermediate, saturating at the
    /// `i16` bounds instead of wrapping.
    #[inline]
    #[must_use]
    pub const fn saturating_from(wide: i64) -> Self {
        if wide > i16::MAX as i64 {
            Self::MAX
        } else if wide < i16::MIN as i64 {
            Self::MIN
        } else {
            Self(wide as i16)
        }
    }

    /// Returns the raw Q0.15 value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> i16 {
        self.0
    }

    /// Converts to a float in [-1, 1).
    #[inline]
    #[must_use]
    pub fn to_f64(self) -> f64 {
        f64::from(self.0) / f64::from(1u32 << SAMPLE_FRACTION_BITS)
    }

    /// Maps [-1, 1) onto `0..=255` (e.g. a heat or palette index).
    #[inline]
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        ((self.0 as i32 + 0x8000) >> 8) as u8
    }

    /// Maps [-1, 1) onto the full `u16` range (e.g. a hue).
    #[inline]
    #[must_use]
    pub const fn to_u16(self) -> u16 {
        (self.0 as i32 + 0x8000) as u16
    }
}

impl From<NoiseSample> for i16 {
    #[inline]
    fn from(sample: NoiseSample) -> Self {
        sample.0
    }
}

impl Neg for NoiseSample {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self(self.0.saturating_neg())
    }
}

impl fmt::Debug for NoiseSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoiseSample({} = {:+.5})", self.0, self.to_f64())
    }
}

impl fmt::Display for NoiseSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+.5}", self.to_f64())
    }
}

// =============================================================================
// Integer helpers
// =============================================================================

/// Fast integer square root, at most one off from `floor(sqrt(x))`.
///
/// Ten Newton steps starting from 1024, enough for every `i32`.
/// Negative input returns 0; animations only use this for distances,
/// where that is harmless.
#[must_use]
pub const fn isqrt(x: i32) -> i32 {
    if x < 0 {
        return 0;
    }
    let mut a = 1024;
    let mut step = 0;
    while step < 10 {
        let b = x / a;
        a = (a + b) / 2;
        step += 1;
    }
    a
}

/// Approximate `(x * y) >> 16` from three 8x8 partial products.
///
/// The low-byte by low-byte term is dropped, so the result is up to 2
/// below the exact value; it never overflows. Useful on 8-bit cores
/// that lack a 16x16 multiplier.
#[inline]
#[must_use]
pub const fn mul16(x: u16, y: u16) -> u16 {
    let (xh, xl) = (x >> 8, x & 0xFF);
    let (yh, yl) = (y >> 8, y & 0xFF);
    xh * yh + ((xl * yh) >> 8) + ((xh * yl) >> 8)
}
