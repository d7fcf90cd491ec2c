//! # Fractal Noise
//!
//! Octave sums of the simplex noise (fractional Brownian motion).
//!
//! Each octave doubles the coordinate frequency and halves the amplitude.
//! The sum is normalized by the total amplitude, so the result stays a
//! [`NoiseSample`] in the same nominal range as a single octave.

use crate::fixed::{FixedCoord, NoiseSample};
use crate::noise::{noise2, noise3};

/// Largest accepted octave count; more would only add sub-pixel detail.
pub const MAX_OCTAVES: u8 = 8;

/// 2D fractal noise with `octaves` layers (clamped to `1..=MAX_OCTAVES`).
///
/// Coordinates are doubled with wrapping arithmetic, so very large inputs
/// stay total but lose continuity in the finest octaves.
///
/// # Example
///
/// ```rust
/// use ledwave_noise::{fbm2, noise2, FixedCoord};
///
/// let (x, y) = (FixedCoord::from_raw(0x1234), FixedCoord::from_raw(-0x777));
/// assert_eq!(fbm2(x, y, 1), noise2(x, y));
/// ```
#[must_use]
pub fn fbm2(x: FixedCoord, y: FixedCoord, octaves: u8) -> NoiseSample {
    octaved(octaves, |frequency| {
        noise2(x.wrapping_mul_int(frequency), y.wrapping_mul_int(frequency))
    })
}

/// 3D fractal noise with `octaves` layers (clamped to `1..=MAX_OCTAVES`).
#[must_use]
pub fn fbm3(x: FixedCoord, y: FixedCoord, z: FixedCoord, octaves: u8) -> NoiseSample {
    octaved(octaves, |frequency| {
        noise3(
            x.wrapping_mul_int(frequency),
            y.wrapping_mul_int(frequency),
            z.wrapping_mul_int(frequency),
        )
    })
}

/// Sums octaves of `sample(frequency)`, weighting octave `k` of `n` by
/// `2^(n - 1 - k)`.
#[inline]
fn octaved(octaves: u8, mut sample: impl FnMut(i32) -> NoiseSample) -> NoiseSample {
    let octaves = octaves.clamp(1, MAX_OCTAVES);
    let mut total: i32 = 0;
    let mut max_amplitude: i32 = 0;

    for octave in 0..octaves {
        let amplitude = 1 << (octaves - 1 - octave);
        total += i32::from(sample(1 << octave).raw()) * amplitude;
        max_amplitude += amplitude;
    }

    NoiseSample::saturating_from(i64::from(total / max_amplitude))
}
