//! # LEDWAVE Noise
//!
//! Integer-only simplex noise for LED animations on controllers without
//! a floating-point unit.
//!
//! ## Design Principles
//!
//! 1. **Integer only**: Sampling never touches `f32`/`f64`
//! 2. **Deterministic**: The same input gives the same output on every target
//! 3. **Bounded**: Every input is valid; the output saturates instead of wrapping
//! 4. **Close to float**: Tracks the classic floating-point simplex noise
//!
//! ## Core Components
//!
//! - `noise1`..`noise4`: Simplex noise in one to four dimensions
//! - `fbm2`, `fbm3`: Octave sums
//! - `FixedCoord`, `NoiseSample`: Q19.12 input and Q0.15 output
//! - `isqrt`, `mul16`: Integer helpers for animation math
//!
//! ## Example
//!
//! ```rust
//! use ledwave_noise::{noise3, FixedCoord};
//!
//! // One lattice cell every 8 pixels, time advancing along z.
//! let pixel = 5;
//! let millis = 1_000;
//! let sample = noise3(
//!     FixedCoord::from_raw(pixel << 9),
//!     FixedCoord::ZERO,
//!     FixedCoord::from_raw(millis << 2),
//! );
//! let heat: u8 = sample.to_u8();
//! # let _ = heat;
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]
// Fixed-point and 8-bit math narrow between integer widths on purpose.
#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]

pub mod fixed;
pub mod fractal;
pub mod gradient;
pub mod noise;
pub mod tables;

pub use fixed::{isqrt, mul16, FixedCoord, NoiseSample};
pub use fractal::{fbm2, fbm3, MAX_OCTAVES};
pub use noise::{noise1, noise2, noise3, noise4};
