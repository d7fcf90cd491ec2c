//! # LEDWAVE Color
//!
//! Integer color model for addressable LED strips.
//!
//! ## Design Principles
//!
//! 1. **Integer only**: Conversions use 8-bit scale and blend primitives
//! 2. **Bit exact**: `Hsv::rainbow` matches FastLED's rainbow map
//! 3. **Plain bytes**: A strip is `[Rgba]`, castable to `[u8]` for drivers
//! 4. **Fail at load**: Only palette configuration returns errors
//!
//! ## Core Components
//!
//! - `Rgba`, `scale8`, `blend8`: Pixels and 8-bit math
//! - `Hsv`: Spectrum and rainbow conversions
//! - `Palette16`, `PaletteLibrary`: 16-stop palettes, built-in or from TOML
//! - `Strip`, `Surface`: Where animations draw
//!
//! ## Example
//!
//! ```rust
//! use ledwave_color::{Palette16, Rgba, Strip};
//!
//! let mut leds = [Rgba::BLACK; 60];
//! let mut strip = Strip::new(&mut leds);
//! strip.fill_palette(&Palette16::OCEAN, 0, 0x0400);
//! assert_eq!(strip[0], Palette16::OCEAN[0]);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]
// Fixed-point and 8-bit math narrow between integer widths on purpose.
#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]

pub mod config;
pub mod error;
pub mod hsv;
pub mod math8;
pub mod named;
pub mod palette;
pub mod rgba;
pub mod strip;
pub mod surface;

pub use config::PaletteLibrary;
pub use error::{ColorError, ColorResult};
pub use hsv::{DefaultYellow, Hsv, ModerateYellow, StrongYellow, YellowBoost};
pub use math8::{blend8, scale8, scale8_video};
pub use palette::Palette16;
pub use rgba::Rgba;
pub use strip::Strip;
pub use surface::Surface;
