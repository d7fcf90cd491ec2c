//! # LEDWAVE
//!
//! Smooth, deterministic colors for addressable LED strips and matrices,
//! computed with integer arithmetic only.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────┐     ┌──────────────────────┐
//! │   ledwave_noise      │     │   ledwave_color      │
//! │                      │     │                      │
//! │  • Tables, gradients │     │  • Rgba, 8-bit math  │
//! │  • noise1..noise4    │────>│  • Hsv, Palette16    │
//! │  • fbm2, fbm3        │     │  • Strip, Surface    │
//! └──────────────────────┘     └──────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use ledwave::prelude::*;
//!
//! let mut leds = [Rgba::BLACK; 30];
//! let mut strip = Strip::new(&mut leds);
//! let time = FixedCoord::from_int(3);
//!
//! strip.fill_with(|x, _| {
//!     let heat = noise2(FixedCoord::from_raw(i32::from(x) << 9), time);
//!     Palette16::HEAT.color_at(heat.to_u16() >> 1)
//! });
//! ```

pub use ledwave_color as color;
pub use ledwave_noise as noise;

/// Everything an animation usually needs.
pub mod prelude {
    pub use ledwave_color::{
        named, Hsv, Palette16, PaletteLibrary, Rgba, Strip, Surface,
    };
    pub use ledwave_noise::{
        fbm2, fbm3, noise1, noise2, noise3, noise4, FixedCoord, NoiseSample,
    };
}
