//! # 16-Stop Palettes
//!
//! A palette is a ring of 16 colors sampled with a 16-bit position, like
//! FastLED's `CRGBPalette16` but with 8 more bits of position for smoother
//! gradients on long strips.
//!
//! ## Built-in palettes
//!
//! The FastLED set: `cloud`, `lava`, `ocean`, `forest`, `rainbow`,
//! `rainbow_stripe`, `party` and `heat`.

use std::ops::Index;

use crate::error::{ColorError, ColorResult};
use crate::math8::scale8;
use crate::named::{
    AQUA, AQUAMARINE, BLACK, BLUE, CADET_BLUE, CORNFLOWER_BLUE, DARK_BLUE, DARK_CYAN, DARK_GREEN,
    DARK_OLIVE_GREEN, DARK_RED, FOREST_GREEN, GREEN, LAWN_GREEN, LIGHT_BLUE, LIGHT_GREEN,
    LIGHT_SKY_BLUE, LIME_GREEN, MAROON, MEDIUM_AQUAMARINE, MEDIUM_BLUE, MIDNIGHT_BLUE, NAVY,
    OLIVE_DRAB, ORANGE, RED, SEA_GREEN, SKY_BLUE, TEAL, WHITE, YELLOW_GREEN,
};
use crate::rgba::Rgba;

/// Number of stops in a palette.
pub const STOPS: usize = 16;

/// A ring of 16 colors with linear interpolation between neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Palette16 {
    colors: [Rgba; STOPS],
}

impl Palette16 {
    /// Creates a palette from its stops.
    #[inline]
    #[must_use]
    pub const fn new(colors: [Rgba; STOPS]) -> Self {
        Self { colors }
    }

    /// Creates a palette from a slice that must hold exactly 16 colors.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::WrongStopCount`] naming `name` otherwise.
    pub fn from_slice(name: &str, colors: &[Rgba]) -> ColorResult<Self> {
        let colors: [Rgba; STOPS] = colors.try_into().map_err(|_| ColorError::WrongStopCount {
            name: name.to_owned(),
            found: colors.len(),
        })?;
        Ok(Self::new(colors))
    }

    /// The stops, in order.
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[Rgba; STOPS] {
        &self.colors
    }

    /// Samples the palette at a 16-bit position.
    ///
    /// The top 4 bits pick a stop and the next 8 bits blend towards the
    /// following one; above stop 15 the ring wraps back to stop 0. The
    /// low 4 bits are ignored. The result is opaque.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ledwave_color::{Palette16, Rgba};
    ///
    /// let heat = Palette16::HEAT;
    /// assert_eq!(heat.color_at(0x5000), Rgba::new(255, 0, 0));
    /// ```
    #[must_use]
    pub const fn color_at(&self, position: u16) -> Rgba {
        let index = (position >> 12) as usize;
        let blend = (position >> 4) as u8;

        let bottom = self.colors[index];
        let top = self.colors[(index + 1) % STOPS];

        let keep = 255 - blend;
        Rgba::new(
            scale8(bottom.r, keep) + scale8(top.r, blend),
            scale8(bottom.g, keep) + scale8(top.g, blend),
            scale8(bottom.b, keep) + scale8(top.b, blend),
        )
    }

    /// Looks up a built-in palette by name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::UnknownPalette`] for any other name.
    pub fn builtin(name: &str) -> ColorResult<Self> {
        BUILTIN
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|&(_, palette)| palette)
            .ok_or_else(|| ColorError::UnknownPalette(name.to_owned()))
    }
}

impl Index<usize> for Palette16 {
    type Output = Rgba;

    fn index(&self, index: usize) -> &Rgba {
        &self.colors[index]
    }
}

impl From<[Rgba; STOPS]> for Palette16 {
    fn from(colors: [Rgba; STOPS]) -> Self {
        Self::new(colors)
    }
}

/// `Rgba::from_rgb_u32` for every stop.
const fn hex_palette(stops: [u32; STOPS]) -> Palette16 {
    let mut colors = [Rgba::BLACK; STOPS];
    let mut i = 0;
    while i < STOPS {
        colors[i] = Rgba::from_rgb_u32(stops[i]);
        i += 1;
    }
    Palette16::new(colors)
}

impl Palette16 {
    /// Blues and whites, like clouds in a sky.
    pub const CLOUD: Self = Self::new([
        BLUE, DARK_BLUE, DARK_BLUE, DARK_BLUE,
        DARK_BLUE, DARK_BLUE, DARK_BLUE, DARK_BLUE,
        BLUE, DARK_BLUE, SKY_BLUE, SKY_BLUE,
        LIGHT_BLUE, WHITE, LIGHT_BLUE, SKY_BLUE,
    ]);

    /// Blacks and reds with a flash of white.
    pub const LAVA: Self = Self::new([
        BLACK, MAROON, BLACK, MAROON,
        DARK_RED, DARK_RED, MAROON, DARK_RED,
        DARK_RED, DARK_RED, RED, ORANGE,
        WHITE, ORANGE, RED, DARK_RED,
    ]);

    /// Blues, teals and aquas.
    pub const OCEAN: Self = Self::new([
        MIDNIGHT_BLUE, DARK_BLUE, MIDNIGHT_BLUE, NAVY,
        DARK_BLUE, MEDIUM_BLUE, SEA_GREEN, TEAL,
        CADET_BLUE, BLUE, DARK_CYAN, CORNFLOWER_BLUE,
        AQUAMARINE, SEA_GREEN, AQUA, LIGHT_SKY_BLUE,
    ]);

    /// Greens.
    pub const FOREST: Self = Self::new([
        DARK_GREEN, DARK_GREEN, DARK_OLIVE_GREEN, DARK_GREEN,
        GREEN, FOREST_GREEN, OLIVE_DRAB, GREEN,
        SEA_GREEN, MEDIUM_AQUAMARINE, LIME_GREEN, YELLOW_GREEN,
        LIGHT_GREEN, LAWN_GREEN, MEDIUM_AQUAMARINE, FOREST_GREEN,
    ]);

    /// The rainbow hue map, one stop every 1/16 of the circle.
    pub const RAINBOW: Self = hex_palette([
        0xFF_0000, 0xD5_2A00, 0xAB_5500, 0xAB_7F00,
        0xAB_AB00, 0x56_D500, 0x00_FF00, 0x00_D52A,
        0x00_AB55, 0x00_56AA, 0x00_00FF, 0x2A_00D5,
        0x55_00AB, 0x7F_0081, 0xAB_0055, 0xD5_002B,
    ]);

    /// Every other rainbow stop, with black in between.
    pub const RAINBOW_STRIPE: Self = hex_palette([
        0xFF_0000, 0x00_0000, 0xAB_5500, 0x00_0000,
        0xAB_AB00, 0x00_0000, 0x00_FF00, 0x00_0000,
        0x00_AB55, 0x00_0000, 0x00_00FF, 0x00_0000,
        0x55_00AB, 0x00_0000, 0xAB_0055, 0x00_0000,
    ]);

    /// Blue, purple, pink, red, orange and yellow; no greens.
    pub const PARTY: Self = hex_palette([
        0x55_00AB, 0x84_007C, 0xB5_004B, 0xE5_001B,
        0xE8_1700, 0xB8_4700, 0xAB_7700, 0xAB_AB00,
        0xAB_5500, 0xDD_2200, 0xF2_000E, 0xC2_003E,
        0x8F_0071, 0x5F_00A1, 0x2F_00D0, 0x00_07F9,
    ]);

    /// Approximate black-body radiation, black to red to yellow to white.
    ///
    /// Positions above about `0xF000` wrap from white back to black, so
    /// heat maps usually stay below that.
    pub const HEAT: Self = hex_palette([
        0x00_0000, 0x33_0000, 0x66_0000, 0x99_0000,
        0xCC_0000, 0xFF_0000, 0xFF_3300, 0xFF_6600,
        0xFF_9900, 0xFF_CC00, 0xFF_FF00, 0xFF_FF33,
        0xFF_FF66, 0xFF_FF99, 0xFF_FFCC, 0xFF_FFFF,
    ]);
}

/// The built-in palettes, keyed by lowercase name.
pub const BUILTIN: &[(&str, Palette16)] = &[
    ("cloud", Palette16::CLOUD),
    ("lava", Palette16::LAVA),
    ("ocean", Palette16::OCEAN),
    ("forest", Palette16::FOREST),
    ("rainbow", Palette16::RAINBOW),
    ("rainbow_stripe", Palette16::RAINBOW_STRIPE),
    ("party", Palette16::PARTY),
    ("heat", Palette16::HEAT),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_at_exact_stops() {
        for (_, palette) in BUILTIN {
            for (i, stop) in palette.colors().iter().enumerate() {
                assert_eq!(palette.color_at((i as u16) << 12), *stop);
            }
        }
    }

    #[test]
    fn test_heat_samples() {
        let heat = Palette16::HEAT;
        assert_eq!(heat.color_at(0), Rgba::new(0, 0, 0));
        assert_eq!(heat.color_at(0x1080), Rgba::new(52, 0, 0));
        assert_eq!(heat.color_at(0x5000), Rgba::new(255, 0, 0));
        assert_eq!(heat.color_at(0xF800), Rgba::new(127, 127, 127));
    }

    #[test]
    fn test_top_wraps_to_first_stop() {
        // Fully blended past stop 15 lands on stop 0, not stop 15.
        assert_eq!(Palette16::HEAT.color_at(0xFFFF), Palette16::HEAT[0]);
        assert_eq!(Palette16::CLOUD.color_at(0xFFF0), Palette16::CLOUD[0]);
    }

    #[test]
    fn test_low_bits_ignored() {
        for position in (0..=u16::MAX).step_by(16) {
            let base = Palette16::PARTY.color_at(position);
            assert_eq!(Palette16::PARTY.color_at(position | 0xF), base);
        }
    }

    #[test]
    fn test_interpolation_stays_between_stops() {
        let mut stops = [Rgba::BLACK; STOPS];
        for stop in stops.iter_mut().skip(1).step_by(2) {
            *stop = Rgba::WHITE;
        }
        let palette = Palette16::new(stops);
        let mut prev = 0u8;
        for position in (0..0x1000u16).step_by(16) {
            let c = palette.color_at(position);
            assert!(c.r >= prev, "not monotonic at {position:#x}");
            assert_eq!((c.r, c.a), (c.g, 255));
            prev = c.r;
        }
    }

    #[test]
    fn test_from_slice_checks_length() {
        let stops = [Rgba::WHITE; 17];
        assert!(Palette16::from_slice("ok", &stops[..16]).is_ok());
        match Palette16::from_slice("short", &stops[..3]) {
            Err(ColorError::WrongStopCount { name, found }) => {
                assert_eq!((name.as_str(), found), ("short", 3));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_builtin_lookup() {
        assert_eq!(Palette16::builtin("heat").unwrap(), Palette16::HEAT);
        assert_eq!(Palette16::builtin("Rainbow_Stripe").unwrap(), Palette16::RAINBOW_STRIPE);
        assert!(matches!(
            Palette16::builtin("sunset"),
            Err(ColorError::UnknownPalette(name)) if name == "sunset"
        ));
    }

    #[test]
    fn test_builtin_stops_are_opaque() {
        for (name, palette) in BUILTIN {
            assert!(palette.colors().iter().all(|c| c.a == 255), "{name}");
        }
    }
}
