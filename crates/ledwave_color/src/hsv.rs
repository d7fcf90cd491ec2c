//! # HSV Colors
//!
//! A 32-bit HSV color with a 16-bit hue, plus two integer conversions to
//! RGB:
//!
//! - [`Hsv::spectrum`]: the plain hue circle (equal thirds red/green/blue)
//! - [`Hsv::rainbow`]: FastLED's "rainbow" map, which widens yellow and
//!   orange because LEDs render them poorly
//!
//! See <https://github.com/FastLED/FastLED/wiki/FastLED-HSV-Colors> for
//! pictures of both maps.

use crate::math8::{scale8, scale8_video};
use crate::rgba::Rgba;

/// Width of one third of the spectrum hue circle.
const SECTION_WIDTH: u32 = (1 << 16) / 3 + 1;

/// An HSV color: 16-bit hue, 8-bit saturation and value.
///
/// The hue uses 16 bits because both conversions can use more than 8 bits
/// of it for smooth gradients. Hue wraps: `0xFFFF` sits next to `0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Hsv {
    /// Position on the hue circle; 0 is red.
    pub hue: u16,
    /// 0 is white (or gray), 255 is fully saturated.
    pub saturation: u8,
    /// 0 is black, 255 is full brightness.
    pub value: u8,
}

impl Hsv {
    /// Creates a color.
    #[inline]
    #[must_use]
    pub const fn new(hue: u16, saturation: u8, value: u8) -> Self {
        Self { hue, saturation, value }
    }

    /// Fully saturated, full brightness color at `hue`.
    #[inline]
    #[must_use]
    pub const fn from_hue(hue: u16) -> Self {
        Self::new(hue, 255, 255)
    }

    /// Returns the same color with the hue advanced by `step`, wrapping.
    #[inline]
    #[must_use]
    pub const fn rotate_hue(self, step: u16) -> Self {
        Self::new(self.hue.wrapping_add(step), self.saturation, self.value)
    }

    /// Converts with the plain spectrum map.
    ///
    /// Hues 0, 21846 and 43692 are exactly red, green and blue at full
    /// saturation and value. Lowering saturation adds a gray floor of
    /// `(255 - s) * v / 768`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ledwave_color::{Hsv, Rgba};
    ///
    /// assert_eq!(Hsv::from_hue(0).spectrum(), Rgba::new(255, 0, 0));
    /// assert_eq!(Hsv::from_hue(21846).spectrum(), Rgba::new(0, 255, 0));
    /// ```
    #[must_use]
    pub const fn spectrum(self) -> Rgba {
        let hue = self.hue as u32;
        let section = hue / SECTION_WIDTH;
        // 0..=255 within the section.
        let ramp = ((hue - section * SECTION_WIDTH) * 256 / SECTION_WIDTH) as u8;
        let fade = 255 - ramp;

        let (r, g, b) = match section {
            0 => (fade, ramp, 0),
            1 => (0, fade, ramp),
            _ => (ramp, 0, fade),
        };

        let (s, v) = (self.saturation, self.value);
        let floor = ((255 - s as u32) * v as u32 / 256 / 3) as u8;
        Rgba::new(
            scale8(scale8(r, s), v) + floor,
            scale8(scale8(g, s), v) + floor,
            scale8(scale8(b, s), v) + floor,
        )
    }

    /// Converts with FastLED's rainbow map, using the yellow boost picked
    /// at build time (see [`DefaultYellow`]).
    ///
    /// # Example
    ///
    /// ```rust
    /// use ledwave_color::{Hsv, Rgba};
    ///
    /// assert_eq!(Hsv::from_hue(0).rainbow(), Rgba::new(255, 0, 0));
    /// assert_eq!(Hsv::new(0x1234, 0, 255).rainbow(), Rgba::WHITE);
    /// ```
    #[inline]
    #[must_use]
    pub fn rainbow(self) -> Rgba {
        self.rainbow_with::<DefaultYellow>()
    }

    /// Converts with FastLED's rainbow map and an explicit yellow boost.
    ///
    /// Only the top 8 bits of the hue are used. Bits 7..5 select one of
    /// eight ramps and bits 4..0 the position within it.
    #[must_use]
    pub fn rainbow_with<Y: YellowBoost>(self) -> Rgba {
        let hue = (self.hue >> 8) as u8;
        let offset8 = (hue & 0x1F) * 8;
        let third = scale8(offset8, 85); // max 83
        let two_thirds = scale8(offset8, 170); // max 165

        let (mut r, mut g, mut b) = match hue >> 5 {
            0 => (255 - third, third, 0),              // red to orange
            1 => Y::orange_to_yellow(offset8, third),  // orange to yellow
            2 => Y::yellow_to_green(offset8, third),   // yellow to green
            3 => (0, 255 - third, third),              // green to aqua
            4 => (0, 171 - two_thirds, 85 + two_thirds), // aqua to blue
            5 => (third, 0, 255 - third),              // blue to purple
            6 => (85 + third, 0, 171 - third),         // purple to pink
            _ => (170 + third, 0, 85 - third),         // pink to red
        };

        let sat = self.saturation;
        if sat != 255 {
            if sat == 0 {
                (r, g, b) = (255, 255, 255);
            } else {
                let desat = 255 - sat;
                let floor = scale8(desat, desat);
                r = scale_nonzero(r, sat) + floor;
                g = scale_nonzero(g, sat) + floor;
                b = scale_nonzero(b, sat) + floor;
            }
        }

        if self.value != 255 {
            let val = scale8_video(self.value, self.value);
            if val == 0 {
                (r, g, b) = (0, 0, 0);
            } else {
                r = scale_nonzero(r, val);
                g = scale_nonzero(g, val);
                b = scale_nonzero(b, val);
            }
        }

        Rgba::new(r, g, b)
    }
}

/// `scale8` that leaves zero channels untouched.
#[inline]
fn scale_nonzero(c: u8, scale: u8) -> u8 {
    if c == 0 {
        0
    } else {
        scale8(c, scale)
    }
}

// =============================================================================
// Yellow boost
// =============================================================================

/// How strongly [`Hsv::rainbow_with`] brightens the yellow region.
///
/// Pure yellow looks about 93% as bright as white, so LEDs need extra
/// red and green around it to appear balanced. Exactly one level is used
/// per build; the two ramps it controls are the only difference.
pub trait YellowBoost {
    /// RGB for the orange to yellow ramp (hue bits 7..5 = `001`).
    fn orange_to_yellow(offset8: u8, third: u8) -> (u8, u8, u8);

    /// RGB for the yellow to green ramp (hue bits 7..5 = `010`).
    fn yellow_to_green(offset8: u8, third: u8) -> (u8, u8, u8);
}

/// Moderate yellow boost (FastLED level Y1).
#[derive(Clone, Copy, Debug, Default)]
pub struct ModerateYellow;

impl YellowBoost for ModerateYellow {
    #[inline]
    fn orange_to_yellow(_offset8: u8, third: u8) -> (u8, u8, u8) {
        (171, 85 + third, 0)
    }

    #[inline]
    fn yellow_to_green(offset8: u8, third: u8) -> (u8, u8, u8) {
        (171 - scale8(offset8, 170), 170 + third, 0)
    }
}

/// Strong yellow boost (FastLED level Y2).
#[derive(Clone, Copy, Debug, Default)]
pub struct StrongYellow;

impl YellowBoost for StrongYellow {
    #[inline]
    fn orange_to_yellow(offset8: u8, third: u8) -> (u8, u8, u8) {
        (170 + third, 85 + scale8(offset8, 170), 0)
    }

    #[inline]
    fn yellow_to_green(offset8: u8, _third: u8) -> (u8, u8, u8) {
        (255 - offset8, 255, 0)
    }
}

/// Yellow boost used by [`Hsv::rainbow`]: [`StrongYellow`] with the
/// `strong-yellow` feature, [`ModerateYellow`] otherwise.
#[cfg(not(feature = "strong-yellow"))]
pub type DefaultYellow = ModerateYellow;

/// Yellow boost used by [`Hsv::rainbow`]: [`StrongYellow`] with the
/// `strong-yellow` feature, [`ModerateYellow`] otherwise.
#[cfg(feature = "strong-yellow")]
pub type DefaultYellow = StrongYellow;
