//! # LED Strips
//!
//! A `Strip` borrows a caller-owned pixel buffer, index = physical LED
//! position, and adds the usual fill operations. The buffer stays owned
//! by whoever pushes it to the hardware.

use std::ops::{Deref, DerefMut};

use crate::hsv::Hsv;
use crate::palette::Palette16;
use crate::rgba::Rgba;
use crate::surface::Surface;

/// Mutable view over a run of LEDs.
///
/// # Example
///
/// ```rust
/// use ledwave_color::{Hsv, Rgba, Strip};
///
/// let mut pixels = [Rgba::BLACK; 8];
/// let mut strip = Strip::new(&mut pixels);
/// strip.fill_spectrum(Hsv::from_hue(0), 0x2000);
/// assert_eq!(strip[0], Rgba::new(255, 0, 0));
/// assert_eq!(strip.as_bytes().len(), 32);
/// ```
#[derive(Debug)]
pub struct Strip<'a> {
    pixels: &'a mut [Rgba],
}

impl<'a> Strip<'a> {
    /// Wraps a pixel buffer.
    #[inline]
    #[must_use]
    pub fn new(pixels: &'a mut [Rgba]) -> Self {
        Self { pixels }
    }

    /// Sets every LED to `color`.
    pub fn fill_solid(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /// Spectrum gradient: LED `i` gets `start` with its hue advanced by
    /// `i * hue_step` (wrapping).
    pub fn fill_spectrum(&mut self, start: Hsv, hue_step: u16) {
        tracing::trace!(leds = self.pixels.len(), hue_step, "fill spectrum");
        self.fill_hues(start, hue_step, Hsv::spectrum);
    }

    /// Like [`Strip::fill_spectrum`] with the rainbow map.
    pub fn fill_rainbow(&mut self, start: Hsv, hue_step: u16) {
        tracing::trace!(leds = self.pixels.len(), hue_step, "fill rainbow");
        self.fill_hues(start, hue_step, Hsv::rainbow);
    }

    /// Palette gradient: LED `i` gets `palette.color_at(start + i * step)`
    /// (wrapping).
    pub fn fill_palette(&mut self, palette: &Palette16, start: u16, step: u16) {
        tracing::trace!(leds = self.pixels.len(), start, step, "fill palette");
        let mut position = start;
        for pixel in self.pixels.iter_mut() {
            *pixel = palette.color_at(position);
            position = position.wrapping_add(step);
        }
    }

    /// The raw RGBA bytes, four per LED, for handing to a driver.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.pixels)
    }

    fn fill_hues(&mut self, start: Hsv, hue_step: u16, convert: impl Fn(Hsv) -> Rgba) {
        let mut color = start;
        for pixel in self.pixels.iter_mut() {
            *pixel = convert(color);
            color = color.rotate_hue(hue_step);
        }
    }
}

impl<'a> From<&'a mut [Rgba]> for Strip<'a> {
    fn from(pixels: &'a mut [Rgba]) -> Self {
        Self::new(pixels)
    }
}

impl Deref for Strip<'_> {
    type Target = [Rgba];

    fn deref(&self) -> &[Rgba] {
        self.pixels
    }
}

impl DerefMut for Strip<'_> {
    fn deref_mut(&mut self) -> &mut [Rgba] {
        self.pixels
    }
}

/// A strip is a `len x 1` surface.
impl Surface for Strip<'_> {
    fn size(&self) -> (i16, i16) {
        (i16::try_from(self.pixels.len()).unwrap_or(i16::MAX), 1)
    }

    fn set_pixel(&mut self, x: i16, y: i16, color: Rgba) {
        if y != 0 {
            return;
        }
        if let Some(pixel) = usize::try_from(x).ok().and_then(|x| self.pixels.get_mut(x)) {
            *pixel = color;
        }
    }
}
