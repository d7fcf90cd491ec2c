//! # Drawing Surface
//!
//! The one interface animations draw through. Displays, matrices and
//! strips implement it; animations never see the buffer behind it.

use crate::rgba::Rgba;

/// A 2D grid of pixels that can be written one at a time.
pub trait Surface {
    /// Width and height in pixels.
    fn size(&self) -> (i16, i16);

    /// Writes one pixel. Out-of-range coordinates are ignored.
    fn set_pixel(&mut self, x: i16, y: i16, color: Rgba);

    /// Sets every pixel to `shader(x, y)`, row by row.
    fn fill_with<F>(&mut self, mut shader: F)
    where
        F: FnMut(i16, i16) -> Rgba,
        Self: Sized,
    {
        let (width, height) = self.size();
        for y in 0..height {
            for x in 0..width {
                self.set_pixel(x, y, shader(x, y));
            }
        }
    }
}
