//! Column-by-column pixel scanning.

use image::GrayImage;
use specpaint_core::Brightness;

/// A pixel that contributes to the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LitPixel {
    /// Image row (0 = top)
    pub row: u32,
    /// Brightness, always greater than 0
    pub brightness: Brightness,
}

/// Read-only view of a grayscale image as time columns of frequency rows
pub struct ImageScanner<'a> {
    image: &'a GrayImage,
}

impl<'a> ImageScanner<'a> {
    pub fn new(image: &'a GrayImage) -> Self {
        Self { image }
    }

    /// Number of columns (time slices)
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Number of rows (frequency bins)
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Lit pixels of column `x`, top row first
    pub fn lit_pixels(&self, x: u32) -> impl Iterator<Item = LitPixel> + '_ {
        (0..self.image.height()).filter_map(move |row| {
            let brightness = self.image.get_pixel(x, row).0[0];
            (brightness > 0).then_some(LitPixel { row, brightness })
        })
    }

    /// Replace the contents of `out` with the lit pixels of column `x`
    ///
    /// Lets callers reuse one allocation across every column.
    pub fn fill_column(&self, x: u32, out: &mut Vec<LitPixel>) {
        out.clear();
        out.extend(self.lit_pixels(x));
    }
}
