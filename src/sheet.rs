use std::path::Path;

use image::{GrayImage, ImageResult};

use crate::Canvas;

impl Canvas {
    /// The sheet as an 8-bit grayscale image, one glyph cell below another.
    pub fn to_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            image::Luma([self.get(x as usize, y as usize)])
        })
    }

    /// Write the sheet as an image; the format follows the extension.
    pub fn save_sheet(&self, path: impl AsRef<Path>) -> ImageResult<()> {
        self.to_image().save(path)
    }
}
