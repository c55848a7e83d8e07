// File: crates/graph-core/src/surface.rs
// Summary: CPU raster surface owning the pixel grid written by the rasterizer.

use anyhow::Result;
use image::RgbaImage;

use crate::types::Color;

/// A width x height RGBA pixel buffer.
///
/// Writes outside the grid are dropped, so the rasterizer may emit
/// coordinates past any edge.
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Surface {
    /// Allocate a surface cleared to `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Write one pixel. Out-of-bounds coordinates are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.pixels[y as usize * self.width as usize + x as usize] = color;
    }

    /// Read one pixel back; `None` outside the grid.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Copy the buffer into an `image` RGBA image.
    pub fn to_image(&self) -> RgbaImage {
        let mut img = RgbaImage::new(self.width, self.height);
        for (x, y, px) in img.enumerate_pixels_mut() {
            *px = image::Rgba(self.pixels[y as usize * self.width as usize + x as usize].to_rgba8());
        }
        img
    }

    /// Encode the surface as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.to_image()
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }
}
