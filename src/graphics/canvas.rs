//! RGBA drawing surface.
//!
//! Rectangles use inclusive corners: filling `(x0, y0)..(x1, y1)` covers
//! every pixel with `x0 <= x <= x1` and `y0 <= y <= y1`. Anything outside
//! the canvas is clipped.

use image::{Rgba, RgbaImage};

/// Axis-aligned rectangle with inclusive corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl Rect {
    pub fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self { x0, y0, x1, y1 }
    }
}

pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Allocate a canvas with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, color),
        }
    }

    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    /// Fill `rect` with `color`, clipped to the canvas bounds.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba<u8>) {
        if self.width() == 0 || self.height() == 0 {
            return;
        }
        if rect.x1 < rect.x0 || rect.y1 < rect.y0 {
            return;
        }
        if rect.x0 >= self.width() || rect.y0 >= self.height() {
            return;
        }

        let x1 = rect.x1.min(self.width() - 1);
        let y1 = rect.y1.min(self.height() - 1);

        for y in rect.y0..=y1 {
            for x in rect.x0..=x1 {
                self.image.put_pixel(x, y, color);
            }
        }
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}
