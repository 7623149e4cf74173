//! The "T" icon.
//!
//! An icon is a square canvas filled with a background color, with a "T"
//! drawn on top as two rectangles. Every coordinate is an integer fraction
//! of the edge length:
//!
//! - padding = size / 4
//! - crossbar = (padding, padding) .. (size - padding, padding + size / 10)
//! - stem = (size/2 - size/20, padding) .. (size/2 + size/20, size - padding)
//!
//! Rectangle corners are inclusive and clipped to the canvas, so sizes
//! below 4 still render (a 1px icon is a single glyph-colored pixel).

use std::path::{Path, PathBuf};

use image::{ImageError, Rgba, RgbaImage};

use crate::graphics::{Canvas, Rect};
use crate::png_io;

/// Indigo.
pub const DEFAULT_BACKGROUND: Rgba<u8> = Rgba([99, 102, 241, 255]);
pub const DEFAULT_GLYPH: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Largest edge length accepted by [`Icon::new`].
pub const MAX_ICON_SIZE: u32 = 1024;

/// Errors that can occur while building or writing an icon.
#[derive(Debug)]
pub enum IconError {
    InvalidSize { size: u32, max: u32 },
    Io { path: PathBuf, source: std::io::Error },
    Image(ImageError),
    Verify {
        path: PathBuf,
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

impl std::fmt::Display for IconError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconError::InvalidSize { size, max } => {
                write!(f, "Invalid icon size {}: must be between 1 and {}", size, max)
            }
            IconError::Io { path, source } => write!(f, "IO error on {:?}: {}", path, source),
            IconError::Image(e) => write!(f, "Image error: {}", e),
            IconError::Verify {
                path,
                expected,
                actual,
            } => write!(
                f,
                "{:?} is {}x{}, expected {}x{}",
                path, actual.0, actual.1, expected.0, expected.1
            ),
        }
    }
}

impl std::error::Error for IconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IconError::Io { source, .. } => Some(source),
            IconError::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ImageError> for IconError {
    fn from(e: ImageError) -> Self {
        IconError::Image(e)
    }
}

/// Geometry of the "T" for a given edge length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TGlyph {
    pub padding: u32,
    pub crossbar: Rect,
    pub stem: Rect,
}

impl TGlyph {
    pub fn for_size(size: u32) -> Self {
        let padding = size / 4;
        let center = size / 2;
        let half_stem = size / 20;

        Self {
            padding,
            crossbar: Rect::new(padding, padding, size - padding, padding + size / 10),
            stem: Rect::new(center - half_stem, padding, center + half_stem, size - padding),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    size: u32,
    background: Rgba<u8>,
    glyph: Rgba<u8>,
}

impl Icon {
    /// An icon with the default indigo/white palette.
    pub fn new(size: u32) -> Result<Self, IconError> {
        Self::with_colors(size, DEFAULT_BACKGROUND, DEFAULT_GLYPH)
    }

    pub fn with_colors(
        size: u32,
        background: Rgba<u8>,
        glyph: Rgba<u8>,
    ) -> Result<Self, IconError> {
        if size == 0 || size > MAX_ICON_SIZE {
            return Err(IconError::InvalidSize {
                size,
                max: MAX_ICON_SIZE,
            });
        }
        Ok(Self {
            size,
            background,
            glyph,
        })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn glyph(&self) -> TGlyph {
        TGlyph::for_size(self.size)
    }

    pub fn render(&self) -> RgbaImage {
        let glyph = self.glyph();
        let mut canvas = Canvas::filled(self.size, self.size, self.background);
        canvas.fill_rect(glyph.crossbar, self.glyph);
        canvas.fill_rect(glyph.stem, self.glyph);
        canvas.into_image()
    }

    pub fn to_png(&self) -> Result<Vec<u8>, IconError> {
        Ok(png_io::encode_png(&self.render())?)
    }

    pub fn save(&self, path: &Path) -> Result<(), IconError> {
        png_io::write_png_file(path, &self.render())
    }
}

/// Render a default-palette icon of `size` pixels and write it to `filename`.
pub fn create_icon(size: u32, filename: impl AsRef<Path>) -> Result<(), IconError> {
    Icon::new(size)?.save(filename.as_ref())
}
