use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError, ImageFormat, ImageReader, RgbaImage};

use crate::icon::IconError;

pub struct PngFile {
    pub width: u32,
    pub height: u32,
    pub image: RgbaImage,
}

/// Encode an RGBA image as PNG. The encoder writes no timestamps, so equal
/// pixels always give equal bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ImageError> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(bytes)
}

/// Encode `image` and write it to `path`. The parent directory must exist.
pub fn write_png_file(path: &Path, image: &RgbaImage) -> Result<(), IconError> {
    let bytes = encode_png(image)?;
    fs::write(path, bytes).map_err(|source| IconError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_png_file(path: &Path) -> Result<PngFile, IconError> {
    let bytes = fs::read(path).map_err(|source| IconError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let img = ImageReader::with_format(Cursor::new(bytes), ImageFormat::Png).decode()?;
    Ok(PngFile {
        width: img.width(),
        height: img.height(),
        image: img.to_rgba8(),
    })
}
