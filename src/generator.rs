//! Sequential icon generation over a list of targets.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use image::Rgba;

use crate::config::IconManifest;
use crate::icon::{DEFAULT_BACKGROUND, DEFAULT_GLYPH, Icon, IconError};
use crate::png_io::read_png_file;

/// One icon to write: edge length and output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTarget {
    pub size: u32,
    pub path: PathBuf,
}

impl IconTarget {
    pub fn new(size: u32, path: impl Into<PathBuf>) -> Self {
        Self {
            size,
            path: path.into(),
        }
    }
}

impl fmt::Display for IconTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}x{})", self.path.display(), self.size, self.size)
    }
}

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub background: Rgba<u8>,
    pub glyph: Rgba<u8>,
    /// Create a missing parent directory instead of failing.
    pub create_dirs: bool,
    /// Decode each written file and check its dimensions.
    pub verify: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND,
            glyph: DEFAULT_GLYPH,
            create_dirs: false,
            verify: false,
        }
    }
}

impl GenerateOptions {
    pub fn from_manifest(manifest: &IconManifest) -> Self {
        Self {
            background: manifest.background,
            glyph: manifest.glyph,
            create_dirs: manifest.create_dirs,
            verify: false,
        }
    }
}

/// The browser extension's icon set.
pub fn default_targets() -> Vec<IconTarget> {
    IconManifest::default().targets()
}

/// Generate every target in order. The first failure stops the run; files
/// written before it are left in place.
pub fn generate_icons(
    targets: &[IconTarget],
    options: &GenerateOptions,
) -> Result<Vec<PathBuf>, IconError> {
    let mut written = Vec::with_capacity(targets.len());

    for target in targets {
        let icon = Icon::with_colors(target.size, options.background, options.glyph)?;

        if options.create_dirs {
            if let Some(parent) = target.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|source| IconError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        icon.save(&target.path)?;

        if options.verify {
            let png = read_png_file(&target.path)?;
            if (png.width, png.height) != (icon.size(), icon.size()) {
                return Err(IconError::Verify {
                    path: target.path.clone(),
                    expected: (icon.size(), icon.size()),
                    actual: (png.width, png.height),
                });
            }
        }

        written.push(target.path.clone());
    }

    Ok(written)
}
