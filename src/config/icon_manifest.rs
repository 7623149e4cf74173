//! Icon manifest parsing.
//!
//! A manifest lists the icons to generate and where to put them. Without one,
//! [`IconManifest::default`] yields the extension's standard 16/48/128 set.
//!
//! # Example icons.toml
//!
//! ```toml
//! [icons]
//! out_dir = "chrome-extension/icons"
//! create_dirs = false
//! background = [99, 102, 241, 255]
//! glyph = [255, 255, 255, 255]
//!
//! [[target]]
//! size = 16
//! file = "icon16.png"
//!
//! [[target]]
//! size = 48
//! file = "icon48.png"
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use image::Rgba;
use serde::Deserialize;

use crate::generator::IconTarget;
use crate::icon::{DEFAULT_BACKGROUND, DEFAULT_GLYPH};

pub const DEFAULT_OUT_DIR: &str = "chrome-extension/icons";

/// Settings from the [icons] section.
#[derive(Debug, Default, Deserialize)]
struct IconsSection {
    out_dir: Option<String>,
    #[serde(default)]
    create_dirs: bool,
    background: Option<[u8; 4]>,
    glyph: Option<[u8; 4]>,
}

#[derive(Debug, Deserialize)]
struct TargetEntry {
    size: u32,
    file: String,
}

/// Raw TOML structure.
#[derive(Debug, Deserialize)]
struct ManifestToml {
    #[serde(default)]
    icons: IconsSection,
    #[serde(default, rename = "target")]
    targets: Vec<TargetEntry>,
}

/// Loaded manifest with the output directory resolved.
#[derive(Debug, Clone)]
pub struct IconManifest {
    pub out_dir: PathBuf,
    pub create_dirs: bool,
    pub background: Rgba<u8>,
    pub glyph: Rgba<u8>,
    /// (size, file name relative to `out_dir`), in manifest order.
    entries: Vec<(u32, String)>,
}

/// Errors that can occur when loading a manifest.
#[derive(Debug)]
pub enum ManifestError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    NoTargets,
    DuplicateFile(String),
}

impl std::fmt::Display for ManifestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestError::Io(e) => write!(f, "IO error: {}", e),
            ManifestError::Toml(e) => write!(f, "TOML parse error: {}", e),
            ManifestError::NoTargets => write!(f, "Manifest defines no [[target]] entries"),
            ManifestError::DuplicateFile(file) => {
                write!(f, "Output file '{}' is listed more than once", file)
            }
        }
    }
}

impl std::error::Error for ManifestError {}

impl From<std::io::Error> for ManifestError {
    fn from(e: std::io::Error) -> Self {
        ManifestError::Io(e)
    }
}

impl From<toml::de::Error> for ManifestError {
    fn from(e: toml::de::Error) -> Self {
        ManifestError::Toml(e)
    }
}

impl Default for IconManifest {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            create_dirs: false,
            background: DEFAULT_BACKGROUND,
            glyph: DEFAULT_GLYPH,
            entries: [16, 48, 128]
                .into_iter()
                .map(|size| (size, format!("icon{}.png", size)))
                .collect(),
        }
    }
}

impl IconManifest {
    /// Load a manifest from an icons.toml file.
    ///
    /// A relative `out_dir` is resolved against the manifest's directory.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path)?;
        let base_path = path.parent().unwrap_or(Path::new("."));
        Self::parse(&content, base_path)
    }

    /// Parse manifest text, resolving relative paths against `base_path`.
    pub fn parse(content: &str, base_path: &Path) -> Result<Self, ManifestError> {
        let toml: ManifestToml = toml::from_str(content)?;

        if toml.targets.is_empty() {
            return Err(ManifestError::NoTargets);
        }

        let out_dir = base_path.join(toml.icons.out_dir.as_deref().unwrap_or(DEFAULT_OUT_DIR));

        let mut seen = HashSet::new();
        for target in &toml.targets {
            if !seen.insert(normalize(&out_dir.join(&target.file))) {
                return Err(ManifestError::DuplicateFile(target.file.clone()));
            }
        }

        Ok(Self {
            out_dir,
            create_dirs: toml.icons.create_dirs,
            background: toml.icons.background.map(Rgba).unwrap_or(DEFAULT_BACKGROUND),
            glyph: toml.icons.glyph.map(Rgba).unwrap_or(DEFAULT_GLYPH),
            entries: toml.targets.into_iter().map(|t| (t.size, t.file)).collect(),
        })
    }

    /// Resolved output targets, in manifest order.
    pub fn targets(&self) -> Vec<IconTarget> {
        self.entries
            .iter()
            .map(|(size, file)| IconTarget::new(*size, self.out_dir.join(file)))
            .collect()
    }
}

/// Lexically drop `.` components and fold `..` into the preceding name.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir if out.file_name().is_some() => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
