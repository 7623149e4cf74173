mod icon_manifest;

pub use icon_manifest::{DEFAULT_OUT_DIR, IconManifest, ManifestError};
