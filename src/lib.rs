//! Procedural icon set for the browser extension: a white "T" on indigo,
//! rendered at any size and written as PNG.

pub mod config;
pub mod generator;
pub mod graphics;
pub mod icon;
pub mod png_io;

pub use config::{IconManifest, ManifestError};
pub use generator::{GenerateOptions, IconTarget, default_targets, generate_icons};
pub use icon::{Icon, IconError, TGlyph, create_icon};
