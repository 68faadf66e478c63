//! Image I/O backend trait and shared types.
//!
//! The [`ImageBackend`] trait covers the two file operations the tool
//! needs: load and save. Pixel work never goes through the
//! backend; it lives in [`primitives`](super::primitives).
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate.

use super::params::SaveParams;
use image::{DynamicImage, RgbImage};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to decode {path}: {reason}")]
    Decode { path: String, reason: String },
    #[error("Failed to encode {path}: {reason}")]
    Encode { path: String, reason: String },
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

/// Width and height of a processed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// Trait for image I/O backends.
pub trait ImageBackend {
    /// Decode an image file.
    fn load(&self, path: &Path) -> Result<DynamicImage, BackendError>;

    /// Encode and write an RGB image. Nothing is written if encoding fails.
    fn save(&self, image: &RgbImage, params: &SaveParams) -> Result<(), BackendError>;
}
