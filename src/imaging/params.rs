//! Parameter types for image I/O.
//!
//! - [`Quality`]: lossy encoding quality (1–100, default 90). Clamped on construction.
//! - [`SaveParams`]: output path plus quality for a single save.

use std::path::PathBuf;

/// Quality setting for lossy image encoding (1-100).
///
/// Only JPEG and AVIF outputs use it; lossless formats ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(90)
    }
}

/// Parameters for writing an image.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveParams {
    /// Destination; the extension selects the format.
    pub output: PathBuf,
    pub quality: Quality,
}
