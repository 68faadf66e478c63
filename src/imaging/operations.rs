//! High-level image operations.
//!
//! These functions combine backend I/O with the [`frost`](crate::frost)
//! pipeline. They take a job description, load, transform, and save.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::noise::NoiseSource;
use super::params::{Quality, SaveParams};
use crate::config::EffectConfig;
use crate::frost::{self, FrostError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OperationError {
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error(transparent)]
    Frost(#[from] FrostError),
}

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, OperationError>;

/// One input file frosted into one output file.
#[derive(Debug, Clone, PartialEq)]
pub struct FrostJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub config: EffectConfig,
    pub quality: Quality,
}

/// Load `job.input`, apply the frozen effect, and save to `job.output`.
///
/// The output is only written after the whole pipeline has succeeded.
/// Returns the output dimensions.
pub fn frost_file(
    backend: &impl ImageBackend,
    noise: &mut impl NoiseSource,
    job: &FrostJob,
) -> Result<Dimensions> {
    let image = backend.load(&job.input)?;
    log::info!(
        "loaded {} ({}x{}, {:?})",
        job.input.display(),
        image.width(),
        image.height(),
        image.color()
    );

    let frosted = frost::apply_frozen_effect_with(&image, &job.config, noise)?;

    backend.save(
        &frosted,
        &SaveParams {
            output: job.output.clone(),
            quality: job.quality,
        },
    )?;
    log::info!("saved {}", job.output.display());

    Ok(Dimensions::from(frosted.dimensions()))
}
