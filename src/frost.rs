//! The frozen landscape pipeline.
//!
//! A fixed, linear chain of raster operations. Every stage produces a new
//! buffer; the input is never touched and all intermediates share the input's
//! dimensions.
//!
//! ```text
//! rgb ─► grayscale ─┬─► contrast ─► colorize ─► blur ──────┐
//!                   │                                       blend(α) ─► frosted ───┐
//!                   │        noise field ─► colorize ───────┘                       add(÷2) ─► brightness ─► saturation
//!                   └─► find edges ─► autocontrast ─► colorize ─► boost ─► crystals ┘
//! ```
//!
//! The same two-stop cold gradient colors the base tone, the noise, and the
//! crystal highlights.

use crate::config::EffectConfig;
use crate::imaging::noise::{GaussianNoise, NoiseSource};
use crate::imaging::primitives::{self, PrimitiveError};
use image::{DynamicImage, RgbImage};
use thiserror::Error;

/// Scale divisor for the frost + crystal composite.
pub const COMPOSITE_SCALE: f32 = 2.0;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FrostError {
    #[error("Pipeline stage {stage} failed: {source}")]
    Stage {
        stage: &'static str,
        #[source]
        source: PrimitiveError,
    },
}

pub type Result<T> = std::result::Result<T, FrostError>;

fn stage(name: &'static str) -> impl FnOnce(PrimitiveError) -> FrostError {
    move |source| FrostError::Stage {
        stage: name,
        source,
    }
}

/// Apply the frozen effect with entropy-seeded noise.
///
/// `None` uses [`EffectConfig::default`].
pub fn apply_frozen_effect(image: &DynamicImage, config: Option<&EffectConfig>) -> Result<RgbImage> {
    let config = config.copied().unwrap_or_default();
    apply_frozen_effect_with(image, &config, &mut GaussianNoise::from_entropy())
}

/// Apply the frozen effect, drawing the frost layer from `noise`.
///
/// With a deterministic noise source the output is a pure function of the
/// input and config.
pub fn apply_frozen_effect_with(
    image: &DynamicImage,
    config: &EffectConfig,
    noise: &mut impl NoiseSource,
) -> Result<RgbImage> {
    let (dark, light) = (config.cold_tint_dark, config.cold_tint_light);

    let base = image.to_rgb8();
    let (width, height) = base.dimensions();
    log::debug!("frost: {width}x{height} with {config}");

    let grayscale = primitives::grayscale(&base);
    let contrasted = primitives::adjust_contrast(&grayscale, config.contrast);
    let tinted = primitives::colorize(&contrasted, dark, light);
    let blurred = primitives::gaussian_blur(&tinted, config.blur_radius);
    log::debug!("frost: base tone ready");

    let field = noise.field(width, height, config.noise_intensity);
    let cold_noise = primitives::colorize(&field, dark, light);
    let frosted =
        primitives::blend(&blurred, &cold_noise, config.noise_alpha).map_err(stage("blend"))?;
    log::debug!("frost: noise blended at alpha {}", config.noise_alpha);

    let edges = primitives::autocontrast(&primitives::find_edges(&grayscale));
    let crystals = primitives::adjust_brightness(
        &primitives::colorize(&edges, dark, light),
        config.crystal_boost,
    );
    log::debug!("frost: crystals boosted by {}", config.crystal_boost);

    let combined =
        primitives::add(&frosted, &crystals, COMPOSITE_SCALE, 0.0).map_err(stage("add"))?;

    let cooled = primitives::adjust_brightness(&combined, config.brightness);
    Ok(primitives::adjust_saturation(&cooled, config.saturation))
}
