//! Noise-field generators for the frost layer.
//!
//! The pipeline asks a [`NoiseSource`] for a grayscale field instead of
//! reaching for a global RNG, so callers pick between:
//!
//! - [`GaussianNoise`]: Gaussian samples around mid-gray. Entropy-seeded by
//!   default, or seeded explicitly for reproducible output.
//! - [`FlatNoise`]: a constant mid-gray field, i.e. noise with zero intensity.

use image::{GrayImage, Luma};
use imageproc::noise::gaussian_noise_mut;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Level every noise field is centred on.
pub const MID_GRAY: u8 = 128;

/// Produces a `width × height` luminance field whose spread is set by `intensity`.
pub trait NoiseSource {
    fn field(&mut self, width: u32, height: u32, intensity: f32) -> GrayImage;
}

/// Gaussian noise: each pixel is `128 + N(0, |intensity|)`, clamped.
///
/// Sampling is `imageproc::noise::gaussian_noise_mut`, seeded per field from
/// the generator's own `StdRng`.
pub struct GaussianNoise {
    rng: StdRng,
}

impl GaussianNoise {
    /// Non-deterministic generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic generator: equal seeds give equal fields.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for GaussianNoise {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl NoiseSource for GaussianNoise {
    /// Non-finite intensities produce a flat field.
    fn field(&mut self, width: u32, height: u32, intensity: f32) -> GrayImage {
        let mut field = GrayImage::from_pixel(width, height, Luma([MID_GRAY]));
        if !intensity.is_finite() {
            return field;
        }
        let seed = self.rng.random::<u64>();
        gaussian_noise_mut(&mut field, 0.0, intensity.abs() as f64, seed);
        field
    }
}

/// Constant mid-gray field regardless of intensity.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatNoise;

impl NoiseSource for FlatNoise {
    fn field(&mut self, width: u32, height: u32, _intensity: f32) -> GrayImage {
        GrayImage::from_pixel(width, height, Luma([MID_GRAY]))
    }
}
