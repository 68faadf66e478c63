//! # Frozen Effect
//!
//! Applies a stylised "frozen landscape" filter to a still image: the picture
//! is reduced to a contrasty grayscale, mapped onto a cold two-color gradient,
//! softened, dusted with frost noise, lit with crystalline edge highlights,
//! and finally graded for brightness and saturation.
//!
//! # Architecture: One Pipeline
//!
//! ```text
//! input file ─► decode ─► apply_frozen_effect ─► encode ─► output file
//! ```
//!
//! The pipeline itself ([`frost::apply_frozen_effect`]) is a pure function
//! from image + config to a new image. File I/O sits behind
//! [`imaging::ImageBackend`] and randomness behind [`imaging::NoiseSource`],
//! so the pixel logic is testable without touching disk or an RNG.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`frost`] | The effect pipeline: stage ordering and composition |
//! | [`config`] | [`EffectConfig`](config::EffectConfig) defaults and [`Tint`](config::Tint) colors |
//! | [`imaging`] | Raster primitives, noise generators, image I/O backend, file operation |
//!
//! # Design Decisions
//!
//! ## Injected Noise
//!
//! Frost noise comes from a [`NoiseSource`](imaging::NoiseSource). The CLI
//! uses entropy-seeded Gaussian noise unless `--seed` is given; tests inject
//! seeded or flat fields to get byte-identical output.
//!
//! ## Composite Order
//!
//! The frost and crystal layers are summed, divided by
//! [`COMPOSITE_SCALE`](frost::COMPOSITE_SCALE), and only then clamped. The
//! crystal layer can saturate on its own before the composite; the composite
//! itself averages the two layers.
//!
//! ## No Partial Output
//!
//! Images are encoded into memory and written in one call, only after the
//! pipeline and the encoder have both succeeded.

pub mod config;
pub mod frost;
pub mod imaging;

pub use config::{EffectConfig, Tint};
pub use frost::{apply_frozen_effect, apply_frozen_effect_with};

#[cfg(test)]
pub(crate) mod test_helpers;
