//! Image processing — pure Rust, on the `image` crate.
//!
//! | Concern | Module |
//! |---|---|
//! | **Pixel math** | [`calculations`]: luma, clamping, histogram lookups (unit testable) |
//! | **Raster primitives** | [`primitives`]: grayscale, contrast, colorize, blur, edges, blends |
//! | **Noise** | [`noise`]: [`NoiseSource`] trait, Gaussian and flat generators |
//! | **I/O** | [`ImageBackend`] trait + [`RustBackend`] |
//! | **Operations** | [`operations`]: load → frost → save |

pub mod backend;
mod calculations;
pub mod noise;
pub mod operations;
mod params;
pub mod primitives;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use noise::{FlatNoise, GaussianNoise, NoiseSource};
pub use operations::{FrostJob, OperationError, frost_file};
pub use params::{Quality, SaveParams};
pub use rust_backend::RustBackend;
