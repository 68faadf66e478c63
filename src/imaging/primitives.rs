//! Raster primitives used by the frost pipeline.
//!
//! Each operation borrows its input and returns a new buffer with the same
//! dimensions. Channel results are rounded and clamped to `0..=255`.
//!
//! | Operation | Implementation |
//! |---|---|
//! | Grayscale | ITU-R 601 luma per pixel |
//! | Contrast | blend toward the image's mean gray level |
//! | Colorize | two-stop linear gradient, dark at 0 and light at 255 |
//! | Gaussian blur | `image::imageops::blur` |
//! | Blend | `a·(1-α) + b·α` |
//! | Find edges | `imageproc::filter::filter3x3`, border copied from input |
//! | Autocontrast | `imageproc::stats::histogram` stretched via lookup table |
//! | Brightness | scale toward black |
//! | Saturation | scale away from per-pixel luma |
//! | Add | `(a + b) / scale + offset` |

use super::calculations::{autocontrast_lut, clamp_channel, lerp_channel, luma, mean_level};
use crate::config::Tint;
use image::{GrayImage, ImageBuffer, Luma, Pixel, Rgb, RgbImage};
use imageproc::filter::filter3x3;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PrimitiveError {
    #[error("Image size mismatch: {left:?} vs {right:?}")]
    SizeMismatch {
        left: (u32, u32),
        right: (u32, u32),
    },
}

pub type Result<T> = std::result::Result<T, PrimitiveError>;

/// 3×3 edge kernel, row-major. Sums to zero, so flat regions go black.
const FIND_EDGES_KERNEL: [f32; 9] = [-1.0, -1.0, -1.0, -1.0, 8.0, -1.0, -1.0, -1.0, -1.0];

fn ensure_same_size<P: Pixel>(
    a: &ImageBuffer<P, Vec<P::Subpixel>>,
    b: &ImageBuffer<P, Vec<P::Subpixel>>,
) -> Result<()> {
    if a.dimensions() != b.dimensions() {
        return Err(PrimitiveError::SizeMismatch {
            left: a.dimensions(),
            right: b.dimensions(),
        });
    }
    Ok(())
}

/// 256-bin histogram of a grayscale image.
fn gray_histogram(image: &GrayImage) -> [u32; 256] {
    imageproc::stats::histogram(image).channels[0]
}

/// Apply `f` to every channel of every pixel.
fn map_channels(image: &RgbImage, f: impl Fn(u8) -> u8) -> RgbImage {
    let mut out = image.clone();
    for channel in out.iter_mut() {
        *channel = f(*channel);
    }
    out
}

/// Combine two equally sized RGB buffers channel by channel.
fn zip_channels(a: &RgbImage, b: &RgbImage, f: impl Fn(u8, u8) -> u8) -> Result<RgbImage> {
    ensure_same_size(a, b)?;
    let mut out = a.clone();
    for (channel, &other) in out.iter_mut().zip(b.iter()) {
        *channel = f(*channel, other);
    }
    Ok(out)
}

/// Single-channel luminance image.
pub fn grayscale(image: &RgbImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b] = image.get_pixel(x, y).0;
        Luma([luma(r, g, b)])
    })
}

/// Scale each level's distance from the image's mean gray level by `factor`.
///
/// `factor = 1` is identity, `0` yields a flat image at the mean.
pub fn adjust_contrast(image: &GrayImage, factor: f32) -> GrayImage {
    let mean = mean_level(&gray_histogram(image)) as f32;
    let mut out = image.clone();
    for level in out.iter_mut() {
        *level = clamp_channel(lerp_channel(mean, *level as f32, factor));
    }
    out
}

/// Map luminance onto a two-stop color gradient.
pub fn colorize(image: &GrayImage, dark: Tint, light: Tint) -> RgbImage {
    let (dark, light) = (dark.channels(), light.channels());
    let mut palette = [[0u8; 3]; 256];
    for (level, color) in palette.iter_mut().enumerate() {
        let t = level as f32 / 255.0;
        for c in 0..3 {
            color[c] = clamp_channel(lerp_channel(dark[c] as f32, light[c] as f32, t));
        }
    }
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        Rgb(palette[image.get_pixel(x, y).0[0] as usize])
    })
}

/// Gaussian blur with standard deviation `radius`.
///
/// A non-positive or non-finite radius returns an unchanged copy.
pub fn gaussian_blur(image: &RgbImage, radius: f32) -> RgbImage {
    if !radius.is_finite() || radius <= 0.0 {
        return image.clone();
    }
    image::imageops::blur(image, radius)
}

/// Linear interpolation between two images: `a·(1-α) + b·α`.
pub fn blend(a: &RgbImage, b: &RgbImage, alpha: f32) -> Result<RgbImage> {
    zip_channels(a, b, |x, y| {
        clamp_channel(lerp_channel(x as f32, y as f32, alpha))
    })
}

/// Convolve with the fixed edge kernel.
///
/// Pixels on the outer border have no full neighbourhood and are copied from
/// the input unchanged.
pub fn find_edges(image: &GrayImage) -> GrayImage {
    let (width, height) = image.dimensions();
    let mut out: GrayImage = filter3x3::<_, f32, u8>(image, &FIND_EDGES_KERNEL);
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        if x == 0 || y == 0 || x + 1 == width || y + 1 == height {
            *pixel = *image.get_pixel(x, y);
        }
    }
    out
}

/// Stretch the histogram so the darkest level maps to 0 and the brightest to 255.
pub fn autocontrast(image: &GrayImage) -> GrayImage {
    let lut = autocontrast_lut(&gray_histogram(image));
    let mut out = image.clone();
    for level in out.iter_mut() {
        *level = lut[*level as usize];
    }
    out
}

/// Scale every channel by `factor`. Values above 255 saturate.
pub fn adjust_brightness(image: &RgbImage, factor: f32) -> RgbImage {
    map_channels(image, |c| clamp_channel(c as f32 * factor))
}

/// Move each pixel toward (`factor < 1`) or away from (`factor > 1`) its own
/// luma. `factor = 0` produces grayscale.
pub fn adjust_saturation(image: &RgbImage, factor: f32) -> RgbImage {
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        let [r, g, b] = pixel.0;
        let gray = luma(r, g, b) as f32;
        for channel in pixel.0.iter_mut() {
            *channel = clamp_channel(lerp_channel(gray, *channel as f32, factor));
        }
    }
    out
}

/// Additive composite: `(a + b) / scale + offset`, clamped.
///
/// The sum is divided before clamping, so with `scale = 2` two bright layers
/// average instead of blowing out.
pub fn add(a: &RgbImage, b: &RgbImage, scale: f32, offset: f32) -> Result<RgbImage> {
    zip_channels(a, b, |x, y| {
        clamp_channel((x as f32 + y as f32) / scale + offset)
    })
}
