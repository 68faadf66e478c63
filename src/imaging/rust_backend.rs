//! Pure Rust I/O backend on the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode | `image::ImageReader` with content sniffing |
//! | Encode → PNG, TIFF, WebP | `ImageBuffer::write_to` (lossless) |
//! | Encode → JPEG | `JpegEncoder::new_with_quality` |
//! | Encode → AVIF | `AvifEncoder` (rav1e, speed 6) |
//!
//! Encoding goes into memory first and the file is written in one go
//! afterwards, so a failed encode leaves no partial output behind.

use super::backend::{BackendError, ImageBackend};
use super::params::{Quality, SaveParams};
use image::codecs::avif::AvifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageError, ImageFormat, ImageReader, RgbImage};
use std::io::Cursor;
use std::path::Path;

/// Output formats with an encoder compiled in.
const OUTPUT_FORMATS: &[(&str, ImageFormat)] = &[
    ("png", ImageFormat::Png),
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("tif", ImageFormat::Tiff),
    ("tiff", ImageFormat::Tiff),
    ("webp", ImageFormat::WebP),
    ("avif", ImageFormat::Avif),
];

/// Pure Rust backend using the `image` crate.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve the output format from a path's extension.
fn output_format(path: &Path) -> Result<ImageFormat, BackendError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    OUTPUT_FORMATS
        .iter()
        .find(|(candidate, _)| *candidate == ext)
        .map(|(_, format)| *format)
        .ok_or_else(|| {
            if ext.is_empty() {
                BackendError::UnsupportedFormat(format!("{} has no extension", path.display()))
            } else {
                BackendError::UnsupportedFormat(ext)
            }
        })
}

fn read_error(path: &Path) -> impl FnOnce(std::io::Error) -> BackendError {
    let path = path.to_path_buf();
    move |source| BackendError::Read { path, source }
}

/// Split I/O failures out of `image` errors so missing files read as such.
fn decode_error(path: &Path, err: ImageError) -> BackendError {
    match err {
        ImageError::IoError(io) => read_error(path)(io),
        other => BackendError::Decode {
            path: path.display().to_string(),
            reason: other.to_string(),
        },
    }
}

/// Encode an RGB image into an in-memory file of the given format.
fn encode(
    img: &RgbImage,
    format: ImageFormat,
    quality: Quality,
    path: &Path,
) -> Result<Vec<u8>, BackendError> {
    let mut cursor = Cursor::new(Vec::new());
    let q = quality.value() as u8;
    let result = match format {
        ImageFormat::Jpeg => img.write_with_encoder(JpegEncoder::new_with_quality(&mut cursor, q)),
        ImageFormat::Avif => {
            img.write_with_encoder(AvifEncoder::new_with_speed_quality(&mut cursor, 6, q))
        }
        other => img.write_to(&mut cursor, other),
    };
    result.map_err(|e| BackendError::Encode {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(cursor.into_inner())
}

impl ImageBackend for RustBackend {
    fn load(&self, path: &Path) -> Result<DynamicImage, BackendError> {
        ImageReader::open(path)
            .map_err(read_error(path))?
            .with_guessed_format()
            .map_err(read_error(path))?
            .decode()
            .map_err(|e| decode_error(path, e))
    }

    fn save(&self, image: &RgbImage, params: &SaveParams) -> Result<(), BackendError> {
        let format = output_format(&params.output)?;
        let bytes = encode(image, format, params.quality, &params.output)?;
        std::fs::write(&params.output, bytes).map_err(|source| BackendError::Write {
            path: params.output.clone(),
            source,
        })?;
        log::debug!(
            "wrote {} ({:?}, {}x{})",
            params.output.display(),
            format,
            image.width(),
            image.height()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{gradient_rgb, write_png};

    fn save_params(output: &Path) -> SaveParams {
        SaveParams {
            output: output.to_path_buf(),
            quality: Quality::new(85),
        }
    }

    #[test]
    fn output_format_is_case_insensitive() {
        assert_eq!(output_format(Path::new("a.PNG")).unwrap(), ImageFormat::Png);
        assert_eq!(output_format(Path::new("a.Jpeg")).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn output_format_rejects_unknown_and_missing_extensions() {
        assert!(matches!(
            output_format(Path::new("a.xyz")),
            Err(BackendError::UnsupportedFormat(ext)) if ext == "xyz"
        ));
        assert!(matches!(
            output_format(Path::new("noext")),
            Err(BackendError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn load_nonexistent_file_names_the_path() {
        let path = Path::new("/nonexistent/image.png");
        let err = RustBackend::new().load(path).unwrap_err();
        assert!(matches!(&err, BackendError::Read { path: p, .. } if p == path));
        assert!(err.to_string().contains("/nonexistent/image.png"));
    }

    #[test]
    fn load_sniffs_format_from_contents() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("mislabelled.jpg");
        let img = gradient_rgb(5, 4);
        write_png(&path, &img);

        let loaded = RustBackend::new().load(&path).unwrap();
        assert_eq!(loaded.to_rgb8(), img);
    }

    #[test]
    fn load_corrupt_file_is_decode_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("broken.png");
        std::fs::write(&path, b"definitely not an image").unwrap();

        let result = RustBackend::new().load(&path);
        assert!(matches!(result, Err(BackendError::Decode { .. })));
    }

    #[test]
    fn save_then_load_png_keeps_pixels() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("out.png");
        let img = gradient_rgb(9, 6);

        let backend = RustBackend::new();
        backend.save(&img, &save_params(&path)).unwrap();
        let loaded = backend.load(&path).unwrap();
        assert_eq!(loaded.to_rgb8(), img);
    }

    #[test]
    fn save_jpeg_writes_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("out.jpg");

        RustBackend::new()
            .save(&gradient_rgb(32, 24), &save_params(&path))
            .unwrap();

        assert_eq!(image::image_dimensions(&path).unwrap(), (32, 24));
    }

    #[test]
    fn save_avif_writes_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("out.avif");

        RustBackend::new()
            .save(&gradient_rgb(16, 16), &save_params(&path))
            .unwrap();

        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn save_unsupported_format_writes_nothing() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("out.xyz");

        let result = RustBackend::new().save(&gradient_rgb(4, 4), &save_params(&path));
        assert!(matches!(result, Err(BackendError::UnsupportedFormat(_))));
        assert!(!path.exists());
    }

    #[test]
    fn save_into_missing_directory_names_the_path() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("missing").join("out.png");

        let result = RustBackend::new().save(&gradient_rgb(4, 4), &save_params(&path));
        assert!(matches!(result, Err(BackendError::Write { path: p, .. }) if p == path));
    }
}
