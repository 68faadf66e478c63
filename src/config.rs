//! Effect configuration.
//!
//! A single flat record, [`EffectConfig`], drives every stage of the
//! [`frost`](crate::frost) pipeline. Values are compiled-in defaults; the CLI
//! overrides the noise intensity only. There is no config file.
//!
//! ## Defaults
//!
//! | Field | Default | Stage |
//! |---|---|---|
//! | `contrast` | 1.6 | grayscale contrast boost |
//! | `cold_tint_dark` | `#071326` | gradient stop at luminance 0 |
//! | `cold_tint_light` | `#e7f9ff` | gradient stop at luminance 255 |
//! | `blur_radius` | 1.2 | Gaussian blur sigma, pixels |
//! | `noise_intensity` | 28.0 | frost noise standard deviation |
//! | `noise_alpha` | 0.22 | frost blend weight |
//! | `crystal_boost` | 2.4 | edge highlight brightness gain |
//! | `brightness` | 1.08 | final brightness |
//! | `saturation` | 0.78 | final saturation |
//!
//! Values are not validated. Out-of-range numbers flow into the primitives,
//! which clamp per channel (see [`primitives`](crate::imaging::primitives)).

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid tint color {0:?}: expected #rrggbb or #rgb")]
    InvalidTint(String),
}

/// An 8-bit RGB color used as a gradient stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tint(pub [u8; 3]);

impl Tint {
    /// Build from a packed `0xRRGGBB` value.
    pub const fn from_hex(packed: u32) -> Self {
        Self([
            ((packed >> 16) & 0xff) as u8,
            ((packed >> 8) & 0xff) as u8,
            (packed & 0xff) as u8,
        ])
    }

    pub fn channels(self) -> [u8; 3] {
        self.0
    }
}

impl fmt::Display for Tint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for Tint {
    type Err = ConfigError;

    /// Parse `#rrggbb` or the `#rgb` shorthand. The `#` is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidTint(s.to_string());
        let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        match digits.len() {
            6 => u32::from_str_radix(digits, 16)
                .map(Self::from_hex)
                .map_err(|_| invalid()),
            3 => {
                let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
                u32::from_str_radix(&expanded, 16)
                    .map(Self::from_hex)
                    .map_err(|_| invalid())
            }
            _ => Err(invalid()),
        }
    }
}

/// Parameters for the frozen landscape effect.
///
/// Constructed once per invocation and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectConfig {
    /// Contrast multiplier applied to the grayscale image.
    pub contrast: f32,
    /// Gradient color for luminance 0.
    pub cold_tint_dark: Tint,
    /// Gradient color for luminance 255.
    pub cold_tint_light: Tint,
    /// Gaussian blur standard deviation, in pixels.
    pub blur_radius: f32,
    /// Standard deviation of the synthetic frost noise.
    pub noise_intensity: f32,
    /// Weight of the noise layer when blended over the blurred base (0–1).
    pub noise_alpha: f32,
    /// Brightness gain on the edge highlight layer. Saturates freely.
    pub crystal_boost: f32,
    pub brightness: f32,
    pub saturation: f32,
}

pub const DEFAULT_TINT_DARK: Tint = Tint::from_hex(0x071326);
pub const DEFAULT_TINT_LIGHT: Tint = Tint::from_hex(0xe7f9ff);

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            contrast: 1.6,
            cold_tint_dark: DEFAULT_TINT_DARK,
            cold_tint_light: DEFAULT_TINT_LIGHT,
            blur_radius: 1.2,
            noise_intensity: 28.0,
            noise_alpha: 0.22,
            crystal_boost: 2.4,
            brightness: 1.08,
            saturation: 0.78,
        }
    }
}

impl EffectConfig {
    /// Copy of this config with a different noise intensity.
    pub fn with_noise_intensity(self, noise_intensity: f32) -> Self {
        Self {
            noise_intensity,
            ..self
        }
    }
}

impl fmt::Display for EffectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "contrast={} tint={}..{} blur={} noise={}@{} crystal={} brightness={} saturation={}",
            self.contrast,
            self.cold_tint_dark,
            self.cold_tint_light,
            self.blur_radius,
            self.noise_intensity,
            self.noise_alpha,
            self.crystal_boost,
            self.brightness,
            self.saturation,
        )
    }
}
