use clap::Parser;
use frozen_effect::config::{EffectConfig, Tint};
use frozen_effect::imaging::{self, FrostJob, GaussianNoise, Quality, RustBackend};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "frozen-effect")]
#[command(about = "Apply a frozen landscape effect to an image")]
#[command(long_about = "\
Apply a frozen landscape effect to an image

The input is desaturated, contrast-boosted, mapped onto a cold gradient,
blurred, dusted with frost noise, lit with crystalline edge highlights,
and finally graded for brightness and saturation.

The output format follows the output file extension:
png, jpg/jpeg, tif/tiff, webp, avif.")]
#[command(version)]
struct Cli {
    /// Path to the input image
    input: PathBuf,

    /// Where to save the frosted image
    output: PathBuf,

    /// Noise intensity to simulate frost particles
    #[arg(long)]
    noise_intensity: Option<f32>,

    /// Seed for the frost noise (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Gradient color for shadows, as #rrggbb
    #[arg(long)]
    tint_dark: Option<Tint>,

    /// Gradient color for highlights, as #rrggbb
    #[arg(long)]
    tint_light: Option<Tint>,

    /// Encoding quality for JPEG and AVIF output (1-100)
    #[arg(long, default_value_t = 90)]
    quality: u32,

    /// Log more detail (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn effect_config(&self) -> EffectConfig {
        let mut config = EffectConfig::default();
        if let Some(noise_intensity) = self.noise_intensity {
            config = config.with_noise_intensity(noise_intensity);
        }
        if let Some(tint) = self.tint_dark {
            config.cold_tint_dark = tint;
        }
        if let Some(tint) = self.tint_light {
            config.cold_tint_light = tint;
        }
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let job = FrostJob {
        input: cli.input.clone(),
        output: cli.output.clone(),
        config: cli.effect_config(),
        quality: Quality::new(cli.quality),
    };
    let mut noise = match cli.seed {
        Some(seed) => GaussianNoise::seeded(seed),
        None => GaussianNoise::from_entropy(),
    };

    let dims = imaging::frost_file(&RustBackend::new(), &mut noise, &job)?;
    println!(
        "==> Frosted {} → {} ({}x{})",
        job.input.display(),
        job.output.display(),
        dims.width,
        dims.height
    );

    Ok(())
}

/// Initialize `env_logger` at a level chosen by `-v` count.
///
/// Warnings only by default; the environment is not consulted.
fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}
