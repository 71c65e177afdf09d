//! specpaint - encode an image into audio
//!
//! The WAV written by this tool shows the input image when viewed as a
//! spectrogram: columns become time, rows become frequency.

use anyhow::{Context, Result};
use clap::Parser;
use specpaint_synth::{EncoderConfig, LogProgress, convert};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Encode an image into a WAV file whose spectrogram shows the image
#[derive(Parser, Debug)]
#[command(name = "specpaint")]
#[command(about = "Encode an image into audio whose spectrogram shows the image", long_about = None)]
struct Args {
    /// Image to convert
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(short, long, default_value = "out.wav")]
    output: PathBuf,

    /// Bottom of the frequency range in Hz [default: 200]
    #[arg(short = 'm', long = "minfreq")]
    min_freq: Option<u32>,

    /// Top of the frequency range in Hz [default: 20000]
    #[arg(short = 'M', long = "maxfreq")]
    max_freq: Option<u32>,

    /// Image columns per second of audio [default: 30]
    #[arg(short, long)]
    pixels: Option<u32>,

    /// Sampling rate in Hz [default: 44100]
    #[arg(short, long)]
    sampling: Option<u32>,

    /// Rotate image 90 degrees for waterfall spectrographs
    #[arg(short, long)]
    rotate: bool,

    /// Invert image colors
    #[arg(short, long)]
    invert: bool,

    /// Generate each column's sine segments on all CPU cores
    #[arg(long)]
    parallel: bool,

    /// Load settings from a RON preset; command-line flags take precedence
    #[arg(short, long, value_name = "PRESET")]
    config: Option<PathBuf>,

    /// Write the effective settings to a RON preset
    #[arg(long, value_name = "PRESET")]
    save_config: Option<PathBuf>,
}

impl Args {
    /// Layer flags over the preset (if any) over the defaults
    fn encoder_config(&self) -> Result<EncoderConfig> {
        let mut config = match &self.config {
            Some(path) => EncoderConfig::load(path)
                .with_context(|| format!("Failed to load preset: {}", path.display()))?,
            None => EncoderConfig::default(),
        };

        if let Some(min_freq) = self.min_freq {
            config.min_frequency = min_freq;
        }
        if let Some(max_freq) = self.max_freq {
            config.max_frequency = max_freq;
        }
        if let Some(pixels) = self.pixels {
            config.pixels_per_second = pixels;
        }
        if let Some(sampling) = self.sampling {
            config.sample_rate = sampling;
        }
        config.rotate |= self.rotate;
        config.invert |= self.invert;
        config.parallel |= self.parallel;

        Ok(config)
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "specpaint=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = args.encoder_config()?;

    tracing::debug!("Input file: {}", args.input.display());
    tracing::debug!(
        "Frequency range: {} - {} Hz",
        config.min_frequency,
        config.max_frequency
    );
    tracing::debug!("Pixels per second: {}", config.pixels_per_second);
    tracing::debug!("Sampling rate: {} Hz", config.sample_rate);
    tracing::debug!("Rotate image: {}", yes_no(config.rotate));
    tracing::debug!("Invert colors: {}", yes_no(config.invert));

    if let Some(path) = &args.save_config {
        config
            .save(path)
            .with_context(|| format!("Failed to save preset: {}", path.display()))?;
        tracing::info!("Saved settings to {}", path.display());
    }

    let mut progress = LogProgress::new();
    let summary = convert(&args.input, &args.output, &config, &mut progress, None)
        .with_context(|| {
            format!(
                "Failed to convert {} to {}",
                args.input.display(),
                args.output.display()
            )
        })?;

    tracing::info!("Conversion progress: 100%");
    tracing::info!(
        "Wrote {} ({:.2} s of audio)",
        summary.output.display(),
        summary.audio_seconds
    );
    println!(
        "Success. Completed in {} seconds.",
        summary.elapsed.as_secs()
    );

    Ok(())
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
