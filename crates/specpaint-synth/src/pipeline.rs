//! File-to-file conversion: image in, WAV out.

use specpaint_core::Result;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::config::EncoderConfig;
use crate::encoder::{CancelFlag, EncodeSummary, SpectrogramEncoder};
use crate::picture;
use crate::progress::ProgressObserver;
use crate::wav::WavSink;

/// Result of a finished conversion
#[derive(Debug, Clone)]
pub struct ConvertSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub encode: EncodeSummary,
    /// Wall-clock time spent synthesizing and writing
    pub elapsed: Duration,
    /// Length of the written audio in seconds
    pub audio_seconds: f64,
}

/// Convert the image at `input` into a WAV file at `output`
///
/// The configuration, the input image and the output file are all checked
/// before synthesis begins. If encoding is cancelled the half-opened output
/// file is removed; a failure while writing leaves it in an undefined state.
///
/// # Errors
///
/// Any `specpaint_core::Error`; all are fatal to this conversion.
pub fn convert(
    input: &Path,
    output: &Path,
    config: &EncoderConfig,
    progress: &mut dyn ProgressObserver,
    cancel: Option<&CancelFlag>,
) -> Result<ConvertSummary> {
    let mut encoder = SpectrogramEncoder::new(config.clone())?;
    if let Some(flag) = cancel {
        encoder = encoder.with_cancel_flag(flag.clone());
    }

    let image = picture::load_grayscale(input)?;
    let image = picture::prepare(image, config.rotate, config.invert);
    debug!(
        "Prepared image: {}x{} (rotate={}, invert={})",
        image.width(),
        image.height(),
        config.rotate,
        config.invert
    );

    let sink = WavSink::create(output, config.sample_rate)?;

    let started = Instant::now();
    let encoded = match encoder.encode(&image, progress) {
        Ok(encoded) => encoded,
        Err(e) => {
            drop(sink);
            if let Err(remove_err) = std::fs::remove_file(output) {
                warn!("Could not remove {}: {remove_err}", output.display());
            }
            return Err(e);
        }
    };

    sink.write_all(encoded.samples.as_slice())?;
    let elapsed = started.elapsed();

    Ok(ConvertSummary {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        encode: encoded.summary,
        elapsed,
        audio_seconds: encoded.summary.total_samples as f64 / f64::from(config.sample_rate),
    })
}
