//! Mono 16-bit PCM WAV output.
//!
//! The sink is opened before synthesis starts so an unwritable path fails
//! fast, then receives the finished buffer in one batch.

use hound::{SampleFormat, WavSpec, WavWriter};
use specpaint_core::{Error, Result, Sample, SampleRate};
use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

/// WAV format used for every output file
pub fn output_spec(sample_rate: SampleRate) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

/// An open WAV file waiting for samples
pub struct WavSink<W: Write + Seek> {
    writer: WavWriter<W>,
}

impl WavSink<BufWriter<File>> {
    /// Create (or truncate) the output file
    pub fn create(path: &Path, sample_rate: SampleRate) -> Result<Self> {
        let writer = WavWriter::create(path, output_spec(sample_rate)).map_err(|e| {
            Error::OutputWriteFailure(format!("failed to create {}: {e}", path.display()))
        })?;
        Ok(Self { writer })
    }
}

impl<W: Write + Seek> WavSink<W> {
    /// Wrap an arbitrary seekable writer
    pub fn new(inner: W, sample_rate: SampleRate) -> Result<Self> {
        let writer = WavWriter::new(inner, output_spec(sample_rate))
            .map_err(|e| Error::OutputWriteFailure(format!("failed to write header: {e}")))?;
        Ok(Self { writer })
    }

    /// Write every sample, then patch the header and flush
    pub fn write_all(mut self, samples: &[Sample]) -> Result<()> {
        for &sample in samples {
            self.writer
                .write_sample(sample)
                .map_err(|e| Error::OutputWriteFailure(format!("failed to write sample: {e}")))?;
        }

        self.writer
            .finalize()
            .map_err(|e| Error::OutputWriteFailure(format!("failed to finalize WAV file: {e}")))
    }
}
