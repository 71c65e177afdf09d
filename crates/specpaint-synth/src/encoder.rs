//! Spectrogram encoder - turns a grayscale image into a sample buffer.
//!
//! Columns are processed strictly left to right. For each column:
//!
//! 1. scan the lit pixels
//! 2. generate one sine segment per lit pixel (optionally on the rayon pool)
//! 3. pad the buffer by one column of silence and add every segment into
//!    it, in ascending row order, saturating each addition
//! 4. report progress
//!
//! Only step 3 mutates the buffer, and it only touches the column's own
//! region, so parallel generation never changes the output.

use image::GrayImage;
use rayon::prelude::*;
use specpaint_core::{Error, Frames, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

use crate::buffer::SampleBuffer;
use crate::config::EncoderConfig;
use crate::progress::{ColumnProgress, ProgressObserver};
use crate::scanner::{ImageScanner, LitPixel};
use crate::wave::fill_segment;

/// Shared flag for stopping a conversion between columns
///
/// Clones share the same flag, so one can be handed to another thread.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation (thread-safe)
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Check whether cancellation was requested (thread-safe)
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Statistics for one finished encode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeSummary {
    /// Image columns (time slices)
    pub columns: u32,
    /// Image rows (frequency bins)
    pub rows: u32,
    pub samples_per_column: Frames,
    /// Final buffer length, `columns * samples_per_column`
    pub total_samples: Frames,
    /// Pixels with brightness above 0
    pub lit_pixels: usize,
    /// Additions that saturated at a 16-bit limit
    pub clipped_samples: usize,
}

/// Output of [`SpectrogramEncoder::encode`]
#[derive(Debug, Clone)]
pub struct Encoded {
    pub samples: SampleBuffer,
    pub summary: EncodeSummary,
}

/// Per-column scratch space, allocated once and reused for every column
struct ColumnWorkspace {
    pixels: Vec<LitPixel>,
    /// One `samples_per_column` chunk per lit pixel, in row order; grows to
    /// the busiest column seen so far
    segments: Vec<i32>,
    samples_per_column: Frames,
}

impl ColumnWorkspace {
    fn new(height: u32, samples_per_column: Frames) -> Self {
        Self {
            pixels: Vec::with_capacity(height as usize),
            segments: Vec::new(),
            samples_per_column,
        }
    }

    /// Generate a segment for every pixel in `self.pixels`
    fn generate(&mut self, config: &EncoderConfig, height: u32) {
        let spc = self.samples_per_column;
        let needed = self.pixels.len() * spc;
        if self.segments.len() < needed {
            self.segments.resize(needed, 0);
        }
        let used = &mut self.segments[..needed];
        let render = |(segment, pixel): (&mut [i32], &LitPixel)| {
            let frequency = config.frequency_for_row(pixel.row, height);
            fill_segment(segment, frequency, pixel.brightness, config.sample_rate);
        };

        if config.parallel {
            used.par_chunks_mut(spc)
                .zip(self.pixels.par_iter())
                .for_each(render);
        } else {
            used.chunks_mut(spc).zip(self.pixels.iter()).for_each(render);
        }
    }

    fn segments(&self) -> impl Iterator<Item = &[i32]> {
        self.segments[..self.pixels.len() * self.samples_per_column]
            .chunks(self.samples_per_column)
    }
}

/// Additive sine synthesizer driven by image columns
pub struct SpectrogramEncoder {
    config: EncoderConfig,
    cancel: Option<CancelFlag>,
}

impl SpectrogramEncoder {
    /// Create an encoder, rejecting unusable configurations up front
    pub fn new(config: EncoderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            cancel: None,
        })
    }

    /// Check `flag` before every column
    pub fn with_cancel_flag(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Synthesize the whole image
    ///
    /// `image` must already be rotated/inverted as configured; see
    /// [`crate::picture::prepare`].
    ///
    /// # Errors
    ///
    /// Returns `Error::Cancelled` if the cancel flag is raised mid-encode.
    pub fn encode(
        &self,
        image: &GrayImage,
        progress: &mut dyn ProgressObserver,
    ) -> Result<Encoded> {
        let scanner = ImageScanner::new(image);
        let (width, height) = (scanner.width(), scanner.height());
        let spc = self.config.samples_per_column();
        let total = width as usize * spc;

        debug!(
            "Encoding {}x{} image: {} samples per column, {:.3} Hz per row, parallel={}",
            width,
            height,
            spc,
            self.config.frequency_interval(height.max(1)),
            self.config.parallel
        );

        let mut samples = SampleBuffer::with_capacity(total);
        let mut work = ColumnWorkspace::new(height, spc);
        let mut lit_pixels = 0;

        for x in 0..width {
            if self.cancel.as_ref().is_some_and(CancelFlag::is_cancelled) {
                debug!("Cancelled before column {x}");
                return Err(Error::Cancelled);
            }

            scanner.fill_column(x, &mut work.pixels);
            work.generate(&self.config, height);

            // Dark columns still need their stretch of silence
            let offset = samples.len();
            samples.extend_silence(spc);
            for segment in work.segments() {
                samples.add_slice(offset, segment);
            }

            lit_pixels += work.pixels.len();
            progress.column_done(ColumnProgress {
                column: x,
                columns: width,
                lit_pixels: work.pixels.len(),
                samples_written: samples.len(),
            });
        }

        debug_assert_eq!(samples.len(), total);

        let summary = EncodeSummary {
            columns: width,
            rows: height,
            samples_per_column: spc,
            total_samples: samples.len(),
            lit_pixels,
            clipped_samples: samples.clipped(),
        };
        progress.finished(&summary);

        Ok(Encoded { samples, summary })
    }
}
