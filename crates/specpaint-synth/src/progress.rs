//! Progress reporting for long conversions.
//!
//! The encoder reports to an injected observer after every column. Closures
//! taking a [`ColumnProgress`] implement the trait directly.

use crate::encoder::EncodeSummary;
use specpaint_core::Frames;
use tracing::info;

/// Snapshot taken after a column has been merged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnProgress {
    /// Index of the column just finished
    pub column: u32,
    /// Total number of columns
    pub columns: u32,
    /// Lit pixels in this column
    pub lit_pixels: usize,
    /// Buffer length after this column
    pub samples_written: Frames,
}

impl ColumnProgress {
    /// Share of the image processed before this column, as a whole percentage
    pub fn percent(&self) -> u32 {
        if self.columns == 0 {
            return 100;
        }
        (u64::from(self.column) * 100 / u64::from(self.columns)) as u32
    }
}

/// Receives encoder progress
pub trait ProgressObserver {
    /// Called once per column, in column order
    fn column_done(&mut self, progress: ColumnProgress);

    /// Called once after the last column
    fn finished(&mut self, _summary: &EncodeSummary) {}
}

impl<F> ProgressObserver for F
where
    F: FnMut(ColumnProgress),
{
    fn column_done(&mut self, progress: ColumnProgress) {
        self(progress);
    }
}

/// Discards all progress
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn column_done(&mut self, _progress: ColumnProgress) {}
}

/// Logs the percentage through `tracing`, once per whole-percent change
#[derive(Debug, Default)]
pub struct LogProgress {
    last_percent: Option<u32>,
}

impl LogProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressObserver for LogProgress {
    fn column_done(&mut self, progress: ColumnProgress) {
        let percent = progress.percent();
        if self.last_percent != Some(percent) {
            self.last_percent = Some(percent);
            info!("Conversion progress: {percent}%");
        }
    }

    fn finished(&mut self, summary: &EncodeSummary) {
        info!(
            "Encoded {} columns x {} rows: {} samples, {} lit pixels, {} clipped",
            summary.columns,
            summary.rows,
            summary.total_samples,
            summary.lit_pixels,
            summary.clipped_samples
        );
    }
}
