//! Saturating 16-bit sample accumulator.

use specpaint_core::{Frames, Sample, sample_range};

/// Clamp a widened sum into the 16-bit sample range
#[inline]
pub fn saturate(value: i32) -> Sample {
    value.clamp(sample_range::MIN, sample_range::MAX) as Sample
}

/// The whole output waveform, built up column by column
///
/// Values are only ever added to, never overwritten, because every lit
/// pixel of a column writes into the same time window. Each addition clips
/// to `[-32768, 32767]` instead of wrapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleBuffer {
    samples: Vec<Sample>,
    clipped: usize,
}

impl SampleBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with room for `capacity` samples
    pub fn with_capacity(capacity: Frames) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
            clipped: 0,
        }
    }

    /// Create a buffer of `len` silent samples
    pub fn silent(len: Frames) -> Self {
        Self {
            samples: vec![0; len],
            clipped: 0,
        }
    }

    /// Add `value` to the sample at `index`, saturating at the 16-bit limits
    ///
    /// Writing at `index == len()` appends a new sample. Writing further out
    /// is a caller bug: columns are filled left to right with no gaps.
    pub fn add_at(&mut self, index: Frames, value: i32) {
        assert!(
            index <= self.samples.len(),
            "sample index {index} skips past buffer end {}",
            self.samples.len()
        );

        let current = self.samples.get(index).map_or(0, |&s| i32::from(s));
        let sum = current.saturating_add(value);
        let stored = saturate(sum);
        if i32::from(stored) != sum {
            self.clipped += 1;
        }

        if index == self.samples.len() {
            self.samples.push(stored);
        } else {
            self.samples[index] = stored;
        }
    }

    /// Add `values` element-wise starting at `offset`
    ///
    /// The region must already exist; see [`Self::extend_silence`].
    pub fn add_slice(&mut self, offset: Frames, values: &[i32]) {
        let end = offset + values.len();
        assert!(
            end <= self.samples.len(),
            "region {offset}..{end} extends past buffer end {}",
            self.samples.len()
        );

        for (sample, &value) in self.samples[offset..end].iter_mut().zip(values) {
            let sum = i32::from(*sample).saturating_add(value);
            *sample = saturate(sum);
            if i32::from(*sample) != sum {
                self.clipped += 1;
            }
        }
    }

    /// Append `frames` silent samples
    pub fn extend_silence(&mut self, frames: Frames) {
        self.samples.resize(self.samples.len() + frames, 0);
    }

    /// Number of samples currently held
    pub fn len(&self) -> Frames {
        self.samples.len()
    }

    /// Check whether the buffer holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of additions that hit a 16-bit limit
    pub fn clipped(&self) -> usize {
        self.clipped
    }

    /// View the samples
    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    /// Take the samples out of the buffer
    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}
