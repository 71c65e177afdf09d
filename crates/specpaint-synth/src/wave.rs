//! Sine segment generation.
//!
//! A segment is one column's worth of samples for a single pixel: a sine at
//! the pixel's frequency, scaled by its brightness, always starting at
//! phase 0. No window is applied, so segment edges are hard cuts.

use specpaint_core::{Brightness, SampleRate};
use std::f64::consts::PI;

/// Fill `out` with a phase-anchored sine burst
///
/// `out.len()` is the segment length. Each value is
/// `floor(sin(2π · cycles · i / len) · amplitude)` where
/// `cycles = len · frequency / sample_rate`. Flooring (rather than rounding)
/// keeps output identical to existing renders.
///
/// A frequency of 0 or below yields silence or a reversed sine rather than
/// an error; callers bound the frequency range.
pub fn fill_segment(
    out: &mut [i32],
    frequency: f64,
    amplitude: Brightness,
    sample_rate: SampleRate,
) {
    let samples = out.len() as f64;
    let cycles = samples * frequency / f64::from(sample_rate);
    let amplitude = f64::from(amplitude);

    for (i, value) in out.iter_mut().enumerate() {
        let x = (cycles * 2.0 * PI * i as f64 / samples).sin() * amplitude;
        *value = x.floor() as i32;
    }
}

/// Generate a segment of `samples` values into a new vector
pub fn generate(
    frequency: f64,
    amplitude: Brightness,
    samples: usize,
    sample_rate: SampleRate,
) -> Vec<i32> {
    let mut segment = vec![0; samples];
    fill_segment(&mut segment, frequency, amplitude, sample_rate);
    segment
}
