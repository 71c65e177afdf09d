//! Core types, constants, and the error type shared across the specpaint crates.
//!
//! The synthesis library and the command-line binaries both depend on this
//! crate, so it stays free of image and audio dependencies.

use std::path::PathBuf;

/// Sample rate in Hz
pub type SampleRate = u32;

/// Number of audio frames (mono, so frames and samples coincide)
pub type Frames = usize;

/// Output sample type (16-bit signed PCM)
pub type Sample = i16;

/// Grayscale pixel brightness, 0 = black, 255 = white
pub type Brightness = u8;

/// Common sample rates
pub mod sample_rates {
    use super::SampleRate;

    /// 22.05 kHz sample rate (half CD quality)
    pub const SR_22050: SampleRate = 22050;
    /// 44.1 kHz sample rate (CD quality, the default output rate)
    pub const SR_44100: SampleRate = 44100;
    /// 48 kHz sample rate (professional audio standard)
    pub const SR_48000: SampleRate = 48000;
    /// 96 kHz sample rate (high resolution audio)
    pub const SR_96000: SampleRate = 96000;
}

/// Range of values a [`Sample`] can hold, widened for accumulation
pub mod sample_range {
    /// Largest storable sample value
    pub const MAX: i32 = super::Sample::MAX as i32;
    /// Smallest storable sample value
    pub const MIN: i32 = super::Sample::MIN as i32;
}

/// Common error type
///
/// Every variant is fatal to the conversion that produced it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input image path does not exist
    #[error("Input not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Image could not be decoded
    #[error("Unsupported image format: {0}")]
    UnsupportedImageFormat(String),

    /// Encoding parameters are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Output WAV file could not be created, written, or finalized
    #[error("Output write failure: {0}")]
    OutputWriteFailure(String),

    /// Preset file could not be read, parsed, or written
    #[error("Config file error: {0}")]
    ConfigFile(String),

    /// Conversion was cancelled between columns
    #[error("Conversion cancelled")]
    Cancelled,

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
