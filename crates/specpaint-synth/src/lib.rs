//! Image-to-audio synthesis.
//!
//! Every bright pixel becomes a short sine burst: the pixel's column picks
//! the time slice, its row picks the frequency and its brightness the
//! amplitude. Bursts that share a column are summed into a 16-bit sample
//! buffer with saturating addition, so a spectrogram of the result shows
//! the input picture.

pub mod buffer;
pub mod config;
pub mod encoder;
pub mod picture;
pub mod pipeline;
pub mod progress;
pub mod scanner;
pub mod wav;
pub mod wave;

pub use buffer::SampleBuffer;
pub use config::EncoderConfig;
pub use encoder::{CancelFlag, EncodeSummary, Encoded, SpectrogramEncoder};
pub use pipeline::{ConvertSummary, convert};
pub use progress::{ColumnProgress, LogProgress, NoProgress, ProgressObserver};
pub use scanner::{ImageScanner, LitPixel};
pub use wav::WavSink;
