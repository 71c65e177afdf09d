//! Encoding configuration and RON preset files.
//!
//! Uses RON (Rust Object Notation) so presets stay human-readable and
//! diff-friendly. Any field missing from a preset falls back to its default.

use serde::{Deserialize, Serialize};
use specpaint_core::{Error, Frames, Result, SampleRate, sample_rates};
use std::path::Path;

/// Parameters for one image-to-audio conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Frequency of the bottom image row (Hz)
    pub min_frequency: u32,
    /// Upper bound of the frequency range (Hz), one row-step above the top row
    pub max_frequency: u32,
    /// Image columns per second of output audio
    pub pixels_per_second: u32,
    /// Output sample rate (Hz)
    pub sample_rate: SampleRate,
    /// Rotate the image 90° counter-clockwise before scanning
    pub rotate: bool,
    /// Invert brightness (v -> 255 - v) before scanning
    pub invert: bool,
    /// Generate a column's sine segments on the rayon thread pool
    pub parallel: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            min_frequency: 200,
            max_frequency: 20000,
            pixels_per_second: 30,
            sample_rate: sample_rates::SR_44100,
            rotate: false,
            invert: false,
            parallel: false,
        }
    }
}

impl EncoderConfig {
    /// Check that the parameters describe a usable conversion
    pub fn validate(&self) -> Result<()> {
        if self.min_frequency == 0 {
            return Err(Error::InvalidConfiguration(
                "minimum frequency must be greater than 0 Hz".to_string(),
            ));
        }
        if self.min_frequency >= self.max_frequency {
            return Err(Error::InvalidConfiguration(format!(
                "minimum frequency ({} Hz) must be below maximum frequency ({} Hz)",
                self.min_frequency, self.max_frequency
            )));
        }
        if self.pixels_per_second == 0 {
            return Err(Error::InvalidConfiguration(
                "pixels per second must be greater than 0".to_string(),
            ));
        }
        if self.sample_rate == 0 {
            return Err(Error::InvalidConfiguration(
                "sample rate must be greater than 0 Hz".to_string(),
            ));
        }
        if self.sample_rate < self.pixels_per_second {
            return Err(Error::InvalidConfiguration(format!(
                "sample rate ({} Hz) is lower than pixels per second ({}), \
                 leaving no samples per column",
                self.sample_rate, self.pixels_per_second
            )));
        }
        Ok(())
    }

    /// Output samples generated for each image column
    pub fn samples_per_column(&self) -> Frames {
        (self.sample_rate / self.pixels_per_second) as Frames
    }

    /// Frequency step between adjacent rows of an image `height` pixels tall
    pub fn frequency_interval(&self, height: u32) -> f64 {
        (f64::from(self.max_frequency) - f64::from(self.min_frequency)) / f64::from(height)
    }

    /// Frequency for image row `row`
    ///
    /// Image rows grow downward while frequency grows upward, so the bottom
    /// row maps to `min_frequency` and row 0 to one step below `max_frequency`.
    pub fn frequency_for_row(&self, row: u32, height: u32) -> f64 {
        debug_assert!(row < height, "row {row} outside image of height {height}");
        let inverted = height - row - 1;
        f64::from(inverted) * self.frequency_interval(height) + f64::from(self.min_frequency)
    }

    /// Load a preset from a RON file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or does not parse
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ron_string = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigFile(format!("{}: {e}", path.display())))?;

        ron::from_str(&ron_string)
            .map_err(|e| Error::ConfigFile(format!("{}: {e}", path.display())))
    }

    /// Save this configuration as a RON preset
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails or the file cannot be written
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let ron_string = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| Error::ConfigFile(e.to_string()))?;

        std::fs::write(path, ron_string)
            .map_err(|e| Error::ConfigFile(format!("{}: {e}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EncoderConfig::default();
        assert_eq!(config.min_frequency, 200);
        assert_eq!(config.max_frequency, 20000);
        assert_eq!(config.pixels_per_second, 30);
        assert_eq!(config.sample_rate, 44100);
        assert!(!config.rotate);
        assert!(!config.invert);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_samples_per_column_truncates() {
        let config = EncoderConfig::default();
        assert_eq!(config.samples_per_column(), 1470);

        let config = EncoderConfig {
            pixels_per_second: 7,
            ..EncoderConfig::default()
        };
        assert_eq!(config.samples_per_column(), 6300);

        let config = EncoderConfig {
            sample_rate: 100,
            pixels_per_second: 30,
            ..EncoderConfig::default()
        };
        assert_eq!(config.samples_per_column(), 3);
    }

    #[test]
    fn test_rejects_inverted_range() {
        let config = EncoderConfig {
            min_frequency: 5000,
            max_frequency: 5000,
            ..EncoderConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfiguration(_))
        ));

        let config = EncoderConfig {
            min_frequency: 6000,
            max_frequency: 5000,
            ..EncoderConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_values() {
        for config in [
            EncoderConfig {
                min_frequency: 0,
                ..EncoderConfig::default()
            },
            EncoderConfig {
                pixels_per_second: 0,
                ..EncoderConfig::default()
            },
            EncoderConfig {
                sample_rate: 0,
                ..EncoderConfig::default()
            },
        ] {
            assert!(
                matches!(config.validate(), Err(Error::InvalidConfiguration(_))),
                "{config:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_empty_columns() {
        let config = EncoderConfig {
            sample_rate: 20,
            pixels_per_second: 30,
            ..EncoderConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_frequency_mapping_inverts_rows() {
        let config = EncoderConfig::default();
        let height = 100;
        let interval = config.frequency_interval(height);
        assert_eq!(interval, 198.0);

        // Bottom row sits exactly on the minimum frequency
        assert_eq!(config.frequency_for_row(height - 1, height), 200.0);
        // Top row sits one step below the maximum
        assert_eq!(config.frequency_for_row(0, height), 200.0 + 99.0 * 198.0);
        assert_eq!(config.frequency_for_row(0, height), 20000.0 - interval);
    }

    #[test]
    fn test_single_row_maps_to_min_frequency() {
        let config = EncoderConfig::default();
        assert_eq!(config.frequency_for_row(0, 1), 200.0);
    }

    #[test]
    fn test_preset_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preset.ron");

        let config = EncoderConfig {
            min_frequency: 100,
            max_frequency: 8000,
            pixels_per_second: 60,
            sample_rate: 48000,
            rotate: true,
            invert: false,
            parallel: true,
        };
        config.save(&path).unwrap();

        let loaded = EncoderConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_preset_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.ron");
        std::fs::write(&path, "(max_frequency: 12000, invert: true)").unwrap();

        let loaded = EncoderConfig::load(&path).unwrap();
        assert_eq!(loaded.max_frequency, 12000);
        assert!(loaded.invert);
        assert_eq!(loaded.min_frequency, 200);
        assert_eq!(loaded.sample_rate, 44100);
    }

    #[test]
    fn test_bad_preset_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ron");
        std::fs::write(&path, "(max_frequency: \"loud\")").unwrap();

        assert!(matches!(
            EncoderConfig::load(&path),
            Err(Error::ConfigFile(_))
        ));
        assert!(matches!(
            EncoderConfig::load(dir.path().join("absent.ron")),
            Err(Error::ConfigFile(_))
        ));
    }
}
