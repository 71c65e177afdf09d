//! Image loading and the rotate/invert transforms.

use image::{GrayImage, ImageError, imageops};
use specpaint_core::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Open an image file and convert it to 8-bit grayscale
///
/// # Errors
///
/// `InputNotFound` if nothing exists at `path`, `UnsupportedImageFormat`
/// if the file cannot be decoded.
pub fn load_grayscale(path: &Path) -> Result<GrayImage> {
    if !path.exists() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(Error::UnsupportedImageFormat(format!(
            "{} is not a file",
            path.display()
        )));
    }

    let image = image::open(path).map_err(|e| match e {
        ImageError::IoError(io) if io.kind() == std::io::ErrorKind::NotFound => {
            Error::InputNotFound(path.to_path_buf())
        }
        ImageError::IoError(io) => Error::Io(io),
        other => Error::UnsupportedImageFormat(format!("{}: {other}", path.display())),
    })?;

    debug!(
        "Loaded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );

    Ok(image.to_luma8())
}

/// Apply the optional transforms, rotation first
///
/// Rotation turns the image 90° counter-clockwise with the canvas expanded,
/// so width and height swap. Inversion maps every value `v` to `255 - v`.
pub fn prepare(image: GrayImage, rotate: bool, invert: bool) -> GrayImage {
    let mut image = if rotate {
        imageops::rotate270(&image)
    } else {
        image
    };

    if invert {
        imageops::invert(&mut image);
    }

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_rotate_swaps_dimensions() {
        let image = GrayImage::new(5, 2);
        let rotated = prepare(image, true, false);
        assert_eq!(rotated.dimensions(), (2, 5));
    }

    #[test]
    fn test_rotate_is_counter_clockwise() {
        // Top-right corner ends up top-left
        let mut image = GrayImage::new(3, 2);
        image.put_pixel(2, 0, Luma([200]));

        let rotated = prepare(image, true, false);
        assert_eq!(rotated.get_pixel(0, 0).0[0], 200);
    }

    #[test]
    fn test_invert_maps_values() {
        let mut image = GrayImage::new(2, 1);
        image.put_pixel(1, 0, Luma([55]));

        let inverted = prepare(image, false, true);
        assert_eq!(inverted.get_pixel(0, 0).0[0], 255);
        assert_eq!(inverted.get_pixel(1, 0).0[0], 200);
    }

    #[test]
    fn test_no_transform_is_identity() {
        let mut image = GrayImage::new(3, 3);
        image.put_pixel(1, 2, Luma([9]));
        let prepared = prepare(image.clone(), false, false);
        assert_eq!(prepared, image);
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.png");
        assert!(matches!(
            load_grayscale(&path),
            Err(Error::InputNotFound(p)) if p == path
        ));
    }

    #[test]
    fn test_undecodable_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(matches!(
            load_grayscale(&path),
            Err(Error::UnsupportedImageFormat(_))
        ));

        let path = dir.path().join("notes.xyz");
        std::fs::write(&path, b"unknown extension").unwrap();
        assert!(matches!(
            load_grayscale(&path),
            Err(Error::UnsupportedImageFormat(_))
        ));
    }

    #[test]
    fn test_directory_input() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_grayscale(dir.path()),
            Err(Error::UnsupportedImageFormat(_))
        ));
    }

    #[test]
    fn test_load_converts_to_grayscale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgb.png");
        let rgb = image::RgbImage::from_pixel(4, 3, image::Rgb([255, 255, 255]));
        rgb.save(&path).unwrap();

        let gray = load_grayscale(&path).unwrap();
        assert_eq!(gray.dimensions(), (4, 3));
        assert!(gray.pixels().all(|p| p.0[0] == 255));
    }
}
