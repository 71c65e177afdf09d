//! Generate a grayscale test image
//!
//! Useful for trying out the specpaint encoder without hunting for pictures.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use image::{GrayImage, Luma};
use std::path::PathBuf;

/// Test pattern drawn into the image
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Pattern {
    /// Brightness ramps up left to right (a fade-in of every frequency)
    Gradient,
    /// Bright line from bottom-left to top-right (a rising sweep)
    Diagonal,
    /// Horizontal bars every 8 rows (a steady chord)
    Bars,
}

/// Generate a test image for spectrogram encoding
#[derive(Parser, Debug)]
#[command(name = "generate-test-image")]
#[command(about = "Generate grayscale test images for spectrogram encoding", long_about = None)]
struct Args {
    /// Output image file (format from extension)
    #[arg(short, long)]
    output: PathBuf,

    /// Width in pixels (time)
    #[arg(short = 'W', long, default_value_t = 120)]
    width: u32,

    /// Height in pixels (frequency)
    #[arg(short = 'H', long, default_value_t = 64)]
    height: u32,

    /// Pattern to draw
    #[arg(short, long, value_enum, default_value_t = Pattern::Diagonal)]
    pattern: Pattern,
}

/// Brightness of pixel (x, y) in a `width` x `height` image
fn pattern_pixel(pattern: Pattern, x: u32, y: u32, width: u32, height: u32) -> u8 {
    match pattern {
        Pattern::Gradient => {
            let span = u64::from(width.saturating_sub(1).max(1));
            (u64::from(x) * 255 / span) as u8
        }
        Pattern::Diagonal => {
            let span = u64::from(width.saturating_sub(1).max(1));
            let rise = u64::from(x) * u64::from(height.saturating_sub(1)) / span;
            if u64::from(height - 1 - y) == rise { 255 } else { 0 }
        }
        Pattern::Bars => {
            if y % 8 == 0 {
                255
            } else {
                0
            }
        }
    }
}

fn render(pattern: Pattern, width: u32, height: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        Luma([pattern_pixel(pattern, x, y, width, height)])
    })
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.width == 0 || args.height == 0 {
        anyhow::bail!("Image dimensions must be non-zero");
    }

    println!("Generating test image:");
    println!("  Output: {}", args.output.display());
    println!("  Size: {}x{}", args.width, args.height);
    println!("  Pattern: {:?}", args.pattern);

    let image = render(args.pattern, args.width, args.height);
    image
        .save(&args.output)
        .with_context(|| format!("Failed to write image: {}", args.output.display()))?;

    println!("Successfully wrote {} pixels", args.width * args.height);
    Ok(())
}
