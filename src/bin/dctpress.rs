//! dctpress CLI - block-DCT compression pipeline utility.
//!
//! Runs the transform-quantize-reconstruct pipeline over a decoded image and
//! re-encodes the lossy reconstruction as a JPEG preview, reporting the size
//! metrics. Decoding and re-encoding are handled by the `image` crate; the
//! pipeline itself never touches bytes on disk.

use clap::{Parser, Subcommand};
use image::ImageEncoder;
use std::fs;
use std::path::PathBuf;

/// JPEG quality used for the re-encoded preview.
const PREVIEW_JPEG_QUALITY: u8 = 85;

/// Lossy block-DCT image compression pipeline
#[derive(Parser)]
#[command(name = "dctpress")]
#[command(author = "dctpress-rs contributors")]
#[command(version)]
#[command(about = "Block-DCT compress/reconstruct pipeline with size metrics", long_about = None)]
#[command(after_help = "EXAMPLES:
    dctpress compress -i photo.png -o preview.jpg -q 10
    dctpress compress -i photo.jpg -o preview.jpg -q 90
    dctpress info -i photo.png

The quality factor controls the quantization step tables: low values produce
coarse tables and visible block artifacts, high values approach lossless.
Chroma planes are always quantized twice as aggressively as luma.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress an image through the DCT pipeline and write a JPEG preview
    ///
    /// Decodes the input (PNG or JPEG, alpha flattened to RGB), runs the
    /// forward and inverse pipeline at the given quality factor, and writes
    /// the reconstruction re-encoded as JPEG. Prints the original size, the
    /// re-encoded size, their ratio, and the mean absolute pixel error.
    #[command(visible_alias = "c")]
    Compress {
        /// Input image file (PNG or JPEG)
        #[arg(short, long, help = "Path to the input image file")]
        input: PathBuf,

        /// Output JPEG preview file
        #[arg(short, long, help = "Path for the re-encoded preview")]
        output: PathBuf,

        /// Quality factor for the quantization tables (1-100)
        #[arg(short, long, default_value = "10")]
        quality: i32,
    },

    /// Display image dimensions and component count
    #[command(visible_alias = "i")]
    Info {
        /// Input image file
        #[arg(short, long, help = "Path to the image file to inspect")]
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            quality,
        } => compress_image(&input, &output, quality),
        Commands::Info { input } => show_info(&input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn compress_image(
    input: &PathBuf,
    output: &PathBuf,
    quality: i32,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let decoded = image::load_from_memory(&data)?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();

    let compressed =
        dctpress_rs::compress(rgb.as_raw(), width as usize, height as usize, quality)?;
    let pixels = dctpress_rs::decompress(&compressed)?;

    let mut preview = Vec::new();
    let encoder =
        image::codecs::jpeg::JpegEncoder::new_with_quality(&mut preview, PREVIEW_JPEG_QUALITY);
    encoder.write_image(&pixels, width, height, image::ExtendedColorType::Rgb8)?;
    fs::write(output, &preview)?;

    let mean_error = mean_absolute_error(rgb.as_raw(), &pixels);

    println!(
        "✓ Compressed {}x{} image at quality {} to {:?}",
        width, height, quality, output
    );
    println!("  Original size:   {} bytes", data.len());
    println!("  Re-encoded size: {} bytes", preview.len());
    println!(
        "  Ratio:           {:.2}",
        data.len() as f64 / preview.len() as f64
    );
    println!("  Mean abs error:  {:.3}", mean_error);

    Ok(())
}

fn show_info(input: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let format = image::guess_format(&data)?;
    let decoded = image::load_from_memory(&data)?;

    println!("Format:     {:?}", format);
    println!("Dimensions: {}x{}", decoded.width(), decoded.height());
    println!("Components: {}", decoded.color().channel_count());

    Ok(())
}

fn mean_absolute_error(original: &[u8], reconstructed: &[u8]) -> f64 {
    if original.is_empty() {
        return 0.0;
    }
    let total: u64 = original
        .iter()
        .zip(reconstructed.iter())
        .map(|(a, b)| (*a as i64 - *b as i64).unsigned_abs())
        .sum();
    total as f64 / original.len() as f64
}
