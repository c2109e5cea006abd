// Full-pipeline round-trip tests for the DCT compression engine.
//
// These exercise compress -> decompress end to end: quality validation,
// padding/cropping exactness on awkward dimensions, and the quality/error
// relationships the quantization tables are supposed to produce.

use dctpress_rs::channel::{process_forward, process_inverse};
use dctpress_rs::error::DctError;
use dctpress_rs::quantization::{chroma_quant_table, scaled_quant_table};
use dctpress_rs::{Channel, compress, decompress};

/// Deterministic pseudo-random RGB buffer (xorshift, fixed seed).
fn noise_image(width: usize, height: usize) -> Vec<u8> {
    let mut state = 0x2545F491u32;
    let mut pixels = Vec::with_capacity(width * height * 3);
    for _ in 0..width * height * 3 {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        pixels.push((state >> 24) as u8);
    }
    pixels
}

/// Smooth gradient image; compresses predictably at every quality.
fn gradient_image(width: usize, height: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            pixels.push(((x * 255) / width.max(1)) as u8);
            pixels.push(((y * 255) / height.max(1)) as u8);
            pixels.push((((x + y) * 128) / (width + height).max(1)) as u8);
        }
    }
    pixels
}

fn mean_absolute_error(a: &[u8], b: &[u8]) -> f64 {
    assert_eq!(a.len(), b.len());
    let total: u64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (*x as i64 - *y as i64).unsigned_abs())
        .sum();
    total as f64 / a.len() as f64
}

#[test]
fn test_uniform_image_near_lossless_at_max_quality() {
    let pixels: Vec<u8> = [120u8, 80, 200].repeat(16 * 16);
    let compressed = compress(&pixels, 16, 16, 100).expect("Compress failed");
    let restored = decompress(&compressed).expect("Decompress failed");

    assert_eq!(restored.len(), pixels.len());
    for i in 0..pixels.len() {
        let diff = (pixels[i] as i32 - restored[i] as i32).abs();
        assert!(
            diff <= 2,
            "Mismatch at index {}: src={} dec={} diff={}",
            i,
            pixels[i],
            restored[i],
            diff
        );
    }
}

#[test]
fn test_non_multiple_of_block_dimensions_preserve_shape() {
    let width = 17;
    let height = 23;
    let pixels = noise_image(width, height);

    let compressed = compress(&pixels, width, height, 50).expect("Compress failed");
    assert_eq!(compressed.width, width);
    assert_eq!(compressed.height, height);
    for plane in &compressed.planes {
        assert_eq!((plane.width, plane.height), (width, height));
    }

    let restored = decompress(&compressed).expect("Decompress failed");
    assert_eq!(restored.len(), width * height * 3);
}

#[test]
fn test_lower_quality_produces_higher_error() {
    let width = 40;
    let height = 32;
    let pixels = gradient_image(width, height);

    let coarse = decompress(&compress(&pixels, width, height, 10).expect("Compress failed"))
        .expect("Decompress failed");
    let fine = decompress(&compress(&pixels, width, height, 90).expect("Compress failed"))
        .expect("Decompress failed");

    let coarse_error = mean_absolute_error(&pixels, &coarse);
    let fine_error = mean_absolute_error(&pixels, &fine);

    assert!(
        coarse_error > fine_error,
        "Expected q10 error {} to exceed q90 error {}",
        coarse_error,
        fine_error
    );
}

#[test]
fn test_doubled_steps_never_reduce_error() {
    // Same plane content through the luma table and the doubled chroma
    // table; the coarser steps must not reconstruct more accurately.
    let width = 24;
    let height = 24;
    let mut samples = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            samples.push(((x * 11 + y * 7) % 256) as f32);
        }
    }
    let plane = Channel::from_data(width, height, samples).expect("Plane construction failed");

    let luma_table = scaled_quant_table(50);
    let chroma_table = chroma_quant_table(&luma_table);

    let with_luma = process_inverse(&process_forward(&plane, &luma_table));
    let with_chroma = process_inverse(&process_forward(&plane, &chroma_table));

    let luma_error: f64 = plane
        .data
        .iter()
        .zip(with_luma.data.iter())
        .map(|(a, b)| (a - b).abs() as f64)
        .sum();
    let chroma_error: f64 = plane
        .data
        .iter()
        .zip(with_chroma.data.iter())
        .map(|(a, b)| (a - b).abs() as f64)
        .sum();

    assert!(
        chroma_error + 1e-6 >= luma_error,
        "Doubled steps gave error {} below luma error {}",
        chroma_error,
        luma_error
    );
}

#[test]
fn test_invalid_quality_rejected_before_table_arithmetic() {
    let pixels = noise_image(8, 8);
    assert_eq!(
        compress(&pixels, 8, 8, 0),
        Err(DctError::InvalidQualityFactor)
    );
    assert_eq!(
        compress(&pixels, 8, 8, -1),
        Err(DctError::InvalidQualityFactor)
    );
}

#[test]
fn test_empty_image_round_trips_to_empty() {
    let compressed = compress(&[], 0, 0, 75).expect("Compress failed");
    let restored = decompress(&compressed).expect("Decompress failed");
    assert!(restored.is_empty());
}

#[test]
fn test_textured_image_survives_mid_quality() {
    // Sanity bound: a 32x32 gradient at quality 50 should reconstruct with
    // small average error even though individual samples move.
    let width = 32;
    let height = 32;
    let pixels = gradient_image(width, height);

    let compressed = compress(&pixels, width, height, 50).expect("Compress failed");
    let restored = decompress(&compressed).expect("Decompress failed");

    let error = mean_absolute_error(&pixels, &restored);
    assert!(error < 10.0, "Mean absolute error too high: {}", error);
}
