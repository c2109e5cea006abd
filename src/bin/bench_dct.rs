use dctpress_rs::dct::{BLOCK_DIM, forward_8x8, inverse_8x8};
use std::time::Instant;

fn main() {
    println!("Benchmarking 8x8 DCT implementations...");

    let mut input = [0.0f32; BLOCK_DIM];
    for i in 0..BLOCK_DIM {
        input[i] = ((i * 13) % 256) as f32;
    }

    let iterations = 1_000_000;

    // Benchmark forward transform
    let mut coeffs = [0.0f32; BLOCK_DIM];
    let start = Instant::now();
    for _ in 0..iterations {
        forward_8x8(&input, &mut coeffs);
        // prevent optimization
        std::hint::black_box(coeffs);
    }
    let duration_forward = start.elapsed();
    println!(
        "Forward DCT: {:?} for {} iterations",
        duration_forward, iterations
    );

    // Benchmark inverse transform
    let mut output = [0.0f32; BLOCK_DIM];
    let start = Instant::now();
    for _ in 0..iterations {
        inverse_8x8(&coeffs, &mut output);
        // prevent optimization
        std::hint::black_box(output);
    }
    let duration_inverse = start.elapsed();
    println!(
        "Inverse DCT: {:?} for {} iterations",
        duration_inverse, iterations
    );

    // Verify round-trip accuracy
    let mut max_diff = 0.0f32;
    for i in 0..BLOCK_DIM {
        let diff = (input[i] - output[i]).abs();
        if diff > max_diff {
            max_diff = diff;
        }
    }
    println!("Max round-trip difference: {}", max_diff);

    if max_diff < 1e-3 {
        println!("Accuracy: PASSED (Tolerance < 1e-3)");
    } else {
        println!("Accuracy: FAILED (Tolerance > 1e-3)");
    }
}
