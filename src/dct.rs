//! Discrete Cosine Transform primitives for 8x8 blocks.
//!
//! The 2D transform is separable: a 1D orthonormal DCT-II is applied along
//! rows, then columns. With orthonormal scaling the inverse is the transposed
//! application of the same basis, so a forward/inverse round trip reproduces
//! the input to floating-point tolerance.

use std::f32::consts::PI;

pub const BLOCK_SIZE: usize = 8;
pub const BLOCK_DIM: usize = BLOCK_SIZE * BLOCK_SIZE;

/// Orthonormal DCT-II basis: basis[k][n] = c(k) * cos((2n + 1) * k * PI / 16).
fn dct_basis() -> [[f32; BLOCK_SIZE]; BLOCK_SIZE] {
    let mut basis = [[0.0f32; BLOCK_SIZE]; BLOCK_SIZE];
    for k in 0..BLOCK_SIZE {
        let ck = if k == 0 {
            (1.0 / BLOCK_SIZE as f32).sqrt()
        } else {
            (2.0 / BLOCK_SIZE as f32).sqrt()
        };
        for n in 0..BLOCK_SIZE {
            let angle = (((2 * n + 1) * k) as f32 * PI) / (2 * BLOCK_SIZE) as f32;
            basis[k][n] = ck * angle.cos();
        }
    }
    basis
}

/// Forward 2D DCT-II. The DC coefficient lands at index 0 (position (0,0)).
pub fn forward_8x8(input: &[f32; BLOCK_DIM], output: &mut [f32; BLOCK_DIM]) {
    let basis = dct_basis();

    // Transform along rows
    let mut rows = [0.0f32; BLOCK_DIM];
    for y in 0..BLOCK_SIZE {
        for v in 0..BLOCK_SIZE {
            let mut sum = 0.0f32;
            for x in 0..BLOCK_SIZE {
                sum += input[y * BLOCK_SIZE + x] * basis[v][x];
            }
            rows[y * BLOCK_SIZE + v] = sum;
        }
    }

    // Transform along columns
    for u in 0..BLOCK_SIZE {
        for v in 0..BLOCK_SIZE {
            let mut sum = 0.0f32;
            for y in 0..BLOCK_SIZE {
                sum += rows[y * BLOCK_SIZE + v] * basis[u][y];
            }
            output[u * BLOCK_SIZE + v] = sum;
        }
    }
}

/// Inverse 2D DCT (DCT-III), the exact mathematical inverse of [`forward_8x8`].
pub fn inverse_8x8(input: &[f32; BLOCK_DIM], output: &mut [f32; BLOCK_DIM]) {
    let basis = dct_basis();

    // Invert along columns
    let mut cols = [0.0f32; BLOCK_DIM];
    for y in 0..BLOCK_SIZE {
        for v in 0..BLOCK_SIZE {
            let mut sum = 0.0f32;
            for u in 0..BLOCK_SIZE {
                sum += input[u * BLOCK_SIZE + v] * basis[u][y];
            }
            cols[y * BLOCK_SIZE + v] = sum;
        }
    }

    // Invert along rows
    for y in 0..BLOCK_SIZE {
        for x in 0..BLOCK_SIZE {
            let mut sum = 0.0f32;
            for v in 0..BLOCK_SIZE {
                sum += cols[y * BLOCK_SIZE + v] * basis[v][x];
            }
            output[y * BLOCK_SIZE + x] = sum;
        }
    }
}
