//! Channel tiling and per-block transform orchestration.
//!
//! A channel of arbitrary dimensions is padded up to the next multiple of the
//! block size, walked as non-overlapping 8x8 tiles in row-major order, and
//! cropped back after processing. The forward path zero-pads so border blocks
//! pick up no artificial high-frequency content; the inverse path pads by
//! edge replication so reconstruction sees no sharp synthetic edges. The two
//! policies are intentionally asymmetric.
//!
//! Tiles have no cross-block dependency, so each 8-row band of the padded
//! buffer can be processed independently; the `parallel` feature fans the
//! bands out over rayon.

use crate::Channel;
use crate::dct::{BLOCK_DIM, BLOCK_SIZE, forward_8x8, inverse_8x8};
use crate::quantization::{QuantTable, quantize_block};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Transforms and quantizes every tile of the channel.
///
/// Returns a transform-domain plane of the same dimensions, holding quantized
/// coefficients at reconstruction scale.
pub fn process_forward(channel: &Channel, table: &QuantTable) -> Channel {
    if channel.is_empty() {
        return Channel::new(channel.width, channel.height);
    }

    let (mut padded, padded_width) = pad_with_zeros(channel);
    for_each_band(&mut padded, padded_width, |band| {
        forward_band(band, padded_width, table)
    });
    crop(&padded, padded_width, channel.width, channel.height)
}

/// Inverse-transforms every tile of a transform-domain plane.
///
/// No quantization table is needed: coefficients already carry
/// reconstruction-scale values.
pub fn process_inverse(channel: &Channel) -> Channel {
    if channel.is_empty() {
        return Channel::new(channel.width, channel.height);
    }

    let (mut padded, padded_width) = pad_with_edges(channel);
    for_each_band(&mut padded, padded_width, |band| {
        inverse_band(band, padded_width)
    });
    crop(&padded, padded_width, channel.width, channel.height)
}

fn block_aligned(n: usize) -> usize {
    ((n + BLOCK_SIZE - 1) / BLOCK_SIZE) * BLOCK_SIZE
}

/// Pads with zeros on the bottom/right to block-aligned dimensions.
fn pad_with_zeros(channel: &Channel) -> (Vec<f32>, usize) {
    let padded_width = block_aligned(channel.width);
    let padded_height = block_aligned(channel.height);

    let mut padded = vec![0.0f32; padded_width * padded_height];
    for y in 0..channel.height {
        let row = &channel.data[y * channel.width..(y + 1) * channel.width];
        padded[y * padded_width..y * padded_width + channel.width].copy_from_slice(row);
    }
    (padded, padded_width)
}

/// Pads by replicating the last row/column to block-aligned dimensions.
fn pad_with_edges(channel: &Channel) -> (Vec<f32>, usize) {
    let padded_width = block_aligned(channel.width);
    let padded_height = block_aligned(channel.height);

    let mut padded = vec![0.0f32; padded_width * padded_height];
    for y in 0..padded_height {
        let src_y = y.min(channel.height - 1);
        for x in 0..padded_width {
            let src_x = x.min(channel.width - 1);
            padded[y * padded_width + x] = channel.data[src_y * channel.width + src_x];
        }
    }
    (padded, padded_width)
}

/// Crops the padded buffer back to the original, unpadded dimensions.
fn crop(padded: &[f32], padded_width: usize, width: usize, height: usize) -> Channel {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        data.extend_from_slice(&padded[y * padded_width..y * padded_width + width]);
    }
    Channel {
        width,
        height,
        data,
    }
}

/// Runs `op` over every 8-row band of the padded buffer.
fn for_each_band<F>(padded: &mut [f32], padded_width: usize, op: F)
where
    F: Fn(&mut [f32]) + Sync + Send,
{
    #[cfg(feature = "parallel")]
    padded
        .par_chunks_mut(BLOCK_SIZE * padded_width)
        .for_each(|band| op(band));

    #[cfg(not(feature = "parallel"))]
    for band in padded.chunks_mut(BLOCK_SIZE * padded_width) {
        op(band);
    }
}

/// Forward-transforms and quantizes every tile in one 8-row band.
fn forward_band(band: &mut [f32], width: usize, table: &QuantTable) {
    let mut block = [0.0f32; BLOCK_DIM];
    let mut coeffs = [0.0f32; BLOCK_DIM];

    for block_x in (0..width).step_by(BLOCK_SIZE) {
        copy_tile_out(band, width, block_x, &mut block);
        forward_8x8(&block, &mut coeffs);
        quantize_block(&mut coeffs, table);
        copy_tile_in(band, width, block_x, &coeffs);
    }
}

/// Inverse-transforms every tile in one 8-row band.
fn inverse_band(band: &mut [f32], width: usize) {
    let mut block = [0.0f32; BLOCK_DIM];
    let mut samples = [0.0f32; BLOCK_DIM];

    for block_x in (0..width).step_by(BLOCK_SIZE) {
        copy_tile_out(band, width, block_x, &mut block);
        inverse_8x8(&block, &mut samples);
        copy_tile_in(band, width, block_x, &samples);
    }
}

fn copy_tile_out(band: &[f32], width: usize, block_x: usize, tile: &mut [f32; BLOCK_DIM]) {
    for y in 0..BLOCK_SIZE {
        for x in 0..BLOCK_SIZE {
            tile[y * BLOCK_SIZE + x] = band[y * width + block_x + x];
        }
    }
}

fn copy_tile_in(band: &mut [f32], width: usize, block_x: usize, tile: &[f32; BLOCK_DIM]) {
    for y in 0..BLOCK_SIZE {
        for x in 0..BLOCK_SIZE {
            band[y * width + block_x + x] = tile[y * BLOCK_SIZE + x];
        }
    }
}
