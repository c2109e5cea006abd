//! Quantization step tables and coefficient rounding.
//!
//! Tables are derived from a scalar quality factor using the classic JPEG
//! scaling rule. Quantization rounds each coefficient to the nearest multiple
//! of its step size and keeps it at reconstruction scale, so the inverse path
//! needs no dequantization pass.

use crate::dct::BLOCK_DIM;

/// Per-frequency step sizes, indexed identically to a DCT block.
pub type QuantTable = [f32; BLOCK_DIM];

/// Standard JPEG luminance quantization table (Quality 50).
pub const BASE_QUANT_TABLE: [u16; BLOCK_DIM] = [
    16, 11, 10, 16, 24, 40, 51, 61,
    12, 12, 14, 19, 26, 58, 60, 55,
    14, 13, 16, 24, 40, 57, 69, 56,
    14, 17, 22, 29, 51, 87, 80, 62,
    18, 22, 37, 56, 68, 109, 103, 77,
    24, 35, 55, 64, 81, 104, 113, 92,
    49, 64, 78, 87, 103, 121, 120, 101,
    72, 92, 95, 98, 112, 100, 103, 99,
];

/// Derives a step-size table from a quality factor (1-100 conventionally).
///
/// Entries are floored and clamped to at least 1, so quantization never
/// divides by zero. Quality above 100 drives the scale non-positive and every
/// entry clamps to 1 (a degenerate, near-lossless table). Quality 0 would
/// divide by zero; callers must validate before invoking.
pub fn scaled_quant_table(quality: u32) -> QuantTable {
    debug_assert!(quality >= 1);
    let scale = if quality < 50 {
        5000.0 / quality as f32
    } else {
        200.0 - 2.0 * quality as f32
    };

    let mut table = [0.0f32; BLOCK_DIM];
    for i in 0..BLOCK_DIM {
        let val = ((BASE_QUANT_TABLE[i] as f32 * scale + 50.0) / 100.0).floor();
        table[i] = if val < 1.0 { 1.0 } else { val };
    }
    table
}

/// Coarser table for the chroma planes: every luma step size doubled.
pub fn chroma_quant_table(luma: &QuantTable) -> QuantTable {
    let mut table = *luma;
    for step in table.iter_mut() {
        *step *= 2.0;
    }
    table
}

/// Rounds each coefficient to the nearest multiple of its step size.
///
/// This is the lossy step. The result stays multiplied back by the table, so
/// quantizing an already-quantized block with the same table is a no-op.
pub fn quantize_block(coeffs: &mut [f32; BLOCK_DIM], table: &QuantTable) {
    for i in 0..BLOCK_DIM {
        coeffs[i] = (coeffs[i] / table[i]).round() * table[i];
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: every table entry is at least 1 for any in-range quality.
        #[test]
        fn prop_table_entries_at_least_one(quality in 1u32..=100) {
            let table = scaled_quant_table(quality);
            for step in table.iter() {
                prop_assert!(*step >= 1.0);
            }
        }

        /// Property: quantization is idempotent at the coefficient level.
        #[test]
        fn prop_quantize_idempotent(
            quality in 1u32..=100,
            samples in prop::array::uniform32(-1024.0f32..1024.0),
        ) {
            let table = scaled_quant_table(quality);
            let mut coeffs = [0.0f32; BLOCK_DIM];
            for i in 0..BLOCK_DIM {
                coeffs[i] = samples[i % 32];
            }

            quantize_block(&mut coeffs, &table);
            let once = coeffs;
            quantize_block(&mut coeffs, &table);
            for i in 0..BLOCK_DIM {
                prop_assert_eq!(once[i], coeffs[i]);
            }
        }
    }
}
