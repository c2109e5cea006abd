//! Compression pipeline orchestration across the three color components.

use crate::Channel;
use crate::channel::{process_forward, process_inverse};
use crate::color::{rgb_to_ycbcr, ycbcr_to_rgb};
use crate::error::DctError;
use crate::quantization::{chroma_quant_table, scaled_quant_table};

/// Transform-domain image produced by [`compress`].
///
/// The planes hold quantized DCT coefficients at reconstruction scale, in
/// Y, Cb, Cr order. This is a lossy pixel transform, not a packed byte
/// stream; serialization to an actual image format is the caller's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressedImage {
    pub width: usize,
    pub height: usize,
    pub planes: [Channel; 3],
}

/// Compresses an interleaved RGB buffer into the transform domain.
///
/// The luma plane is quantized with the table derived from `quality`; both
/// chroma planes use the same table with every step size doubled.
///
/// # Errors
/// - [`DctError::InvalidQualityFactor`] if `quality` is below 1.
/// - [`DctError::InvalidSourceSize`] if `pixels` does not hold exactly
///   `width * height * 3` samples.
pub fn compress(
    pixels: &[u8],
    width: usize,
    height: usize,
    quality: i32,
) -> Result<CompressedImage, DctError> {
    if quality < 1 {
        return Err(DctError::InvalidQualityFactor);
    }
    if pixels.len() != width * height * 3 {
        return Err(DctError::InvalidSourceSize);
    }
    if width == 0 || height == 0 {
        return Ok(CompressedImage {
            width,
            height,
            planes: [
                Channel::new(width, height),
                Channel::new(width, height),
                Channel::new(width, height),
            ],
        });
    }

    let [y, cb, cr] = rgb_to_ycbcr(pixels, width, height)?;

    let luma_table = scaled_quant_table(quality as u32);
    let chroma_table = chroma_quant_table(&luma_table);

    let planes = [
        process_forward(&y, &luma_table),
        process_forward(&cb, &chroma_table),
        process_forward(&cr, &chroma_table),
    ];

    Ok(CompressedImage {
        width,
        height,
        planes,
    })
}

/// Reconstructs interleaved RGB samples from the transform domain.
///
/// Each plane is self-contained: coefficients are already at reconstruction
/// scale, so the inverse path needs only the inverse transform. Output
/// samples are clamped to [0, 255].
///
/// # Errors
/// - [`DctError::ComponentShapeMismatch`] if any plane disagrees with the
///   declared image dimensions.
pub fn decompress(compressed: &CompressedImage) -> Result<Vec<u8>, DctError> {
    for plane in &compressed.planes {
        if plane.width != compressed.width || plane.height != compressed.height {
            return Err(DctError::ComponentShapeMismatch);
        }
    }
    if compressed.width == 0 || compressed.height == 0 {
        return Ok(Vec::new());
    }

    let y = process_inverse(&compressed.planes[0]);
    let cb = process_inverse(&compressed.planes[1]);
    let cr = process_inverse(&compressed.planes[2]);

    ycbcr_to_rgb(&y, &cb, &cr)
}
