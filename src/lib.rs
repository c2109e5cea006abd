//! Lossy block-DCT image compression pipeline.
//!
//! Implements the transform stage of baseline JPEG without entropy coding:
//! RGB input is converted to YCbCr, each plane is tiled into 8x8 blocks,
//! forward-transformed, and quantized against a quality-controlled step
//! table. The "compressed" artifact is an image-shaped buffer of quantized
//! coefficients, not a packed byte stream; decompression inverts the
//! transform per block and converts back to RGB.
//!
//! Features:
//! - Quality factors 1-100 mapped to step tables via the classic JPEG scale.
//! - Coarser (doubled) quantization for the chroma planes.
//! - Arbitrary image dimensions via zero/edge boundary padding.
//! - Optional `parallel` feature for band-parallel block processing.

pub mod channel;
pub mod color;
pub mod dct;
pub mod error;
pub mod pipeline;
pub mod quantization;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use error::DctError;
pub use pipeline::{CompressedImage, compress, decompress};

/// A single color component plane, stored row-major as f32 samples.
///
/// Pixel-domain planes hold values in [0, 255]; transform-domain planes hold
/// quantized DCT coefficients at reconstruction scale. Every pipeline stage
/// produces a fresh plane rather than mutating its input.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    pub width: usize,
    pub height: usize,
    pub data: Vec<f32>,
}

impl Channel {
    /// Create a zero-filled plane.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    /// Wrap an existing row-major sample buffer.
    pub fn from_data(width: usize, height: usize, data: Vec<f32>) -> Result<Self, DctError> {
        if data.len() != width * height {
            return Err(DctError::InvalidSourceSize);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
