//! RGB <-> YCbCr color conversion (full-range ITU-R BT.601, JPEG constants).

use crate::Channel;
use crate::error::DctError;

/// Splits interleaved 8-bit RGB samples into Y, Cb and Cr planes.
pub fn rgb_to_ycbcr(
    pixels: &[u8],
    width: usize,
    height: usize,
) -> Result<[Channel; 3], DctError> {
    if pixels.len() != width * height * 3 {
        return Err(DctError::InvalidSourceSize);
    }

    let mut y = Channel::new(width, height);
    let mut cb = Channel::new(width, height);
    let mut cr = Channel::new(width, height);

    for i in 0..width * height {
        let r = pixels[i * 3] as f32;
        let g = pixels[i * 3 + 1] as f32;
        let b = pixels[i * 3 + 2] as f32;

        y.data[i] = 0.299 * r + 0.587 * g + 0.114 * b;
        cb.data[i] = -0.1687 * r - 0.3313 * g + 0.5 * b + 128.0;
        cr.data[i] = 0.5 * r - 0.4187 * g - 0.0813 * b + 128.0;
    }

    Ok([y, cb, cr])
}

/// Merges Y, Cb and Cr planes back into interleaved 8-bit RGB samples.
///
/// Values are clamped to [0, 255] before the cast; quantization error can
/// push the inverse transform slightly out of range.
pub fn ycbcr_to_rgb(y: &Channel, cb: &Channel, cr: &Channel) -> Result<Vec<u8>, DctError> {
    if y.width != cb.width
        || y.width != cr.width
        || y.height != cb.height
        || y.height != cr.height
    {
        return Err(DctError::ComponentShapeMismatch);
    }

    let mut pixels = Vec::with_capacity(y.width * y.height * 3);
    for i in 0..y.width * y.height {
        let luma = y.data[i];
        let cb_c = cb.data[i] - 128.0;
        let cr_c = cr.data[i] - 128.0;

        let r = luma + 1.402 * cr_c;
        let g = luma - 0.344136 * cb_c - 0.714136 * cr_c;
        let b = luma + 1.772 * cb_c;

        pixels.push(clamp_to_u8(r));
        pixels.push(clamp_to_u8(g));
        pixels.push(clamp_to_u8(b));
    }

    Ok(pixels)
}

fn clamp_to_u8(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
