//! WebAssembly bindings for dctpress-rs.
//!
//! This module provides JavaScript-compatible functions via wasm-bindgen
//! for use in browsers and Node.js. Image decode and the preview re-encode
//! go through the `image` crate; the pipeline itself only sees pixel buffers.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use image::ImageEncoder;

/// JPEG quality used for the re-encoded preview.
#[cfg(target_arch = "wasm32")]
const PREVIEW_JPEG_QUALITY: u8 = 85;

/// Image information returned from the WASM API.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub components: u32,
}

/// Run the DCT pipeline on an encoded image and return the lossy
/// reconstruction re-encoded as JPEG bytes.
///
/// # Arguments
/// * `data` - The source image file bytes (PNG or JPEG)
/// * `quality` - Quality factor for the quantization tables (1-100)
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn compress_preview(data: &[u8], quality: i32) -> Result<Vec<u8>, JsValue> {
    let decoded = image::load_from_memory(data)
        .map_err(|e| JsValue::from_str(&format!("Decode error: {}", e)))?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();

    let compressed =
        crate::pipeline::compress(rgb.as_raw(), width as usize, height as usize, quality)
            .map_err(|e| JsValue::from_str(&format!("Compress error: {}", e)))?;
    let pixels = crate::pipeline::decompress(&compressed)
        .map_err(|e| JsValue::from_str(&format!("Decompress error: {}", e)))?;

    let mut preview = Vec::new();
    let encoder =
        image::codecs::jpeg::JpegEncoder::new_with_quality(&mut preview, PREVIEW_JPEG_QUALITY);
    encoder
        .write_image(&pixels, width, height, image::ExtendedColorType::Rgb8)
        .map_err(|e| JsValue::from_str(&format!("Encode error: {}", e)))?;

    Ok(preview)
}

/// Get image information without running the pipeline.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn get_image_info(data: &[u8]) -> Result<ImageInfo, JsValue> {
    let decoded = image::load_from_memory(data)
        .map_err(|e| JsValue::from_str(&format!("Decode error: {}", e)))?;

    Ok(ImageInfo {
        width: decoded.width(),
        height: decoded.height(),
        components: decoded.color().channel_count() as u32,
    })
}
