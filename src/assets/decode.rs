use std::sync::Arc;

use anyhow::Context;

use crate::{
    assets::store::PreparedImage,
    foundation::error::PinResult,
    foundation::math::premultiply_rgba8_in_place,
};

/// Decode encoded image bytes into straight-alpha RGBA8.
///
/// Item photos are decoded in straight-alpha form because the cutout pass
/// ([`crate::prepare_item`]) needs the original channel values before
/// premultiplication.
pub fn decode_rgba(bytes: &[u8]) -> PinResult<image::RgbaImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(dyn_img.to_rgba8())
}

/// Decode encoded image bytes and convert to premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> PinResult<PreparedImage> {
    let rgba = decode_rgba(bytes)?;
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
