use image::imageops::FilterType;
use tracing::debug;

use crate::core::PixelBuffer;
use crate::error::{PixrectError, PixrectResult};

/// Largest side, in pixels, an input image keeps before downsizing.
pub const MAX_DIMENSION: u32 = 1200;

/// Decode encoded image bytes into an RGBA8 pixel buffer.
///
/// Images whose longer side exceeds `max_dimension` are downsized to fit it,
/// aspect preserved, before conversion; the emitted document then declares
/// the downsized canvas. Pass `0` to keep the source resolution.
pub fn decode_image(bytes: &[u8], max_dimension: u32) -> PixrectResult<PixelBuffer> {
    let mut img =
        image::load_from_memory(bytes).map_err(|e| PixrectError::decode(e.to_string()))?;

    let (source_width, source_height) = (img.width(), img.height());
    if max_dimension > 0 && source_width.max(source_height) > max_dimension {
        img = img.resize(max_dimension, max_dimension, FilterType::Triangle);
        debug!(
            source_width,
            source_height,
            width = img.width(),
            height = img.height(),
            "downsized input image"
        );
    }

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    PixelBuffer::new(width, height, rgba.into_raw())
}
