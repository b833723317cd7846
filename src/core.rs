use crate::error::{PixrectError, PixrectResult};

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Decoded raster input.
///
/// Row-major, tightly packed RGBA8; the conversion pipeline only reads it.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap a raw RGBA8 buffer, rejecting malformed input up front.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> PixrectResult<Self> {
        let buf = Self {
            width,
            height,
            data,
        };
        buf.validate()?;
        Ok(buf)
    }

    /// Check dimensions and channel count before conversion.
    pub fn validate(&self) -> PixrectResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PixrectError::invalid_input(
                "pixel buffer must have non-zero width and height",
            ));
        }
        let expected = self.width as usize * self.height as usize * 4;
        if self.data.len() != expected {
            return Err(PixrectError::invalid_input(format!(
                "pixel buffer holds {} bytes, expected {expected} for {}x{} rgba8",
                self.data.len(),
                self.width,
                self.height
            )));
        }
        Ok(())
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// RGBA channels of the pixel at `(x, y)`.
    ///
    /// `(x, y)` must lie inside the buffer; the sampler only reads anchor
    /// points that do.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }
}
