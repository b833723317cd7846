use std::fmt;

use crate::core::{Canvas, PixelBuffer};

/// Shorter canvas side at or below which every pixel is sampled.
const FULL_DENSITY_SIDE: u32 = 400;

/// Opacity quantization steps per unit of alpha.
const ALPHA_STEPS: u8 = 20;

/// Grid spacing in pixels between sampled anchor points.
///
/// Grows with resolution so the sample count stays roughly bounded: canvases
/// up to 400 px on the shorter side sample every pixel.
pub fn sample_stride(canvas: Canvas) -> u32 {
    (canvas.width.min(canvas.height) / FULL_DENSITY_SIDE).max(1)
}

/// Quantized color+opacity bucket.
///
/// Channels are floored to even values and opacity is held in twentieths, so
/// the key hashes and compares without floats. Key equality is the sole
/// grouping criterion; visually close colors that round apart land in
/// different buckets.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ColorKey {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in twentieths, 0..=20.
    pub alpha_steps: u8,
}

impl ColorKey {
    /// Quantize one RGBA sample. Fully transparent pixels produce no key.
    pub fn quantize(rgba: [u8; 4]) -> Option<Self> {
        let [r, g, b, a] = rgba;
        if a == 0 {
            return None;
        }
        Some(Self {
            r: r / 2 * 2,
            g: g / 2 * 2,
            b: b / 2 * 2,
            alpha_steps: ((f64::from(a) / 255.0) * f64::from(ALPHA_STEPS)).round() as u8,
        })
    }
}

impl fmt::Display for ColorKey {
    /// `rgba(R,G,B,A)` with A a decimal fraction (`1`, `0.5`, `0.05`, ...).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},", self.r, self.g, self.b)?;
        match self.alpha_steps {
            0 => write!(f, "0)"),
            ALPHA_STEPS.. => write!(f, "1)"),
            steps => {
                let hundredths = u32::from(steps) * 5;
                if hundredths % 10 == 0 {
                    write!(f, "0.{})", hundredths / 10)
                } else {
                    write!(f, "0.{hundredths:02})")
                }
            }
        }
    }
}

/// One sampled grid unit.
///
/// `size` is the stride even when the cell overhangs the right or bottom
/// edge; only the anchor pixel at `(x, y)` is ever read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
    pub size: u32,
}

/// Walk the buffer row-major on `stride`, quantizing each anchor pixel.
///
/// Pure function of `(buffer, stride)`; transparent samples contribute
/// nothing. `stride` must be at least 1.
pub fn sample(buffer: &PixelBuffer, stride: u32) -> Vec<(Cell, ColorKey)> {
    let mut out = Vec::new();
    for y in (0..buffer.height).step_by(stride as usize) {
        for x in (0..buffer.width).step_by(stride as usize) {
            if let Some(key) = ColorKey::quantize(buffer.pixel(x, y)) {
                out.push((Cell { x, y, size: stride }, key));
            }
        }
    }
    out
}
