//! Pixrect converts a raster image into a rectangle-mosaic SVG document.
//!
//! The conversion is a single-pass pipeline of three pure stages: sample the
//! pixel grid on a stride ([`sample`]), bucket and merge same-color runs
//! ([`merge`]), and serialize the merged rectangles ([`svg`]). The [`decode`]
//! module adapts encoded image bytes into the [`PixelBuffer`] the pipeline
//! consumes.
#![forbid(unsafe_code)]

pub mod core;
pub mod decode;
pub mod error;
pub mod merge;
pub mod pipeline;
pub mod sample;
pub mod svg;

pub use crate::core::{Canvas, PixelBuffer};
pub use crate::decode::{MAX_DIMENSION, decode_image};
pub use crate::error::{PixrectError, PixrectResult};
pub use crate::merge::{MergedRect, RectGroups};
pub use crate::pipeline::convert;
pub use crate::sample::{Cell, ColorKey, sample, sample_stride};
pub use crate::svg::{RectInstruction, VectorDocument};
