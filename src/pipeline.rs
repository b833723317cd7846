use tracing::debug;

use crate::core::PixelBuffer;
use crate::error::PixrectResult;
use crate::merge::RectGroups;
use crate::sample::{sample, sample_stride};
use crate::svg::{RectInstruction, VectorDocument};

/// Run the full conversion: sample the stride grid, bucket samples by color
/// key, merge horizontal runs, and assemble the document.
///
/// Deterministic for identical input; the only failure mode is a malformed
/// buffer. Each call owns all of its intermediate state, so concurrent
/// conversions share nothing.
#[tracing::instrument(skip(buffer))]
pub fn convert(buffer: &PixelBuffer) -> PixrectResult<VectorDocument> {
    buffer.validate()?;

    let canvas = buffer.canvas();
    let stride = sample_stride(canvas);
    let samples = sample(buffer, stride);
    debug!(stride, samples = samples.len(), "sampled pixel grid");

    let groups = RectGroups::collect(samples);
    debug!(colors = groups.color_count(), "bucketed samples by color key");

    let mut rects = Vec::new();
    for (fill, merged) in groups.merge() {
        rects.extend(merged.into_iter().map(|rect| RectInstruction { rect, fill }));
    }
    debug!(rects = rects.len(), "merged horizontal runs");

    Ok(VectorDocument { canvas, rects })
}
