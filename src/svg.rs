use std::fmt::Write;

use crate::core::Canvas;
use crate::merge::MergedRect;
use crate::sample::ColorKey;

/// One filled-rectangle drawing instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RectInstruction {
    pub rect: MergedRect,
    pub fill: ColorKey,
}

/// Rectangle-based vector image: declared canvas size plus an ordered list
/// of filled-rectangle instructions. Immutable once produced.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct VectorDocument {
    pub canvas: Canvas,
    pub rects: Vec<RectInstruction>,
}

impl VectorDocument {
    /// Render the document as SVG text.
    ///
    /// XML declaration, `<svg>` root with explicit dimensions and a matching
    /// `viewBox`, then one `<rect>` per instruction in stored order. Pure
    /// formatting; no I/O.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.canvas.width, self.canvas.height, self.canvas.width, self.canvas.height,
        );

        for instruction in &self.rects {
            let _ = writeln!(
                out,
                r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                instruction.rect.x,
                instruction.rect.y,
                instruction.rect.width,
                instruction.rect.height,
                instruction.fill,
            );
        }

        let _ = writeln!(out, "</svg>");
        out
    }
}
