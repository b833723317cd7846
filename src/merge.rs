use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::sample::{Cell, ColorKey};

/// Axis-aligned rectangle built by merging a horizontal run of same-color
/// cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MergedRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl MergedRect {
    fn from_cell(cell: Cell) -> Self {
        Self {
            x: cell.x,
            y: cell.y,
            width: cell.size,
            height: cell.size,
        }
    }
}

/// Cells bucketed by color key, keys held in the order they were first seen.
///
/// Discovery order drives serializer output, so a deterministic sampler
/// yields a deterministic document.
#[derive(Debug, Default)]
pub struct RectGroups {
    order: Vec<ColorKey>,
    buckets: HashMap<ColorKey, Vec<Cell>>,
}

impl RectGroups {
    pub fn collect(samples: impl IntoIterator<Item = (Cell, ColorKey)>) -> Self {
        let mut groups = Self::default();
        for (cell, key) in samples {
            groups.push(cell, key);
        }
        groups
    }

    fn push(&mut self, cell: Cell, key: ColorKey) {
        match self.buckets.entry(key) {
            Entry::Occupied(bucket) => bucket.into_mut().push(cell),
            Entry::Vacant(slot) => {
                self.order.push(key);
                slot.insert(vec![cell]);
            }
        }
    }

    /// Number of distinct color keys collected.
    pub fn color_count(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Merge each bucket's cells into rectangles, consuming the groups.
    ///
    /// Buckets are re-sorted by `(y, x)` before merging: a color's cells are
    /// a filtered subset of the scan, so per-row contiguity has to be
    /// re-established explicitly. Output preserves color-discovery order.
    pub fn merge(self) -> Vec<(ColorKey, Vec<MergedRect>)> {
        let Self { order, mut buckets } = self;
        order
            .into_iter()
            .map(|key| {
                let mut cells = buckets.remove(&key).unwrap_or_default();
                cells.sort_by_key(|cell| (cell.y, cell.x));
                (key, merge_runs(&cells))
            })
            .collect()
    }
}

/// Scan `(y, x)`-sorted cells, widening the current rectangle while the next
/// cell sits on the same row at its right edge with the same height. Merging
/// is horizontal only; stacked rows stay separate rectangles.
fn merge_runs(cells: &[Cell]) -> Vec<MergedRect> {
    let mut rects = Vec::new();
    let mut iter = cells.iter();
    let Some(first) = iter.next() else {
        return rects;
    };

    let mut current = MergedRect::from_cell(*first);
    for cell in iter {
        let extends = cell.y == current.y
            && cell.size == current.height
            && cell.x == current.x + current.width;
        if extends {
            current.width += cell.size;
        } else {
            rects.push(current);
            current = MergedRect::from_cell(*cell);
        }
    }
    rects.push(current);
    rects
}
