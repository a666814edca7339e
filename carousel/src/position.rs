use alloc::vec::Vec;

use crate::{Layout, Nearest, Size};

/// Precomputed container offsets at which each child sits at the viewport center.
///
/// Entry `i` corresponds to child `i`. Offsets are on the layout's active axis: horizontal
/// layouts step towards negative offsets (content moves left), vertical layouts step towards
/// positive offsets (content moves up).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionTable {
    offsets: Vec<f32>,
}

impl PositionTable {
    /// Builds the table for `child_sizes` laid out with `layout` inside `viewport`.
    ///
    /// Grid layouts only read `child_sizes.len()`; every cell shares the grid's cell size.
    pub fn build(layout: &Layout, viewport: Size, child_sizes: &[Size]) -> Self {
        let count = child_sizes.len();
        let mut offsets = Vec::with_capacity(count);
        if count == 0 {
            return Self { offsets };
        }

        match *layout {
            Layout::Grid { cell_size, spacing } => {
                let step = cell_size.width + spacing.x;
                let mut off = viewport.width * 0.5 - cell_size.width * 0.5;
                offsets.push(off);
                for _ in 1..count {
                    off -= step;
                    offsets.push(off);
                }
            }
            Layout::Horizontal { spacing } => {
                let mut off = viewport.width * 0.5 - child_sizes[0].width * 0.5;
                offsets.push(off);
                for pair in child_sizes.windows(2) {
                    off -= pair[1].width * 0.5 + pair[0].width * 0.5 + spacing;
                    offsets.push(off);
                }
            }
            Layout::Vertical { spacing } => {
                let mut off = -viewport.height * 0.5 + child_sizes[0].height * 0.5;
                offsets.push(off);
                for pair in child_sizes.windows(2) {
                    off += pair[1].height * 0.5 + pair[0].height * 0.5 + spacing;
                    offsets.push(off);
                }
            }
        }

        Self { offsets }
    }

    pub fn from_offsets(offsets: Vec<f32>) -> Self {
        Self { offsets }
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        self.offsets.get(index).copied()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.offsets
    }

    /// Returns the entry closest to `offset`.
    ///
    /// Ties resolve to the lowest index. Returns `None` for an empty table.
    pub fn nearest(&self, offset: f32) -> Option<Nearest> {
        let mut best: Option<(Nearest, f32)> = None;
        for (index, &entry) in self.offsets.iter().enumerate() {
            let distance = (entry - offset).abs();
            let closer = match best {
                None => true,
                Some((_, d)) => distance < d,
            };
            if closer {
                best = Some((
                    Nearest {
                        index,
                        offset: entry,
                    },
                    distance,
                ));
            }
        }
        best.map(|(n, _)| n)
    }
}
