use std::collections::HashMap;

use crate::error::{LayoutError, Result};
use crate::geometry::Size;
use crate::layout::bound::PaneId;
use crate::layout::lattice::Lattice;

/// Immutable pane-to-size mapping produced by every resize.
///
/// Updates are transient: they hold no reference back into the engine and a
/// fresh one is built per resize call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeUpdate {
    sizes: HashMap<PaneId, Size>,
}

impl SizeUpdate {
    /// Resolved size for a pane.
    ///
    /// Fails with [`LayoutError::NotRegistered`] for a handle that was never
    /// declared or was declared after the topology resolved, meaning the
    /// pane does not exist in the current layout.
    pub fn size(&self, id: PaneId) -> Result<Size> {
        self.sizes.get(&id).copied().ok_or(LayoutError::NotRegistered)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PaneId, Size)> + '_ {
        self.sizes.iter().map(|(&id, &size)| (id, size))
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

/// Aggregate allocated track sizes back into one size per pane.
///
/// Walks the lattice row-major and remembers the first row and column each
/// handle was seen at. A column's width is added only on the handle's first
/// row and a row's height only on its first column, so a spanning or docked
/// pane's shared space is counted exactly once. Filler slots are skipped.
pub(crate) fn build_sizes(lattice: &Lattice, widths: &[u16], heights: &[u16]) -> SizeUpdate {
    let mut sizes: HashMap<PaneId, Size> = HashMap::new();
    let mut first_row: HashMap<PaneId, usize> = HashMap::new();
    let mut first_col: HashMap<PaneId, usize> = HashMap::new();

    for (row, slots) in lattice.rows.iter().enumerate() {
        for (col, slot) in slots.iter().enumerate() {
            let Some(id) = slot.id else {
                continue;
            };
            let size = sizes.entry(id).or_default();
            let anchor_row = *first_row.entry(id).or_insert(row);
            let anchor_col = *first_col.entry(id).or_insert(col);
            if anchor_row == row {
                size.width = size.width.saturating_add(widths[col]);
            }
            if anchor_col == col {
                size.height = size.height.saturating_add(heights[row]);
            }
        }
    }

    SizeUpdate { sizes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::bound::{Cell, PaneId};
    use crate::layout::expand::expand_spans;
    use crate::layout::lattice::Slot;

    fn id(raw: u64) -> PaneId {
        PaneId::new(raw).unwrap()
    }

    fn plain(raw: u64) -> Slot {
        Slot::from_cell(id(raw), &Cell::new())
    }

    #[test]
    fn spanning_pane_is_counted_once() {
        // 2x2 span next to two single slots, expanded to a 2x3 lattice.
        let declared = vec![vec![
            Slot::from_cell(id(1), &Cell::new().with_span(2, 2)),
            plain(2),
        ]];
        let lattice = expand_spans(&declared);
        let update = build_sizes(&lattice, &[30, 30, 40], &[10, 15]);

        assert_eq!(update.size(id(1)).unwrap(), Size::new(60, 25));
        assert_eq!(update.size(id(2)).unwrap(), Size::new(40, 10));
    }

    #[test]
    fn fillers_produce_no_entry() {
        let lattice = Lattice::new(vec![vec![plain(1), Slot::filler()]]);
        let update = build_sizes(&lattice, &[5, 5], &[7]);
        assert_eq!(update.len(), 1);
        assert_eq!(update.size(id(1)).unwrap(), Size::new(5, 7));
    }

    #[test]
    fn unknown_handle_misses() {
        let lattice = Lattice::new(vec![vec![plain(1)]]);
        let update = build_sizes(&lattice, &[5], &[7]);
        assert_eq!(update.size(id(9)), Err(LayoutError::NotRegistered));
    }
}
