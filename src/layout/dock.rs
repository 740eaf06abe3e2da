use crate::layout::bound::{AxisBound, Cardinal, Dock, PaneId};
use crate::layout::lattice::{Lattice, Slot, Track, row_with_insert};

/// Splice docked panes onto an expanded lattice.
///
/// Each dock synthesizes one full edge row (north/south) or column
/// (east/west) carrying the dock's thickness bound; the spanning axis is
/// shadowed past the first slot so the dock contributes its bound once per
/// track. Docks apply in declaration order, so repeated docks on one edge
/// stack outward. A dock against an empty lattice synthesizes its row or
/// column with extent 1 so dock-only layouts still resolve.
pub(crate) fn merge_docks(mut lattice: Lattice, docks: &[(PaneId, Dock)]) -> Lattice {
    for &(id, dock) in docks {
        match dock.cardinal {
            Cardinal::North => {
                let row = edge_row(&lattice, id, dock.bound);
                lattice.rows.insert(0, row);
            }
            Cardinal::South => {
                let row = edge_row(&lattice, id, dock.bound);
                lattice.rows.push(row);
            }
            Cardinal::West => splice_column(&mut lattice, id, dock.bound, 0),
            Cardinal::East => {
                let at = lattice.width();
                splice_column(&mut lattice, id, dock.bound, at);
            }
        }
    }
    lattice
}

fn edge_row(lattice: &Lattice, id: PaneId, bound: AxisBound) -> Vec<Slot> {
    let width = lattice.width().max(1);
    (0..width)
        .map(|col| Slot {
            id: Some(id),
            span_width: width.min(u16::MAX as usize) as u16,
            span_height: 1,
            width: if col == 0 {
                Track::Canonical(AxisBound::default())
            } else {
                Track::Shadow(AxisBound::default())
            },
            height: Track::Canonical(bound),
        })
        .collect()
}

fn splice_column(lattice: &mut Lattice, id: PaneId, bound: AxisBound, at: usize) {
    if lattice.is_empty() {
        lattice.rows.push(Vec::new());
    }
    let height = lattice.height();
    for (row, slots) in lattice.rows.iter_mut().enumerate() {
        let slot = Slot {
            id: Some(id),
            span_width: 1,
            span_height: height.min(u16::MAX as usize) as u16,
            width: Track::Canonical(bound),
            height: if row == 0 {
                Track::Canonical(AxisBound::default())
            } else {
                Track::Shadow(AxisBound::default())
            },
        };
        *slots = row_with_insert(slots, at.min(slots.len()), slot);
    }
}
