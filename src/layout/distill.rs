use crate::layout::bound::{AxisBound, PreferenceGroup};
use crate::layout::lattice::Lattice;

/// Collapse per-slot bounds into one preference per row and per column.
///
/// Returns `(heights, widths)`: heights carry one entry per row, widths one
/// per column. The fold is deliberately conservative, picking the tightest
/// mutually satisfiable bound: min is the largest minimum seen, max the
/// smallest nonzero maximum (the first nonzero value initializes it, so an
/// undeclared maximum never collapses to zero), preferred the largest
/// preferred, and grow the disjunction. Shadow tracks contribute their
/// divided bounds like any other.
pub(crate) fn distill_preferences(lattice: &Lattice) -> (PreferenceGroup, PreferenceGroup) {
    let mut heights = vec![AxisBound::default(); lattice.height()];
    let mut widths = vec![AxisBound::default(); lattice.width()];

    for (row, slots) in lattice.rows.iter().enumerate() {
        for (col, slot) in slots.iter().enumerate() {
            fold(&mut heights[row], slot.height.bound());
            fold(&mut widths[col], slot.width.bound());
        }
    }

    (heights, widths)
}

fn fold(into: &mut AxisBound, bound: AxisBound) {
    if bound.min != 0 {
        into.min = into.min.max(bound.min);
    }
    if bound.max != 0 {
        into.max = if into.max == 0 {
            bound.max
        } else {
            into.max.min(bound.max)
        };
    }
    if bound.preferred != 0 {
        into.preferred = into.preferred.max(bound.preferred);
    }
    into.grow |= bound.grow;
}
