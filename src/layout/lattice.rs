use crate::layout::bound::{AxisBound, Cell, PaneId};

/// Per-axis provenance of a slot's bound after span expansion.
///
/// The canonical slot owns a spanning declaration's bound on that axis;
/// shadows are the expansion-internal duplicates spliced in to keep the
/// lattice rectangular. A shadow keeps the divided copy of its owner's
/// bound so distillation can stay a single walk over the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Track {
    Canonical(AxisBound),
    Shadow(AxisBound),
}

impl Track {
    pub(crate) fn bound(self) -> AxisBound {
        match self {
            Track::Canonical(bound) | Track::Shadow(bound) => bound,
        }
    }

    pub(crate) fn is_shadow(self) -> bool {
        matches!(self, Track::Shadow(_))
    }
}

/// One lattice cell. Filler slots carry no pane handle.
///
/// A slot can be canonical on one axis and a shadow on the other, so the
/// two tracks are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Slot {
    pub id: Option<PaneId>,
    pub span_width: u16,
    pub span_height: u16,
    pub width: Track,
    pub height: Track,
}

impl Slot {
    pub(crate) fn filler() -> Self {
        Self {
            id: None,
            span_width: 1,
            span_height: 1,
            width: Track::Canonical(AxisBound::default()),
            height: Track::Canonical(AxisBound::default()),
        }
    }

    pub(crate) fn from_cell(id: PaneId, cell: &Cell) -> Self {
        Self {
            id: Some(id),
            span_width: cell.span_width.max(1),
            span_height: cell.span_height.max(1),
            width: Track::Canonical(cell.width),
            height: Track::Canonical(cell.height),
        }
    }
}

/// Row-major arena of slots indexed by `(row, col)`.
///
/// Rows are only guaranteed to share a length once span expansion has
/// padded the lattice; row mutation rebuilds rows into fresh vectors
/// instead of splicing in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Lattice {
    pub rows: Vec<Vec<Slot>>,
}

impl Lattice {
    pub(crate) fn new(rows: Vec<Vec<Slot>>) -> Self {
        Self { rows }
    }

    /// Number of rows.
    pub(crate) fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, valid once the lattice is rectangular.
    pub(crate) fn width(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Rebuild `row` with `slot` inserted at `at`, shifting the tail right.
pub(crate) fn row_with_insert(row: &[Slot], at: usize, slot: Slot) -> Vec<Slot> {
    let mut next = Vec::with_capacity(row.len() + 1);
    next.extend_from_slice(&row[..at]);
    next.push(slot);
    next.extend_from_slice(&row[at..]);
    next
}

/// Rebuild `row` with `count` copies of `slot` inserted right after `at`.
pub(crate) fn row_with_copies(row: &[Slot], at: usize, slot: Slot, count: usize) -> Vec<Slot> {
    let mut next = Vec::with_capacity(row.len() + count);
    next.extend_from_slice(&row[..=at]);
    next.extend(std::iter::repeat_n(slot, count));
    next.extend_from_slice(&row[at + 1..]);
    next
}
