use std::fmt;
use std::num::NonZeroU64;

/// Opaque handle for a declared pane.
///
/// Handles are assigned in declaration order starting at 1 and stay unique
/// for the lifetime of one engine instance. Filler slots inside the lattice
/// carry no handle at all, so callers can never observe one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PaneId(NonZeroU64);

impl PaneId {
    pub(crate) fn new(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(Self)
    }

    /// Raw numeric value of the handle.
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One axis worth of size preferences: minimum, preferred, maximum, grow.
///
/// A zero extent means "no bound of that kind". `grow` marks the axis as
/// eligible to absorb leftover space after every bounded track is satisfied.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AxisBound {
    pub min: u16,
    pub preferred: u16,
    pub max: u16,
    pub grow: bool,
}

impl AxisBound {
    pub const fn new(min: u16, preferred: u16, max: u16) -> Self {
        Self {
            min,
            preferred,
            max,
            grow: false,
        }
    }

    /// Lower bound only.
    pub const fn at_least(min: u16) -> Self {
        Self::new(min, 0, 0)
    }

    /// Upper bound only.
    pub const fn at_most(max: u16) -> Self {
        Self::new(0, 0, max)
    }

    /// Preferred extent only.
    pub const fn preferring(preferred: u16) -> Self {
        Self::new(0, preferred, 0)
    }

    /// All three extents pinned to the same value.
    pub const fn fixed(extent: u16) -> Self {
        Self::new(extent, extent, extent)
    }

    /// Unbounded axis that absorbs leftover space.
    pub const fn growing() -> Self {
        Self {
            min: 0,
            preferred: 0,
            max: 0,
            grow: true,
        }
    }

    pub const fn with_min(mut self, min: u16) -> Self {
        self.min = min;
        self
    }

    pub const fn with_preferred(mut self, preferred: u16) -> Self {
        self.preferred = preferred;
        self
    }

    pub const fn with_max(mut self, max: u16) -> Self {
        self.max = max;
        self
    }

    pub const fn with_grow(mut self, grow: bool) -> Self {
        self.grow = grow;
        self
    }

    /// Divide every declared extent by `span`, discarding the remainder.
    ///
    /// Span expansion uses this to split one spanning declaration into
    /// per-track shares; the up-to-`span - 1` units lost to integer division
    /// are an accepted approximation, not corrected by later passes.
    pub(crate) fn divided(self, span: u16) -> Self {
        let span = span.max(1);
        Self {
            min: self.min / span,
            preferred: self.preferred / span,
            max: self.max / span,
            grow: self.grow,
        }
    }
}

/// Per-row or per-column sequence of distilled bounds fed to the allocator.
pub type PreferenceGroup = Vec<AxisBound>;

/// Edge of the layout a dock is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinal {
    North,
    South,
    East,
    West,
}

/// A declared grid region with optional spans and per-axis bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Number of columns the pane occupies. Zero is treated as 1.
    pub span_width: u16,
    /// Number of rows the pane occupies. Zero is treated as 1.
    pub span_height: u16,
    pub width: AxisBound,
    pub height: AxisBound,
    /// Start a new row after this cell.
    pub wrap: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            span_width: 1,
            span_height: 1,
            width: AxisBound::default(),
            height: AxisBound::default(),
            wrap: false,
        }
    }
}

impl Cell {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_span(mut self, width: u16, height: u16) -> Self {
        self.span_width = width;
        self.span_height = height;
        self
    }

    pub const fn with_width(mut self, width: AxisBound) -> Self {
        self.width = width;
        self
    }

    pub const fn with_height(mut self, height: AxisBound) -> Self {
        self.height = height;
        self
    }

    pub const fn with_wrap(mut self) -> Self {
        self.wrap = true;
        self
    }
}

/// A pane pinned to one edge of the layout, spanning that edge fully.
///
/// The bound governs the dock's thickness: height for north/south docks,
/// width for east/west docks. The other axis always spans the full extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dock {
    pub cardinal: Cardinal,
    pub bound: AxisBound,
}

impl Dock {
    pub const fn new(cardinal: Cardinal, bound: AxisBound) -> Self {
        Self { cardinal, bound }
    }
}
