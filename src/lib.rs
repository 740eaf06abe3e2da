//! panegrid: constraint-driven pane layout for terminal grids.
//!
//! Panes are declared as grid cells (optionally spanning several columns or
//! rows) and edge docks, each carrying independent width and height bounds.
//! The [`PaneGrid`] engine resolves those declarations once into per-track
//! preference groups, then turns every terminal resize into an integer size
//! per pane.
//!
//! ```
//! use panegrid::{Cell, PaneGrid};
//!
//! let mut grid = PaneGrid::new();
//! let left = grid.add_cell(Cell::new());
//! let right = grid.add_cell(Cell::new());
//! let sizes = grid.resize(80, 24);
//! assert_eq!(sizes.size(left).unwrap().width, 40);
//! assert_eq!(sizes.size(right).unwrap().width, 40);
//! ```

pub mod error;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod metrics;

pub use error::{Axis, LayoutError, Result};
pub use geometry::Size;
pub use layout::{
    AxisBound, Cardinal, Cell, Dock, PaneGrid, PaneId, PreferenceGroup, SizeUpdate, allocate,
};
pub use logging::{FileSink, LogEvent, LogLevel, LogSink, Logger, MemorySink};
pub use metrics::{LayoutMetrics, MetricSnapshot};
