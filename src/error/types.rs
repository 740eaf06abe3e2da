use std::fmt;

use thiserror::Error;

/// Unified result type for the panegrid crate.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Axis a distilled preference entry belongs to.
///
/// Rows constrain heights, columns constrain widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

/// Errors surfaced by the layout engine.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// A distilled row or column declares a minimum above its maximum.
    #[error("constraint violation: {axis} {index}: min {min} exceeds max {max}")]
    ConstraintViolation {
        axis: Axis,
        index: usize,
        min: u16,
        max: u16,
    },
    /// A caller-supplied preference group does not match the resolved grid.
    #[error(
        "{axis} preferences do not match the resolved grid: {expected} tracks, {provided} provided"
    )]
    PreferenceMismatch {
        axis: Axis,
        expected: usize,
        provided: usize,
    },
    /// The queried pane is not part of the resolved layout.
    #[error("pane not registered")]
    NotRegistered,
}
