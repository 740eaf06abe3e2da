use serde_json::json;

use crate::error::{Axis, LayoutError, Result};
use crate::layout::allocate::allocate;
use crate::layout::bound::{AxisBound, Cell, Dock, PaneId, PreferenceGroup};
use crate::layout::distill::distill_preferences;
use crate::layout::dock::merge_docks;
use crate::layout::expand::expand_spans;
use crate::layout::lattice::{Lattice, Slot};
use crate::layout::message::{SizeUpdate, build_sizes};
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv};
use crate::metrics::LayoutMetrics;

const LOG_TARGET: &str = "panegrid::layout";

/// Declarative pane grid and its constraint-resolution engine.
///
/// Declarations accumulate through [`add_cell`](Self::add_cell),
/// [`add_dock`](Self::add_dock) and [`wrap`](Self::wrap). The first
/// [`validate`](Self::validate) or [`resize`](Self::resize) expands spans,
/// merges docks and distills per-track preferences, then caches that
/// topology; every later resize only reruns the numeric allocation.
pub struct PaneGrid {
    next_id: u64,
    rows: Vec<Vec<Slot>>,
    docks: Vec<(PaneId, Dock)>,
    width_hint: PreferenceGroup,
    height_hint: PreferenceGroup,
    resolved: Option<Resolved>,
    logger: Option<Logger>,
    metrics: LayoutMetrics,
}

struct Resolved {
    lattice: Lattice,
    heights: PreferenceGroup,
    widths: PreferenceGroup,
}

impl Default for PaneGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl PaneGrid {
    /// Fresh engine with zero declarations.
    pub fn new() -> Self {
        Self {
            next_id: 0,
            rows: vec![Vec::new()],
            docks: Vec::new(),
            width_hint: Vec::new(),
            height_hint: Vec::new(),
            resolved: None,
            logger: None,
            metrics: LayoutMetrics::new(),
        }
    }

    /// Fresh engine with caller-supplied per-column and per-row preference
    /// groups.
    ///
    /// Supplied groups pre-empt distillation track by track; when they are
    /// shorter than the resolved grid the distilled tail fills the gap, and
    /// when longer validation fails with a preference mismatch.
    pub fn with_constraints(widths: PreferenceGroup, heights: PreferenceGroup) -> Self {
        Self {
            width_hint: widths,
            height_hint: heights,
            ..Self::new()
        }
    }

    /// Attach a structured logger for resolution and resize diagnostics.
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Declare a grid cell, appended to the current row.
    ///
    /// When the cell's wrap flag is set a new row is opened afterwards.
    pub fn add_cell(&mut self, cell: Cell) -> PaneId {
        let id = self.next_handle();
        let row = self
            .rows
            .last_mut()
            .expect("builder always keeps an open row");
        row.push(Slot::from_cell(id, &cell));
        if cell.wrap {
            self.rows.push(Vec::new());
        }
        self.metrics.record_cell();
        id
    }

    /// Declare an edge-docked pane.
    pub fn add_dock(&mut self, dock: Dock) -> PaneId {
        let id = self.next_handle();
        self.docks.push((id, dock));
        self.metrics.record_dock();
        id
    }

    /// Unconditionally start a new row.
    pub fn wrap(&mut self) {
        self.rows.push(Vec::new());
    }

    /// Whether the topology has been resolved and cached.
    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// Resolve the declared topology, caching the result.
    ///
    /// Runs span expansion, dock merging and preference distillation once,
    /// then checks every distilled row and column for `min <= max` (when
    /// both are set). Idempotent: once resolved, repeated calls are no-ops.
    pub fn validate(&mut self) -> Result<()> {
        if self.resolved.is_some() {
            return Ok(());
        }

        // A dangling wrap leaves an open empty row behind; it is not a track.
        let mut declared = self.rows.clone();
        while declared.last().is_some_and(Vec::is_empty) {
            declared.pop();
        }

        let lattice = merge_docks(expand_spans(&declared), &self.docks);
        let (distilled_heights, distilled_widths) = distill_preferences(&lattice);
        let heights = extend_hints(self.height_hint.clone(), distilled_heights);
        let widths = extend_hints(self.width_hint.clone(), distilled_widths);

        if heights.len() != lattice.height() {
            return Err(LayoutError::PreferenceMismatch {
                axis: Axis::Row,
                expected: lattice.height(),
                provided: heights.len(),
            });
        }
        if widths.len() != lattice.width() {
            return Err(LayoutError::PreferenceMismatch {
                axis: Axis::Column,
                expected: lattice.width(),
                provided: widths.len(),
            });
        }

        check_group(Axis::Row, &heights)?;
        check_group(Axis::Column, &widths)?;

        if let Some(logger) = &self.logger {
            let event = event_with_fields(
                LogLevel::Debug,
                LOG_TARGET,
                "topology_resolved",
                [
                    json_kv("rows", json!(lattice.height())),
                    json_kv("cols", json!(lattice.width())),
                    json_kv("docks", json!(self.docks.len())),
                ],
            );
            let _ = logger.log_event(event);
        }
        self.metrics.record_resolve();
        self.resolved = Some(Resolved {
            lattice,
            heights,
            widths,
        });
        Ok(())
    }

    /// Re-solve the layout for a new allocated extent.
    ///
    /// Resolves the topology first when needed. A validation failure here is
    /// a workflow fault, callers are expected to have validated at
    /// construction time, so it aborts instead of returning an error; use
    /// [`validate`](Self::validate) for the recoverable pre-flight check.
    ///
    /// # Panics
    ///
    /// Panics when the declared topology fails validation.
    pub fn resize(&mut self, width: u16, height: u16) -> SizeUpdate {
        if let Err(err) = self.validate() {
            panic!("resize on an invalid layout: {err}");
        }
        let resolved = self
            .resolved
            .as_ref()
            .expect("validate caches the resolved topology");

        let heights = allocate(&resolved.heights, height);
        let widths = allocate(&resolved.widths, width);
        let update = build_sizes(&resolved.lattice, &widths, &heights);

        self.metrics.record_resize();
        if let Some(logger) = &self.logger {
            let event = event_with_fields(
                LogLevel::Debug,
                LOG_TARGET,
                "layout_resized",
                [
                    json_kv("width", json!(width)),
                    json_kv("height", json!(height)),
                    json_kv("panes", json!(update.len())),
                ],
            );
            let _ = logger.log_event(event);
        }
        update
    }

    fn next_handle(&mut self) -> PaneId {
        self.next_id += 1;
        PaneId::new(self.next_id).expect("handle counter starts above zero")
    }
}

/// Extend a caller-supplied group with the distilled tail when it is short.
fn extend_hints(mut hints: PreferenceGroup, distilled: PreferenceGroup) -> PreferenceGroup {
    if hints.len() < distilled.len() {
        hints.extend_from_slice(&distilled[hints.len()..]);
    }
    hints
}

fn check_group(axis: Axis, group: &[AxisBound]) -> Result<()> {
    for (index, bound) in group.iter().enumerate() {
        if bound.min > 0 && bound.max > 0 && bound.min > bound.max {
            return Err(LayoutError::ConstraintViolation {
                axis,
                index,
                min: bound.min,
                max: bound.max,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::layout::bound::Cardinal;
    use crate::logging::MemorySink;

    #[test]
    fn single_pane_fills_the_viewport() {
        let mut grid = PaneGrid::new();
        let pane = grid.add_cell(Cell::new());
        let update = grid.resize(10, 10);
        assert_eq!(update.size(pane).unwrap(), Size::new(10, 10));
    }

    #[test]
    fn two_panes_in_a_row_split_the_width() {
        let mut grid = PaneGrid::new();
        let left = grid.add_cell(Cell::new());
        let right = grid.add_cell(Cell::new());
        let update = grid.resize(10, 10);
        assert_eq!(update.size(left).unwrap(), Size::new(5, 10));
        assert_eq!(update.size(right).unwrap(), Size::new(5, 10));
    }

    #[test]
    fn wrapped_panes_split_the_height() {
        let mut grid = PaneGrid::new();
        let top = grid.add_cell(Cell::new());
        grid.wrap();
        let bottom = grid.add_cell(Cell::new());
        let update = grid.resize(10, 10);
        assert_eq!(update.size(top).unwrap(), Size::new(10, 5));
        assert_eq!(update.size(bottom).unwrap(), Size::new(10, 5));
    }

    #[test]
    fn cell_wrap_flag_matches_explicit_wrap() {
        let mut grid = PaneGrid::new();
        let top = grid.add_cell(Cell::new().with_wrap());
        let bottom = grid.add_cell(Cell::new());
        let update = grid.resize(10, 10);
        assert_eq!(update.size(top).unwrap(), Size::new(10, 5));
        assert_eq!(update.size(bottom).unwrap(), Size::new(10, 5));
    }

    // The worked irregular grid: a 2x2 span, a 1x2 span and a 2x1 span mixed
    // with four single cells, resolved at 100x75 into 25-unit tracks.
    #[test]
    fn irregular_spans_resolve_to_even_tracks() {
        let mut grid = PaneGrid::new();
        let one = grid.add_cell(Cell::new());
        let two = grid.add_cell(Cell::new().with_span(2, 2));
        let three = grid.add_cell(Cell::new().with_wrap());
        let four = grid.add_cell(Cell::new().with_span(1, 2));
        let five = grid.add_cell(Cell::new().with_wrap());
        let six = grid.add_cell(Cell::new());
        let seven = grid.add_cell(Cell::new().with_span(2, 1));

        let update = grid.resize(100, 75);
        assert_eq!(update.size(one).unwrap(), Size::new(25, 25));
        assert_eq!(update.size(two).unwrap(), Size::new(50, 50));
        assert_eq!(update.size(three).unwrap(), Size::new(25, 25));
        assert_eq!(update.size(four).unwrap(), Size::new(25, 50));
        assert_eq!(update.size(five).unwrap(), Size::new(25, 25));
        assert_eq!(update.size(six).unwrap(), Size::new(25, 25));
        assert_eq!(update.size(seven).unwrap(), Size::new(50, 25));
    }

    #[test]
    fn conflicting_height_bounds_violate_row_zero() {
        let mut grid = PaneGrid::new();
        grid.add_cell(Cell::new().with_height(AxisBound::at_least(100)));
        grid.add_cell(Cell::new().with_height(AxisBound::at_most(10)));
        assert_eq!(
            grid.validate(),
            Err(LayoutError::ConstraintViolation {
                axis: Axis::Row,
                index: 0,
                min: 100,
                max: 10,
            })
        );
    }

    #[test]
    fn conflicting_width_bounds_violate_column_zero() {
        let mut grid = PaneGrid::new();
        grid.add_cell(Cell::new().with_width(AxisBound::at_least(100)));
        grid.wrap();
        grid.add_cell(Cell::new().with_width(AxisBound::at_most(10)));
        assert_eq!(
            grid.validate(),
            Err(LayoutError::ConstraintViolation {
                axis: Axis::Column,
                index: 0,
                min: 100,
                max: 10,
            })
        );
    }

    #[test]
    fn min_without_max_is_not_a_violation() {
        let mut grid = PaneGrid::new();
        grid.add_cell(Cell::new().with_height(AxisBound::at_least(100)));
        assert_eq!(grid.validate(), Ok(()));
    }

    #[test]
    fn validate_is_idempotent() {
        let mut grid = PaneGrid::new();
        let pane = grid.add_cell(Cell::new());
        assert_eq!(grid.validate(), Ok(()));
        assert_eq!(grid.validate(), Ok(()));
        assert_eq!(grid.metrics().snapshot().resolves, 1);
        assert_eq!(grid.resize(10, 10).size(pane).unwrap(), Size::new(10, 10));
    }

    #[test]
    #[should_panic(expected = "resize on an invalid layout")]
    fn resize_aborts_on_an_invalid_topology() {
        let mut grid = PaneGrid::new();
        grid.add_cell(Cell::new().with_height(AxisBound::new(100, 0, 10)));
        grid.resize(10, 10);
    }

    #[test]
    fn north_dock_takes_its_fixed_height() {
        let mut grid = PaneGrid::new();
        let body = grid.add_cell(Cell::new());
        let bar = grid.add_dock(Dock::new(Cardinal::North, AxisBound::fixed(10)));
        let update = grid.resize(100, 50);
        assert_eq!(update.size(bar).unwrap(), Size::new(100, 10));
        assert_eq!(update.size(body).unwrap(), Size::new(100, 40));
    }

    #[test]
    fn west_dock_takes_its_fixed_width() {
        let mut grid = PaneGrid::new();
        let body = grid.add_cell(Cell::new());
        let nav = grid.add_dock(Dock::new(Cardinal::West, AxisBound::fixed(20)));
        let update = grid.resize(100, 50);
        assert_eq!(update.size(nav).unwrap(), Size::new(20, 50));
        assert_eq!(update.size(body).unwrap(), Size::new(80, 50));
    }

    #[test]
    fn stacked_docks_frame_a_wrapped_body() {
        let mut grid = PaneGrid::new();
        let top_left = grid.add_cell(Cell::new());
        let top_right = grid.add_cell(Cell::new().with_wrap());
        let bottom = grid.add_cell(Cell::new().with_span(2, 1));
        let status = grid.add_dock(Dock::new(Cardinal::South, AxisBound::fixed(2)));
        let side = grid.add_dock(Dock::new(Cardinal::East, AxisBound::fixed(10)));

        let update = grid.resize(90, 42);
        assert_eq!(update.size(side).unwrap(), Size::new(10, 42));
        assert_eq!(update.size(status).unwrap(), Size::new(80, 2));
        assert_eq!(update.size(top_left).unwrap(), Size::new(40, 20));
        assert_eq!(update.size(top_right).unwrap(), Size::new(40, 20));
        assert_eq!(update.size(bottom).unwrap(), Size::new(80, 20));
    }

    #[test]
    fn supplied_constraints_pre_empt_distillation() {
        let mut grid = PaneGrid::with_constraints(
            vec![AxisBound::fixed(30)],
            vec![AxisBound::fixed(7)],
        );
        let pane = grid.add_cell(Cell::new());
        let update = grid.resize(100, 50);
        assert_eq!(update.size(pane).unwrap(), Size::new(30, 7));
    }

    #[test]
    fn short_constraints_extend_with_the_distilled_tail() {
        let mut grid = PaneGrid::with_constraints(vec![AxisBound::fixed(30)], Vec::new());
        let left = grid.add_cell(Cell::new());
        let right = grid.add_cell(Cell::new().with_width(AxisBound::growing()));
        let update = grid.resize(100, 50);
        assert_eq!(update.size(left).unwrap(), Size::new(30, 50));
        assert_eq!(update.size(right).unwrap(), Size::new(70, 50));
    }

    #[test]
    fn excess_constraints_are_a_mismatch() {
        let mut grid =
            PaneGrid::with_constraints(vec![AxisBound::default()], vec![AxisBound::default()]);
        assert_eq!(
            grid.validate(),
            Err(LayoutError::PreferenceMismatch {
                axis: Axis::Row,
                expected: 0,
                provided: 1,
            })
        );
    }

    #[test]
    fn panes_declared_after_resolution_miss() {
        let mut grid = PaneGrid::new();
        let before = grid.add_cell(Cell::new());
        grid.validate().unwrap();
        let after = grid.add_cell(Cell::new());

        let update = grid.resize(10, 10);
        assert_eq!(update.size(before).unwrap(), Size::new(10, 10));
        assert_eq!(update.size(after), Err(LayoutError::NotRegistered));
    }

    #[test]
    fn unknown_handle_misses() {
        let mut probe = PaneGrid::new();
        let foreign = probe.add_cell(Cell::new());

        let mut grid = PaneGrid::new();
        grid.add_cell(Cell::new());
        let update = grid.resize(10, 10);
        assert_eq!(update.size(foreign), Err(LayoutError::NotRegistered));
    }

    #[test]
    fn dangling_wrap_adds_no_row() {
        let mut grid = PaneGrid::new();
        let pane = grid.add_cell(Cell::new().with_wrap());
        let update = grid.resize(10, 10);
        assert_eq!(update.size(pane).unwrap(), Size::new(10, 10));
    }

    #[test]
    fn dock_only_layout_resolves() {
        let mut grid = PaneGrid::new();
        let north = grid.add_dock(Dock::new(Cardinal::North, AxisBound::fixed(3)));
        let south = grid.add_dock(Dock::new(Cardinal::South, AxisBound::growing()));
        let update = grid.resize(80, 24);
        assert_eq!(update.size(north).unwrap(), Size::new(80, 3));
        assert_eq!(update.size(south).unwrap(), Size::new(80, 21));
    }

    #[test]
    fn resize_emits_log_events_and_counts() {
        let sink = MemorySink::new();
        let mut grid = PaneGrid::new().with_logger(Logger::new(sink.clone()));
        grid.add_cell(Cell::new());
        grid.resize(10, 10);
        grid.resize(20, 20);

        let messages: Vec<String> = sink.events().into_iter().map(|e| e.message).collect();
        assert_eq!(
            messages,
            vec!["topology_resolved", "layout_resized", "layout_resized"]
        );
        let snapshot = grid.metrics().snapshot();
        assert_eq!(snapshot.resolves, 1);
        assert_eq!(snapshot.resizes, 2);
    }
}
