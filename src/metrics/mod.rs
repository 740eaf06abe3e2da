//! Counters describing how an engine instance has been used.

use serde_json::json;

use crate::logging::{LogEvent, LogFields, LogLevel};

/// Accumulated engine counters, updated as declarations and resolutions
/// happen.
#[derive(Debug, Default, Clone)]
pub struct LayoutMetrics {
    cells: u64,
    docks: u64,
    resolves: u64,
    resizes: u64,
}

impl LayoutMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_cell(&mut self) {
        self.cells = self.cells.saturating_add(1);
    }

    pub(crate) fn record_dock(&mut self) {
        self.docks = self.docks.saturating_add(1);
    }

    pub(crate) fn record_resolve(&mut self) {
        self.resolves = self.resolves.saturating_add(1);
    }

    pub(crate) fn record_resize(&mut self) {
        self.resizes = self.resizes.saturating_add(1);
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            cells: self.cells,
            docks: self.docks,
            resolves: self.resolves,
            resizes: self.resizes,
        }
    }
}

/// Point-in-time copy of the engine counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub cells: u64,
    pub docks: u64,
    pub resolves: u64,
    pub resizes: u64,
}

impl MetricSnapshot {
    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("cells".to_string(), json!(self.cells));
        map.insert("docks".to_string(), json!(self.docks));
        map.insert("resolves".to_string(), json!(self.resolves));
        map.insert("resizes".to_string(), json!(self.resizes));
        map
    }

    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(
            LogLevel::Info,
            target.to_string(),
            "layout_metrics".to_string(),
            self.as_fields(),
        )
    }
}
