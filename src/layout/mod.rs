//! Layout module orchestrator following the RSB module specification.
//!
//! Hosts import the declaration and engine types from here while the
//! resolution pipeline (span expansion, dock merging, preference
//! distillation, track allocation) lives in private submodules.

mod allocate;
mod bound;
mod core;
mod distill;
mod dock;
mod expand;
mod lattice;
mod message;

pub use self::allocate::allocate;
pub use self::bound::{AxisBound, Cardinal, Cell, Dock, PaneId, PreferenceGroup};
pub use self::core::PaneGrid;
pub use self::message::SizeUpdate;
