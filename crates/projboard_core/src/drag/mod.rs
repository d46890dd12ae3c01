//! Drag-and-drop geometry and transfer data.
//!
//! # Responsibility
//! - Resolve where a dragged project lands relative to a drop target.
//! - Encode/decode the data carried from drag start to drop.
//! - Translate a drop into a store move request.
//!
//! # Invariants
//! - Everything here is pure; only `MoveRequest::apply` touches the store.

pub mod payload;
pub mod planner;
pub mod position;
