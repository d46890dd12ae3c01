//! Board state management.
//!
//! # Responsibility
//! - Own the ordered project sequence and broadcast changes to observers.
//!
//! # Invariants
//! - Each project id appears at most once in the sequence.
//! - Listeners receive owned snapshots, never references into the store.

pub mod project_store;
