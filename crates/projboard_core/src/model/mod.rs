//! Board domain model.
//!
//! # Responsibility
//! - Define the project record shared by every status column.
//!
//! # Invariants
//! - Every project is identified by a `ProjectId` that never changes.
//! - Status is the only partition key between columns.

pub mod project;
