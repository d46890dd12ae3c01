//! Core state for the project-tracking board.
//! This crate owns the project sequence and every ordering rule.

pub mod drag;
pub mod logging;
pub mod model;
pub mod state;

pub use drag::payload::{DragPayload, PayloadError};
pub use drag::planner::{plan_drop, DropTarget, MoveRequest};
pub use drag::position::{resolve_drop_position, DropPosition, TargetBounds};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::project::{generate_project_id, Project, ProjectId, ProjectStatus};
pub use state::project_store::{
    global, with_global, Listener, MoveOutcome, Placement, ProjectStore, StoreError, StoreResult,
};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
