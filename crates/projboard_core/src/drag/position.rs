//! Drop-position resolution.

use serde::{Deserialize, Serialize};

/// Where a dragged project is inserted relative to the drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropPosition {
    Above,
    Below,
}

/// Vertical extent of a drop target, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetBounds {
    pub top: f64,
    pub height: f64,
}

impl TargetBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Vertical midpoint of the target.
    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// Resolves the drop position for a dragged item whose top edge is at
    /// `dragged_top`.
    pub fn resolve(&self, dragged_top: f64) -> DropPosition {
        resolve_drop_position(self.top, self.height, dragged_top)
    }
}

/// Maps drop geometry to a placement decision.
///
/// The midpoint is inclusive on the `Above` side. A dragged top edge above
/// the target clamps to `Above`.
pub fn resolve_drop_position(
    target_top: f64,
    target_height: f64,
    dragged_top: f64,
) -> DropPosition {
    if dragged_top < target_top {
        return DropPosition::Above;
    }
    let midpoint = target_top + target_height / 2.0;
    if dragged_top > midpoint {
        DropPosition::Below
    } else {
        DropPosition::Above
    }
}
