//! Drop planning: from a finished drag to a store move request.

use crate::drag::payload::DragPayload;
use crate::drag::position::TargetBounds;
use crate::model::project::{ProjectId, ProjectStatus};
use crate::state::project_store::{MoveOutcome, Placement, ProjectStore, StoreResult};

/// What the pointer was over when the drag ended.
#[derive(Debug, Clone, PartialEq)]
pub enum DropTarget {
    /// Empty area of a status list.
    List,
    /// A project card inside the list.
    Item { id: ProjectId, bounds: TargetBounds },
}

/// Move the UI layer issues for one drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    pub project_id: ProjectId,
    pub status: ProjectStatus,
    pub placement: Option<Placement>,
}

impl MoveRequest {
    pub fn apply(self, store: &mut ProjectStore) -> StoreResult<MoveOutcome> {
        store.move_project(&self.project_id, self.status, self.placement)
    }
}

/// Builds the move for a drop on the list rendering `list_status`.
///
/// `pointer_y` is the pointer position at drop time. Item drops resolve
/// their position from the dragged item's estimated top edge.
pub fn plan_drop(
    payload: &DragPayload,
    pointer_y: f64,
    list_status: ProjectStatus,
    target: DropTarget,
) -> MoveRequest {
    let placement = match target {
        DropTarget::List => None,
        DropTarget::Item { id, bounds } => {
            let position = bounds.resolve(payload.estimated_top(pointer_y));
            Some(Placement::new(id, position))
        }
    };

    MoveRequest {
        project_id: payload.project_id.clone(),
        status: list_status,
        placement,
    }
}

#[cfg(test)]
mod tests {
    use super::{plan_drop, DropTarget};
    use crate::drag::payload::DragPayload;
    use crate::drag::position::{DropPosition, TargetBounds};
    use crate::model::project::ProjectStatus;

    #[test]
    fn list_drop_has_no_placement() {
        let payload = DragPayload::capture("p1", 0.0, 5.0);
        let request = plan_drop(&payload, 300.0, ProjectStatus::Finished, DropTarget::List);
        assert_eq!(request.project_id, "p1");
        assert_eq!(request.status, ProjectStatus::Finished);
        assert!(request.placement.is_none());
    }

    #[test]
    fn item_drop_uses_estimated_top_not_pointer() {
        // Pointer at 130 is past the midpoint (120), but the item top is at 110.
        let payload = DragPayload::capture("p1", 50.0, 70.0);
        let target = DropTarget::Item {
            id: "p2".to_string(),
            bounds: TargetBounds::new(100.0, 40.0),
        };
        let request = plan_drop(&payload, 130.0, ProjectStatus::Active, target);
        let placement = request.placement.unwrap();
        assert_eq!(placement.target_id, "p2");
        assert_eq!(placement.position, DropPosition::Above);
    }
}
