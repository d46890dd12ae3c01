//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical tracked-work record and its status partition.
//! - Provide small display helpers used by list renderers.
//!
//! # Invariants
//! - `id` is assigned at construction and never reassigned.
//! - Only the store mutates `status`; UI code holds cloned snapshots.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a project.
///
/// Kept as a string alias because ids may come from outside the store
/// (import paths) and are not required to be UUIDs.
pub type ProjectId = String;

/// Column a project is rendered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work in progress. Default for new projects.
    #[default]
    Active,
    /// Work completed.
    Finished,
}

impl ProjectStatus {
    /// Lower-case name used in list ids and headings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

/// One unit of tracked work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Number of people assigned.
    pub people: u32,
    pub status: ProjectStatus,
}

impl Project {
    /// Creates a project with a generated random id.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
        status: ProjectStatus,
    ) -> Self {
        Self::with_id(generate_project_id(), title, description, people, status)
    }

    /// Creates a project with a caller-provided id.
    ///
    /// Does not check the id for uniqueness; the store does that on insert.
    pub fn with_id(
        id: impl Into<ProjectId>,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
        status: ProjectStatus,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            people,
            status,
        }
    }

    /// Returns `"person"` for a single assignee and `"people"` otherwise.
    pub fn people_label(&self) -> &'static str {
        if self.people > 1 {
            "people"
        } else {
            "person"
        }
    }

    /// Returns the assignment line shown under a project card.
    pub fn assigned_summary(&self) -> String {
        format!("{} {} assigned", self.people, self.people_label())
    }
}

/// Generates a fresh random project id (UUID v4, hyphenated).
pub fn generate_project_id() -> ProjectId {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::{Project, ProjectStatus};

    #[test]
    fn people_label_is_singular_for_one_or_zero() {
        let one = Project::with_id("a", "t", "d", 1, ProjectStatus::Active);
        let zero = Project::with_id("b", "t", "d", 0, ProjectStatus::Active);
        assert_eq!(one.people_label(), "person");
        assert_eq!(zero.people_label(), "person");
    }

    #[test]
    fn assigned_summary_uses_plural_label() {
        let project = Project::with_id("a", "t", "d", 3, ProjectStatus::Finished);
        assert_eq!(project.assigned_summary(), "3 people assigned");
    }

    #[test]
    fn default_status_is_active() {
        assert_eq!(ProjectStatus::default(), ProjectStatus::Active);
        assert_eq!(ProjectStatus::Finished.as_str(), "finished");
    }
}
