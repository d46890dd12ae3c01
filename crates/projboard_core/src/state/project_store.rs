//! Project store with observer notification and drag reordering.
//!
//! # Responsibility
//! - Hold the single ordered project sequence of one running board.
//! - Apply add/move mutations and notify listeners once per mutation.
//!
//! # Invariants
//! - Ids are unique; insert paths reject duplicates before mutating.
//! - Failed operations leave the sequence untouched and notify nobody.
//! - Listeners are called in registration order, each with its own clone.

use crate::drag::position::DropPosition;
use crate::model::project::{generate_project_id, Project, ProjectId, ProjectStatus};
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::sync::{Mutex, PoisonError};

pub type StoreResult<T> = Result<T, StoreError>;

/// Observer invoked with a snapshot after every store change.
pub type Listener = Box<dyn FnMut(Vec<Project>) + Send>;

static GLOBAL_STORE: Lazy<Mutex<ProjectStore>> = Lazy::new(|| Mutex::new(ProjectStore::new()));

/// Store mutation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A caller-supplied id is already present.
    DuplicateId(ProjectId),
    /// The placement target of a move does not exist.
    TargetNotFound(ProjectId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "project id already exists: {id}"),
            Self::TargetNotFound(id) => write!(f, "move target not found: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Result of a move that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The moved project exists; status (and maybe order) was applied and
    /// listeners were notified.
    Moved,
    /// No project has the moved id. Nothing changed.
    NotFound,
}

/// Reorder request attached to a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub target_id: ProjectId,
    pub position: DropPosition,
}

impl Placement {
    pub fn new(target_id: impl Into<ProjectId>, position: DropPosition) -> Self {
        Self {
            target_id: target_id.into(),
            position,
        }
    }

    pub fn above(target_id: impl Into<ProjectId>) -> Self {
        Self::new(target_id, DropPosition::Above)
    }

    pub fn below(target_id: impl Into<ProjectId>) -> Self {
        Self::new(target_id, DropPosition::Below)
    }
}

/// Ordered in-memory project store.
///
/// Construct one per board with [`ProjectStore::new`] and hand it to the
/// composition root. [`global`] exists for callers that need a
/// process-wide instance.
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<Listener>,
}

impl Debug for ProjectStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectStore")
            .field("projects", &self.projects)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer. Duplicates are not detected.
    pub fn add_listener<F>(&mut self, listener: F)
    where
        F: FnMut(Vec<Project>) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Appends a new project and notifies listeners.
    ///
    /// Field values are stored as given; input validation belongs to the
    /// caller. A random id is generated when `id` is `None`.
    ///
    /// # Errors
    /// - `DuplicateId` when `id` is already present. Nothing is mutated.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
        status: ProjectStatus,
        id: Option<ProjectId>,
    ) -> StoreResult<ProjectId> {
        let id = match id {
            Some(id) if self.contains(&id) => {
                warn!("event=project_add_rejected module=store status=error reason=duplicate_id id={id}");
                return Err(StoreError::DuplicateId(id));
            }
            Some(id) => id,
            None => self.fresh_id(),
        };

        Ok(self.append(Project::with_id(id, title, description, people, status)))
    }

    /// Appends an `Active` project with a generated id.
    pub fn add_active_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let id = self.fresh_id();
        self.append(Project::with_id(
            id,
            title,
            description,
            people,
            ProjectStatus::Active,
        ))
    }

    /// Sets the status of `moved_id` and optionally repositions it next to
    /// a target project.
    ///
    /// With a placement whose target differs from the moved project, the
    /// moved project ends up immediately before (`Above`) or after
    /// (`Below`) the target. Listeners are notified exactly once when the
    /// moved project exists.
    ///
    /// # Errors
    /// - `TargetNotFound` when the placement target is unknown. Nothing is
    ///   mutated, status included.
    pub fn move_project(
        &mut self,
        moved_id: &str,
        status: ProjectStatus,
        placement: Option<Placement>,
    ) -> StoreResult<MoveOutcome> {
        let Some(moved_index) = self.index_of(moved_id) else {
            debug!("event=project_move_skipped module=store status=ok reason=not_found id={moved_id}");
            return Ok(MoveOutcome::NotFound);
        };

        let target = match placement {
            Some(placement) => match self.index_of(&placement.target_id) {
                Some(target_index) => Some((target_index, placement.position)),
                None => {
                    warn!(
                        "event=project_move_rejected module=store status=error reason=target_not_found id={} target={}",
                        moved_id, placement.target_id
                    );
                    return Err(StoreError::TargetNotFound(placement.target_id));
                }
            },
            None => None,
        };

        self.projects[moved_index].status = status;

        let mut repositioned = false;
        if let Some((target_index, position)) = target {
            if target_index != moved_index {
                self.reposition(moved_index, target_index, position);
                repositioned = true;
            }
        }

        info!(
            "event=project_moved module=store status=ok id={} to={} repositioned={}",
            moved_id,
            status.as_str(),
            repositioned
        );
        self.notify_listeners();
        Ok(MoveOutcome::Moved)
    }

    /// Current ordered sequence.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Owned copy of the current ordered sequence.
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.clone()
    }

    /// Projects with `status`, in store order.
    pub fn projects_with_status(&self, status: ProjectStatus) -> Vec<Project> {
        self.projects
            .iter()
            .filter(|project| project.status == status)
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn append(&mut self, project: Project) -> ProjectId {
        let id = project.id.clone();
        self.projects.push(project);
        info!(
            "event=project_added module=store status=ok id={} listeners={}",
            id,
            self.listeners.len()
        );
        self.notify_listeners();
        id
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.projects.iter().position(|project| project.id == id)
    }

    fn fresh_id(&self) -> ProjectId {
        let mut id = generate_project_id();
        while self.contains(&id) {
            id = generate_project_id();
        }
        id
    }

    // `target_index` is taken before removal; shift it when the moved
    // project sat in front of the target.
    fn reposition(&mut self, moved_index: usize, target_index: usize, position: DropPosition) {
        let moved = self.projects.remove(moved_index);
        let target_index = if target_index > moved_index {
            target_index - 1
        } else {
            target_index
        };
        let insert_at = match position {
            DropPosition::Above => target_index,
            DropPosition::Below => target_index + 1,
        };
        self.projects.insert(insert_at, moved);
    }

    fn notify_listeners(&mut self) {
        for listener in self.listeners.iter_mut() {
            listener(self.projects.clone());
        }
    }
}

/// Returns the process-wide store, creating it on first call.
///
/// Listeners registered here must not lock the global store again while
/// being notified.
pub fn global() -> &'static Mutex<ProjectStore> {
    &GLOBAL_STORE
}

/// Runs `f` with exclusive access to the process-wide store.
///
/// A poisoned lock is recovered: mutations validate before touching the
/// sequence, so a panicking listener cannot leave it half-updated.
pub fn with_global<T>(f: impl FnOnce(&mut ProjectStore) -> T) -> T {
    let mut guard = GLOBAL_STORE.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

#[cfg(test)]
mod tests {
    use super::{MoveOutcome, Placement, ProjectStore, StoreError};
    use crate::model::project::ProjectStatus;

    fn store_with(ids: &[&str]) -> ProjectStore {
        let mut store = ProjectStore::new();
        for id in ids {
            store
                .add_project(*id, "desc", 1, ProjectStatus::Active, Some(id.to_string()))
                .unwrap();
        }
        store
    }

    fn order(store: &ProjectStore) -> Vec<&str> {
        store.projects().iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn move_down_inserts_relative_to_target_after_removal() {
        let mut store = store_with(&["A", "B", "C"]);
        store
            .move_project("A", ProjectStatus::Active, Some(Placement::below("B")))
            .unwrap();
        assert_eq!(order(&store), ["B", "A", "C"]);

        let mut store = store_with(&["A", "B", "C"]);
        store
            .move_project("A", ProjectStatus::Active, Some(Placement::above("C")))
            .unwrap();
        assert_eq!(order(&store), ["B", "A", "C"]);
    }

    #[test]
    fn move_up_below_target() {
        let mut store = store_with(&["A", "B", "C"]);
        store
            .move_project("C", ProjectStatus::Active, Some(Placement::below("A")))
            .unwrap();
        assert_eq!(order(&store), ["A", "C", "B"]);
    }

    #[test]
    fn move_onto_itself_only_changes_status() {
        let mut store = store_with(&["A", "B"]);
        let outcome = store
            .move_project("B", ProjectStatus::Finished, Some(Placement::above("B")))
            .unwrap();
        assert_eq!(outcome, MoveOutcome::Moved);
        assert_eq!(order(&store), ["A", "B"]);
        assert_eq!(store.get("B").unwrap().status, ProjectStatus::Finished);
    }

    #[test]
    fn unknown_target_is_rejected_without_status_change() {
        let mut store = store_with(&["A", "B"]);
        let err = store
            .move_project("A", ProjectStatus::Finished, Some(Placement::above("zzz")))
            .unwrap_err();
        assert_eq!(err, StoreError::TargetNotFound("zzz".to_string()));
        assert_eq!(order(&store), ["A", "B"]);
        assert_eq!(store.get("A").unwrap().status, ProjectStatus::Active);
    }

    #[test]
    fn projects_with_status_keeps_store_order() {
        let mut store = store_with(&["A", "B", "C"]);
        store.move_project("C", ProjectStatus::Finished, None).unwrap();
        store.move_project("A", ProjectStatus::Finished, None).unwrap();
        let finished: Vec<String> = store
            .projects_with_status(ProjectStatus::Finished)
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(finished, ["A", "C"]);
    }
}
