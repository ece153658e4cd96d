//! In-memory workflow storage.
//!
//! A `RwLock`-guarded map keyed by workflow id. Reads hand out owned
//! clones, so a workflow being executed is an immutable snapshot — a
//! concurrent update or delete never mutates a definition mid-traversal.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use engine::{Edge, Node, Workflow};

use crate::StoreError;

/// A workflow definition as submitted by a client: everything but the
/// server-assigned identity and timestamps.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub is_active: bool,
}

/// Thread-safe in-memory workflow repository.
#[derive(Debug, Default)]
pub struct WorkflowStore {
    workflows: RwLock<HashMap<Uuid, Workflow>>,
}

impl WorkflowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist a new workflow: assigns a fresh id, stamps both timestamps,
    /// and defaults a missing owner to "anonymous".
    pub fn create(&self, draft: WorkflowDraft) -> Workflow {
        let now = Utc::now();
        let workflow = Workflow {
            id: Uuid::new_v4(),
            name: draft.name,
            description: draft.description,
            user_id: normalize_owner(draft.user_id),
            nodes: draft.nodes,
            edges: draft.edges,
            is_active: draft.is_active,
            created_at: now,
            updated_at: now,
        };

        debug!(workflow_id = %workflow.id, "storing workflow");
        self.write().insert(workflow.id, workflow.clone());
        workflow
    }

    /// Fetch an owned snapshot of a workflow.
    pub fn get(&self, id: Uuid) -> Result<Workflow, StoreError> {
        self.read().get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    /// Replace a workflow's definition, preserving its identity and
    /// creation time and refreshing `updated_at`.
    pub fn update(&self, id: Uuid, draft: WorkflowDraft) -> Result<Workflow, StoreError> {
        let mut workflows = self.write();
        let existing = workflows.get(&id).ok_or(StoreError::NotFound(id))?;

        let workflow = Workflow {
            id,
            name: draft.name,
            description: draft.description,
            user_id: normalize_owner(draft.user_id),
            nodes: draft.nodes,
            edges: draft.edges,
            is_active: draft.is_active,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        workflows.insert(id, workflow.clone());
        Ok(workflow)
    }

    pub fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        debug!(workflow_id = %id, "deleting workflow");
        self.write()
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    /// All workflows owned by `user_id`, oldest first.
    pub fn list_for_user(&self, user_id: &str) -> Vec<Workflow> {
        let mut workflows: Vec<Workflow> = self
            .read()
            .values()
            .filter(|workflow| workflow.user_id == user_id)
            .cloned()
            .collect();
        workflows.sort_by_key(|workflow| workflow.created_at);
        workflows
    }

    /// Every stored workflow, oldest first.
    pub fn list_all(&self) -> Vec<Workflow> {
        let mut workflows: Vec<Workflow> = self.read().values().cloned().collect();
        workflows.sort_by_key(|workflow| workflow.created_at);
        workflows
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<Uuid, Workflow>> {
        self.workflows.read().expect("workflow store lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<Uuid, Workflow>> {
        self.workflows.write().expect("workflow store lock poisoned")
    }
}

fn normalize_owner(user_id: String) -> String {
    if user_id.is_empty() {
        "anonymous".to_owned()
    } else {
        user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, user_id: &str) -> WorkflowDraft {
        WorkflowDraft {
            name: name.to_owned(),
            user_id: user_id.to_owned(),
            is_active: true,
            ..WorkflowDraft::default()
        }
    }

    #[test]
    fn create_then_get_round_trips() {
        let store = WorkflowStore::new();
        let created = store.create(draft("sniper", "alice"));

        let fetched = store.get(created.id).expect("stored workflow");
        assert_eq!(fetched.name, "sniper");
        assert_eq!(fetched.user_id, "alice");
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[test]
    fn missing_owner_defaults_to_anonymous() {
        let store = WorkflowStore::new();
        let created = store.create(draft("unowned", ""));
        assert_eq!(created.user_id, "anonymous");
    }

    #[test]
    fn update_preserves_identity_and_creation_time() {
        let store = WorkflowStore::new();
        let created = store.create(draft("v1", "alice"));

        let updated = store
            .update(created.id, draft("v2", "alice"))
            .expect("workflow exists");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.name, "v2");
        assert!(updated.updated_at >= created.updated_at);
    }

    #[test]
    fn update_of_unknown_id_is_not_found() {
        let store = WorkflowStore::new();
        let err = store
            .update(Uuid::new_v4(), draft("ghost", "alice"))
            .expect_err("nothing stored");
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn delete_removes_the_workflow() {
        let store = WorkflowStore::new();
        let created = store.create(draft("doomed", "alice"));

        store.delete(created.id).expect("workflow exists");
        assert!(matches!(
            store.get(created.id),
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.delete(created.id),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn list_for_user_filters_by_owner() {
        let store = WorkflowStore::new();
        store.create(draft("a1", "alice"));
        store.create(draft("b1", "bob"));
        store.create(draft("a2", "alice"));

        let names: Vec<String> = store
            .list_for_user("alice")
            .into_iter()
            .map(|workflow| workflow.name)
            .collect();
        assert_eq!(names, ["a1", "a2"]);
    }
}
