//! Execution report — the caller-facing outcome of one `execute` call.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use nodes::NodeOutput;
use serde::Serialize;
use uuid::Uuid;

use crate::models::Workflow;

/// Overall outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Completed,
    Error,
}

/// Aggregate result of one `execute` call. Immutable after construction;
/// the caller serializes it as-is.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionReport {
    pub workflow_id: Uuid,
    pub status: RunStatus,
    pub message: String,
    /// Taken at report-build time.
    pub timestamp: DateTime<Utc>,
    /// Node id → payload for every node the traversal reached. BTreeMap so
    /// the serialized form is deterministic for a fixed workflow.
    pub results: BTreeMap<String, NodeOutput>,
}

impl ExecutionReport {
    /// Successful run over the full result map.
    pub fn completed(workflow: &Workflow, results: BTreeMap<String, NodeOutput>) -> Self {
        Self {
            workflow_id: workflow.id,
            status: RunStatus::Completed,
            message: format!("Workflow '{}' executed successfully", workflow.name),
            timestamp: Utc::now(),
            results,
        }
    }

    /// Run-level failure with no results (the no-entry-point case).
    pub fn failed(workflow_id: Uuid, message: impl Into<String>) -> Self {
        Self {
            workflow_id,
            status: RunStatus::Error,
            message: message.into(),
            timestamp: Utc::now(),
            results: BTreeMap::new(),
        }
    }

    /// Deadline expiry mid-walk; carries whatever results were gathered
    /// before the walk stopped expanding.
    pub fn deadline_exceeded(workflow_id: Uuid, results: BTreeMap<String, NodeOutput>) -> Self {
        Self {
            workflow_id,
            status: RunStatus::Error,
            message: "execution deadline exceeded".to_owned(),
            timestamp: Utc::now(),
            results,
        }
    }
}
