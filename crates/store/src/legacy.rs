//! Legacy strategy format.
//!
//! The previous generation of this system stored flat "strategies": an
//! owner, a name, and a single price-filter config. These conversions keep
//! the old clients working: exporting collapses a workflow to its first
//! condition node's config, importing wraps a strategy in a one-node
//! workflow.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use engine::{Node, NodeData, Position, Workflow};
use nodes::NodeKind;

use crate::memory::WorkflowDraft;

/// One legacy strategy entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Strategy {
    pub user: String,
    pub name: String,
    /// The raw filter config; shaped like a "Price Filter" condition config
    /// but carried opaquely so arbitrary condition configs survive a
    /// round trip.
    #[serde(default)]
    pub filter: Value,
}

/// The legacy top-level document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StrategiesConfig {
    pub strategies: Vec<Strategy>,
}

/// Export workflows to the legacy shape. Each strategy's filter is the
/// config of the workflow's first condition node, null when there is none.
pub fn to_strategies(workflows: &[Workflow]) -> StrategiesConfig {
    let strategies = workflows
        .iter()
        .map(|workflow| Strategy {
            user: workflow.user_id.clone(),
            name: workflow.name.clone(),
            filter: workflow
                .nodes
                .iter()
                .find(|node| node.kind == NodeKind::Condition)
                .map(|node| node.data.config.clone())
                .unwrap_or(Value::Null),
        })
        .collect();

    StrategiesConfig { strategies }
}

/// Import one legacy strategy as a workflow draft holding a single
/// "Price Filter" condition node.
pub fn workflow_from_strategy(strategy: Strategy) -> WorkflowDraft {
    WorkflowDraft {
        name: strategy.name,
        description: "Migrated from legacy format".to_owned(),
        user_id: strategy.user,
        nodes: vec![Node {
            id: Uuid::new_v4().to_string(),
            kind: NodeKind::Condition,
            position: Position { x: 100.0, y: 100.0 },
            data: NodeData {
                label: "Price Filter".to_owned(),
                config: strategy.filter,
            },
        }],
        edges: vec![],
        is_active: true,
    }
}
