//! Node kinds — the first level of executor dispatch.

use serde::{Deserialize, Serialize};

/// The role a node plays in the workflow graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Seeds the traversal; only triggers with no incoming edges qualify
    /// as entry points.
    Trigger,
    /// Evaluates a predicate against market data.
    Condition,
    /// Performs a (mocked) side effect.
    Action,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trigger => write!(f, "trigger"),
            Self::Condition => write!(f, "condition"),
            Self::Action => write!(f, "action"),
        }
    }
}
