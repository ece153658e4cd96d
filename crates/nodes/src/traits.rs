//! The `NodeExecutor` trait — the contract every node implementation fulfils.

use uuid::Uuid;

use crate::{MarketData, NodeConfig, NodeOutput};

/// Read-only context handed to every executor during one traversal.
///
/// Defined here (in the nodes crate) so both the engine and individual node
/// implementations can import it without a circular dependency.
pub struct ExecutionContext<'a> {
    /// ID of the workflow being executed.
    pub workflow_id: Uuid,
    /// Injected market view consulted by condition executors.
    pub market: &'a dyn MarketData,
}

/// The core node trait.
///
/// Implementations are pure with respect to the workflow: they read the
/// resolved config and the context, and return a payload. They never mutate
/// the node or the graph, and a failed check is data in the payload, not an
/// error.
pub trait NodeExecutor: Send + Sync {
    fn execute(
        &self,
        label: &str,
        config: &NodeConfig,
        ctx: &ExecutionContext<'_>,
    ) -> NodeOutput;
}
