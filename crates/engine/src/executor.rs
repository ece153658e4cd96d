//! Workflow execution engine.
//!
//! `WorkflowExecutor` is the central orchestrator:
//! 1. Indexes the graph (node lookup, adjacency, in-degrees).
//! 2. Resolves entry points — trigger nodes with no incoming edges.
//! 3. Walks the graph depth-first from each entry point, visiting every
//!    reachable node exactly once and dispatching it through the
//!    [`ExecutorRegistry`].
//! 4. Assembles an [`ExecutionReport`] from the per-node payloads.
//!
//! The walk is synchronous and owns its traversal state exclusively;
//! per-node failures are absorbed into that node's payload, so the only
//! run-level failures are a missing entry point and an expired deadline.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use std::time::{Duration, Instant};

use nodes::{ExecutionContext, ExecutorRegistry, MarketData, NodeConfig, NodeOutput, StaticMarket};
use tracing::{debug, info, instrument, warn};

use crate::graph::GraphIndex;
use crate::models::Workflow;
use crate::report::ExecutionReport;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Tuning knobs for the executor.
#[derive(Debug, Clone, Default)]
pub struct ExecutorConfig {
    /// Upper bound on one run's wall-clock time. The walk's cost is linear
    /// in nodes + edges but has no built-in ceiling; a deadline bounds
    /// pathological graphs. `None` (the default) leaves the walk unbounded.
    pub deadline: Option<Duration>,
}

// ---------------------------------------------------------------------------
// WorkflowExecutor
// ---------------------------------------------------------------------------

/// Stateless orchestrator; one instance can serve any number of concurrent
/// `execute` calls, each of which owns its traversal state exclusively.
pub struct WorkflowExecutor {
    registry: ExecutorRegistry,
    market: Arc<dyn MarketData>,
    config: ExecutorConfig,
}

impl WorkflowExecutor {
    /// Create a new executor.
    pub fn new(registry: ExecutorRegistry, market: Arc<dyn MarketData>, config: ExecutorConfig) -> Self {
        Self {
            registry,
            market,
            config,
        }
    }

    /// Built-in executor registry, static market fixture, no deadline.
    pub fn with_defaults() -> Self {
        Self::new(
            ExecutorRegistry::builtin(),
            Arc::new(StaticMarket::default()),
            ExecutorConfig::default(),
        )
    }

    /// Execute the workflow and return its report.
    ///
    /// Total: every outcome, including the no-entry-point failure, is a
    /// well-formed [`ExecutionReport`], never an `Err` or a panic.
    #[instrument(skip(self, workflow), fields(workflow_id = %workflow.id))]
    pub fn execute(&self, workflow: &Workflow) -> ExecutionReport {
        info!("executing workflow '{}'", workflow.name);

        let index = GraphIndex::build(workflow);
        if index.dangling_edges() > 0 {
            warn!(
                count = index.dangling_edges(),
                "workflow graph contains dangling edges"
            );
        }

        let entry_points = index.entry_points();
        if entry_points.is_empty() {
            warn!("workflow has no runnable trigger nodes");
            return ExecutionReport::failed(workflow.id, "No trigger nodes found in workflow");
        }

        let ctx = ExecutionContext {
            workflow_id: workflow.id,
            market: self.market.as_ref(),
        };

        let mut walk = Traversal {
            index: &index,
            visited: HashSet::new(),
            results: BTreeMap::new(),
            deadline: self.config.deadline.map(|limit| Instant::now() + limit),
            expired: false,
        };

        for entry in entry_points {
            walk.visit(entry, &self.registry, &ctx);
        }

        if walk.expired {
            warn!("execution deadline exceeded, returning partial results");
            return ExecutionReport::deadline_exceeded(workflow.id, walk.results);
        }

        info!(nodes_executed = walk.results.len(), "workflow execution finished");
        ExecutionReport::completed(workflow, walk.results)
    }
}

// ---------------------------------------------------------------------------
// Traversal state — owned by exactly one `execute` call.
// ---------------------------------------------------------------------------

struct Traversal<'g, 'a> {
    index: &'g GraphIndex<'a>,
    visited: HashSet<&'a str>,
    results: BTreeMap<String, NodeOutput>,
    deadline: Option<Instant>,
    expired: bool,
}

impl<'g, 'a> Traversal<'g, 'a> {
    /// Depth-first visit. The visited set makes re-entry idempotent, which
    /// both terminates cycles and collapses diamond convergence to a single
    /// execution per node.
    fn visit(&mut self, node_id: &'a str, registry: &ExecutorRegistry, ctx: &ExecutionContext<'_>) {
        if self.expired {
            return;
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                self.expired = true;
                return;
            }
        }

        if self.visited.contains(node_id) {
            return;
        }

        // Local copy of the shared index reference so the successor slice
        // does not hold a borrow of `self` across the recursive calls.
        let index = self.index;

        let Some(node) = index.node(node_id) else {
            // Defensive: dangling targets are already dropped from the
            // adjacency at index build.
            debug!(node_id, "skipping edge target with no matching node");
            return;
        };

        self.visited.insert(node_id);

        let config = NodeConfig::resolve(node.kind, &node.data.label, &node.data.config)
            .unwrap_or_else(|err| {
                warn!(node_id, error = %err, "node config rejected, executor will degrade");
                NodeConfig::Opaque(node.data.config.clone())
            });

        let executor = registry.resolve(node.kind, &node.data.label);
        let output = executor.execute(&node.data.label, &config, ctx);
        self.results.insert(node_id.to_owned(), output);

        for &next in index.successors(node_id) {
            self.visit(next, registry, ctx);
        }
    }
}
