//! `engine` crate — core domain models, graph indexing, and the traversal
//! engine that turns a workflow definition into an execution report.

pub mod executor;
pub mod graph;
pub mod models;
pub mod report;

pub use executor::{ExecutorConfig, WorkflowExecutor};
pub use graph::GraphIndex;
pub use models::{Edge, Node, NodeData, Position, Workflow};
pub use nodes::NodeKind;
pub use report::{ExecutionReport, RunStatus};

#[cfg(test)]
mod executor_tests;
