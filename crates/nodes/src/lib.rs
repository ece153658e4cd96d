//! `nodes` crate — the `NodeExecutor` trait, typed node configuration, and
//! the built-in trigger/condition/action implementations.
//!
//! The engine crate dispatches node execution through [`ExecutorRegistry`]:
//! first by [`NodeKind`], then by the node's label, falling back to a
//! per-kind default so unrecognized labels degrade gracefully instead of
//! failing the run.

pub mod actions;
pub mod conditions;
pub mod config;
pub mod error;
pub mod kind;
pub mod market;
pub mod mock;
pub mod output;
pub mod registry;
pub mod traits;
pub mod triggers;

pub use config::NodeConfig;
pub use error::ConfigError;
pub use kind::NodeKind;
pub use market::{MarketData, StaticMarket};
pub use output::NodeOutput;
pub use registry::ExecutorRegistry;
pub use traits::{ExecutionContext, NodeExecutor};
