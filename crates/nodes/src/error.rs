//! Node-level error type.

use thiserror::Error;

use crate::NodeKind;

/// Errors raised while resolving a node's raw configuration into its typed
/// schema.
///
/// These never abort a traversal: the executor layer recovers locally (a
/// condition with unusable config simply does not pass) and the walk
/// continues with sibling and descendant nodes.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The raw config did not match the schema registered for this
    /// (kind, label) pair.
    #[error("config for {kind} node '{label}' does not match its schema: {source}")]
    SchemaMismatch {
        kind: NodeKind,
        label: String,
        #[source]
        source: serde_json::Error,
    },
}
