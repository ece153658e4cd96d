//! `RecordingExecutor` — a test double for `NodeExecutor`.
//!
//! Records every call it receives (into its own journal or one shared
//! between several executors) so tests can assert execution counts and
//! visit order.

use std::sync::{Arc, Mutex};

use crate::{ExecutionContext, NodeConfig, NodeExecutor, NodeOutput};

/// A mock executor that appends its name to a journal on every call and
/// returns a fixed payload.
pub struct RecordingExecutor {
    name: String,
    output: NodeOutput,
    journal: Arc<Mutex<Vec<String>>>,
}

impl RecordingExecutor {
    /// A mock with its own private journal.
    pub fn returning(name: impl Into<String>, output: NodeOutput) -> Self {
        Self::with_journal(name, output, Arc::new(Mutex::new(Vec::new())))
    }

    /// A mock appending to a journal shared with other executors, for
    /// asserting the relative order of visits.
    pub fn with_journal(
        name: impl Into<String>,
        output: NodeOutput,
        journal: Arc<Mutex<Vec<String>>>,
    ) -> Self {
        Self {
            name: name.into(),
            output,
            journal,
        }
    }

    /// Number of times this executor has run.
    pub fn call_count(&self) -> usize {
        self.journal
            .lock()
            .unwrap()
            .iter()
            .filter(|entry| entry.as_str() == self.name)
            .count()
    }
}

impl NodeExecutor for RecordingExecutor {
    fn execute(
        &self,
        _label: &str,
        _config: &NodeConfig,
        _ctx: &ExecutionContext<'_>,
    ) -> NodeOutput {
        self.journal.lock().unwrap().push(self.name.clone());
        self.output.clone()
    }
}
