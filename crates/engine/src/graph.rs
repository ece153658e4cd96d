//! Graph index and entry resolution.
//!
//! Builds the per-execution lookup structures from a workflow's node and
//! edge sequences: node-by-id map, adjacency (source → targets in edge-list
//! order), and in-degree counts. The build is total: duplicate edges
//! accumulate, and edges referencing unknown node ids are counted and
//! logged as dangling rather than failing anything.

use std::collections::HashMap;

use nodes::NodeKind;
use tracing::warn;

use crate::models::{Node, Workflow};

/// Per-execution graph lookup, borrowing from the workflow for the duration
/// of one traversal.
pub struct GraphIndex<'a> {
    sequence: &'a [Node],
    by_id: HashMap<&'a str, &'a Node>,
    adjacency: HashMap<&'a str, Vec<&'a str>>,
    in_degree: HashMap<&'a str, usize>,
    dangling_edges: usize,
}

impl<'a> GraphIndex<'a> {
    /// Index the workflow's nodes and edges.
    pub fn build(workflow: &'a Workflow) -> Self {
        let mut by_id: HashMap<&str, &Node> = HashMap::with_capacity(workflow.nodes.len());
        for node in &workflow.nodes {
            by_id.insert(node.id.as_str(), node);
        }

        let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
        let mut in_degree: HashMap<&str, usize> = HashMap::new();
        let mut dangling_edges = 0;

        for edge in &workflow.edges {
            let source_known = by_id.contains_key(edge.source.as_str());
            let target_known = by_id.contains_key(edge.target.as_str());

            if !source_known || !target_known {
                dangling_edges += 1;
                warn!(
                    edge = %edge.id,
                    source = %edge.source,
                    target = %edge.target,
                    "edge references a node missing from the workflow"
                );
            }

            // An edge into a known node suppresses that node's entry
            // eligibility even when the source side dangles.
            if target_known {
                *in_degree.entry(edge.target.as_str()).or_insert(0) += 1;
                if source_known {
                    adjacency
                        .entry(edge.source.as_str())
                        .or_default()
                        .push(edge.target.as_str());
                }
            }
        }

        Self {
            sequence: &workflow.nodes,
            by_id,
            adjacency,
            in_degree,
            dangling_edges,
        }
    }

    pub fn node(&self, id: &str) -> Option<&'a Node> {
        self.by_id.get(id).copied()
    }

    /// Outgoing edge targets of `id`, in edge-list order.
    pub fn successors(&self, id: &str) -> &[&'a str] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn in_degree(&self, id: &str) -> usize {
        self.in_degree.get(id).copied().unwrap_or(0)
    }

    /// Number of edges with at least one endpoint missing from the workflow.
    pub fn dangling_edges(&self) -> usize {
        self.dangling_edges
    }

    /// Valid traversal seeds: trigger nodes with no incoming edges, in the
    /// workflow's original node-sequence order.
    pub fn entry_points(&self) -> Vec<&'a str> {
        self.sequence
            .iter()
            .filter(|node| node.kind == NodeKind::Trigger && self.in_degree(&node.id) == 0)
            .map(|node| node.id.as_str())
            .collect()
    }
}
