//! Scenario tests for the workflow execution engine.
//!
//! These run the real executor against in-memory workflows, using
//! `RecordingExecutor` where a test needs to observe call counts or visit
//! order. No transport or storage is involved.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::{json, Value};

use nodes::mock::RecordingExecutor;
use nodes::output::{ActionOutput, ConditionOutput, TriggerOutput};
use nodes::{ExecutorRegistry, NodeKind, NodeOutput, StaticMarket};

use crate::executor::{ExecutorConfig, WorkflowExecutor};
use crate::models::{Edge, Node, NodeData, Position, Workflow};
use crate::report::RunStatus;

fn node(id: &str, kind: NodeKind, label: &str, config: Value) -> Node {
    Node {
        id: id.to_owned(),
        kind,
        position: Position::default(),
        data: NodeData {
            label: label.to_owned(),
            config,
        },
    }
}

fn edge(id: &str, source: &str, target: &str) -> Edge {
    Edge {
        id: id.to_owned(),
        source: source.to_owned(),
        target: target.to_owned(),
    }
}

fn executor_with_market(price: f64, liquidity: f64) -> WorkflowExecutor {
    WorkflowExecutor::new(
        ExecutorRegistry::builtin(),
        Arc::new(StaticMarket { price, liquidity }),
        ExecutorConfig::default(),
    )
}

// ============================================================
// Happy path and structured failure
// ============================================================

#[test]
fn token_launch_into_buy_token_completes_with_both_payloads() {
    let workflow = Workflow::new(
        "launch-buy",
        vec![
            node("t1", NodeKind::Trigger, "Token Launch", Value::Null),
            node("a1", NodeKind::Action, "Buy Token", Value::Null),
        ],
        vec![edge("e1", "t1", "a1")],
    );

    let report = WorkflowExecutor::with_defaults().execute(&workflow);

    assert_eq!(report.status, RunStatus::Completed);
    assert_eq!(report.workflow_id, workflow.id);
    assert_eq!(report.message, "Workflow 'launch-buy' executed successfully");
    assert_eq!(report.results.len(), 2);

    let NodeOutput::Trigger(trigger) = &report.results["t1"] else {
        panic!("trigger node must record a trigger payload");
    };
    assert!(trigger.triggered);
    assert!(trigger.token.is_some());

    let NodeOutput::Action(action) = &report.results["a1"] else {
        panic!("action node must record an action payload");
    };
    assert!(action.executed);
    assert_eq!(action.action, "buy");
}

#[test]
fn empty_workflow_reports_missing_triggers() {
    let workflow = Workflow::new("empty", vec![], vec![]);

    let report = WorkflowExecutor::with_defaults().execute(&workflow);

    assert_eq!(report.status, RunStatus::Error);
    assert_eq!(report.message, "No trigger nodes found in workflow");
    assert!(report.results.is_empty());
}

#[test]
fn workflow_without_qualifying_triggers_reports_error() {
    // A trigger with an incoming edge is not an entry point, and neither is
    // a condition with in-degree zero.
    let workflow = Workflow::new(
        "no-entries",
        vec![
            node("c1", NodeKind::Condition, "Price Filter", json!({ "price": 1.0, "direction": "above" })),
            node("t1", NodeKind::Trigger, "Token Launch", Value::Null),
        ],
        vec![edge("e1", "c1", "t1")],
    );

    let report = WorkflowExecutor::with_defaults().execute(&workflow);

    assert_eq!(report.status, RunStatus::Error);
    assert!(report.results.is_empty());
}

#[test]
fn unreachable_nodes_are_absent_from_results() {
    let workflow = Workflow::new(
        "island",
        vec![
            node("t1", NodeKind::Trigger, "Token Launch", Value::Null),
            node("a1", NodeKind::Action, "Buy Token", Value::Null),
            // In-degree zero but not a trigger: never seeded, never reached.
            node("c1", NodeKind::Condition, "Price Filter", Value::Null),
        ],
        vec![edge("e1", "t1", "a1")],
    );

    let report = WorkflowExecutor::with_defaults().execute(&workflow);

    assert_eq!(report.status, RunStatus::Completed);
    assert_eq!(report.results.len(), 2);
    assert!(!report.results.contains_key("c1"));
}

// ============================================================
// Price filter semantics with an injected market
// ============================================================

#[test]
fn price_filter_above_passes_when_market_is_higher() {
    let workflow = Workflow::new(
        "above",
        vec![
            node("t1", NodeKind::Trigger, "Token Launch", Value::Null),
            node("c1", NodeKind::Condition, "Price Filter", json!({ "price": 0.5, "direction": "above" })),
        ],
        vec![edge("e1", "t1", "c1")],
    );

    let report = executor_with_market(0.6, 100_000.0).execute(&workflow);

    assert_eq!(
        report.results["c1"],
        NodeOutput::Condition(ConditionOutput {
            passes: true,
            price: Some(0.6),
            liquidity: None,
        })
    );
}

#[test]
fn price_filter_below_fails_when_market_is_higher() {
    let workflow = Workflow::new(
        "below",
        vec![
            node("t1", NodeKind::Trigger, "Token Launch", Value::Null),
            node("c1", NodeKind::Condition, "Price Filter", json!({ "price": 0.5, "direction": "below" })),
        ],
        vec![edge("e1", "t1", "c1")],
    );

    let report = executor_with_market(0.6, 100_000.0).execute(&workflow);

    let NodeOutput::Condition(condition) = &report.results["c1"] else {
        panic!("expected a condition payload");
    };
    assert!(!condition.passes);
}

#[test]
fn malformed_filter_config_fails_the_node_not_the_run() {
    let workflow = Workflow::new(
        "malformed",
        vec![
            node("t1", NodeKind::Trigger, "Token Launch", Value::Null),
            node("c1", NodeKind::Condition, "Price Filter", json!({ "price": "not a number" })),
            node("a1", NodeKind::Action, "Buy Token", Value::Null),
        ],
        vec![edge("e1", "t1", "c1"), edge("e2", "c1", "a1")],
    );

    let report = WorkflowExecutor::with_defaults().execute(&workflow);

    assert_eq!(report.status, RunStatus::Completed);
    let NodeOutput::Condition(condition) = &report.results["c1"] else {
        panic!("expected a condition payload");
    };
    assert!(!condition.passes);
    // Downstream of the failed filter still executed.
    assert!(report.results.contains_key("a1"));
}

#[test]
fn unknown_labels_degrade_to_kind_defaults() {
    let workflow = Workflow::new(
        "unknown-labels",
        vec![
            node("t1", NodeKind::Trigger, "Whale Alert", Value::Null),
            node("c1", NodeKind::Condition, "Moon Phase", Value::Null),
            node("a1", NodeKind::Action, "Stake Token", Value::Null),
        ],
        vec![edge("e1", "t1", "c1"), edge("e2", "c1", "a1")],
    );

    let report = WorkflowExecutor::with_defaults().execute(&workflow);

    assert_eq!(report.status, RunStatus::Completed);
    assert_eq!(report.results["t1"], NodeOutput::Trigger(TriggerOutput::fired()));
    assert_eq!(report.results["c1"], NodeOutput::Condition(ConditionOutput::pass()));
    assert_eq!(report.results["a1"], NodeOutput::Action(ActionOutput::noop()));
}

// ============================================================
// Graph-shape properties: cycles, diamonds, dangling edges
// ============================================================

#[test]
fn cycle_terminates_and_each_node_runs_once() {
    // t1 → a1 → a2 → a1 (back-edge)
    let workflow = Workflow::new(
        "cycle",
        vec![
            node("t1", NodeKind::Trigger, "Token Launch", Value::Null),
            node("a1", NodeKind::Action, "Buy Token", Value::Null),
            node("a2", NodeKind::Action, "Sell Token", Value::Null),
        ],
        vec![
            edge("e1", "t1", "a1"),
            edge("e2", "a1", "a2"),
            edge("e3", "a2", "a1"),
        ],
    );

    let report = WorkflowExecutor::with_defaults().execute(&workflow);

    assert_eq!(report.status, RunStatus::Completed);
    assert_eq!(report.results.len(), 3);
}

#[test]
fn diamond_convergence_executes_the_join_node_once() {
    //      t1
    //     /  \
    //   c1    c2
    //     \  /
    //      a1
    let buy = Arc::new(RecordingExecutor::returning(
        "buy",
        NodeOutput::Action(ActionOutput::noop()),
    ));
    let mut registry = ExecutorRegistry::builtin();
    registry.register(NodeKind::Action, "Buy Token", buy.clone());

    let executor = WorkflowExecutor::new(
        registry,
        Arc::new(StaticMarket::default()),
        ExecutorConfig::default(),
    );

    let workflow = Workflow::new(
        "diamond",
        vec![
            node("t1", NodeKind::Trigger, "Token Launch", Value::Null),
            node("c1", NodeKind::Condition, "Any Filter", Value::Null),
            node("c2", NodeKind::Condition, "Other Filter", Value::Null),
            node("a1", NodeKind::Action, "Buy Token", Value::Null),
        ],
        vec![
            edge("e1", "t1", "c1"),
            edge("e2", "t1", "c2"),
            edge("e3", "c1", "a1"),
            edge("e4", "c2", "a1"),
        ],
    );

    let report = executor.execute(&workflow);

    assert_eq!(report.status, RunStatus::Completed);
    assert_eq!(report.results.len(), 4);
    assert_eq!(buy.call_count(), 1);
}

#[test]
fn children_run_in_edge_list_order_and_entries_in_node_order() {
    let journal = Arc::new(Mutex::new(Vec::new()));
    let mut registry = ExecutorRegistry::new();
    for name in ["Start", "Second Start", "A1", "A2", "A3"] {
        let kind = if name.contains("Start") {
            NodeKind::Trigger
        } else {
            NodeKind::Action
        };
        registry.register(
            kind,
            name,
            Arc::new(RecordingExecutor::with_journal(
                name,
                NodeOutput::Action(ActionOutput::noop()),
                journal.clone(),
            )),
        );
    }

    let executor = WorkflowExecutor::new(
        registry,
        Arc::new(StaticMarket::default()),
        ExecutorConfig::default(),
    );

    // Edge list order from t1 is a2 before a1; a1 then leads to a3.
    let workflow = Workflow::new(
        "ordering",
        vec![
            node("t1", NodeKind::Trigger, "Start", Value::Null),
            node("t2", NodeKind::Trigger, "Second Start", Value::Null),
            node("a1", NodeKind::Action, "A1", Value::Null),
            node("a2", NodeKind::Action, "A2", Value::Null),
            node("a3", NodeKind::Action, "A3", Value::Null),
        ],
        vec![
            edge("e1", "t1", "a2"),
            edge("e2", "t1", "a1"),
            edge("e3", "a1", "a3"),
        ],
    );

    let report = executor.execute(&workflow);

    assert_eq!(report.status, RunStatus::Completed);
    assert_eq!(
        *journal.lock().unwrap(),
        vec!["Start", "A2", "A1", "A3", "Second Start"]
    );
}

#[test]
fn dangling_edges_do_not_disturb_the_run() {
    let workflow = Workflow::new(
        "dangling",
        vec![
            node("t1", NodeKind::Trigger, "Token Launch", Value::Null),
            node("a1", NodeKind::Action, "Buy Token", Value::Null),
        ],
        vec![
            edge("e1", "t1", "a1"),
            edge("e2", "t1", "ghost"),
            edge("e3", "phantom", "a1"),
        ],
    );

    let report = WorkflowExecutor::with_defaults().execute(&workflow);

    assert_eq!(report.status, RunStatus::Completed);
    assert_eq!(report.results.len(), 2);
}

// ============================================================
// Determinism and deadline
// ============================================================

#[test]
fn repeated_execution_is_idempotent() {
    let workflow = Workflow::new(
        "idempotent",
        vec![
            node("t1", NodeKind::Trigger, "Price Change", Value::Null),
            node("c1", NodeKind::Condition, "Liquidity Filter", json!({ "minLiquidity": 50_000.0 })),
            node("a1", NodeKind::Action, "Send Notification", Value::Null),
        ],
        vec![edge("e1", "t1", "c1"), edge("e2", "c1", "a1")],
    );

    let executor = WorkflowExecutor::with_defaults();
    let first = executor.execute(&workflow);
    let second = executor.execute(&workflow);

    assert_eq!(first.status, second.status);
    // Same keys, same payloads; only the timestamps may differ.
    assert_eq!(first.results, second.results);
}

#[test]
fn expired_deadline_yields_error_report() {
    let workflow = Workflow::new(
        "deadline",
        vec![
            node("t1", NodeKind::Trigger, "Token Launch", Value::Null),
            node("a1", NodeKind::Action, "Buy Token", Value::Null),
        ],
        vec![edge("e1", "t1", "a1")],
    );

    let executor = WorkflowExecutor::new(
        ExecutorRegistry::builtin(),
        Arc::new(StaticMarket::default()),
        ExecutorConfig {
            deadline: Some(Duration::ZERO),
        },
    );

    let report = executor.execute(&workflow);

    assert_eq!(report.status, RunStatus::Error);
    assert_eq!(report.message, "execution deadline exceeded");
}
