//! Executor registry — two-level dispatch, kind first, then label.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::actions::{BuyTokenAction, DefaultAction, SellTokenAction, SendNotificationAction};
use crate::conditions::{DefaultCondition, LiquidityFilterCondition, PriceFilterCondition};
use crate::triggers::{DefaultTrigger, PriceChangeTrigger, TokenLaunchTrigger};
use crate::{NodeExecutor, NodeKind};

/// Maps (kind, label) to an executor, with a per-kind default so unknown
/// labels degrade to a neutral payload instead of failing the run.
pub struct ExecutorRegistry {
    by_label: HashMap<NodeKind, HashMap<String, Arc<dyn NodeExecutor>>>,
    trigger_default: Arc<dyn NodeExecutor>,
    condition_default: Arc<dyn NodeExecutor>,
    action_default: Arc<dyn NodeExecutor>,
}

impl ExecutorRegistry {
    /// An empty registry: every label resolves to its kind's default.
    pub fn new() -> Self {
        Self {
            by_label: HashMap::new(),
            trigger_default: Arc::new(DefaultTrigger),
            condition_default: Arc::new(DefaultCondition),
            action_default: Arc::new(DefaultAction),
        }
    }

    /// The registry with every built-in label wired up.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(NodeKind::Trigger, "Token Launch", Arc::new(TokenLaunchTrigger));
        registry.register(NodeKind::Trigger, "Price Change", Arc::new(PriceChangeTrigger));
        registry.register(NodeKind::Condition, "Price Filter", Arc::new(PriceFilterCondition));
        registry.register(
            NodeKind::Condition,
            "Liquidity Filter",
            Arc::new(LiquidityFilterCondition),
        );
        registry.register(NodeKind::Action, "Buy Token", Arc::new(BuyTokenAction));
        registry.register(NodeKind::Action, "Sell Token", Arc::new(SellTokenAction));
        registry.register(
            NodeKind::Action,
            "Send Notification",
            Arc::new(SendNotificationAction),
        );
        registry
    }

    /// Register (or replace) the executor for a (kind, label) pair.
    pub fn register(
        &mut self,
        kind: NodeKind,
        label: impl Into<String>,
        executor: Arc<dyn NodeExecutor>,
    ) {
        self.by_label
            .entry(kind)
            .or_default()
            .insert(label.into(), executor);
    }

    /// Replace the fallback executor for a kind.
    pub fn set_default(&mut self, kind: NodeKind, executor: Arc<dyn NodeExecutor>) {
        match kind {
            NodeKind::Trigger => self.trigger_default = executor,
            NodeKind::Condition => self.condition_default = executor,
            NodeKind::Action => self.action_default = executor,
        }
    }

    /// Look up the executor for a node; always succeeds.
    pub fn resolve(&self, kind: NodeKind, label: &str) -> &dyn NodeExecutor {
        if let Some(executor) = self.by_label.get(&kind).and_then(|table| table.get(label)) {
            return executor.as_ref();
        }
        debug!(%kind, label, "no executor registered for label, using kind default");
        match kind {
            NodeKind::Trigger => self.trigger_default.as_ref(),
            NodeKind::Condition => self.condition_default.as_ref(),
            NodeKind::Action => self.action_default.as_ref(),
        }
    }
}

impl Default for ExecutorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
