//! Built-in condition executors.
//!
//! Conditions evaluate a predicate against the injected [`MarketData`]
//! view and record the observed value alongside the verdict. A condition
//! that cannot evaluate (unusable config, unrecognized direction) fails
//! closed: it logs and reports `passes: false`, and the traversal
//! continues — per-node failures are data, never faults.
//!
//! [`MarketData`]: crate::MarketData

use tracing::{info, warn};

use crate::config::{Direction, PriceFilterConfig};
use crate::output::ConditionOutput;
use crate::{ExecutionContext, NodeConfig, NodeExecutor, NodeOutput};

/// Comparison policy shared with the legacy strategy check: `above` passes
/// when the current price exceeds the threshold, `below` when it is under.
pub fn price_filter_passes(config: &PriceFilterConfig, current_price: f64) -> bool {
    match config.direction {
        Direction::Above => current_price > config.price,
        Direction::Below => current_price < config.price,
        Direction::Unknown => {
            warn!(threshold = config.price, "unrecognized price filter direction");
            false
        }
    }
}

/// "Price Filter" — compares the current price against a threshold.
pub struct PriceFilterCondition;

impl NodeExecutor for PriceFilterCondition {
    fn execute(&self, label: &str, config: &NodeConfig, ctx: &ExecutionContext<'_>) -> NodeOutput {
        info!(label, "evaluating condition");
        let current_price = ctx.market.current_price();

        let passes = match config {
            NodeConfig::PriceFilter(filter) => price_filter_passes(filter, current_price),
            _ => {
                warn!(label, "condition config is unusable, treating filter as failed");
                false
            }
        };

        NodeOutput::Condition(ConditionOutput {
            passes,
            price: Some(current_price),
            liquidity: None,
        })
    }
}

/// "Liquidity Filter" — passes when pool liquidity meets the minimum.
pub struct LiquidityFilterCondition;

impl NodeExecutor for LiquidityFilterCondition {
    fn execute(&self, label: &str, config: &NodeConfig, ctx: &ExecutionContext<'_>) -> NodeOutput {
        info!(label, "evaluating condition");
        let current_liquidity = ctx.market.current_liquidity();

        let passes = match config {
            NodeConfig::LiquidityFilter(filter) => current_liquidity >= filter.min_liquidity,
            _ => {
                warn!(label, "condition config is unusable, treating filter as failed");
                false
            }
        };

        NodeOutput::Condition(ConditionOutput {
            passes,
            price: None,
            liquidity: Some(current_liquidity),
        })
    }
}

/// Fallback for condition labels without a dedicated implementation:
/// the node passes so downstream nodes still run.
pub struct DefaultCondition;

impl NodeExecutor for DefaultCondition {
    fn execute(&self, label: &str, _config: &NodeConfig, _ctx: &ExecutionContext<'_>) -> NodeOutput {
        info!(label, "evaluating condition (default behavior)");
        NodeOutput::Condition(ConditionOutput::pass())
    }
}
