//! Built-in trigger executors.
//!
//! Trigger payloads are illustrative stubs: a real deployment would source
//! them from chain listeners. They matter to the engine only as the
//! payloads recorded for entry-point nodes.

use tracing::info;

use crate::output::{PriceMove, TokenInfo, TriggerOutput};
use crate::{ExecutionContext, NodeConfig, NodeExecutor, NodeOutput};

/// "Token Launch" — reports the token that (mock) launched.
pub struct TokenLaunchTrigger;

impl NodeExecutor for TokenLaunchTrigger {
    fn execute(&self, label: &str, _config: &NodeConfig, _ctx: &ExecutionContext<'_>) -> NodeOutput {
        info!(label, "firing trigger");
        NodeOutput::Trigger(TriggerOutput {
            triggered: true,
            token: Some(TokenInfo {
                address: "0x1234567890123456789012345678901234567890".to_owned(),
                name: "Example Token".to_owned(),
                symbol: "EX".to_owned(),
                chain: "ethereum".to_owned(),
            }),
            price: None,
        })
    }
}

/// "Price Change" — reports the (mock) observed move.
pub struct PriceChangeTrigger;

impl NodeExecutor for PriceChangeTrigger {
    fn execute(&self, label: &str, _config: &NodeConfig, _ctx: &ExecutionContext<'_>) -> NodeOutput {
        info!(label, "firing trigger");
        NodeOutput::Trigger(TriggerOutput {
            triggered: true,
            token: None,
            price: Some(PriceMove {
                token: "0x1234567890123456789012345678901234567890".to_owned(),
                old_price: 0.50,
                new_price: 0.75,
                change: 50.0,
            }),
        })
    }
}

/// Fallback for trigger labels without a dedicated implementation.
pub struct DefaultTrigger;

impl NodeExecutor for DefaultTrigger {
    fn execute(&self, label: &str, _config: &NodeConfig, _ctx: &ExecutionContext<'_>) -> NodeOutput {
        info!(label, "firing trigger (default behavior)");
        NodeOutput::Trigger(TriggerOutput::fired())
    }
}
