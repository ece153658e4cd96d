//! Built-in action executors.
//!
//! Like the triggers these are illustrative side-effect stubs; the payload
//! shapes are what the engine carries into the report.

use tracing::info;

use crate::output::{ActionDetail, ActionOutput};
use crate::{ExecutionContext, NodeConfig, NodeExecutor, NodeOutput};

/// "Buy Token" — records a mock purchase.
pub struct BuyTokenAction;

impl NodeExecutor for BuyTokenAction {
    fn execute(&self, label: &str, _config: &NodeConfig, _ctx: &ExecutionContext<'_>) -> NodeOutput {
        info!(label, "performing action");
        NodeOutput::Action(ActionOutput {
            executed: true,
            action: "buy".to_owned(),
            detail: Some(ActionDetail::Purchase {
                amount: "100 USD".to_owned(),
                tx_hash: "0xabcdef1234567890".to_owned(),
            }),
        })
    }
}

/// "Sell Token" — records a mock sale.
pub struct SellTokenAction;

impl NodeExecutor for SellTokenAction {
    fn execute(&self, label: &str, _config: &NodeConfig, _ctx: &ExecutionContext<'_>) -> NodeOutput {
        info!(label, "performing action");
        NodeOutput::Action(ActionOutput {
            executed: true,
            action: "sell".to_owned(),
            detail: Some(ActionDetail::Sale {
                percentage: 50,
                tx_hash: "0x1234567890abcdef".to_owned(),
            }),
        })
    }
}

/// "Send Notification" — records a mock email notification.
pub struct SendNotificationAction;

impl NodeExecutor for SendNotificationAction {
    fn execute(&self, label: &str, _config: &NodeConfig, _ctx: &ExecutionContext<'_>) -> NodeOutput {
        info!(label, "performing action");
        NodeOutput::Action(ActionOutput {
            executed: true,
            action: "notification".to_owned(),
            detail: Some(ActionDetail::Notification {
                channel: "email".to_owned(),
                message: "Trading signal triggered".to_owned(),
            }),
        })
    }
}

/// Fallback for action labels without a dedicated implementation.
pub struct DefaultAction;

impl NodeExecutor for DefaultAction {
    fn execute(&self, label: &str, _config: &NodeConfig, _ctx: &ExecutionContext<'_>) -> NodeOutput {
        info!(label, "performing action (default behavior)");
        NodeOutput::Action(ActionOutput::noop())
    }
}
