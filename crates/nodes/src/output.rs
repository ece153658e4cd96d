//! Typed result payloads.
//!
//! Every executed node records exactly one of these in the execution
//! report. The shapes vary by kind (and sometimes label) but each is a
//! closed record, not an open-ended blob; the serialized form is the wire
//! shape clients consume (`triggered`, `passes`, `executed`/`action`, …).
//! The contract is one-directional: the engine produces payloads and the
//! caller serializes them, so only `Serialize` is implemented.

use serde::Serialize;

/// The payload a node executor produced, one variant per node kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NodeOutput {
    Trigger(TriggerOutput),
    Condition(ConditionOutput),
    Action(ActionOutput),
}

// ---------------------------------------------------------------------------
// Trigger payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriggerOutput {
    pub triggered: bool,
    /// Populated by the "Token Launch" trigger.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<TokenInfo>,
    /// Populated by the "Price Change" trigger.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceMove>,
}

impl TriggerOutput {
    /// Bare `triggered: true` payload, used by the default trigger.
    pub fn fired() -> Self {
        Self {
            triggered: true,
            token: None,
            price: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenInfo {
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub chain: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceMove {
    pub token: String,
    pub old_price: f64,
    pub new_price: f64,
    pub change: f64,
}

// ---------------------------------------------------------------------------
// Condition payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionOutput {
    pub passes: bool,
    /// The price the filter observed, when the condition consulted one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// The liquidity the filter observed, when the condition consulted one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liquidity: Option<f64>,
}

impl ConditionOutput {
    /// Bare `passes: true` payload, used by the default condition.
    pub fn pass() -> Self {
        Self {
            passes: true,
            price: None,
            liquidity: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Action payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionOutput {
    pub executed: bool,
    pub action: String,
    /// Label-specific extras, flattened into the payload.
    #[serde(flatten)]
    pub detail: Option<ActionDetail>,
}

impl ActionOutput {
    /// Bare `executed: true` payload, used by the default action.
    pub fn noop() -> Self {
        Self {
            executed: true,
            action: "noop".to_owned(),
            detail: None,
        }
    }
}

/// Label-specific extras flattened into the action payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ActionDetail {
    #[serde(rename_all = "camelCase")]
    Purchase { amount: String, tx_hash: String },
    #[serde(rename_all = "camelCase")]
    Sale { percentage: u32, tx_hash: String },
    Notification {
        #[serde(rename = "type")]
        channel: String,
        message: String,
    },
}
