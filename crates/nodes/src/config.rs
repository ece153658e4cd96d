//! Typed node configuration.
//!
//! The wire format carries each node's config as a free-form JSON object.
//! Before dispatch the engine resolves that blob into a [`NodeConfig`]
//! variant keyed by (kind, label), so executors work with an explicit
//! schema instead of unchecked field access. Pairs without a registered
//! schema fall through to [`NodeConfig::Opaque`], preserving the raw value.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ConfigError, NodeKind};

/// Comparison direction for the price filter.
///
/// Anything other than `above`/`below` deserializes to [`Direction::Unknown`],
/// which the filter treats as a failed check (logged, never fatal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Above,
    Below,
    #[serde(other)]
    Unknown,
}

/// Schema for the "Price Filter" condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceFilterConfig {
    /// Threshold the current price is compared against.
    pub price: f64,
    pub direction: Direction,
}

/// Schema for the "Liquidity Filter" condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityFilterConfig {
    /// Minimum pool liquidity (inclusive) for the filter to pass.
    pub min_liquidity: f64,
}

/// A node's configuration, resolved against the schema registered for its
/// (kind, label) pair.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeConfig {
    PriceFilter(PriceFilterConfig),
    LiquidityFilter(LiquidityFilterConfig),
    /// No schema registered for this (kind, label); the raw value is
    /// carried through untouched.
    Opaque(Value),
}

impl NodeConfig {
    /// Resolve a raw config value into its typed variant.
    ///
    /// # Errors
    /// [`ConfigError::SchemaMismatch`] when the (kind, label) pair has a
    /// registered schema and the raw value does not satisfy it. Callers
    /// recover by substituting [`NodeConfig::Opaque`]; the owning executor
    /// then degrades (a filter with unusable config does not pass).
    pub fn resolve(kind: NodeKind, label: &str, raw: &Value) -> Result<Self, ConfigError> {
        let mismatch = |source| ConfigError::SchemaMismatch {
            kind,
            label: label.to_owned(),
            source,
        };

        match (kind, label) {
            (NodeKind::Condition, "Price Filter") => serde_json::from_value(raw.clone())
                .map(Self::PriceFilter)
                .map_err(mismatch),
            (NodeKind::Condition, "Liquidity Filter") => serde_json::from_value(raw.clone())
                .map(Self::LiquidityFilter)
                .map_err(mismatch),
            _ => Ok(Self::Opaque(raw.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn price_filter_config_resolves() {
        let raw = json!({ "price": 0.5, "direction": "above" });
        let config = NodeConfig::resolve(NodeKind::Condition, "Price Filter", &raw)
            .expect("valid price filter config");
        assert_eq!(
            config,
            NodeConfig::PriceFilter(PriceFilterConfig {
                price: 0.5,
                direction: Direction::Above,
            })
        );
    }

    #[test]
    fn unrecognized_direction_maps_to_unknown() {
        let raw = json!({ "price": 1.0, "direction": "sideways" });
        let config = NodeConfig::resolve(NodeKind::Condition, "Price Filter", &raw)
            .expect("direction has an `other` fallback");
        assert!(matches!(
            config,
            NodeConfig::PriceFilter(PriceFilterConfig {
                direction: Direction::Unknown,
                ..
            })
        ));
    }

    #[test]
    fn malformed_price_filter_is_a_schema_mismatch() {
        let raw = json!({ "price": "not a number", "direction": "above" });
        let err = NodeConfig::resolve(NodeKind::Condition, "Price Filter", &raw)
            .expect_err("string threshold must not parse");
        assert!(matches!(err, ConfigError::SchemaMismatch { .. }));
    }

    #[test]
    fn liquidity_filter_uses_camel_case_field() {
        let raw = json!({ "minLiquidity": 50000.0 });
        let config = NodeConfig::resolve(NodeKind::Condition, "Liquidity Filter", &raw)
            .expect("valid liquidity filter config");
        assert_eq!(
            config,
            NodeConfig::LiquidityFilter(LiquidityFilterConfig {
                min_liquidity: 50000.0,
            })
        );
    }

    #[test]
    fn unregistered_pairs_stay_opaque() {
        let raw = json!({ "anything": ["goes"] });
        let config = NodeConfig::resolve(NodeKind::Action, "Buy Token", &raw)
            .expect("opaque resolution is total");
        assert_eq!(config, NodeConfig::Opaque(raw));
    }
}
