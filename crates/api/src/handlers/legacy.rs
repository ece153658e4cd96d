//! Legacy strategy endpoints for backward compatibility.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use tracing::info;

use store::legacy::{self, StrategiesConfig};

use crate::AppState;

/// Export every stored workflow in the legacy strategies shape.
pub async fn export(State(state): State<AppState>) -> Json<StrategiesConfig> {
    Json(legacy::to_strategies(&state.store.list_all()))
}

/// Import legacy strategies, one workflow per strategy.
pub async fn import(
    State(state): State<AppState>,
    Json(config): Json<StrategiesConfig>,
) -> Json<Value> {
    let count = config.strategies.len();
    for strategy in config.strategies {
        state.store.create(legacy::workflow_from_strategy(strategy));
    }
    info!(count, "imported legacy strategies");
    Json(json!({ "status": "success" }))
}
