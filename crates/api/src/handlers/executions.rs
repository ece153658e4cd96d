//! Execution handler — the bridge between transport and engine.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use engine::ExecutionReport;
use store::StoreError;

use crate::AppState;

/// Run a stored workflow and return its report.
///
/// Existence is checked here — the engine itself assumes a fully-populated
/// workflow. The report is returned with 200 even when its status is
/// `error`: a run-level failure is a well-formed outcome, not a transport
/// fault.
pub async fn execute(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<ExecutionReport>, StatusCode> {
    let workflow = match state.store.get(id) {
        Ok(workflow) => workflow,
        Err(StoreError::NotFound(_)) => return Err(StatusCode::NOT_FOUND),
    };

    // The snapshot is owned, so a concurrent update cannot mutate the
    // definition mid-traversal.
    let report = state.executor.execute(&workflow);
    Ok(Json(report))
}
