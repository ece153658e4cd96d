//! Workflow CRUD handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use engine::Workflow;
use store::{StoreError, WorkflowDraft};

use crate::AppState;

#[derive(serde::Deserialize)]
pub struct ListParams {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Workflow>> {
    let user_id = params.user_id.as_deref().unwrap_or("anonymous");
    Json(state.store.list_for_user(user_id))
}

pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<WorkflowDraft>,
) -> (StatusCode, Json<Workflow>) {
    let workflow = state.store.create(draft);
    (StatusCode::CREATED, Json(workflow))
}

pub async fn get(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<Workflow>, StatusCode> {
    match state.store.get(id) {
        Ok(workflow) => Ok(Json(workflow)),
        Err(StoreError::NotFound(_)) => Err(StatusCode::NOT_FOUND),
    }
}

pub async fn update(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(draft): Json<WorkflowDraft>,
) -> Result<Json<Workflow>, StatusCode> {
    match state.store.update(id, draft) {
        Ok(workflow) => Ok(Json(workflow)),
        Err(StoreError::NotFound(_)) => Err(StatusCode::NOT_FOUND),
    }
}

pub async fn delete(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<StatusCode, StatusCode> {
    match state.store.delete(id) {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(StoreError::NotFound(_)) => Err(StatusCode::NOT_FOUND),
    }
}
