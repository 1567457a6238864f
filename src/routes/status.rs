use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use crate::db;
use crate::error::AppError;
use crate::models::{StatusCheck, StatusCheckPayload};
use crate::state::SharedState;
use crate::validation;

pub async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "Hello World" }))
}

pub async fn create(
    State(state): State<SharedState>,
    Json(payload): Json<StatusCheckPayload>,
) -> Result<Json<StatusCheck>, AppError> {
    let client_name = validation::validate_status_check(&payload).map_err(AppError::Validation)?;

    let status = StatusCheck {
        id: Uuid::new_v4(),
        client_name,
        timestamp: Utc::now(),
    };
    db::status_checks::insert(&state.pool, &status).await?;

    Ok(Json(status))
}

// A `limit` query parameter is declared by the frontend but has never been
// honored here; the widget always reads the first 1000 checks.
pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<StatusCheck>>, AppError> {
    let checks = db::status_checks::list(&state.pool, 1000).await?;
    Ok(Json(checks))
}
