use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::db;
use crate::email::templates;
use crate::error::AppError;
use crate::models::{Submission, SubmissionKind, SubmissionPayload};
use crate::state::SharedState;
use crate::validation;

#[derive(Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
}

pub async fn create_proposal(
    State(state): State<SharedState>,
    Json(payload): Json<SubmissionPayload>,
) -> Result<(StatusCode, Json<Submission>), AppError> {
    let proposal = create(&state, SubmissionKind::Proposal, &payload).await?;

    // The response is decided at this point; delivery problems only get
    // logged inside the notifier.
    let body = templates::render_proposal_notification(&proposal);
    state
        .notifier
        .notify("New Training Proposal Request", &body)
        .await;

    Ok((StatusCode::CREATED, Json(proposal)))
}

pub async fn list_proposals(
    State(state): State<SharedState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Submission>>, AppError> {
    list(&state, SubmissionKind::Proposal, &params).await
}

pub async fn create_wem_request(
    State(state): State<SharedState>,
    Json(payload): Json<SubmissionPayload>,
) -> Result<(StatusCode, Json<Submission>), AppError> {
    let request = create(&state, SubmissionKind::WemRequest, &payload).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

pub async fn list_wem_requests(
    State(state): State<SharedState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Submission>>, AppError> {
    list(&state, SubmissionKind::WemRequest, &params).await
}

pub async fn create_contact(
    State(state): State<SharedState>,
    Json(payload): Json<SubmissionPayload>,
) -> Result<(StatusCode, Json<Submission>), AppError> {
    let contact = create(&state, SubmissionKind::Contact, &payload).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

pub async fn list_contacts(
    State(state): State<SharedState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Submission>>, AppError> {
    list(&state, SubmissionKind::Contact, &params).await
}

async fn create(
    state: &SharedState,
    kind: SubmissionKind,
    payload: &SubmissionPayload,
) -> Result<Submission, AppError> {
    let valid = validation::validate_submission(kind, payload).map_err(AppError::Validation)?;

    let submission = Submission {
        id: Uuid::new_v4(),
        name: valid.name,
        email: valid.email,
        company: valid.company,
        message: valid.message,
        source_page: valid.source_page,
        created_at: Utc::now(),
    };
    db::submissions::insert(&state.pool, kind, &submission).await?;

    Ok(submission)
}

async fn list(
    state: &SharedState,
    kind: SubmissionKind,
    params: &ListParams,
) -> Result<Json<Vec<Submission>>, AppError> {
    let limit = params.limit.unwrap_or(100).max(0);
    let rows = db::submissions::list_recent(&state.pool, kind, limit).await?;
    Ok(Json(rows))
}
