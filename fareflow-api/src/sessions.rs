use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use fareflow_quote::SessionView;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub inventory_id: Uuid,
}

/// POST /sessions
/// Called when the customer starts checkout: locks the displayed price for
/// the countdown window.
pub async fn create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionView>), ApiError> {
    let view = state.sessions.create_session(req.inventory_id).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /sessions/{token}
/// Checkout polls this for the countdown; remaining_seconds = 0 means the
/// quote has lapsed and the caller should restart.
pub async fn get_session(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<SessionView>, ApiError> {
    let view = state.sessions.get_session(&token).await?;
    Ok(Json(view))
}
