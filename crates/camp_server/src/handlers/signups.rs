//! `/signups`.

use super::payload_or_null;
use crate::error::ApiError;
use crate::state::AppState;
use crate::views::SignupView;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use camp_core::{SignupService, SqliteSignupRepository};
use serde_json::Value;

/// `POST /signups`: 201 with the signup and both of its parents.
///
/// Dangling `camper_id`/`activity_id` values are rejected by the store and
/// answered like any other validation failure.
pub async fn create_signup(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<SignupView>), ApiError> {
    let payload = payload_or_null(payload);
    let detail = state
        .with_conn(move |conn| {
            Ok(SignupService::new(SqliteSignupRepository::new(conn)).create_signup(&payload)?)
        })
        .await?;
    Ok((StatusCode::CREATED, Json(SignupView::from(&detail))))
}
