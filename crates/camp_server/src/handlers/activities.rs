//! `/activities` and `/activities/{id}`.

use super::{item_id, payload_or_null};
use crate::error::ApiError;
use crate::state::AppState;
use crate::views::{ActivitySummary, ActivityView};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use camp_core::{ActivityService, EntityKind, SqliteActivityRepository, SqliteSignupRepository};
use rusqlite::Connection;
use serde_json::Value;

fn activity_service(
    conn: &Connection,
) -> ActivityService<SqliteActivityRepository<'_>, SqliteSignupRepository<'_>> {
    ActivityService::new(
        SqliteActivityRepository::new(conn),
        SqliteSignupRepository::new(conn),
    )
}

pub async fn list_activities(
    State(state): State<AppState>,
) -> Result<Json<Vec<ActivitySummary>>, ApiError> {
    let activities = state
        .with_conn(move |conn| Ok(activity_service(conn).list_activities()?))
        .await?;
    Ok(Json(activities.iter().map(ActivitySummary::from).collect()))
}

pub async fn create_activity(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ActivityView>), ApiError> {
    let payload = payload_or_null(payload);
    let detail = state
        .with_conn(move |conn| {
            activity_service(conn)
                .create_activity(&payload)
                .map_err(ApiError::from_form)
        })
        .await?;
    Ok((StatusCode::CREATED, Json(ActivityView::from(&detail))))
}

pub async fn get_activity(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ActivityView>, ApiError> {
    let id = item_id(id, EntityKind::Activity)?;
    let detail = state
        .with_conn(move |conn| Ok(activity_service(conn).get_activity(id)?))
        .await?;
    Ok(Json(ActivityView::from(&detail)))
}

/// `DELETE /activities/{id}`: 204 with an empty body; signups go with it.
pub async fn delete_activity(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = item_id(id, EntityKind::Activity)?;
    state
        .with_conn(move |conn| Ok(activity_service(conn).delete_activity(id)?))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
