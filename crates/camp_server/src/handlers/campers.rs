//! `/campers` and `/campers/{id}`.

use super::{item_id, payload_or_null};
use crate::error::ApiError;
use crate::state::AppState;
use crate::views::{CamperSummary, CamperView};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use camp_core::{CamperService, EntityKind, SqliteCamperRepository, SqliteSignupRepository};
use rusqlite::Connection;
use serde_json::Value;

fn camper_service(
    conn: &Connection,
) -> CamperService<SqliteCamperRepository<'_>, SqliteSignupRepository<'_>> {
    CamperService::new(
        SqliteCamperRepository::new(conn),
        SqliteSignupRepository::new(conn),
    )
}

/// `GET /campers`: flat campers, never with signups.
pub async fn list_campers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CamperSummary>>, ApiError> {
    let campers = state
        .with_conn(move |conn| Ok(camper_service(conn).list_campers()?))
        .await?;
    Ok(Json(campers.iter().map(CamperSummary::from).collect()))
}

/// `POST /campers`: 201 with the created camper.
pub async fn create_camper(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CamperView>), ApiError> {
    let payload = payload_or_null(payload);
    let detail = state
        .with_conn(move |conn| {
            camper_service(conn)
                .create_camper(&payload)
                .map_err(ApiError::from_form)
        })
        .await?;
    Ok((StatusCode::CREATED, Json(CamperView::from(&detail))))
}

/// `GET /campers/{id}`: full camper including signups.
pub async fn get_camper(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<CamperView>, ApiError> {
    let id = item_id(id, EntityKind::Camper)?;
    let detail = state
        .with_conn(move |conn| Ok(camper_service(conn).get_camper(id)?))
        .await?;
    Ok(Json(CamperView::from(&detail)))
}

/// `PATCH /campers/{id}`: 202 with the updated camper.
pub async fn patch_camper(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CamperView>), ApiError> {
    let id = item_id(id, EntityKind::Camper)?;
    let payload = payload_or_null(payload);
    let detail = state
        .with_conn(move |conn| Ok(camper_service(conn).patch_camper(id, &payload)?))
        .await?;
    Ok((StatusCode::ACCEPTED, Json(CamperView::from(&detail))))
}
