//! Route handlers, one module per resource collection.
//!
//! Each handler builds its services over the injected connection, so a
//! request never sees repositories bound to another request's borrow.

pub mod activities;
pub mod campers;
pub mod signups;

use crate::error::ApiError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use camp_core::EntityKind;
use log::debug;
use serde_json::Value;

/// Liveness probe: 200 with an empty body.
pub async fn home() -> StatusCode {
    StatusCode::OK
}

// Unparseable bodies become `null`, which every validator rejects, so they
// share the route's validation error body.
fn payload_or_null(payload: Result<Json<Value>, JsonRejection>) -> Value {
    match payload {
        Ok(Json(value)) => value,
        Err(rejection) => {
            debug!(
                "event=payload_rejected module=server status={} reason={}",
                rejection.status().as_u16(),
                rejection.body_text()
            );
            Value::Null
        }
    }
}

// A non-integer id can never match a row.
fn item_id(path: Result<Path<i64>, PathRejection>, kind: EntityKind) -> Result<i64, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|_| ApiError::NotFound(kind))
}
