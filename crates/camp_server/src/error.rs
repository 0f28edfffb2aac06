//! HTTP error mapping.
//!
//! Body shapes are part of the client contract:
//! - create-form rejections: `{"errors": "invalid form data"}`
//! - signup and patch rejections: `{"errors": ["validation errors"]}`
//! - missing ids: `{"error": "<Kind> not found"}`

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use camp_core::{EntityKind, ServiceError};
use log::error;
use serde_json::json;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum ApiError {
    /// Camper or activity create payload was rejected.
    InvalidFormData,
    /// Signup create or camper patch payload was rejected.
    ValidationErrors,
    NotFound(EntityKind),
    Internal(String),
}

impl ApiError {
    /// Maps a service error for the camper/activity create routes, whose
    /// validation body differs from every other route.
    pub fn from_form(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(_) => Self::InvalidFormData,
            other => other.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidFormData | Self::ValidationErrors => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormData => f.write_str("invalid form data"),
            Self::ValidationErrors => f.write_str("validation errors"),
            Self::NotFound(kind) => write!(f, "{} not found", kind.label()),
            Self::Internal(message) => write!(f, "internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ServiceError> for ApiError {
    fn from(value: ServiceError) -> Self {
        match value {
            ServiceError::Validation(_) => Self::ValidationErrors,
            ServiceError::NotFound { kind, .. } => Self::NotFound(kind),
            other @ (ServiceError::Repo(_) | ServiceError::InconsistentState(_)) => {
                Self::Internal(other.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::InvalidFormData => json!({ "errors": "invalid form data" }),
            Self::ValidationErrors => json!({ "errors": ["validation errors"] }),
            Self::NotFound(kind) => json!({ "error": format!("{} not found", kind.label()) }),
            Self::Internal(message) => {
                error!("event=http_error module=server status=error error={message}");
                json!({ "error": "internal server error" })
            }
        };
        (status, Json(body)).into_response()
    }
}
