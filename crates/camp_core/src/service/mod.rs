//! Camp use-case services.
//!
//! # Responsibility
//! - Orchestrate payload validation and repository calls per use case.
//! - Translate repository failures into semantic service errors.
//!
//! # Invariants
//! - Existence checks run before payload validation on item operations.
//! - Validation always completes before the first write.

pub mod activity_service;
pub mod camper_service;
pub mod signup_service;

use crate::model::EntityKind;
use crate::repo::RepoError;
use crate::validation::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for camp use cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Payload or store constraint rejected the request.
    Validation(ValidationError),
    /// Target row does not exist.
    NotFound { kind: EntityKind, id: i64 },
    /// Persistence-layer failure unrelated to caller input.
    Repo(RepoError),
    /// Write succeeded but the read-back did not match.
    InconsistentState(&'static str),
}

impl ServiceError {
    pub(crate) fn not_found(kind: EntityKind, id: i64) -> Self {
        Self::NotFound { kind, id }
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "validation failed: {err}"),
            Self::NotFound { kind, id } => write!(f, "{} not found: {id}", kind.label()),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent camp state: {details}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::NotFound { .. } | Self::InconsistentState(_) => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            RepoError::NotFound { kind, id } => Self::NotFound { kind, id },
            RepoError::Constraint(message) => {
                Self::Validation(ValidationError::Constraint(message))
            }
            other => Self::Repo(other),
        }
    }
}
