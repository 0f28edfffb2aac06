//! Repository layer over the camp SQLite store.
//!
//! # Responsibility
//! - Define per-entity data access contracts.
//! - Keep SQL details out of service/business orchestration.
//!
//! # Invariants
//! - Write paths call the draft's `validate()` before any SQL mutation.
//! - Every mutating call commits before returning.
//! - Store constraint failures are reported as `RepoError::Constraint`, not as
//!   opaque transport errors.

pub mod activity_repo;
pub mod camper_repo;
pub mod signup_repo;

use crate::db::DbError;
use crate::model::activity::Activity;
use crate::model::camper::Camper;
use crate::model::signup::{Signup, SignupDetail};
use crate::model::EntityKind;
use crate::validation::{check_camper_age, check_camper_name, check_signup_time, ValidationError};
use rusqlite::{ErrorCode, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for camp persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    Db(DbError),
    NotFound { kind: EntityKind, id: i64 },
    /// Foreign key, `CHECK` or `NOT NULL` rejection raised by the store.
    Constraint(String),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { kind, id } => write!(f, "{} not found: {id}", kind.label()),
            Self::Constraint(message) => write!(f, "constraint violation: {message}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound { .. } | Self::Constraint(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(failure, message) = &value {
            if failure.code == ErrorCode::ConstraintViolation {
                return Self::Constraint(message.clone().unwrap_or_else(|| failure.to_string()));
            }
        }
        Self::Db(DbError::Sqlite(value))
    }
}

const SIGNUP_DETAIL_SELECT_SQL: &str = "SELECT
    s.id AS signup_id,
    s.time AS signup_time,
    s.camper_id AS camper_id,
    s.activity_id AS activity_id,
    c.name AS camper_name,
    c.age AS camper_age,
    a.name AS activity_name,
    a.difficulty AS activity_difficulty
FROM signups s
INNER JOIN campers c ON c.id = s.camper_id
INNER JOIN activities a ON a.id = s.activity_id";

// Read paths reject rows that break model invariants instead of masking them.
fn parse_camper_row(row: &Row<'_>) -> RepoResult<Camper> {
    let camper = Camper {
        id: row.get("id")?,
        name: row.get("name")?,
        age: row.get("age")?,
    };
    ensure_valid_camper(&camper)?;
    Ok(camper)
}

fn parse_activity_row(row: &Row<'_>) -> RepoResult<Activity> {
    Ok(Activity {
        id: row.get("id")?,
        name: row.get("name")?,
        difficulty: row.get("difficulty")?,
    })
}

fn parse_signup_row(row: &Row<'_>) -> RepoResult<Signup> {
    let signup = Signup {
        id: row.get("id")?,
        time: row.get("time")?,
        camper_id: row.get("camper_id")?,
        activity_id: row.get("activity_id")?,
    };
    ensure_valid_signup(&signup)?;
    Ok(signup)
}

fn parse_signup_detail_row(row: &Row<'_>) -> RepoResult<SignupDetail> {
    let signup = Signup {
        id: row.get("signup_id")?,
        time: row.get("signup_time")?,
        camper_id: row.get("camper_id")?,
        activity_id: row.get("activity_id")?,
    };
    ensure_valid_signup(&signup)?;

    let camper = Camper {
        id: signup.camper_id,
        name: row.get("camper_name")?,
        age: row.get("camper_age")?,
    };
    ensure_valid_camper(&camper)?;

    let activity = Activity {
        id: signup.activity_id,
        name: row.get("activity_name")?,
        difficulty: row.get("activity_difficulty")?,
    };

    Ok(SignupDetail {
        signup,
        camper,
        activity,
    })
}

fn ensure_valid_camper(camper: &Camper) -> RepoResult<()> {
    check_camper_name(&camper.name)
        .and_then(|()| check_camper_age(camper.age))
        .map_err(|err| {
            RepoError::InvalidData(format!("camper {} in campers table: {err}", camper.id))
        })
}

fn ensure_valid_signup(signup: &Signup) -> RepoResult<()> {
    check_signup_time(signup.time).map_err(|err| {
        RepoError::InvalidData(format!("signup {} in signups table: {err}", signup.id))
    })
}
