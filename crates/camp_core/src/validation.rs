//! Payload validation for camp write requests.
//!
//! # Responsibility
//! - Decode untyped JSON payloads into typed write drafts.
//! - Enforce per-field constraints shared by create and patch paths.
//!
//! # Invariants
//! - A missing or mistyped field is a `ValidationError`, never a panic.
//! - Patch validation finishes before anything is written; one failing field
//!   rejects the whole patch.
//! - Camper patches only accept `name` and `age`.

use crate::model::activity::NewActivity;
use crate::model::camper::{CamperPatch, NewCamper};
use crate::model::signup::NewSignup;
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

/// Inclusive camper age bounds.
pub const CAMPER_AGE_RANGE: RangeInclusive<i64> = 8..=18;
/// Inclusive signup hour-of-day bounds.
pub const SIGNUP_TIME_RANGE: RangeInclusive<i64> = 0..=23;

const CAMPER_PATCH_FIELDS: &[&str] = &["name", "age"];

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Reason a write payload was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Payload is not a JSON object.
    NotAnObject,
    MissingField(&'static str),
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
    EmptyName,
    AgeOutOfRange(i64),
    TimeOutOfRange(i64),
    /// Patch carried a field outside the recognized set.
    UnknownField(String),
    /// The store refused the write (e.g. a dangling signup reference).
    Constraint(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "payload must be a JSON object"),
            Self::MissingField(field) => write!(f, "missing field `{field}`"),
            Self::WrongType { field, expected } => {
                write!(f, "field `{field}` must be {expected}")
            }
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::AgeOutOfRange(age) => write!(
                f,
                "age {age} outside {}..={}",
                CAMPER_AGE_RANGE.start(),
                CAMPER_AGE_RANGE.end()
            ),
            Self::TimeOutOfRange(time) => write!(
                f,
                "time {time} outside {}..={}",
                SIGNUP_TIME_RANGE.start(),
                SIGNUP_TIME_RANGE.end()
            ),
            Self::UnknownField(field) => write!(f, "unknown field `{field}`"),
            Self::Constraint(message) => write!(f, "store constraint violated: {message}"),
        }
    }
}

impl Error for ValidationError {}

/// Validates a camper create payload: non-empty `name`, integer `age` in 8..=18.
pub fn validate_camper_create(payload: &Value) -> ValidationResult<NewCamper> {
    let fields = as_object(payload)?;
    let camper = NewCamper {
        name: required_str(fields, "name")?.to_string(),
        age: required_int(fields, "age")?,
    };
    camper.validate()?;
    Ok(camper)
}

/// Validates an activity create payload: string `name`, integer `difficulty`.
pub fn validate_activity_create(payload: &Value) -> ValidationResult<NewActivity> {
    let fields = as_object(payload)?;
    let activity = NewActivity {
        name: required_str(fields, "name")?.to_string(),
        difficulty: required_int(fields, "difficulty")?,
    };
    activity.validate()?;
    Ok(activity)
}

/// Validates a signup create payload.
///
/// Only the shape of `camper_id`/`activity_id` is checked here; whether they
/// point at existing rows is left to the store.
pub fn validate_signup_create(payload: &Value) -> ValidationResult<NewSignup> {
    let fields = as_object(payload)?;
    let signup = NewSignup {
        time: required_int(fields, "time")?,
        camper_id: required_int(fields, "camper_id")?,
        activity_id: required_int(fields, "activity_id")?,
    };
    signup.validate()?;
    Ok(signup)
}

/// Validates a camper patch payload as one all-or-nothing unit.
pub fn validate_camper_patch(payload: &Value) -> ValidationResult<CamperPatch> {
    let fields = as_object(payload)?;
    if let Some(unknown) = fields
        .keys()
        .find(|key| !CAMPER_PATCH_FIELDS.contains(&key.as_str()))
    {
        return Err(ValidationError::UnknownField(unknown.clone()));
    }

    let patch = CamperPatch {
        name: optional_str(fields, "name")?.map(str::to_string),
        age: optional_int(fields, "age")?,
    };
    patch.validate()?;
    Ok(patch)
}

pub(crate) fn check_camper_name(name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

pub(crate) fn check_camper_age(age: i64) -> ValidationResult<()> {
    if !CAMPER_AGE_RANGE.contains(&age) {
        return Err(ValidationError::AgeOutOfRange(age));
    }
    Ok(())
}

pub(crate) fn check_signup_time(time: i64) -> ValidationResult<()> {
    if !SIGNUP_TIME_RANGE.contains(&time) {
        return Err(ValidationError::TimeOutOfRange(time));
    }
    Ok(())
}

fn as_object(payload: &Value) -> ValidationResult<&Map<String, Value>> {
    payload.as_object().ok_or(ValidationError::NotAnObject)
}

fn required_str<'a>(
    fields: &'a Map<String, Value>,
    field: &'static str,
) -> ValidationResult<&'a str> {
    optional_str(fields, field)?.ok_or(ValidationError::MissingField(field))
}

fn required_int(fields: &Map<String, Value>, field: &'static str) -> ValidationResult<i64> {
    optional_int(fields, field)?.ok_or(ValidationError::MissingField(field))
}

fn optional_str<'a>(
    fields: &'a Map<String, Value>,
    field: &'static str,
) -> ValidationResult<Option<&'a str>> {
    match fields.get(field) {
        None => Ok(None),
        Some(value) => value.as_str().map(Some).ok_or(ValidationError::WrongType {
            field,
            expected: "a string",
        }),
    }
}

// Floats and booleans are rejected even when they look integral.
fn optional_int(fields: &Map<String, Value>, field: &'static str) -> ValidationResult<Option<i64>> {
    match fields.get(field) {
        None => Ok(None),
        Some(value) => value.as_i64().map(Some).ok_or(ValidationError::WrongType {
            field,
            expected: "an integer",
        }),
    }
}
