//! Signup join record between one camper and one activity.
//!
//! # Invariants
//! - `time` is an hour-of-day slot within `0..=23`.
//! - `camper_id` and `activity_id` are checked by the store's foreign keys,
//!   not by `validate()`.

use crate::model::activity::{Activity, ActivityId};
use crate::model::camper::{Camper, CamperId};
use crate::validation::{check_signup_time, ValidationResult};
use serde::{Deserialize, Serialize};

pub type SignupId = i64;

/// Persisted signup row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signup {
    pub id: SignupId,
    pub time: i64,
    pub camper_id: CamperId,
    pub activity_id: ActivityId,
}

/// Signup fields accepted on create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSignup {
    pub time: i64,
    pub camper_id: CamperId,
    pub activity_id: ActivityId,
}

impl NewSignup {
    pub fn new(time: i64, camper_id: CamperId, activity_id: ActivityId) -> Self {
        Self {
            time,
            camper_id,
            activity_id,
        }
    }

    pub fn validate(&self) -> ValidationResult<()> {
        check_signup_time(self.time)
    }
}

/// Signup joined with both of its parent rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupDetail {
    pub signup: Signup,
    pub camper: Camper,
    pub activity: Activity,
}
