//! Camper entity and its write drafts.

use crate::model::signup::SignupDetail;
use crate::validation::{check_camper_age, check_camper_name, ValidationResult};
use serde::{Deserialize, Serialize};

pub type CamperId = i64;

/// Persisted camper row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camper {
    pub id: CamperId,
    /// Never empty.
    pub name: String,
    /// Always within `8..=18`.
    pub age: i64,
}

/// Camper fields accepted on create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCamper {
    pub name: String,
    pub age: i64,
}

impl NewCamper {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Checks the camper invariants without touching storage.
    pub fn validate(&self) -> ValidationResult<()> {
        check_camper_name(&self.name)?;
        check_camper_age(self.age)
    }
}

/// Partial camper update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CamperPatch {
    pub name: Option<String>,
    pub age: Option<i64>,
}

impl CamperPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none()
    }

    /// Validates every present field; the patch is rejected as a whole
    /// when any of them fails.
    pub fn validate(&self) -> ValidationResult<()> {
        if let Some(name) = self.name.as_deref() {
            check_camper_name(name)?;
        }
        if let Some(age) = self.age {
            check_camper_age(age)?;
        }
        Ok(())
    }
}

/// Camper together with the signups it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CamperDetail {
    pub camper: Camper,
    pub signups: Vec<SignupDetail>,
}
