//! Activity entity and its create draft.

use crate::model::signup::SignupDetail;
use crate::validation::ValidationResult;
use serde::{Deserialize, Serialize};

pub type ActivityId = i64;

/// Persisted activity row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub name: String,
    /// Unbounded; any integer is accepted.
    pub difficulty: i64,
}

/// Activity fields accepted on create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActivity {
    pub name: String,
    pub difficulty: i64,
}

impl NewActivity {
    pub fn new(name: impl Into<String>, difficulty: i64) -> Self {
        Self {
            name: name.into(),
            difficulty,
        }
    }

    /// Activities carry no value constraints beyond their field types,
    /// which the type system already guarantees here.
    pub fn validate(&self) -> ValidationResult<()> {
        Ok(())
    }
}

/// Activity together with the signups that reference it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityDetail {
    pub activity: Activity,
    pub signups: Vec<SignupDetail>,
}
