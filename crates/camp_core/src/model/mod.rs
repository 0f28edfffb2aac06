//! Camp domain model.
//!
//! # Responsibility
//! - Define persisted entities (`Camper`, `Activity`, `Signup`).
//! - Define write drafts (`NewCamper`, `NewActivity`, `NewSignup`,
//!   `CamperPatch`) that carry their own `validate()` checks.
//! - Define read models joining a signup with both of its parents.
//!
//! # Invariants
//! - Ids are assigned by the store and never reused.
//! - A `Signup` always points at one camper and one activity.

pub mod activity;
pub mod camper;
pub mod signup;

use std::fmt::{Display, Formatter};

/// Entity kinds addressable by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Camper,
    Activity,
}

impl EntityKind {
    /// Human-facing label, also used in not-found response bodies.
    pub fn label(self) -> &'static str {
        match self {
            Self::Camper => "Camper",
            Self::Activity => "Activity",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
