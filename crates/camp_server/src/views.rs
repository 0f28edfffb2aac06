//! Client-facing JSON representations.
//!
//! Listings use the flat summaries. Item reads and write responses use the
//! full views, which add directly owned signups. A signup embedded in a
//! parent drops the back-reference to that parent, so nesting stops after
//! one level.

use camp_core::{Activity, ActivityDetail, Camper, CamperDetail, SignupDetail};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CamperSummary {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

impl From<&Camper> for CamperSummary {
    fn from(camper: &Camper) -> Self {
        Self {
            id: camper.id,
            name: camper.name.clone(),
            age: camper.age,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivitySummary {
    pub id: i64,
    pub name: String,
    pub difficulty: i64,
}

impl From<&Activity> for ActivitySummary {
    fn from(activity: &Activity) -> Self {
        Self {
            id: activity.id,
            name: activity.name.clone(),
            difficulty: activity.difficulty,
        }
    }
}

/// Signup as listed under its camper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CamperSignupView {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub activity: ActivitySummary,
}

/// Signup as listed under its activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivitySignupView {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub camper: CamperSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CamperView {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub signups: Vec<CamperSignupView>,
}

impl From<&CamperDetail> for CamperView {
    fn from(detail: &CamperDetail) -> Self {
        Self {
            id: detail.camper.id,
            name: detail.camper.name.clone(),
            age: detail.camper.age,
            signups: detail
                .signups
                .iter()
                .map(|entry| CamperSignupView {
                    id: entry.signup.id,
                    time: entry.signup.time,
                    camper_id: entry.signup.camper_id,
                    activity_id: entry.signup.activity_id,
                    activity: ActivitySummary::from(&entry.activity),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityView {
    pub id: i64,
    pub name: String,
    pub difficulty: i64,
    pub signups: Vec<ActivitySignupView>,
}

impl From<&ActivityDetail> for ActivityView {
    fn from(detail: &ActivityDetail) -> Self {
        Self {
            id: detail.activity.id,
            name: detail.activity.name.clone(),
            difficulty: detail.activity.difficulty,
            signups: detail
                .signups
                .iter()
                .map(|entry| ActivitySignupView {
                    id: entry.signup.id,
                    time: entry.signup.time,
                    camper_id: entry.signup.camper_id,
                    activity_id: entry.signup.activity_id,
                    camper: CamperSummary::from(&entry.camper),
                })
                .collect(),
        }
    }
}

/// Standalone signup with both parents in flat form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupView {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub camper: CamperSummary,
    pub activity: ActivitySummary,
}

impl From<&SignupDetail> for SignupView {
    fn from(detail: &SignupDetail) -> Self {
        Self {
            id: detail.signup.id,
            time: detail.signup.time,
            camper_id: detail.signup.camper_id,
            activity_id: detail.signup.activity_id,
            camper: CamperSummary::from(&detail.camper),
            activity: ActivitySummary::from(&detail.activity),
        }
    }
}
