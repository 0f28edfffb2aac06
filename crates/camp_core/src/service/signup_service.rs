//! Signup use-case service.

use super::{ServiceError, ServiceResult};
use crate::model::signup::SignupDetail;
use crate::repo::signup_repo::SignupRepository;
use crate::validation::validate_signup_create;
use log::{info, warn};
use serde_json::Value;

/// Signup creation over a signup repository.
pub struct SignupService<S: SignupRepository> {
    signups: S,
}

impl<S: SignupRepository> SignupService<S> {
    pub fn new(signups: S) -> Self {
        Self { signups }
    }

    /// Validates the payload, inserts the signup and reads it back joined
    /// with its camper and activity.
    ///
    /// Unknown `camper_id`/`activity_id` surface as
    /// `ServiceError::Validation` once the store rejects the insert.
    pub fn create_signup(&self, payload: &Value) -> ServiceResult<SignupDetail> {
        let draft = validate_signup_create(payload)?;
        let signup = self.signups.create_signup(&draft).inspect_err(|err| {
            warn!("event=signup_create module=service status=rejected error={err}");
        })?;
        info!(
            "event=signup_create module=service status=ok signup_id={} camper_id={} activity_id={}",
            signup.id, signup.camper_id, signup.activity_id
        );

        self.signups
            .get_signup_detail(signup.id)?
            .ok_or(ServiceError::InconsistentState(
                "created signup not found in read-back",
            ))
    }
}
