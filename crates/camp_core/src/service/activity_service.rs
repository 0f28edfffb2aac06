//! Activity use-case service.

use super::{ServiceError, ServiceResult};
use crate::model::activity::{Activity, ActivityDetail, ActivityId};
use crate::model::EntityKind;
use crate::repo::activity_repo::ActivityRepository;
use crate::repo::signup_repo::SignupRepository;
use crate::validation::validate_activity_create;
use log::{info, warn};
use serde_json::Value;

/// Activity use cases over activity and signup repositories.
pub struct ActivityService<A: ActivityRepository, S: SignupRepository> {
    activities: A,
    signups: S,
}

impl<A: ActivityRepository, S: SignupRepository> ActivityService<A, S> {
    pub fn new(activities: A, signups: S) -> Self {
        Self {
            activities,
            signups,
        }
    }

    pub fn list_activities(&self) -> ServiceResult<Vec<Activity>> {
        Ok(self.activities.list_activities()?)
    }

    /// Gets one activity with the signups referencing it.
    pub fn get_activity(&self, id: ActivityId) -> ServiceResult<ActivityDetail> {
        let activity = self
            .activities
            .get_activity(id)?
            .ok_or_else(|| ServiceError::not_found(EntityKind::Activity, id))?;
        let signups = self.signups.list_signups_for_activity(id)?;
        Ok(ActivityDetail { activity, signups })
    }

    pub fn create_activity(&self, payload: &Value) -> ServiceResult<ActivityDetail> {
        let draft = validate_activity_create(payload).inspect_err(|_| {
            warn!("event=activity_create module=service status=rejected error_code=validation_failed");
        })?;
        let activity = self.activities.create_activity(&draft)?;
        info!(
            "event=activity_create module=service status=ok activity_id={}",
            activity.id
        );
        Ok(ActivityDetail {
            activity,
            signups: Vec::new(),
        })
    }

    /// Deletes the activity together with all of its signups.
    pub fn delete_activity(&self, id: ActivityId) -> ServiceResult<()> {
        let removed_signups = self.activities.delete_activity_cascade(id)?;
        info!(
            "event=activity_delete module=service status=ok activity_id={id} removed_signups={removed_signups}"
        );
        Ok(())
    }
}
