//! Camper use-case service.

use super::{ServiceError, ServiceResult};
use crate::model::camper::{Camper, CamperDetail, CamperId};
use crate::model::EntityKind;
use crate::repo::camper_repo::CamperRepository;
use crate::repo::signup_repo::SignupRepository;
use crate::validation::{validate_camper_create, validate_camper_patch};
use log::{info, warn};
use serde_json::Value;

/// Camper use cases over camper and signup repositories.
pub struct CamperService<C: CamperRepository, S: SignupRepository> {
    campers: C,
    signups: S,
}

impl<C: CamperRepository, S: SignupRepository> CamperService<C, S> {
    pub fn new(campers: C, signups: S) -> Self {
        Self { campers, signups }
    }

    pub fn list_campers(&self) -> ServiceResult<Vec<Camper>> {
        Ok(self.campers.list_campers()?)
    }

    /// Gets one camper with the signups it owns.
    pub fn get_camper(&self, id: CamperId) -> ServiceResult<CamperDetail> {
        let camper = self.require_camper(id)?;
        self.with_signups(camper)
    }

    /// Validates a create payload and persists the camper.
    pub fn create_camper(&self, payload: &Value) -> ServiceResult<CamperDetail> {
        let draft = validate_camper_create(payload).inspect_err(|_| {
            warn!("event=camper_create module=service status=rejected error_code=validation_failed");
        })?;
        let camper = self.campers.create_camper(&draft)?;
        info!(
            "event=camper_create module=service status=ok camper_id={}",
            camper.id
        );
        Ok(CamperDetail {
            camper,
            signups: Vec::new(),
        })
    }

    /// Applies a partial update.
    ///
    /// # Contract
    /// - Unknown camper id wins over an invalid payload (`NotFound` first).
    /// - Any invalid field rejects the whole patch; nothing is written.
    pub fn patch_camper(&self, id: CamperId, payload: &Value) -> ServiceResult<CamperDetail> {
        self.require_camper(id)?;
        let patch = validate_camper_patch(payload).inspect_err(|_| {
            warn!(
                "event=camper_patch module=service status=rejected camper_id={id} error_code=validation_failed"
            );
        })?;

        let camper = self.campers.apply_camper_patch(id, &patch)?;
        info!("event=camper_patch module=service status=ok camper_id={id}");
        self.with_signups(camper)
    }

    fn require_camper(&self, id: CamperId) -> ServiceResult<Camper> {
        self.campers
            .get_camper(id)?
            .ok_or_else(|| ServiceError::not_found(EntityKind::Camper, id))
    }

    fn with_signups(&self, camper: Camper) -> ServiceResult<CamperDetail> {
        let signups = self.signups.list_signups_for_camper(camper.id)?;
        Ok(CamperDetail { camper, signups })
    }
}
