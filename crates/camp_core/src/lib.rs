//! Core domain logic for the camp signup service.
//! This crate is the single source of truth for camper, activity and signup
//! invariants; HTTP concerns live in `camp_server`.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod validation;

pub use logging::{default_log_level, init_logging, logging_status, LogDestination};
pub use model::activity::{Activity, ActivityDetail, ActivityId, NewActivity};
pub use model::camper::{Camper, CamperDetail, CamperId, CamperPatch, NewCamper};
pub use model::signup::{NewSignup, Signup, SignupDetail, SignupId};
pub use model::EntityKind;
pub use repo::activity_repo::{ActivityRepository, SqliteActivityRepository};
pub use repo::camper_repo::{CamperRepository, SqliteCamperRepository};
pub use repo::signup_repo::{SignupRepository, SqliteSignupRepository};
pub use repo::{RepoError, RepoResult};
pub use service::activity_service::ActivityService;
pub use service::camper_service::CamperService;
pub use service::signup_service::SignupService;
pub use service::{ServiceError, ServiceResult};
pub use validation::{ValidationError, ValidationResult};
