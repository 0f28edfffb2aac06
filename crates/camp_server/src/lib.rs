//! HTTP surface for the camp signup service.
//!
//! # Responsibility
//! - Route JSON requests to `camp_core` use-case services.
//! - Own status codes, response shapes and error bodies.
//!
//! # Invariants
//! - Validation and not-found failures never escape as 5xx responses.
//! - The store handle is injected through router state, never a global.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod views;

pub use config::{ServerConfig, StoreLocation};
pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
