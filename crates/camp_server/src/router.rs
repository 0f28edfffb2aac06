//! Route table and request logging.

use crate::handlers::{self, activities, campers, signups};
use crate::state::AppState;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use log::info;
use std::time::Instant;
use uuid::Uuid;

/// Builds the full camp router over an injected store handle.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route(
            "/campers",
            get(campers::list_campers).post(campers::create_camper),
        )
        .route(
            "/campers/{id}",
            get(campers::get_camper).patch(campers::patch_camper),
        )
        .route(
            "/activities",
            get(activities::list_activities).post(activities::create_activity),
        )
        .route(
            "/activities/{id}",
            get(activities::get_activity).delete(activities::delete_activity),
        )
        .route("/signups", post(signups::create_signup))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

async fn log_requests(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started_at = Instant::now();

    let response = next.run(request).await;

    info!(
        "event=http_request module=server status={} request_id={} method={} path={} duration_ms={}",
        response.status().as_u16(),
        request_id,
        method,
        path,
        started_at.elapsed().as_millis()
    );
    response
}
