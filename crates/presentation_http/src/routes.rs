//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Booking API (v1)
        .route("/v1/bookings", post(handlers::bookings::submit_booking))
        .route(
            "/v1/destinations",
            get(handlers::destinations::list_destinations),
        )
        // Attach state
        .with_state(state)
}
