//! MediVoice server - voice and text symptom chat with spoken advice
//!
//! Serves a single chat page. A symptom typed or dictated into the page is
//! sent to a chat-completion model for brief advice, the advice is spoken
//! by a text-to-speech engine, and both come back in the same page. The
//! JSON API under `/api/v1` exposes the same flow to other clients.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod presentation;
pub mod routes;
pub mod services;
pub mod state;

pub use error::*;
pub use state::AppState;

use axum::{extract::DefaultBodyLimit, middleware::from_fn, Router};
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

/// Create the main application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let limits = state.limits;

    routes::create_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(from_fn(middleware::request_timing_middleware))
                .layer(TimeoutLayer::new(limits.request_timeout))
                .layer(DefaultBodyLimit::max(limits.max_upload_bytes)),
        )
        .with_state(state)
}
