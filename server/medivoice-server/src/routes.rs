pub mod paths;

use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    handlers::{api, chat, health, transcribe},
    openapi,
    state::AppState,
};

/// Chat page and the recorder upload it posts to
pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route(paths::chat::INDEX, get(chat::welcome_page).post(chat::submit_symptom))
        .route(paths::chat::TRANSCRIBE, post(transcribe::transcribe))
}

/// JSON API, nested under [`paths::API_V1`]
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(paths::api::ADVICE, post(api::create_advice))
        .route(paths::api::TRANSCRIPTIONS, post(api::create_transcription))
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route(paths::health::HEALTH, get(health::health_check))
}

/// Create all application routes
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .merge(chat_routes())
        .merge(health_routes())
        .nest(paths::API_V1, api_routes())
        .merge(openapi::swagger_ui())
}
