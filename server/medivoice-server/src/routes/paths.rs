//! Route path constants
//!
//! utoipa `#[path(...)]` attributes need string literals, so the handler
//! annotations repeat these values; keep both in sync.

/// API base path
pub const API_V1: &str = "/api/v1";

/// Browser-facing chat endpoints
pub mod chat {
    pub const INDEX: &str = "/";
    pub const TRANSCRIBE: &str = "/transcribe";
}

/// JSON endpoints, relative to [`super::API_V1`]
pub mod api {
    pub const ADVICE: &str = "/advice";
    pub const TRANSCRIPTIONS: &str = "/transcriptions";
}

pub mod health {
    pub const HEALTH: &str = "/health";
}

pub mod docs {
    pub const SWAGGER_UI: &str = "/docs";
    pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
}
