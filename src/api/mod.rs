use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::inference::TextGenerator;

pub mod error;
pub mod handlers;
pub mod types;

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
    pub api_key_configured: bool,
}

/// Routes only, no middleware.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/summarize", post(handlers::summarize))
        .route("/api/extract-actions", post(handlers::extract_actions))
        .route("/api/draft", post(handlers::draft))
        .route("/api/improve", post(handlers::improve))
        .route("/api/quick-reply", post(handlers::quick_reply))
        .route("/api/health", get(handlers::health))
}

/// Full application: routes, open CORS for the add-in origin, request tracing.
pub fn app(state: AppState) -> Router {
    router()
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .with_state(state)
}
