pub mod error;
pub mod handlers;
pub mod page;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use state::SharedState;
use tower_http::trace::TraceLayer;

pub fn app(state: SharedState) -> Router {
    Router::new()
        .route("/", get(handlers::search_page))
        .route("/health", get(handlers::health))
        .route("/ai-search", get(handlers::ai_search_redirect))
        .route("/api/ai-search", post(handlers::ai_search))
        .layer(TraceLayer::new_for_http())
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any) // In production, specific origin should be used
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .with_state(state)
}
