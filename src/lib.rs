pub mod config;
pub mod error;
pub mod handlers;
pub mod leaderboard;
pub mod metrics;
pub mod models;
pub mod rate_limit;
pub mod state;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{fallback_handler, health_handler, leaders_handler, metrics_handler};
use crate::state::AppState;

pub use crate::handlers::LEADERS_PATH;

// creating the router with routes
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(LEADERS_PATH, get(leaders_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
