pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis;
use crate::cover_letter;
use crate::state::AppState;
use crate::tailoring;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume analysis API
        .route(
            "/api/v1/resume/analyze",
            post(analysis::handlers::handle_analyze),
        )
        .route(
            "/api/v1/resume/tailor",
            post(tailoring::handlers::handle_tailor),
        )
        // Cover-letter API (optional upstream)
        .route(
            "/api/v1/cover-letter",
            post(cover_letter::handlers::handle_generate),
        )
        .with_state(state)
}
