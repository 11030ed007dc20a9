pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers as matching_handlers;
use crate::quiz::handlers as quiz_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Quiz surface
        .route("/api/v1/questions", get(quiz_handlers::handle_questions))
        .route(
            "/api/v1/questions/:id",
            get(quiz_handlers::handle_question),
        )
        .route("/api/v1/analyze", post(quiz_handlers::handle_analyze))
        .route(
            "/api/v1/analyze/professional",
            post(quiz_handlers::handle_analyze_professional),
        )
        .route("/api/v1/groups", get(quiz_handlers::handle_groups))
        // Recommendation surface
        .route(
            "/api/v1/recommend",
            post(matching_handlers::handle_recommend),
        )
        .route(
            "/api/v1/recommend/professional",
            post(matching_handlers::handle_recommend_professional),
        )
        .route("/api/v1/stats", get(matching_handlers::handle_stats))
        .with_state(state)
}
