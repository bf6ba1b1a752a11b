//! Permit API - stateless HTTP front for the progress engine
//!
//! Provides REST endpoints for:
//! - Category listing and checklist lookup
//! - Category progress and overall completion
//! - Deadline urgency
//! - Full project readiness reports

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use state::AppState;

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    // CORS configuration for the dashboard
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/checklists/:category", get(handlers::get_checklist))
        .route("/api/progress", post(handlers::compute_progress))
        .route("/api/deadline", post(handlers::evaluate_deadline))
        .route("/api/projects/report", post(handlers::project_report))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
