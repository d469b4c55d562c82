pub mod form;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::diagnosis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(form::form_page))
        .route("/health", get(health::health_handler))
        .route("/api/v1/diagnosis", post(handlers::handle_diagnose))
        .with_state(state)
}
