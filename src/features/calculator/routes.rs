use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::calculator::handlers;
use crate::features::calculator::services::CalculatorService;

/// Create routes for the calculator feature
pub fn routes(service: Arc<CalculatorService>) -> Router {
    Router::new()
        .route("/api/calculator", get(handlers::calculate))
        .route("/api/calculator/types", get(handlers::list_types))
        .route("/api/calculator/parse", post(handlers::parse_share_link))
        .with_state(service)
}
