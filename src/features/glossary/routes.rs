use axum::{routing::get, Router};

use crate::features::glossary::handlers;

/// Create routes for the glossary feature
pub fn routes() -> Router {
    Router::new()
        .route("/api/glossary", get(handlers::search_glossary))
        .route(
            "/api/glossary/categories",
            get(handlers::list_glossary_categories),
        )
}
