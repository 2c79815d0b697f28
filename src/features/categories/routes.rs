use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create public routes for the categories feature
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/categories/{slug}", get(handlers::get_category))
        .with_state(service)
}

/// Create admin routes, nested under `/api/admin`
pub fn admin_routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route(
            "/categories",
            get(handlers::admin_list_categories).post(handlers::create_category),
        )
        .route(
            "/categories/{id}",
            get(handlers::admin_get_category)
                .put(handlers::update_category)
                .delete(handlers::delete_category),
        )
        .route(
            "/categories/{id}/delete-check",
            get(handlers::category_delete_check),
        )
        .with_state(service)
}
