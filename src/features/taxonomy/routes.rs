use axum::{routing::get, Router};

use crate::features::taxonomy::handlers;

/// Create routes for the taxonomy feature
///
/// Note: This feature is public and stateless; the tree is compiled in.
pub fn routes() -> Router {
    Router::new()
        .route("/api/taxonomy", get(handlers::get_tree))
        .route("/api/taxonomy/menu", get(handlers::get_menu))
        .route("/api/taxonomy/page/{*path}", get(handlers::get_page))
        .route("/api/taxonomy/nodes/{*path}", get(handlers::get_node))
}
