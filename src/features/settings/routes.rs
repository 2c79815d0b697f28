use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::settings::handlers;
use crate::features::settings::services::SettingsService;

pub fn routes(service: Arc<SettingsService>) -> Router {
    Router::new()
        .route("/api/settings", get(handlers::get_settings))
        .with_state(service)
}

/// Create admin routes, nested under `/api/admin`
pub fn admin_routes(service: Arc<SettingsService>) -> Router {
    Router::new()
        .route(
            "/settings",
            get(handlers::admin_get_settings).put(handlers::update_settings),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{with_admin_auth, InMemoryContentStore};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    fn server() -> TestServer {
        let service = Arc::new(SettingsService::new(Arc::new(InMemoryContentStore::new())));
        let app = Router::new()
            .merge(routes(Arc::clone(&service)))
            .nest("/api/admin", with_admin_auth(admin_routes(service)));
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_saved_settings_are_public() {
        let server = server();

        let response = server
            .put("/api/admin/settings")
            .json(&json!({ "contact_email": "help@example.com" }))
            .await;
        response.assert_status_ok();

        let response = server.get("/api/settings").await;
        let body: serde_json::Value = response.json();
        assert_eq!(body["data"]["contact_email"], "help@example.com");
        assert_eq!(body["data"]["site_title"], "CoverGuide");
    }

    #[tokio::test]
    async fn test_invalid_email_rejected() {
        server()
            .put("/api/admin/settings")
            .json(&json!({ "contact_email": "not-an-email" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}
