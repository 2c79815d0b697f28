use crate::features::auth::handler;
use axum::{routing::get, Router};

/// Session routes, nested under `/api/admin`
pub fn routes() -> Router {
    Router::new().route("/me", get(handler::get_me))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{editor_user, with_admin_auth, with_user};
    use axum::http::StatusCode;
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_me_returns_admin() {
        let server = TestServer::new(with_admin_auth(routes())).unwrap();
        let response = server.get("/me").await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["data"]["sub"], "admin-sub");
    }

    #[tokio::test]
    async fn test_me_forbidden_for_non_admin() {
        let server = TestServer::new(with_user(routes(), editor_user())).unwrap();
        server.get("/me").await.assert_status(StatusCode::FORBIDDEN);
    }
}
