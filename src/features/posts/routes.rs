use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::posts::handlers;
use crate::features::posts::services::PostService;

/// Create public routes for the posts feature
pub fn routes(service: Arc<PostService>) -> Router {
    Router::new()
        .route("/api/posts", get(handlers::list_posts))
        .route("/api/posts/{slug}", get(handlers::get_post))
        .route(
            "/api/categories/{slug}/posts",
            get(handlers::list_category_posts),
        )
        .with_state(service)
}

/// Create admin routes, nested under `/api/admin`
pub fn admin_routes(service: Arc<PostService>) -> Router {
    Router::new()
        .route(
            "/posts",
            get(handlers::admin_list_posts).post(handlers::create_post),
        )
        .route(
            "/posts/{id}",
            get(handlers::admin_get_post)
                .put(handlers::update_post)
                .delete(handlers::delete_post),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::storage::AssetStorage;
    use crate::shared::test_helpers::{
        with_admin_auth, FailingAssetStorage, InMemoryAssetStorage, InMemoryContentStore,
    };
    use axum::http::StatusCode;
    use axum_test::multipart::{MultipartForm, Part};
    use axum_test::TestServer;

    fn setup_with(storage: Arc<dyn AssetStorage>) -> (Arc<InMemoryContentStore>, TestServer) {
        let store = Arc::new(InMemoryContentStore::new());
        let service = Arc::new(PostService::new(store.clone(), store.clone(), storage));
        let app = Router::new()
            .merge(routes(Arc::clone(&service)))
            .nest("/api/admin", with_admin_auth(admin_routes(service)));
        (store, TestServer::new(app).unwrap())
    }

    fn setup() -> (Arc<InMemoryContentStore>, TestServer) {
        setup_with(Arc::new(InMemoryAssetStorage::default()))
    }

    fn png() -> Part {
        Part::bytes(vec![0x89, b'P', b'N', b'G'])
            .file_name("cover.png")
            .mime_type("image/png")
    }

    #[tokio::test]
    async fn test_public_catalog_filters() {
        let (store, server) = setup();
        let health = store.seed_category("Health");
        let auto = store.seed_category("Auto");
        store.seed_post(health, "Medicare vs. Medicaid", None);
        store.seed_post(auto, "Medicare for Drivers?", None);

        let response = server
            .get("/api/posts")
            .add_query_param("q", "MEDICARE")
            .add_query_param("category", "health")
            .await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["data"]["total"], 1);
        assert_eq!(body["data"]["items"][0]["title"], "Medicare vs. Medicaid");
        assert_eq!(body["data"]["filters"]["category"], "health");
        assert!(body["data"]["reset"].is_null());

        let response = server.get("/api/posts").add_query_param("category", "All").await;
        let body: serde_json::Value = response.json();
        assert_eq!(body["data"]["total"], 2);
    }

    #[tokio::test]
    async fn test_empty_results_offer_reset() {
        let (store, server) = setup();
        let life = store.seed_category("Life");
        store.seed_post(life, "Term vs. Whole", None);

        let response = server.get("/api/posts").add_query_param("q", "flood").await;
        let body: serde_json::Value = response.json();
        assert_eq!(body["data"]["total"], 0);
        assert_eq!(body["data"]["reset"]["query"], "");
        assert_eq!(body["data"]["reset"]["category"], "All");
    }

    #[tokio::test]
    async fn test_category_posts_page() {
        let (store, server) = setup();
        let life = store.seed_category("Life");
        store.seed_post(life, "Term vs. Whole", None);

        let response = server.get("/api/categories/life/posts").await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["data"]["category"]["post_count"], 1);
        assert_eq!(body["data"]["posts"][0]["slug"], "term-vs-whole");

        server
            .get("/api/categories/nope/posts")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_post_with_image() {
        let (store, server) = setup();
        let auto = store.seed_category("Auto");

        let form = MultipartForm::new()
            .add_text("title", "Do You Need Gap Coverage?")
            .add_text("content", "<p>When your car is worth less than the loan.</p>")
            .add_text("category_id", auto.to_string())
            .add_part("image", png());

        let response = server.post("/api/admin/posts").multipart(form).await;
        response.assert_status(StatusCode::CREATED);
        let body: serde_json::Value = response.json();
        assert_eq!(body["data"]["slug"], "do-you-need-gap-coverage");
        assert!(body["data"]["featured_image"].as_str().is_some());

        let response = server.get("/api/posts/do-you-need-gap-coverage").await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(
            body["data"]["display_excerpt"],
            "When your car is worth less than the loan."
        );
    }

    #[tokio::test]
    async fn test_upload_failure_returns_error_and_saves_nothing() {
        let (store, server) = setup_with(Arc::new(FailingAssetStorage::default()));
        let auto = store.seed_category("Auto");

        let form = MultipartForm::new()
            .add_text("title", "Gap Coverage")
            .add_text("category_id", auto.to_string())
            .add_part("image", png());

        let response = server.post("/api/admin/posts").multipart(form).await;
        response.assert_status(StatusCode::BAD_GATEWAY);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(store.post_count(), 0);
    }

    #[tokio::test]
    async fn test_rejects_disallowed_image_type() {
        let (store, server) = setup();
        let auto = store.seed_category("Auto");

        let form = MultipartForm::new()
            .add_text("title", "Gap Coverage")
            .add_text("category_id", auto.to_string())
            .add_part(
                "image",
                Part::bytes(b"%PDF".to_vec())
                    .file_name("policy.pdf")
                    .mime_type("application/pdf"),
            );

        server
            .post("/api/admin/posts")
            .multipart(form)
            .await
            .assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(store.post_count(), 0);
    }

    #[tokio::test]
    async fn test_create_requires_title() {
        let (store, server) = setup();
        let auto = store.seed_category("Auto");

        let form = MultipartForm::new().add_text("category_id", auto.to_string());
        server
            .post("/api/admin/posts")
            .multipart(form)
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_admin_list_is_paginated() {
        let (store, server) = setup();
        let auto = store.seed_category("Auto");
        for i in 0..3 {
            store.seed_post(auto, &format!("Post {}", i), None);
        }

        let response = server
            .get("/api/admin/posts")
            .add_query_param("page", 2)
            .add_query_param("page_size", 2)
            .await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["meta"]["total"], 3);
        assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
        assert_eq!(body["data"][0]["title"], "Post 0");
    }

    #[tokio::test]
    async fn test_admin_list_past_the_end_is_empty() {
        let (store, server) = setup();
        let auto = store.seed_category("Auto");
        store.seed_post(auto, "Gap Coverage", None);

        let response = server
            .get("/api/admin/posts")
            .add_query_param("page", i64::MAX)
            .await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["meta"]["total"], 1);
        assert_eq!(body["data"].as_array().map(Vec::len), Some(0));
    }

    #[tokio::test]
    async fn test_delete_post() {
        let (store, server) = setup();
        let auto = store.seed_category("Auto");
        let id = store.seed_post(auto, "Gap Coverage", None);

        server
            .delete(&format!("/api/admin/posts/{}", id))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
        server
            .delete(&format!("/api/admin/posts/{}?confirm=true", id))
            .await
            .assert_status_ok();
        assert_eq!(store.post_count(), 0);
    }
}
