use crate::core::error::AppError;
use crate::features::auth::TokenVerifier;
use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::prelude::*;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

/// Request ID generator using UUID v7 (time-ordered)
#[derive(Clone, Copy)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Custom MakeSpan that includes request_id in the tracing span
#[derive(Clone, Debug)]
pub struct MakeSpanWithRequestId;

impl<B> tower_http::trace::MakeSpan<B> for MakeSpanWithRequestId {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

pub fn cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    // If origins list contains "*", allow any origin
    if allowed_origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

pub fn basic_auth_middleware(
    valid_credentials: Arc<String>,
) -> impl Fn(
    Request,
    Next,
)
    -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, Response>> + Send>>
       + Clone {
    move |req: Request, next: Next| {
        let credentials = valid_credentials.clone();
        Box::pin(async move {
            let decoded = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|h| h.to_str().ok())
                .and_then(|h| h.strip_prefix("Basic "))
                .and_then(|encoded| BASE64_STANDARD.decode(encoded).ok())
                .and_then(|bytes| String::from_utf8(bytes).ok());

            if decoded.as_deref() == Some(credentials.as_str()) {
                return Ok(next.run(req).await);
            }

            Err((
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Basic realm=\"Swagger UI\"")],
                "Unauthorized",
            )
                .into_response())
        })
    }
}

/// Validate the bearer token and attach the session user to the request
///
/// This is the only place that reads session state; handlers receive the
/// user through the `AuthenticatedUser` extractor.
pub async fn auth_middleware(
    State(verifier): State<Arc<dyn TokenVerifier>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Unauthorized("Invalid authorization header format".to_string())
    })?;

    let user = verifier.verify(token).await?;

    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{admin_user, StaticTokenVerifier};
    use axum::{routing::get, Router};
    use axum_test::TestServer;

    async fn whoami(user: crate::features::auth::model::AuthenticatedUser) -> String {
        user.sub
    }

    fn protected_app() -> Router {
        let verifier: Arc<dyn TokenVerifier> =
            Arc::new(StaticTokenVerifier::new("good-token", admin_user()));
        Router::new()
            .route("/whoami", get(whoami))
            .route_layer(axum::middleware::from_fn_with_state(
                verifier,
                auth_middleware,
            ))
    }

    #[tokio::test]
    async fn test_auth_middleware_rejects_missing_header() {
        let server = TestServer::new(protected_app()).unwrap();
        let response = server.get("/whoami").await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_auth_middleware_rejects_non_bearer() {
        let server = TestServer::new(protected_app()).unwrap();
        let response = server
            .get("/whoami")
            .add_header(header::AUTHORIZATION, HeaderValue::from_static("Token good-token"))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_auth_middleware_injects_user() {
        let server = TestServer::new(protected_app()).unwrap();
        let response = server
            .get("/whoami")
            .add_header(
                header::AUTHORIZATION,
                HeaderValue::from_static("Bearer good-token"),
            )
            .await;
        response.assert_status_ok();
        response.assert_text(admin_user().sub);
    }

    #[tokio::test]
    async fn test_basic_auth_middleware() {
        let app = Router::new()
            .route("/docs", get(|| async { "docs" }))
            .layer(axum::middleware::from_fn(basic_auth_middleware(Arc::new(
                "docs:secret".to_string(),
            ))));
        let server = TestServer::new(app).unwrap();

        server
            .get("/docs")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);

        let encoded = BASE64_STANDARD.encode("docs:secret");
        server
            .get("/docs")
            .add_header(
                header::AUTHORIZATION,
                HeaderValue::from_str(&format!("Basic {}", encoded)).unwrap(),
            )
            .await
            .assert_status_ok();
    }
}
