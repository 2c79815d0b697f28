mod core;
mod features;
mod modules;
mod shared;

use crate::core::config::Config;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::{database, middleware};
use crate::features::auth::{self, TokenVerifier};
use crate::features::calculator::{routes as calculator_routes, CalculatorService};
use crate::features::categories::{
    routes as categories_routes, CategoryService, PgCategoryRepository,
};
use crate::features::dashboard::{routes as dashboard_routes, DashboardService};
use crate::features::glossary::routes as glossary_routes;
use crate::features::posts::{routes as posts_routes, PgPostRepository, PostService};
use crate::features::settings::{
    routes as settings_routes, PgSettingsRepository, SettingsService,
};
use crate::features::taxonomy::{self, routes as taxonomy_routes};
use crate::modules::storage::{AssetStorage, MinIOClient};
use axum::{extract::DefaultBodyLimit, middleware::from_fn, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    // Log system info
    let available_cpus = std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1);
    tracing::info!(
        "System info: available_cpus={}, tokio_worker_threads={}, pid={}",
        available_cpus,
        worker_threads,
        std::process::id()
    );

    tracing::info!("Configuration loaded successfully");

    // The taxonomy is compiled in; refuse to start if it is malformed
    taxonomy::validate().map_err(|e| anyhow::anyhow!("Invalid taxonomy: {}", e))?;
    tracing::info!("Taxonomy validated");

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations automatically
    tracing::info!("Running database migrations...");
    database::run_migrations(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    tracing::info!("Database migrations completed successfully");

    // Initialize auth
    let jwks_client = Arc::new(auth::JwksClient::new(
        &config.auth.jwks_url,
        config.auth.jwks_cache_ttl,
    ));
    let token_verifier: Arc<dyn TokenVerifier> = Arc::new(auth::JwtValidator::new(
        jwks_client,
        config.auth.issuer.clone(),
        config.auth.audience.clone(),
        config.auth.jwt_leeway,
        config.auth.admin_role.clone(),
    ));
    tracing::info!(
        "Auth configuration initialized (admin role: {})",
        config.auth.admin_role
    );

    // Initialize MinIO client for featured images
    let minio_client = MinIOClient::new(config.minio.clone())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize MinIO client: {}", e))?;
    tracing::info!(
        "MinIO client initialized for bucket: {}",
        minio_client.bucket_name()
    );
    let storage: Arc<dyn AssetStorage> = Arc::new(minio_client);

    // Repositories
    let category_repo = Arc::new(PgCategoryRepository::new(pool.clone()));
    let post_repo = Arc::new(PgPostRepository::new(pool.clone()));
    let settings_repo = Arc::new(PgSettingsRepository::new(pool.clone()));

    // Services
    let category_service = Arc::new(CategoryService::new(category_repo.clone()));
    tracing::info!("Category service initialized");

    let post_service = Arc::new(PostService::new(
        post_repo.clone(),
        category_repo.clone(),
        Arc::clone(&storage),
    ));
    tracing::info!("Post service initialized");

    let settings_service = Arc::new(SettingsService::new(settings_repo));
    tracing::info!("Settings service initialized");

    let dashboard_service = Arc::new(DashboardService::new(post_repo, category_repo));
    tracing::info!("Dashboard service initialized");

    let calculator_service = Arc::new(CalculatorService::new(config.app.frontend_url.clone()));
    tracing::info!(
        "Calculator service initialized (share links point at {})",
        config.app.frontend_url
    );

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    // Build swagger router
    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    // Back office (require JWT authentication, admin role checked per handler)
    let admin_routes = Router::new()
        .merge(auth::routes::routes())
        .merge(dashboard_routes::routes(dashboard_service))
        .merge(posts_routes::admin_routes(Arc::clone(&post_service)))
        .merge(categories_routes::admin_routes(Arc::clone(&category_service)))
        .merge(settings_routes::admin_routes(Arc::clone(&settings_service)))
        .route_layer(axum::middleware::from_fn_with_state(
            token_verifier,
            middleware::auth_middleware,
        ));

    // Simple health check endpoint (no auth required)
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    // Public routes (no auth required)
    let public_routes = Router::new()
        .merge(taxonomy_routes::routes())
        .merge(glossary_routes::routes())
        .merge(calculator_routes::routes(calculator_service))
        .merge(posts_routes::routes(post_service))
        .merge(categories_routes::routes(category_service))
        .merge(settings_routes::routes(settings_service));

    let app = Router::new()
        .merge(swagger)
        .nest("/api/admin", admin_routes)
        .merge(public_routes)
        .merge(health_route)
        // Featured image uploads exceed axum's default body limit
        .layer(DefaultBodyLimit::max(config.app.max_request_body_size))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nodelay(true)?;

    socket.set_recv_buffer_size(256 * 1024)?;
    socket.set_send_buffer_size(256 * 1024)?;

    #[cfg(target_os = "linux")]
    {
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(std::time::Duration::from_secs(60))
            .with_interval(std::time::Duration::from_secs(10))
            .with_retries(3);
        socket.set_tcp_keepalive(&keepalive)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
        socket.set_tcp_keepalive(&keepalive)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(65535)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}
