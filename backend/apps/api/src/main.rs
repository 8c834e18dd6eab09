//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use anyhow::Context;
use auth::{AuthConfig, InMemoryUserRepository, SessionRegistry, auth_router, require_bearer_session};
use axum::{
    Router, http,
    http::{Method, header},
    middleware::from_fn_with_state,
};
use coupon::coupon_router;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,coupon=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // User directory
    let users = match env::var("USER_SEED_PATH") {
        Ok(path) => InMemoryUserRepository::from_seed_file(&path)
            .with_context(|| format!("failed to load user seed from {path}"))?,
        Err(_) => {
            tracing::info!("USER_SEED_PATH not set, using demo users");
            InMemoryUserRepository::demo()?
        }
    };

    // Auth configuration
    let cookie_secure = env::var("COOKIE_SECURE")
        .map(|value| matches!(value.trim(), "1" | "true" | "yes"))
        .unwrap_or(!cfg!(debug_assertions));
    let auth_config = if cookie_secure {
        AuthConfig::default()
    } else {
        AuthConfig::development()
    };

    // One registry for the whole process, shared by login and the bearer guard
    let registry = Arc::new(SessionRegistry::new());

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:4200,http://127.0.0.1:4200".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let coupons = coupon_router().layer(from_fn_with_state(
        registry.clone(),
        require_bearer_session,
    ));

    let app = Router::new()
        .nest("/rest/user", auth_router(users, registry, auth_config))
        .nest("/rest/coupon", coupons)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr: SocketAddr = env::var("API_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()
        .context("API_ADDR must be a socket address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
