//! API Server Entry Point
//!
//! Loads configuration, runs migrations, bootstraps the admin account and
//! serves the auth and product routes. Startup failures surface as `anyhow`
//! errors; request failures are rendered by each crate's error type.

mod app;
mod config;

#[cfg(test)]
mod tests;

use std::net::SocketAddr;
use std::sync::Arc;

use auth::application::{EnsureAdminUseCase, SignedTokenIssuer};
use auth::store::AccessTokenRepository;
use auth::PgAuthRepository;
use axum::http::{self, Method, header};
use catalog::PgProductRepository;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::sensitive_headers::SetSensitiveHeadersLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::{AppParts, build_router};
use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,catalog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let auth_repo = Arc::new(PgAuthRepository::new(pool.clone()));
    let auth_config = Arc::new(config.auth);

    // Startup cleanup: remove expired tokens
    // Errors here should not prevent server startup
    if let Err(e) = auth_repo.cleanup_expired().await {
        tracing::warn!(
            error = %e,
            "Access token cleanup failed, continuing anyway"
        );
    }

    if let Some(admin) = config.admin {
        let outcome = EnsureAdminUseCase::new(auth_repo.clone(), auth_config.clone())
            .execute(admin)
            .await?;
        tracing::info!(?outcome, "Admin account ensured");
    }

    let issuer = Arc::new(SignedTokenIssuer::new(
        auth_repo.clone(),
        auth_repo.clone(),
        auth_config.clone(),
    ));

    // CORS configuration
    let allowed_origins: Vec<http::HeaderValue> = config
        .frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    // Build router
    let app = build_router(AppParts {
        users: auth_repo,
        issuer,
        products: Arc::new(PgProductRepository::new(pool)),
        auth_config,
    })
    .layer(TraceLayer::new_for_http())
    // Keep bearer tokens out of request traces
    .layer(SetSensitiveHeadersLayer::new([header::AUTHORIZATION]))
    .layer(cors);

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
