//! Main entry point for the marketplace backend.
//!
//! Initializes logging and configuration, opens the database pool, runs the
//! startup connectivity check, and starts the Axum server. A failed
//! connectivity check terminates the process with a non-zero exit rather
//! than silently serving requests against a broken store.

mod api;
mod auth;
mod config;
mod database;
mod errors;
mod repositories;
mod services;
mod utils;

use anyhow::Context;
use axum::{Extension, Router, response::Json, routing::get};
use config::Config;
use database::Database;
use serde_json::{Value, json};
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let db = Database::new(&config)
        .await
        .context("failed to open database pool")?;
    db.ping()
        .await
        .context("database connectivity check failed")?;
    db.migrate().await.context("failed to run migrations")?;
    let pool = db.pool().clone();

    let api_router = auth::routes::auth_router()
        .nest("/prestadores", api::provider::routes::provider_router())
        .nest("/avaliacoes", api::review::routes::review_router());

    let app = Router::new()
        .route("/health", get(health))
        .nest("/api", api_router)
        // Hashing is deliberately CPU-expensive; bound every request so it
        // cannot be used to exhaust the server.
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_seconds,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(Extension(pool))
        .layer(Extension(config.clone()));

    let bind_address = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;

    info!("Listening on port {}", config.server_port);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}
