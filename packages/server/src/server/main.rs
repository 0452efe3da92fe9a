// Main entry point for the presence server

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use server_core::domains::presence::PostgresShopStore;
use server_core::kernel::{PresenceConfig, ServerDeps};
use server_core::{server::build_app, Config};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Foundry presence server");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Run migrations
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations complete");

    // Assemble dependencies
    let presence = PresenceConfig {
        leave_cooldown: Duration::from_secs(config.leave_cooldown_secs),
        violation_reset_delay: Duration::from_secs(config.violation_reset_secs),
        dedup_violations: config.dedup_violations,
    };
    let deps = Arc::new(ServerDeps::new(
        Arc::new(PostgresShopStore::new(pool)),
        presence,
    ));

    // Build application
    let app = build_app(deps, &config.cors_origins);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Event stream: http://localhost:{}/events", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
