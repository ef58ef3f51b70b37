//! # roomtempd — roomtemp daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (`.env`, `roomtemp.toml`, env vars)
//! - Initialise logging
//! - Open the `PostgreSQL` pool and run the schema migration once
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT) and close the pool
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use roomtemp_adapter_http_axum::state::AppState;
use roomtemp_adapter_storage_postgres_sqlx::{PgReadingRepository, PgRoomRepository};
use roomtemp_app::services::reading_service::ReadingService;
use roomtemp_app::services::room_service::RoomService;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is not an error.
    let dotenv = dotenvy::dotenv();

    let config = config::Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded environment file");
    }

    // Database
    let storage = config.storage();
    tracing::info!(
        host = %storage.host,
        port = storage.port,
        database = %storage.database,
        "connecting to PostgreSQL"
    );
    let db = storage.build().await?;
    let pool = db.pool().clone();

    // Repositories
    let room_repo = PgRoomRepository::new(pool.clone());
    let reading_repo = PgReadingRepository::new(pool);

    // Services
    let room_service = RoomService::new(room_repo);
    let reading_service = ReadingService::new(reading_repo);

    // HTTP
    let state = AppState::new(room_service, reading_service);
    let app = roomtemp_adapter_http_axum::router::build(state, config.request_timeout());

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "roomtempd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    tracing::info!("roomtempd stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(%err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received, draining connections");
}
