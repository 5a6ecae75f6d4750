//! Assistant CRUD HTTP Service
//!
//! A small in-memory CRUD API built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ─────────────────▶ middleware stack
//!                          panic guard → timeout → trace → request log
//!                               │
//!                               ▼
//!                          route match
//!                               │
//!                               ▼
//!                          handler (validate → store op → respond)
//!                               │
//!                               ▼
//!                        AssistantStore
//!                 (mutex-guarded Vec + id counter)
//! ```
//!
//! Routes:
//! - `GET /` and `GET /health` — liveness probes
//! - `GET/POST /assistants`, `GET/PUT/DELETE /assistants/{id}` — CRUD

use std::path::Path;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use assistant_api::config::loader::load_config;
use assistant_api::{HttpServer, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "assistant_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("assistant-api v0.1.0 starting");

    // Load configuration from the optional first argument, defaults otherwise
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => ServiceConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
