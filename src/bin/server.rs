//! GradPlan HTTP Server Binary
//!
//! This is the main entry point for the degree planner REST API server.
//! It loads the catalog directory into the in-memory repository, sets up the
//! HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Serve the catalogs under data/maps (default)
//! cargo run --bin gradplan-server --features http-server
//!
//! # Serve a different catalog directory
//! CATALOG_DIR=/srv/catalogs cargo run --bin gradplan-server --features http-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `CATALOG_DIR`: Directory of `*.json` degree catalogs (default: data/maps)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use gradplan_rust::catalogs::{CatalogRepository, LocalRepository};
use gradplan_rust::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting GradPlan HTTP Server");

    // Load all catalogs once; they are read-only for the server's lifetime
    let catalog_dir = env::var("CATALOG_DIR").unwrap_or_else(|_| "data/maps".to_string());
    let repository: Arc<dyn CatalogRepository> =
        Arc::new(LocalRepository::from_dir(&catalog_dir)?);
    info!("Catalog repository initialized from {}", catalog_dir);

    // Create application state
    let state = AppState::new(repository);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("API documentation: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
