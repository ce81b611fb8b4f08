use std::net::SocketAddr;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use compass_server::catalog;
use compass_server::web::{AppState, create_router};

/// Default catalog path, relative to the working directory.
const DEFAULT_CSV_PATH: &str = "data/restrooms.csv";

/// Default listen port.
const DEFAULT_PORT: u16 = 8080;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Configuration from environment
    let csv_path = std::env::var("COMPASS_CSV")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CSV_PATH));
    let port: u16 = std::env::var("COMPASS_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let static_dir = std::env::var("COMPASS_STATIC_DIR").unwrap_or_else(|_| "static".to_string());

    // Load the catalog once; it is immutable for the life of the process
    let catalog = catalog::load_from_path(&csv_path).expect("Failed to load restroom catalog");
    if catalog.is_empty() {
        eprintln!(
            "Warning: catalog at {} is empty; every /update will fail.",
            csv_path.display()
        );
    }

    // Build app state and router
    let state = AppState::new(catalog);
    let app = create_router(state, &static_dir);

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("Restroom compass listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the compass.");
    println!();
    println!("Endpoints:");
    println!("  GET  /health       - Health check");
    println!("  GET  /map          - Map of all restrooms");
    println!("  POST /update       - Nearest restroom for a location");
    println!("  GET  /api/markers  - Full catalog as markers");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
