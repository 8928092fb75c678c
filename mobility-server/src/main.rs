use std::net::SocketAddr;

use mobility_server::estimator::Estimator;
use mobility_server::model::ModelTables;
use mobility_server::registry::quito_locations;
use mobility_server::transit::quito_network;
use mobility_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mobility_server=info")),
        )
        .init();

    // Static reference data, built once for the process lifetime
    let registry = quito_locations();
    let network = quito_network();
    let tables = ModelTables::default();

    println!(
        "Loaded {} locations and {} transit lines",
        registry.len(),
        network.lines().len()
    );

    let estimator = Estimator::new(registry, network, tables);
    let state = AppState::new(estimator);
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Trip estimator listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health             - Health check");
    println!("  GET  /api/locations      - List registered locations");
    println!("  POST /api/trip/estimate  - Compare a trip across modes");
    println!("  GET  /api/transit/line   - Find a direct transit line");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app).await.expect("server error");
}
