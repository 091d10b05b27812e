use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use trip_server::cache::{CacheConfig, CachedPlannerClient};
use trip_server::coordinator::RequestCoordinator;
use trip_server::planning::{PlannerClient, PlannerConfig};
use trip_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Planner client configuration from the environment
    let mut planner_config = PlannerConfig::default();
    if let Ok(url) = std::env::var("PLANNER_BASE_URL") {
        planner_config = planner_config.with_base_url(url);
    }
    if let Ok(secs) = std::env::var("PLANNER_TIMEOUT_SECS") {
        match secs.parse() {
            Ok(secs) => planner_config = planner_config.with_timeout(secs),
            Err(_) => eprintln!("Warning: ignoring invalid PLANNER_TIMEOUT_SECS: {secs}"),
        }
    }

    let planner =
        PlannerClient::new(planner_config.clone()).expect("Failed to create planner client");

    // Cache successful itineraries so re-submitting the same preferences
    // does not pay a second planning call
    let cached = CachedPlannerClient::new(planner, &CacheConfig::default());

    let coordinator = RequestCoordinator::new(cached);
    let state = AppState::new(coordinator);

    let static_dir =
        std::env::var("TRIP_SERVER_STATIC_DIR").unwrap_or_else(|_| "static".to_string());
    let app = create_router(state, &static_dir);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Trip Planner listening on http://{addr}");
    println!("Planning service: {}", planner_config.base_url);
    println!();
    println!("Open http://{addr} in your browser for the web interface.");
    println!();
    println!("Endpoints:");
    println!("  GET  /health  - Health check");
    println!("  GET  /about   - About page");
    println!("  POST /plan    - Submit trip preferences");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
