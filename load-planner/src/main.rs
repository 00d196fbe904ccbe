use std::net::SocketAddr;

use load_planner::cache::CachedDistanceOracle;
use load_planner::distance::{RoutesClient, RoutesConfig};
use load_planner::loadboard::JsonLoadBoard;
use load_planner::planner::PlannerConfig;
use load_planner::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Directory of load files used when `LOAD_BOARD_DIR` is unset.
const DEFAULT_LOAD_BOARD_DIR: &str = "data/loads";

/// Listen address used when `LOAD_PLANNER_ADDR` is unset.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("load_planner=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_key = std::env::var("GOOGLE_MAPS_API_KEY").unwrap_or_else(|_| {
        warn!("GOOGLE_MAPS_API_KEY not set; deadhead distances will be reported as 0");
        String::new()
    });
    let board_dir =
        std::env::var("LOAD_BOARD_DIR").unwrap_or_else(|_| DEFAULT_LOAD_BOARD_DIR.to_string());
    let addr: SocketAddr = std::env::var("LOAD_PLANNER_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()?;

    let board = JsonLoadBoard::from_dir(&board_dir)?;

    let routes = RoutesClient::new(RoutesConfig::new(api_key))?;
    let distances = CachedDistanceOracle::new(routes);

    let state = AppState::new(board, distances, PlannerConfig::default());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Load planner listening");
    info!("  GET  /health           - Health check");
    info!("  POST /trip/plan        - Plan a multi-load trip");
    info!("  POST /backhaul/search  - Find outbound/return pairs");
    info!("  POST /route/metrics    - Totals for a route");

    axum::serve(listener, app).await?;
    Ok(())
}
