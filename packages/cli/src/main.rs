use axum::http::Method;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

mod config;

use config::Config;
use stackfeed_questions::{api, DbState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    info!("Starting Stackfeed server on port {}", config.port);

    let db = DbState::init(&config.database).await?;

    // Create CORS layer
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.parse::<axum::http::HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    // Create the router with CORS
    let app = api::create_questions_router(db).layer(cors);

    // Create socket address
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));

    info!("Server listening on {}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
