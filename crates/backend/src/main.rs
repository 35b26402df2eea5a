use axum::http::{header, Method};
use axum::middleware;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use backend::shared::app_state::AppState;
use backend::shared::config;
use backend::shared::data::db::initialize_database;
use backend::{routes, system};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load_config()?;

    system::tracing::initialize(
        &config::get_log_dir(&config),
        config.logging.filter.as_deref(),
    )?;

    match &config.loaded_from {
        Some(path) => tracing::info!("Loaded config from: {}", path.display()),
        None => tracing::info!("Using default embedded configuration"),
    }
    if config.distribution.enforce_full_allocation {
        tracing::info!("Strict mode: distributions require a 100% allocation");
    }

    let db = initialize_database(&config::get_database_path(&config))
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let state = AppState::new(db, config);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = routes::configure_routes(state)
        .layer(middleware::from_fn(system::middleware::request_logger))
        .layer(cors);

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
