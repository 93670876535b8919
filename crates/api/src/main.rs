use anyhow::Result;
use tracing::info;

use vehicle_registry_api::{app, config, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration; missing database values abort startup here
    let config = config::Config::load()?;

    // Initialize logging
    logging::init_logging(&config.logging);

    info!("Starting Vehicle Registry API v{}", env!("CARGO_PKG_VERSION"));

    // Create database pool
    let pool = persistence::db::create_pool(&config.database).await?;

    // Ensure both tables and their relationship exist before serving
    persistence::schema::sync(&pool).await?;

    // Build application
    let addr = config.socket_addr()?;
    let app = app::create_app(config, pool);

    // Start server
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
