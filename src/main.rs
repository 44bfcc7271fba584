mod app_state;
mod config;
mod database;
mod models;
mod routes;
pub use app_state::AppState;
pub use config::Config;

use crate::routes::make_app;
use std::error::Error;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::init()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .init();

    let app = make_app(&config).await?;
    let listener = TcpListener::bind(config.listen_addr).await?;
    info!("🚀 Server listening on {}", config.listen_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
