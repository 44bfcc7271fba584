mod account;
mod health;
mod swagger;
use crate::database::{self, PostgreDatabase, Storage};
use health::health_checker_handler;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{models::Error as ApiError, AppState, Config};

use axum::{http::Uri, routing::get, Router};
use std::error::Error;
use std::sync::Arc;

/// Connects the PostgreSQL store, makes sure its schema exists and returns the app router.
/// Any failure here is fatal for startup.
pub async fn make_app(config: &Config) -> Result<Router, Box<dyn Error>> {
    info!("Connecting to PostgreSQL...");
    let sqlx_db_connection = database::connect_sqlx(&config.db_url).await?;
    info!("Connected to PostgreSQL!");

    let db = PostgreDatabase::new(sqlx_db_connection);
    db.init().await?;
    info!("Account schema ready");

    let state = Arc::new(AppState { db: Arc::new(db) });
    Ok(build_router(state))
}

/// Builds the router over an already initialized store
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_checker_handler))
        .merge(account::account_routes())
        .merge(swagger::build_documentation())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn not_found_handler(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {uri}"))
}
