mod postgres;
#[cfg(test)]
pub mod memory;

use std::time::Duration;

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;

use crate::models::Account;

pub use postgres::PostgreDatabase;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("account not found: {0}")]
    NotFound(i32),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations the HTTP layer relies on. Any backend that can
/// hold accounts implements this; handlers only ever see `dyn Storage`.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Ensure the backing schema exists. Must be safe to call repeatedly.
    async fn init(&self) -> StoreResult<()>;
    /// Persist `account` and return it with its assigned `id`
    async fn create_account(&self, account: &Account) -> StoreResult<Account>;
    async fn delete_account(&self, id: i32) -> StoreResult<()>;
    /// Overwrite the names and balance of the row with `account.id`
    async fn update_account(&self, account: &Account) -> StoreResult<Account>;
    async fn list_accounts(&self) -> StoreResult<Vec<Account>>;
    async fn get_account_by_id(&self, id: i32) -> StoreResult<Account>;
}

/// Connects to a PostgreSQL database with the given `db_url`, returning a connection pool for accessing it
pub async fn connect_sqlx(db_url: &str) -> StoreResult<PgPool> {
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .idle_timeout(Duration::from_secs(30))
        .max_connections(32)
        .min_connections(1)
        .connect(db_url)
        .await?;
    Ok(pool)
}
