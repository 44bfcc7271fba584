use async_trait::async_trait;
use sqlx::PgPool;

use super::{Storage, StoreError, StoreResult};
use crate::models::Account;

const ACCOUNT_COLUMNS: &str = "id, first_name, last_name, number, balance, created_at";

pub struct PostgreDatabase {
    sqlx_db: PgPool,
}

impl PostgreDatabase {
    pub fn new(sqlx_db: PgPool) -> Self {
        PostgreDatabase { sqlx_db }
    }
}

#[async_trait]
impl Storage for PostgreDatabase {
    async fn init(&self) -> StoreResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS account (
                id SERIAL PRIMARY KEY,
                first_name VARCHAR(50) NOT NULL,
                last_name VARCHAR(50) NOT NULL,
                number BIGINT NOT NULL,
                balance BIGINT NOT NULL DEFAULT 0,
                created_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&self.sqlx_db)
        .await?;
        Ok(())
    }

    /// Create a new account
    async fn create_account(&self, new_account: &Account) -> StoreResult<Account> {
        let query = format!(
            r#"
            INSERT INTO account (first_name, last_name, number, balance, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {ACCOUNT_COLUMNS}
            "#
        );
        let account = sqlx::query_as::<_, Account>(&query)
            .bind(&new_account.first_name)
            .bind(&new_account.last_name)
            .bind(new_account.number)
            .bind(new_account.balance)
            .bind(new_account.created_at)
            .fetch_one(&self.sqlx_db)
            .await?;
        Ok(account)
    }

    async fn delete_account(&self, id: i32) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM account WHERE id = $1")
            .bind(id)
            .execute(&self.sqlx_db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn update_account(&self, account: &Account) -> StoreResult<Account> {
        let query = format!(
            r#"
            UPDATE account
            SET first_name = $1,
                last_name = $2,
                balance = $3
            WHERE id = $4
            RETURNING {ACCOUNT_COLUMNS}
            "#
        );
        sqlx::query_as::<_, Account>(&query)
            .bind(&account.first_name)
            .bind(&account.last_name)
            .bind(account.balance)
            .bind(account.id)
            .fetch_optional(&self.sqlx_db)
            .await?
            .ok_or(StoreError::NotFound(account.id))
    }

    /// Fetch every account in storage order
    async fn list_accounts(&self) -> StoreResult<Vec<Account>> {
        let query = format!("SELECT {ACCOUNT_COLUMNS} FROM account");
        let accounts = sqlx::query_as::<_, Account>(&query)
            .fetch_all(&self.sqlx_db)
            .await?;
        Ok(accounts)
    }

    /// Get an account by ID
    async fn get_account_by_id(&self, id: i32) -> StoreResult<Account> {
        let query = format!("SELECT {ACCOUNT_COLUMNS} FROM account WHERE id = $1");
        sqlx::query_as::<_, Account>(&query)
            .bind(id)
            .fetch_optional(&self.sqlx_db)
            .await?
            .ok_or(StoreError::NotFound(id))
    }
}
