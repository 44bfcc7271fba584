use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Upper bound (exclusive) for randomly generated account numbers
pub const ACCOUNT_NUMBER_LIMIT: i64 = 1_000_000;

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub number: i64,
    pub balance: i64,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Builds an account that has not been stored yet. `id` stays zero until the store assigns one.
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Account {
            id: 0,
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            number: rand::thread_rng().gen_range(0..ACCOUNT_NUMBER_LIMIT),
            balance: 0,
            created_at: Utc::now(),
        }
    }
}
