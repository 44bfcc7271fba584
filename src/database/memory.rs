use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Storage, StoreError, StoreResult};
use crate::models::Account;

/// In-process [`Storage`] used to exercise the HTTP layer without a database
#[derive(Default)]
pub struct MemoryDatabase {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i32,
    accounts: BTreeMap<i32, Account>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryDatabase {
    async fn init(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn create_account(&self, account: &Account) -> StoreResult<Account> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let stored = Account {
            id: inner.next_id,
            ..account.clone()
        };
        inner.accounts.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn delete_account(&self, id: i32) -> StoreResult<()> {
        self.inner
            .write()
            .await
            .accounts
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    async fn update_account(&self, account: &Account) -> StoreResult<Account> {
        let mut inner = self.inner.write().await;
        let stored = inner
            .accounts
            .get_mut(&account.id)
            .ok_or(StoreError::NotFound(account.id))?;
        stored.first_name = account.first_name.clone();
        stored.last_name = account.last_name.clone();
        stored.balance = account.balance;
        Ok(stored.clone())
    }

    async fn list_accounts(&self) -> StoreResult<Vec<Account>> {
        Ok(self.inner.read().await.accounts.values().cloned().collect())
    }

    async fn get_account_by_id(&self, id: i32) -> StoreResult<Account> {
        self.inner
            .read()
            .await
            .accounts
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn assigns_increasing_ids() {
        let db = MemoryDatabase::new();
        let a = db.create_account(&Account::new("A", "One")).await.unwrap();
        let b = db.create_account(&Account::new("B", "Two")).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(db.list_accounts().await.unwrap(), vec![a, b]);
    }

    #[tokio::test]
    async fn update_keeps_immutable_fields() {
        let db = MemoryDatabase::new();
        let created = db.create_account(&Account::new("A", "One")).await.unwrap();

        let change = Account {
            id: created.id,
            first_name: "Changed".into(),
            balance: 10,
            number: created.number + 1,
            ..Account::default()
        };
        let updated = db.update_account(&change).await.unwrap();

        assert_eq!(updated.first_name, "Changed");
        assert_eq!(updated.balance, 10);
        assert_eq!(updated.number, created.number);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn missing_rows_are_not_found() {
        let db = MemoryDatabase::new();
        db.init().await.unwrap();

        assert!(matches!(
            db.get_account_by_id(3).await,
            Err(StoreError::NotFound(3))
        ));
        assert!(matches!(
            db.delete_account(3).await,
            Err(StoreError::NotFound(3))
        ));
        assert!(matches!(
            db.update_account(&Account::default()).await,
            Err(StoreError::NotFound(0))
        ));
    }
}
