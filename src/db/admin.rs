use crate::{
    errors::{AppError, AppResult, Entity},
    models::{new_identifier, Admin},
    DbPool,
};

#[derive(Clone)]
pub struct AdminStore {
    pool: DbPool,
}

impl AdminStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Registers a new admin under a freshly generated identifier.
    pub async fn create(&self) -> AppResult<Admin> {
        let admin = Admin { uuid: new_identifier() };
        self.insert(&admin.uuid).await?;
        Ok(admin)
    }

    /// Registers an already known identifier. Registering it twice is a no-op.
    pub async fn insert(&self, uuid: &str) -> AppResult<()> {
        sqlx::query("INSERT INTO admins (uuid) VALUES (?) ON CONFLICT(uuid) DO NOTHING")
            .bind(uuid)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn exists(&self, uuid: &str) -> AppResult<bool> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM admins WHERE uuid = ?")
            .bind(uuid)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    pub async fn delete(&self, uuid: &str) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM admins WHERE uuid = ?")
            .bind(uuid)
            .execute(&self.pool)
            .await?;
        match res.rows_affected() {
            0 => Err(AppError::NotFound(Entity::Admin)),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::in_memory_pool;

    #[actix_rt::test]
    async fn registered_identifier_exists_until_deleted() {
        let store = AdminStore::new(in_memory_pool().await.unwrap());
        store.insert("deadbeef").await.unwrap();
        store.insert("deadbeef").await.unwrap();
        assert!(store.exists("deadbeef").await.unwrap());
        assert!(!store.exists("4b1d").await.unwrap());

        store.delete("deadbeef").await.unwrap();
        assert!(!store.exists("deadbeef").await.unwrap());
        assert!(matches!(
            store.delete("deadbeef").await,
            Err(AppError::NotFound(Entity::Admin))
        ));
    }

    #[actix_rt::test]
    async fn create_assigns_fresh_identifiers() {
        let store = AdminStore::new(in_memory_pool().await.unwrap());
        let first = store.create().await.unwrap();
        let second = store.create().await.unwrap();
        assert_ne!(first.uuid, second.uuid);
        assert!(store.exists(&first.uuid).await.unwrap());
    }
}
