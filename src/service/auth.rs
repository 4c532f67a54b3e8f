use async_trait::async_trait;
use log::warn;

use crate::{
    db::AdminStore,
    errors::{AppError, AppResult},
};

/// Decides whether a caller-supplied identifier may perform admin mutations.
///
/// The identifier is a bearer credential: no expiry, no scope. Stores never
/// see this trait, so a different scheme can be dropped in here.
#[async_trait]
pub trait AuthorizationGate: Send + Sync {
    async fn is_admin(&self, identifier: &str) -> AppResult<bool>;
}

/// Existence lookup in the `admins` table.
pub struct AdminGate {
    admins: AdminStore,
}

impl AdminGate {
    pub fn new(admins: AdminStore) -> Self {
        Self { admins }
    }
}

#[async_trait]
impl AuthorizationGate for AdminGate {
    async fn is_admin(&self, identifier: &str) -> AppResult<bool> {
        self.admins.exists(identifier).await
    }
}

/// Rejects the request with **`AppError::Unauthorized`** unless `identifier` is an admin.
///
/// Check-then-act: the caller's write is not in the same transaction, so an
/// admin removed between this check and the write still gets the write.
pub async fn require_admin(gate: &dyn AuthorizationGate, identifier: &str) -> AppResult<()> {
    if gate.is_admin(identifier).await? {
        Ok(())
    } else {
        warn!("rejected non-admin identifier {}", identifier);
        Err(AppError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::in_memory_pool;

    #[actix_rt::test]
    async fn only_registered_identifiers_pass() {
        let admins = AdminStore::new(in_memory_pool().await.unwrap());
        admins.insert("deadbeef").await.unwrap();
        let gate = AdminGate::new(admins);

        assert!(gate.is_admin("deadbeef").await.unwrap());
        assert!(!gate.is_admin("4b1d").await.unwrap());
        assert!(require_admin(&gate, "deadbeef").await.is_ok());
        assert!(matches!(
            require_admin(&gate, "4b1d").await,
            Err(AppError::Unauthorized)
        ));
    }
}
