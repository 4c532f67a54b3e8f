use std::sync::Arc;

use crate::{
    db::{AdminStore, EventStore, MemberStore, PresenceStore},
    service::auth::{AdminGate, AuthorizationGate},
    DbPool,
};

/// Everything a request handler needs. Each store holds its own clone of the
/// pool; nothing else is shared between requests.
pub struct AppState {
    pub events: EventStore,
    pub members: MemberStore,
    pub presences: PresenceStore,
    pub gate: Arc<dyn AuthorizationGate>,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        let gate = Arc::new(AdminGate::new(AdminStore::new(pool.clone())));
        Self::with_gate(pool, gate)
    }

    pub fn with_gate(pool: DbPool, gate: Arc<dyn AuthorizationGate>) -> Self {
        Self {
            events: EventStore::new(pool.clone()),
            members: MemberStore::new(pool.clone()),
            presences: PresenceStore::new(pool),
            gate,
        }
    }
}
