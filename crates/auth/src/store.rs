use serde::{Deserialize, Serialize};

use storekeep_core::{Entity, StoreId};

use crate::PrincipalId;

/// A store/organization unit: the tenant boundary.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub id: StoreId,
    /// Administrative owner (an `admin` principal).
    pub owner_id: PrincipalId,
    pub is_active: bool,
}

impl Store {
    pub fn new(id: StoreId, owner_id: PrincipalId) -> Self {
        Self {
            id,
            owner_id,
            is_active: true,
        }
    }
}

impl Entity for Store {
    type Id = StoreId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Resolved store context for one request.
///
/// Created fresh per request, never persisted. Carries the id in string form
/// as well so boundary code can log it or echo it in headers without
/// re-stringifying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreContext {
    store: Store,
    store_id: String,
}

impl StoreContext {
    pub fn new(store: Store) -> Self {
        let store_id = store.id.to_string();
        Self { store, store_id }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn store_id(&self) -> StoreId {
        self.store.id
    }

    pub fn store_id_str(&self) -> &str {
        &self.store_id
    }
}
