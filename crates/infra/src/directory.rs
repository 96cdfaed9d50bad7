//! In-memory directories backing the resolver's collaborator traits.
//!
//! `RwLock<HashMap>`-backed, poisoned-lock tolerant on reads (a poisoned map
//! reads as empty rather than panicking the request task).

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use storekeep_auth::{
    MembershipRegistry, Principal, PrincipalId, PrincipalStore, Store, StoreDirectory,
};
use storekeep_core::StoreId;

/// In-memory store directory for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryStoreDirectory {
    inner: RwLock<HashMap<StoreId, Store>>,
}

impl InMemoryStoreDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&self, store: Store) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(store.id, store);
        }
    }
}

impl StoreDirectory for InMemoryStoreDirectory {
    fn find_by_id(&self, id: StoreId) -> Option<Store> {
        let map = self.inner.read().ok()?;
        map.get(&id).copied()
    }
}

/// In-memory membership relation for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryMembershipRegistry {
    inner: RwLock<HashSet<(PrincipalId, StoreId)>>,
}

impl InMemoryMembershipRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(&self, principal_id: PrincipalId, store_id: StoreId) {
        if let Ok(mut set) = self.inner.write() {
            set.insert((principal_id, store_id));
        }
    }

    pub fn revoke(&self, principal_id: PrincipalId, store_id: StoreId) {
        if let Ok(mut set) = self.inner.write() {
            set.remove(&(principal_id, store_id));
        }
    }
}

impl MembershipRegistry for InMemoryMembershipRegistry {
    fn is_member(&self, principal_id: PrincipalId, store_id: StoreId) -> bool {
        match self.inner.read() {
            Ok(set) => set.contains(&(principal_id, store_id)),
            Err(_) => false,
        }
    }
}

/// In-memory principal directory for tests/dev.
///
/// Doubles as the [`PrincipalStore`] write side: `update_last_store` is
/// last-write-wins under the directory's own lock.
#[derive(Debug, Default)]
pub struct InMemoryPrincipalDirectory {
    inner: RwLock<HashMap<PrincipalId, Principal>>,
}

impl InMemoryPrincipalDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&self, principal: Principal) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(principal.id, principal);
        }
    }

    pub fn find_by_id(&self, id: PrincipalId) -> Option<Principal> {
        let map = self.inner.read().ok()?;
        map.get(&id).cloned()
    }
}

impl PrincipalStore for InMemoryPrincipalDirectory {
    fn update_last_store(&self, principal_id: PrincipalId, store_id: StoreId) {
        if let Ok(mut map) = self.inner.write() {
            if let Some(principal) = map.get_mut(&principal_id) {
                principal.last_store_id = Some(store_id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storekeep_auth::Role;

    #[test]
    fn store_directory_round_trips_records() {
        let dir = InMemoryStoreDirectory::new();
        let store = Store::new(StoreId::new(), PrincipalId::new());

        assert_eq!(dir.find_by_id(store.id), None);
        dir.upsert(store);
        assert_eq!(dir.find_by_id(store.id), Some(store));
    }

    #[test]
    fn membership_grant_and_revoke() {
        let registry = InMemoryMembershipRegistry::new();
        let principal_id = PrincipalId::new();
        let store_id = StoreId::new();

        assert!(!registry.is_member(principal_id, store_id));
        registry.grant(principal_id, store_id);
        assert!(registry.is_member(principal_id, store_id));
        registry.revoke(principal_id, store_id);
        assert!(!registry.is_member(principal_id, store_id));
    }

    #[test]
    fn update_last_store_overwrites_the_pointer() {
        let dir = InMemoryPrincipalDirectory::new();
        let principal = Principal::new(PrincipalId::new(), Role::Manager);
        dir.upsert(principal.clone());

        let first = StoreId::new();
        let second = StoreId::new();

        dir.update_last_store(principal.id, first);
        assert_eq!(dir.find_by_id(principal.id).unwrap().last_store_id, Some(first));

        // Last write wins; the pointer is advisory, not a security boundary.
        dir.update_last_store(principal.id, second);
        assert_eq!(dir.find_by_id(principal.id).unwrap().last_store_id, Some(second));
    }

    #[test]
    fn update_for_unknown_principal_is_a_no_op() {
        let dir = InMemoryPrincipalDirectory::new();
        dir.update_last_store(PrincipalId::new(), StoreId::new());
        // Nothing to assert beyond "no panic, no phantom record".
        assert_eq!(dir.find_by_id(PrincipalId::new()), None);
    }
}
