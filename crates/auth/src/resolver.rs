//! Store (tenant) resolution for one request.
//!
//! `resolve` turns (principal, explicit store hint, directory lookups) into a
//! bound [`StoreContext`], a passthrough, or a precise rejection.
//!
//! - No IO
//! - No panics
//! - No persistence: the conditional `last_store_id` write is returned as a
//!   [`LastStoreUpdate`] for the caller to apply through [`PrincipalStore`].

use std::sync::Arc;

use thiserror::Error;

use storekeep_core::StoreId;

use crate::{Principal, PrincipalId, Role, Store, StoreContext};

/// Read access to store records.
pub trait StoreDirectory: Send + Sync {
    fn find_by_id(&self, id: StoreId) -> Option<Store>;
}

/// Membership relation between non-owner principals and stores.
///
/// Existence of the relation is the sole authorization fact it carries.
pub trait MembershipRegistry: Send + Sync {
    fn is_member(&self, principal_id: PrincipalId, store_id: StoreId) -> bool;
}

/// Write access for the sticky `last_store_id` pointer.
///
/// Applied by the boundary layer after a successful resolution; last-write-wins
/// across racing requests is acceptable since the field is advisory.
pub trait PrincipalStore: Send + Sync {
    fn update_last_store(&self, principal_id: PrincipalId, store_id: StoreId);
}

impl<S> StoreDirectory for Arc<S>
where
    S: StoreDirectory + ?Sized,
{
    fn find_by_id(&self, id: StoreId) -> Option<Store> {
        (**self).find_by_id(id)
    }
}

impl<S> MembershipRegistry for Arc<S>
where
    S: MembershipRegistry + ?Sized,
{
    fn is_member(&self, principal_id: PrincipalId, store_id: StoreId) -> bool {
        (**self).is_member(principal_id, store_id)
    }
}

impl<S> PrincipalStore for Arc<S>
where
    S: PrincipalStore + ?Sized,
{
    fn update_last_store(&self, principal_id: PrincipalId, store_id: StoreId) {
        (**self).update_last_store(principal_id, store_id)
    }
}

/// Why a request was rejected by the access-control layer.
///
/// `Unauthenticated` and `AccountInactive` are produced by the authentication
/// gate before the resolver runs; the rest by [`resolve`]. The boundary layer
/// maps each kind to a distinct externally visible outcome.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AccessRejection {
    #[error("unauthenticated")]
    Unauthenticated,

    #[error("account is inactive")]
    AccountInactive,

    #[error("store not found")]
    StoreNotFound,

    #[error("store is inactive")]
    StoreInactive,

    #[error("forbidden")]
    Forbidden,
}

/// Pending `last_store_id` write, to be applied through [`PrincipalStore`].
///
/// Emitted only when the store was selected via an explicit hint that differs
/// from the principal's current pointer, so repeat requests cause no writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastStoreUpdate {
    pub principal_id: PrincipalId,
    pub store_id: StoreId,
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The request is bound to a store the principal may act within.
    Bound {
        context: StoreContext,
        pending: Option<LastStoreUpdate>,
    },
    /// No store binding required/possible; the request proceeds tenant-free.
    Passthrough,
}

/// Resolve the active store for a request.
///
/// Fallback order: explicit hint → principal's last-used store → passthrough.
/// Only the explicit hint triggers a pending `last_store_id` update, which
/// keeps sticky behavior without write amplification on every request.
///
/// Super-admins always pass through: a platform operator is not a store
/// member, and any store scoping for them belongs to the downstream use-case.
pub fn resolve(
    principal: Option<&Principal>,
    hint: Option<StoreId>,
    stores: &dyn StoreDirectory,
    memberships: &dyn MembershipRegistry,
) -> Result<Resolution, AccessRejection> {
    let Some(principal) = principal else {
        return Ok(Resolution::Passthrough);
    };

    let explicit = hint.is_some();
    let Some(store_id) = hint.or(principal.last_store_id) else {
        return Ok(Resolution::Passthrough);
    };

    if principal.role == Role::SuperAdmin {
        return Ok(Resolution::Passthrough);
    }

    let store = stores
        .find_by_id(store_id)
        .ok_or(AccessRejection::StoreNotFound)?;

    // Inactivity is checked before ownership/membership: a suspended store
    // answers `StoreInactive` even to principals who could otherwise enter.
    if !store.is_active {
        return Err(AccessRejection::StoreInactive);
    }

    match principal.role {
        // Ownership, not membership, governs admins.
        Role::Admin => {
            if store.owner_id != principal.id {
                return Err(AccessRejection::Forbidden);
            }
        }
        _ => {
            if !memberships.is_member(principal.id, store.id) {
                return Err(AccessRejection::Forbidden);
            }
        }
    }

    let pending = (explicit && principal.last_store_id != Some(store.id)).then(|| LastStoreUpdate {
        principal_id: principal.id,
        store_id: store.id,
    });

    Ok(Resolution::Bound {
        context: StoreContext::new(store),
        pending,
    })
}
