use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storekeep_core::{Entity, StoreId};

use crate::Role;

/// Identity of an authenticated principal (human user, service account, etc).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrincipalId(Uuid);

impl PrincipalId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PrincipalId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for PrincipalId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<PrincipalId> for Uuid {
    fn from(value: PrincipalId) -> Self {
        value.0
    }
}

impl FromStr for PrincipalId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::from_str(s)?))
    }
}

/// Authenticated actor, loaded per request by the identity layer.
///
/// `last_store_id` is the sticky tenant default: the resolver proposes updates
/// to it (see [`crate::resolver::LastStoreUpdate`]) but never persists them
/// itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: PrincipalId,
    pub role: Role,
    pub is_active: bool,
    pub last_store_id: Option<StoreId>,
}

impl Principal {
    pub fn new(id: PrincipalId, role: Role) -> Self {
        Self {
            id,
            role,
            is_active: true,
            last_store_id: None,
        }
    }
}

impl Entity for Principal {
    type Id = PrincipalId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
