use storekeep_auth::{PrincipalId, Role};

/// Principal context for a request (authenticated identity + role).
///
/// The resolved [`storekeep_auth::StoreContext`] travels alongside this in the
/// request extensions when a store is bound; tenant-agnostic requests carry
/// only the principal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    principal_id: PrincipalId,
    role: Role,
}

impl PrincipalContext {
    pub fn new(principal_id: PrincipalId, role: Role) -> Self {
        Self { principal_id, role }
    }

    pub fn principal_id(&self) -> PrincipalId {
        self.principal_id
    }

    pub fn role(&self) -> Role {
        self.role
    }
}
