//! Permission guard for module handlers.
//!
//! Handlers call [`require`] before reading or mutating module data; a deny is
//! an ordinary result mapped to 403 at the boundary, with no side effects.

use thiserror::Error;

use storekeep_auth::{Action, Module, PermissionMatrix, Role};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("role '{role}' may not {action} in {module}")]
pub struct PermissionDenied {
    pub role: Role,
    pub module: Module,
    pub action: Action,
}

/// Check the injected matrix for an explicit grant.
pub fn require(
    matrix: &PermissionMatrix,
    role: Role,
    module: Module,
    action: Action,
) -> Result<(), PermissionDenied> {
    if matrix.can(role, module, action) {
        Ok(())
    } else {
        Err(PermissionDenied { role, module, action })
    }
}
