use serde::{Deserialize, Serialize};

/// Staff role granted to a principal.
///
/// Roles are a closed enumeration so unknown values are rejected at the
/// deserialization boundary instead of silently denying deep inside the
/// permission matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Platform operator; never bound to a single store by the resolver.
    SuperAdmin,
    /// Administrative owner of one or more stores.
    Admin,
    /// Store manager (membership-based access).
    Manager,
    /// Till/sales staff (membership-based access).
    Cashier,
    /// Warehouse/stock staff (membership-based access).
    Stockist,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Cashier => "cashier",
            Role::Stockist => "stockist",
        }
    }

    /// Plain predicate over the already-known role; not a permission decision.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Plain predicate over the already-known role; not a permission decision.
    pub fn is_manager(&self) -> bool {
        matches!(self, Role::Manager)
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_serialize_as_snake_case() {
        let json = serde_json::to_string(&Role::SuperAdmin).unwrap();
        assert_eq!(json, "\"super_admin\"");

        let role: Role = serde_json::from_str("\"manager\"").unwrap();
        assert_eq!(role, Role::Manager);
    }

    #[test]
    fn unknown_role_is_rejected_at_the_boundary() {
        let result: Result<Role, _> = serde_json::from_str("\"intern\"");
        assert!(result.is_err());
    }

    #[test]
    fn role_predicates() {
        assert!(Role::Admin.is_admin());
        assert!(!Role::Admin.is_manager());
        assert!(Role::Manager.is_manager());
        assert!(!Role::SuperAdmin.is_admin());
    }
}
