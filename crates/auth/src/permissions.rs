//! Static permission matrix over (role, module, action).
//!
//! The matrix is an immutable value constructed once at startup and injected
//! wherever decisions are made; it is never ambient global state, so tests can
//! swap in alternate matrices. Resolution policy is **default-deny**: any
//! combination without an explicit grant evaluates to `false`, with no error.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::Role;

/// Business area a permission applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Module {
    Inventory,
    Sales,
    Customers,
    Suppliers,
    Reports,
    Settings,
}

impl Module {
    pub const ALL: [Module; 6] = [
        Module::Inventory,
        Module::Sales,
        Module::Customers,
        Module::Suppliers,
        Module::Reports,
        Module::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Module::Inventory => "inventory",
            Module::Sales => "sales",
            Module::Customers => "customers",
            Module::Suppliers => "suppliers",
            Module::Reports => "reports",
            Module::Settings => "settings",
        }
    }
}

impl core::fmt::Display for Module {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operation a principal may perform within a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    View,
    Create,
    Edit,
    Delete,
    Validate,
    Export,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::View,
        Action::Create,
        Action::Edit,
        Action::Delete,
        Action::Validate,
        Action::Export,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Create => "create",
            Action::Edit => "edit",
            Action::Delete => "delete",
            Action::Validate => "validate",
            Action::Export => "export",
        }
    }
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable (role, module) → actions grant table.
///
/// Shared read-only across all requests; no interior mutability, so concurrent
/// reads need no synchronization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionMatrix {
    grants: HashMap<(Role, Module), HashSet<Action>>,
}

impl PermissionMatrix {
    /// Empty matrix (denies everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add grants for a (role, module) pair. Builder-style, consumed at startup.
    pub fn grant(mut self, role: Role, module: Module, actions: impl IntoIterator<Item = Action>) -> Self {
        self.grants.entry((role, module)).or_default().extend(actions);
        self
    }

    /// Grant every action on every module to a role.
    pub fn grant_all(mut self, role: Role) -> Self {
        for module in Module::ALL {
            self = self.grant(role, module, Action::ALL);
        }
        self
    }

    /// The single decision primitive: allow iff explicitly granted.
    pub fn can(&self, role: Role, module: Module, action: Action) -> bool {
        self.grants
            .get(&(role, module))
            .is_some_and(|actions| actions.contains(&action))
    }

    pub fn can_view(&self, role: Role, module: Module) -> bool {
        self.can(role, module, Action::View)
    }

    pub fn can_create(&self, role: Role, module: Module) -> bool {
        self.can(role, module, Action::Create)
    }

    pub fn can_edit(&self, role: Role, module: Module) -> bool {
        self.can(role, module, Action::Edit)
    }

    pub fn can_delete(&self, role: Role, module: Module) -> bool {
        self.can(role, module, Action::Delete)
    }

    pub fn can_validate(&self, role: Role, module: Module) -> bool {
        self.can(role, module, Action::Validate)
    }

    pub fn can_export(&self, role: Role, module: Module) -> bool {
        self.can(role, module, Action::Export)
    }

    /// The fixed store-management matrix.
    ///
    /// Super-admins and admins carry full explicit grants; `can` stays a plain
    /// lookup with default-deny as the only implicit rule.
    pub fn standard() -> Self {
        use Action::*;

        Self::new()
            .grant_all(Role::SuperAdmin)
            .grant_all(Role::Admin)
            .grant(Role::Manager, Module::Inventory, [View, Edit])
            .grant(Role::Manager, Module::Sales, [View, Create, Edit, Validate])
            .grant(Role::Manager, Module::Customers, [View, Create, Edit])
            .grant(Role::Manager, Module::Suppliers, [View])
            .grant(Role::Manager, Module::Reports, [View, Export])
            .grant(Role::Cashier, Module::Sales, [View, Create])
            .grant(Role::Cashier, Module::Customers, [View])
            .grant(Role::Stockist, Module::Inventory, [View, Edit])
            .grant(Role::Stockist, Module::Suppliers, [View])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_matrix_denies_everything() {
        let matrix = PermissionMatrix::new();
        for module in Module::ALL {
            for action in Action::ALL {
                assert!(!matrix.can(Role::Admin, module, action));
            }
        }
    }

    #[test]
    fn can_is_deterministic_and_default_deny() {
        let matrix = PermissionMatrix::new().grant(Role::Cashier, Module::Sales, [Action::View]);

        // Identical inputs always yield identical output.
        assert!(matrix.can(Role::Cashier, Module::Sales, Action::View));
        assert!(matrix.can(Role::Cashier, Module::Sales, Action::View));

        // Absent combinations deny without error.
        assert!(!matrix.can(Role::Cashier, Module::Sales, Action::Delete));
        assert!(!matrix.can(Role::Cashier, Module::Reports, Action::View));
        assert!(!matrix.can(Role::Manager, Module::Sales, Action::View));
    }

    #[test]
    fn manager_cannot_delete_inventory() {
        // Managers get only view/edit on inventory in the standard matrix.
        let matrix = PermissionMatrix::standard();
        assert!(matrix.can_view(Role::Manager, Module::Inventory));
        assert!(matrix.can_edit(Role::Manager, Module::Inventory));
        assert!(!matrix.can_delete(Role::Manager, Module::Inventory));
        assert!(!matrix.can(Role::Manager, Module::Inventory, Action::Delete));
    }

    #[test]
    fn admin_has_full_grants_in_standard_matrix() {
        let matrix = PermissionMatrix::standard();
        for module in Module::ALL {
            for action in Action::ALL {
                assert!(matrix.can(Role::Admin, module, action));
                assert!(matrix.can(Role::SuperAdmin, module, action));
            }
        }
    }

    #[test]
    fn convenience_wrappers_match_can() {
        let matrix = PermissionMatrix::standard();
        assert_eq!(
            matrix.can_export(Role::Manager, Module::Reports),
            matrix.can(Role::Manager, Module::Reports, Action::Export)
        );
        assert_eq!(
            matrix.can_create(Role::Cashier, Module::Sales),
            matrix.can(Role::Cashier, Module::Sales, Action::Create)
        );
        assert_eq!(
            matrix.can_validate(Role::Cashier, Module::Sales),
            matrix.can(Role::Cashier, Module::Sales, Action::Validate)
        );
    }

    #[test]
    fn cashier_has_no_settings_access() {
        let matrix = PermissionMatrix::standard();
        for action in Action::ALL {
            assert!(!matrix.can(Role::Cashier, Module::Settings, action));
        }
    }
}
