//! `storekeep-auth` — tenant resolution + permission decisions (zero-trust).
//!
//! This crate is intentionally decoupled from HTTP and storage: the resolver
//! reads collaborators through traits and returns pending writes instead of
//! performing them.

pub mod claims;
pub mod permissions;
pub mod principal;
pub mod resolver;
pub mod roles;
pub mod store;

pub use claims::{AuthClaims, TokenValidationError, TokenVerifier, validate_claims};
pub use permissions::{Action, Module, PermissionMatrix};
pub use principal::{Principal, PrincipalId};
pub use resolver::{
    AccessRejection, LastStoreUpdate, MembershipRegistry, PrincipalStore, Resolution,
    StoreDirectory, resolve,
};
pub use roles::Role;
pub use store::{Store, StoreContext};
