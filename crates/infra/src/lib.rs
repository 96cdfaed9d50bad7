//! `storekeep-infra` — in-memory implementations of the access-control
//! collaborator traits, for dev/test wiring.

pub mod directory;

pub use directory::{
    InMemoryMembershipRegistry, InMemoryPrincipalDirectory, InMemoryStoreDirectory,
};
