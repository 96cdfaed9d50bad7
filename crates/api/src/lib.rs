//! HTTP API: authentication gate, store resolution, and permission guards.
//!
//! This layer is thin glue: it extracts typed values from the request, runs
//! the `storekeep-auth` decisions, and maps outcomes to HTTP responses.

pub mod app;
pub mod authz;
pub mod context;
pub mod error;
pub mod jwt;
pub mod middleware;
