//! # Login Hex
//!
//! Application service layer and HTTP adapter for the login service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (lookup timeout, error mapping)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `S: CredentialStore`, so the store client is
//! constructed by the caller and injected rather than held in a global.

pub mod inbound;
mod openapi;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use openapi::ApiDoc;
pub use service::{DEFAULT_LOOKUP_TIMEOUT, LoginService};
