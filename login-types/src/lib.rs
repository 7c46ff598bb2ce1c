//! # Login Types
//!
//! Domain types and port traits for the credential verification service.
//! This crate has ZERO external IO dependencies - only data structures,
//! password digest rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Username, PasswordDigest, UserRecord)
//! - `ports/` - Trait definitions that store adapters must implement
//! - `dto/` - Data Transfer Objects for the HTTP boundary
//! - `error/` - Domain, repository and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{PasswordDigest, UserId, UserRecord, Username};
pub use dto::*;
pub use error::{AppError, DomainError, RepoError};
pub use ports::CredentialStore;
