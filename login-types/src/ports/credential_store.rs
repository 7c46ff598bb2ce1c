//! Credential store port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (Postgres, SQLite, test doubles) implement this trait.

use crate::domain::Username;
use crate::error::RepoError;

/// Read-only access to the persisted user collection.
///
/// Implementations never create, update or delete records.
#[async_trait::async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Returns true if at least one record has exactly this username and a
    /// digest that verifies `password`.
    ///
    /// Username comparison is byte-for-byte and case-sensitive. Store
    /// failures are returned as errors, never as `Ok(false)`.
    async fn find_match(&self, username: &Username, password: &str) -> Result<bool, RepoError>;
}
