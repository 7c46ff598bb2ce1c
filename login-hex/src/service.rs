//! Login Application Service
//!
//! Orchestrates the credential check through the store port.
//! Contains NO infrastructure logic - the store client is injected.

use std::time::Duration;

use login_types::{AppError, CredentialStore, LoginRequest};

/// Lookup timeout used when none is configured.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Application service for credential verification.
///
/// Generic over `S: CredentialStore` - the adapter is injected at compile time.
/// The service owns the store client for its whole lifetime; individual
/// lookup failures never tear it down.
pub struct LoginService<S: CredentialStore> {
    store: S,
    lookup_timeout: Duration,
}

impl<S: CredentialStore> LoginService<S> {
    /// Creates a new login service with the default lookup timeout.
    pub fn new(store: S) -> Self {
        Self::with_timeout(store, DEFAULT_LOOKUP_TIMEOUT)
    }

    /// Creates a new login service with a custom lookup timeout.
    pub fn with_timeout(store: S, lookup_timeout: Duration) -> Self {
        Self {
            store,
            lookup_timeout,
        }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the configured lookup timeout.
    pub fn lookup_timeout(&self) -> Duration {
        self.lookup_timeout
    }

    /// Checks a credential pair against the store.
    ///
    /// `Ok(false)` means the store answered and nothing matched. Store
    /// failures and timeouts are `AppError::StoreUnavailable`.
    #[tracing::instrument(
        skip(self, req),
        fields(username = %req.username.as_deref().unwrap_or_default())
    )]
    pub async fn login(&self, req: LoginRequest) -> Result<bool, AppError> {
        let (username, password) = req.into_credentials();

        let lookup = self.store.find_match(&username, &password);
        let matched = match tokio::time::timeout(self.lookup_timeout, lookup).await {
            Ok(Ok(matched)) => matched,
            Ok(Err(e)) => {
                tracing::error!("Credential lookup failed: {}", e);
                return Err(e.into());
            }
            Err(_) => {
                tracing::error!(
                    timeout_ms = self.lookup_timeout.as_millis() as u64,
                    "Credential lookup timed out"
                );
                return Err(AppError::StoreUnavailable(format!(
                    "lookup timed out after {} ms",
                    self.lookup_timeout.as_millis()
                )));
            }
        };

        tracing::info!(success = matched, "Credential check completed");
        Ok(matched)
    }
}
