//! Password verification against candidate records.

use std::num::NonZeroUsize;
use std::sync::Arc;

use tokio::sync::Semaphore;

use login_types::{PasswordDigest, RepoError, UserRecord};

/// Runs Argon2 verifications on the blocking pool, at most `max_in_flight`
/// at a time.
///
/// A verification that has started runs to completion even if the caller
/// stops waiting (for example, after a lookup timeout). Callers still queued
/// for a permit are dropped with their future, so abandoned requests never
/// pile up more than `max_in_flight` hashing tasks.
#[derive(Clone)]
pub struct Verifier {
    permits: Arc<Semaphore>,
}

impl Verifier {
    /// Creates a verifier allowing `max_in_flight` concurrent verifications
    /// (at least one).
    pub fn new(max_in_flight: usize) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(max_in_flight.max(1))),
        }
    }

    /// Number of verifications that could start right now.
    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }

    /// Verifies `password` against every candidate record.
    ///
    /// Returns true as soon as one record verifies. With no usable candidate a
    /// dummy digest is still checked, so an unknown username costs as much as a
    /// wrong password. Malformed stored digests are skipped with a warning.
    pub async fn verify_any(
        &self,
        candidates: Vec<UserRecord>,
        password: &str,
    ) -> Result<bool, RepoError> {
        let permit = self
            .permits
            .clone()
            .acquire_owned()
            .await
            .map_err(|e| RepoError::Verification(e.to_string()))?;
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || {
            let _permit = permit;
            verify_candidates(&candidates, &password)
        })
        .await
        .map_err(|e| RepoError::Verification(e.to_string()))
    }
}

impl Default for Verifier {
    /// One verification per available core.
    fn default() -> Self {
        let cores = std::thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(4);
        Self::new(cores)
    }
}

fn verify_candidates(candidates: &[UserRecord], password: &str) -> bool {
    let mut checked = false;
    for record in candidates {
        if !record.password_hash.is_well_formed() {
            tracing::warn!(user_id = %record.id, "Stored password digest is malformed");
            continue;
        }
        checked = true;
        if record.password_matches(password) {
            return true;
        }
    }

    if !checked {
        return PasswordDigest::verify_dummy(password);
    }
    false
}
