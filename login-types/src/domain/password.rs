//! Salted password digests.
//!
//! Passwords are never stored in plaintext. A [`PasswordDigest`] wraps an
//! Argon2id PHC string (`$argon2id$v=19$m=..,t=..,p=..$<salt>$<hash>`) which
//! carries its own parameters and per-record salt, so verification only needs
//! the stored string and the submitted password.

use std::sync::LazyLock;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Digest checked when a lookup finds no candidate record, so that an unknown
/// username costs the same as a wrong password.
static DUMMY_DIGEST: LazyLock<Option<PasswordDigest>> =
    LazyLock::new(|| PasswordDigest::hash("dummy-password-never-matches").ok());

/// An Argon2id password digest in PHC string format.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Hashes a plaintext password with a fresh random salt.
    pub fn hash(password: &str) -> Result<Self, DomainError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| DomainError::Hashing(e.to_string()))?;
        Ok(Self(hash.to_string()))
    }

    /// Wraps a PHC string after checking that it parses.
    pub fn parse(phc: impl Into<String>) -> Result<Self, DomainError> {
        let phc = phc.into();
        PasswordHash::new(&phc).map_err(|e| DomainError::InvalidDigest(e.to_string()))?;
        Ok(Self(phc))
    }

    /// Wraps a stored string without validation.
    ///
    /// Used when loading rows; a malformed value simply never verifies.
    pub fn from_stored(phc: impl Into<String>) -> Self {
        Self(phc.into())
    }

    /// Returns the PHC string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the digest parses as a PHC string.
    pub fn is_well_formed(&self) -> bool {
        PasswordHash::new(&self.0).is_ok()
    }

    /// Recomputes the hash of `password` with this digest's salt and
    /// parameters and compares it in constant time.
    pub fn verify(&self, password: &str) -> bool {
        match PasswordHash::new(&self.0) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }

    /// Burns one verification against a fixed digest. Always false.
    ///
    /// The result goes through `black_box` so the optimizer cannot drop the
    /// work that makes this cost the same as a real verification.
    pub fn verify_dummy(password: &str) -> bool {
        if let Some(dummy) = DUMMY_DIGEST.as_ref() {
            std::hint::black_box(dummy.verify(std::hint::black_box(password)));
        }
        false
    }
}

// Digests are credentials too; keep them out of logs.
impl std::fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PasswordDigest(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_phc_argon2id() {
        let digest = PasswordDigest::hash("secret").unwrap();

        assert!(digest.as_str().starts_with("$argon2id$"));
        assert!(!digest.as_str().contains("secret"));
        assert!(digest.is_well_formed());
    }

    #[test]
    fn test_hash_is_salted() {
        let a = PasswordDigest::hash("secret").unwrap();
        let b = PasswordDigest::hash("secret").unwrap();

        assert_ne!(a, b);
        assert!(a.verify("secret"));
        assert!(b.verify("secret"));
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let digest = PasswordDigest::hash("secret").unwrap();

        assert!(!digest.verify("wrong"));
        assert!(!digest.verify("SECRET"));
        assert!(!digest.verify(""));
    }

    #[test]
    fn test_empty_password_can_be_hashed() {
        let digest = PasswordDigest::hash("").unwrap();

        assert!(digest.verify(""));
        assert!(!digest.verify(" "));
    }

    #[test]
    fn test_malformed_digest_never_verifies() {
        let digest = PasswordDigest::from_stored("secret");

        assert!(!digest.is_well_formed());
        assert!(!digest.verify("secret"));
    }

    #[test]
    fn test_parse_rejects_plaintext() {
        let result = PasswordDigest::parse("not-a-phc-string");
        assert!(matches!(result, Err(DomainError::InvalidDigest(_))));
    }

    #[test]
    fn test_parse_accepts_generated_digest() {
        let digest = PasswordDigest::hash("secret").unwrap();
        let parsed = PasswordDigest::parse(digest.as_str()).unwrap();
        assert!(parsed.verify("secret"));
    }

    #[test]
    fn test_verify_dummy_is_false() {
        assert!(!PasswordDigest::verify_dummy("dummy-password-never-matches"));
    }

    #[test]
    fn test_debug_hides_digest() {
        let digest = PasswordDigest::hash("secret").unwrap();
        assert_eq!(format!("{:?}", digest), "PasswordDigest(..)");
    }
}
