//! Error types for the credential verification service.

/// Domain-level errors (password digest rules).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Invalid password digest: {0}")]
    InvalidDigest(String),
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Verification task failed: {0}")]
    Verification(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes. A credential mismatch is not an error.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Credential store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Database(e) => AppError::StoreUnavailable(e),
            RepoError::Verification(e) => AppError::Internal(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_is_store_unavailable() {
        let err: AppError = RepoError::Database("connection refused".into()).into();
        assert!(matches!(err, AppError::StoreUnavailable(msg) if msg == "connection refused"));
    }

    #[test]
    fn test_verification_error_is_internal() {
        let err: AppError = RepoError::Verification("task panicked".into()).into();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
