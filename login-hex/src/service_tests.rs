//! LoginService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use login_types::{AppError, CredentialStore, LoginRequest, RepoError, Username};

    use crate::LoginService;

    /// Simple in-memory store for testing the service layer.
    pub struct MockStore {
        users: Vec<(String, String)>,
        lookups: AtomicUsize,
    }

    impl MockStore {
        pub fn new() -> Self {
            Self {
                users: Vec::new(),
                lookups: AtomicUsize::new(0),
            }
        }

        pub fn with_user(mut self, username: &str, password: &str) -> Self {
            self.users.push((username.to_string(), password.to_string()));
            self
        }

        fn lookups(&self) -> usize {
            self.lookups.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CredentialStore for MockStore {
        async fn find_match(
            &self,
            username: &Username,
            password: &str,
        ) -> Result<bool, RepoError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .users
                .iter()
                .any(|(u, p)| u == username.as_str() && p == password))
        }
    }

    /// Store whose backend is unreachable.
    pub struct FailingStore;

    #[async_trait]
    impl CredentialStore for FailingStore {
        async fn find_match(&self, _: &Username, _: &str) -> Result<bool, RepoError> {
            Err(RepoError::Database("connection refused".into()))
        }
    }

    /// Store that never answers within a test's patience.
    pub struct SlowStore;

    #[async_trait]
    impl CredentialStore for SlowStore {
        async fn find_match(&self, _: &Username, _: &str) -> Result<bool, RepoError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(true)
        }
    }

    fn alice_store() -> MockStore {
        MockStore::new().with_user("alice", "secret")
    }

    #[tokio::test]
    async fn test_login_match() {
        let service = LoginService::new(alice_store());

        let result = service.login(LoginRequest::new("alice", "secret")).await;

        assert!(result.unwrap());
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let service = LoginService::new(alice_store());

        let result = service.login(LoginRequest::new("alice", "wrong")).await;

        assert!(!result.unwrap());
    }

    #[tokio::test]
    async fn test_login_missing_password_is_no_match() {
        let service = LoginService::new(alice_store());

        let req = LoginRequest {
            username: Some("eve".into()),
            password: None,
        };

        assert!(!service.login(req).await.unwrap());
    }

    #[tokio::test]
    async fn test_login_missing_fields_still_query_store() {
        let service = LoginService::new(alice_store());

        let result = service.login(LoginRequest::default()).await;

        assert!(!result.unwrap());
        assert_eq!(service.store().lookups(), 1);
    }

    #[tokio::test]
    async fn test_login_is_case_sensitive() {
        let service = LoginService::new(MockStore::new().with_user("Bob", "x"));

        assert!(service.login(LoginRequest::new("Bob", "x")).await.unwrap());
        assert!(!service.login(LoginRequest::new("bob", "x")).await.unwrap());
    }

    #[tokio::test]
    async fn test_login_is_idempotent() {
        let service = LoginService::new(alice_store());

        for _ in 0..5 {
            assert!(
                service
                    .login(LoginRequest::new("alice", "secret"))
                    .await
                    .unwrap()
            );
        }
        assert_eq!(service.store().lookups(), 5);
    }

    #[tokio::test]
    async fn test_store_failure_is_not_a_failed_login() {
        let service = LoginService::new(FailingStore);

        let result = service.login(LoginRequest::new("alice", "secret")).await;

        assert!(matches!(result, Err(AppError::StoreUnavailable(_))));
    }

    #[tokio::test]
    async fn test_store_timeout_is_unavailable() {
        let service = LoginService::with_timeout(SlowStore, Duration::from_millis(20));

        let result = service.login(LoginRequest::new("alice", "secret")).await;

        assert!(matches!(result, Err(AppError::StoreUnavailable(msg)) if msg.contains("timed out")));
    }

    #[tokio::test]
    async fn test_default_timeout() {
        let service = LoginService::new(MockStore::new());
        assert_eq!(service.lookup_timeout(), crate::DEFAULT_LOOKUP_TIMEOUT);
    }
}
