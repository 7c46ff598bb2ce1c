//! SQLite credential store adapter.
#![allow(clippy::collapsible_if)]

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;

use login_types::{CredentialStore, RepoError, UserRecord, Username};

use crate::security::Verifier;
use crate::types::SqliteUserRow;

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite credential store.
pub struct SqliteRepo {
    pool: SqlitePool,
    verifier: Verifier,
}

impl SqliteRepo {
    /// Creates a new SQLite store with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        let ddl = include_str!("../migrations/0001_create_users.sql");
        sqlx::query(ddl).execute(&pool).await?;

        Ok(Self {
            pool,
            verifier: Verifier::default(),
        })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Loads every record stored under exactly this username.
    pub async fn find_by_username(&self, username: &Username) -> Result<Vec<UserRecord>, RepoError> {
        let rows: Vec<SqliteUserRow> = sqlx::query_as(
            r#"SELECT id, username, password_hash, created_at FROM users WHERE username = ?"#,
        )
        .bind(username.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        // Rows written outside the service may not map cleanly; one bad row
        // must not hide the others.
        Ok(rows
            .into_iter()
            .filter_map(|row| match row.into_domain() {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping unreadable user row");
                    None
                }
            })
            .collect())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Store implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl CredentialStore for SqliteRepo {
    async fn find_match(&self, username: &Username, password: &str) -> Result<bool, RepoError> {
        let candidates = self.find_by_username(username).await?;
        tracing::debug!(candidates = candidates.len(), "Loaded candidate records");
        self.verifier.verify_any(candidates, password).await
    }
}
