//! PostgreSQL credential store adapter.

use async_trait::async_trait;
use sqlx::PgPool;

use login_types::{CredentialStore, RepoError, UserRecord, Username};

use crate::security::Verifier;
use crate::types::PgUserRow;

// ─────────────────────────────────────────────────────────────────────────────
// PostgreSQL Repository
// ─────────────────────────────────────────────────────────────────────────────

/// PostgreSQL credential store.
pub struct PostgresRepo {
    pool: PgPool,
    verifier: Verifier,
}

/// Executes SQL statements from a migration file, splitting by semicolons.
async fn execute_migration(pool: &PgPool, sql: &str, name: &str) -> Result<(), anyhow::Error> {
    for statement in sql.split(';') {
        let stmt = statement.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt)
                .execute(pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration {} failed: {}", name, e))?;
        }
    }
    Ok(())
}

/// Runs all database migrations.
async fn run_migrations(pool: &PgPool) -> Result<(), anyhow::Error> {
    execute_migration(
        pool,
        include_str!("../migrations/0001_create_users_pg.sql"),
        "0001",
    )
    .await
}

impl PostgresRepo {
    /// Creates a new PostgreSQL store with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        run_migrations(&pool).await?;
        Ok(Self {
            pool,
            verifier: Verifier::default(),
        })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Loads every record stored under exactly this username.
    pub async fn find_by_username(&self, username: &Username) -> Result<Vec<UserRecord>, RepoError> {
        let rows: Vec<PgUserRow> = sqlx::query_as(
            r#"SELECT id, username, password_hash, created_at FROM users WHERE username = $1"#,
        )
        .bind(username.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(PgUserRow::into_domain).collect())
    }
}

#[async_trait]
impl CredentialStore for PostgresRepo {
    async fn find_match(&self, username: &Username, password: &str) -> Result<bool, RepoError> {
        let candidates = self.find_by_username(username).await?;
        tracing::debug!(candidates = candidates.len(), "Loaded candidate records");
        self.verifier.verify_any(candidates, password).await
    }
}
