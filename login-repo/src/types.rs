//! Database row types for SQLite and PostgreSQL.

use sqlx::FromRow;

use login_types::{PasswordDigest, UserId, UserRecord, Username};

#[cfg(feature = "sqlite")]
use login_types::RepoError;

// ─────────────────────────────────────────────────────────────────────────────
// Database row structs (derive FromRow for automatic mapping)
// ─────────────────────────────────────────────────────────────────────────────

/// User row from SQLite, where ids and timestamps are stored as text.
#[cfg(feature = "sqlite")]
#[derive(FromRow)]
pub struct SqliteUserRow {
    pub id: String,
    pub username: String,
    pub password_hash: String,
    pub created_at: String,
}

#[cfg(feature = "sqlite")]
impl SqliteUserRow {
    /// Maps the row to a domain record.
    ///
    /// Ids may be hyphenated or plain hex (the column default). Timestamps may
    /// be RFC 3339, SQLite's `CURRENT_TIMESTAMP` form, or Unix seconds.
    pub fn into_domain(self) -> Result<UserRecord, RepoError> {
        let id = self
            .id
            .trim()
            .parse::<UserId>()
            .map_err(|e| RepoError::Database(format!("Invalid user id {}: {}", self.id, e)))?;

        let created_at = parse_sqlite_timestamp(&self.created_at).ok_or_else(|| {
            RepoError::Database(format!("Invalid created_at for {}: {}", id, self.created_at))
        })?;

        Ok(UserRecord::from_parts(
            id,
            Username::new(self.username),
            PasswordDigest::from_stored(self.password_hash),
            created_at,
        ))
    }
}

/// Parses the timestamp shapes SQLite commonly holds, as UTC.
#[cfg(feature = "sqlite")]
pub(crate) fn parse_sqlite_timestamp(raw: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    use chrono::{DateTime, NaiveDateTime, Utc};

    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    raw.parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}

/// User row from PostgreSQL.
#[cfg(feature = "postgres")]
#[derive(FromRow)]
pub struct PgUserRow {
    pub id: uuid::Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(feature = "postgres")]
impl PgUserRow {
    pub fn into_domain(self) -> UserRecord {
        UserRecord::from_parts(
            UserId::from_uuid(self.id),
            Username::new(self.username),
            PasswordDigest::from_stored(self.password_hash),
            self.created_at,
        )
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn row(id: &str, created_at: &str) -> SqliteUserRow {
        SqliteUserRow {
            id: id.to_string(),
            username: "alice".to_string(),
            password_hash: "x".to_string(),
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn test_parse_rfc3339() {
        let ts = parse_sqlite_timestamp("2024-03-01T12:30:00+02:00").unwrap();
        assert_eq!(ts.hour(), 10);
    }

    #[test]
    fn test_parse_current_timestamp_form() {
        let ts = parse_sqlite_timestamp("2024-03-01 12:30:45").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2024, 3, 1));
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (12, 30, 45));

        assert!(parse_sqlite_timestamp("2024-03-01 12:30:45.123").is_some());
        assert!(parse_sqlite_timestamp("2024-03-01T12:30:45").is_some());
    }

    #[test]
    fn test_parse_unix_seconds() {
        let ts = parse_sqlite_timestamp("1700000000").unwrap();
        assert_eq!(ts.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_sqlite_timestamp("yesterday").is_none());
        assert!(parse_sqlite_timestamp("").is_none());
    }

    #[test]
    fn test_simple_hex_id_is_accepted() {
        let record = row("67e5504410b1426f9247bb680e5fe0c8", "2024-03-01 12:30:45")
            .into_domain()
            .unwrap();
        assert_eq!(record.id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
    }

    #[test]
    fn test_unusable_row_is_error() {
        assert!(row("not-a-uuid", "2024-03-01 12:30:45").into_domain().is_err());
        assert!(
            row("67e55044-10b1-426f-9247-bb680e5fe0c8", "yesterday")
                .into_domain()
                .is_err()
        );
    }
}
