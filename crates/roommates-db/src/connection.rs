//! # Connection Management
//!
//! One fresh SQLite connection per repository call.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Connection Per Call                                │
//! │                                                                         │
//! │  Shell Startup                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbConfig::new(url) ← Connection string, read once                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ConnectionProvider::new(&config) ← Parsed options, nothing opened     │
//! │       │                                                                 │
//! │       │ cloned into every repository                                   │
//! │       ▼                                                                 │
//! │  repo.get_all()                                                        │
//! │    ├── provider.open()      ← new SqliteConnection                     │
//! │    ├── one statement                                                   │
//! │    └── provider.release()   ← closed before returning                  │
//! │                                                                         │
//! │  Error path: `?` returns early, the connection is dropped,             │
//! │  and sqlx closes it in Drop.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no pool. Connections are never shared between calls and no
//! transaction spans more than one statement.

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::chore::ChoreRepository;
use crate::repository::room::RoomRepository;
use crate::repository::roommate::RoommateRepository;

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("sqlite://roommates.db?mode=rwc")
///     .busy_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// sqlx connection string, e.g. `sqlite://roommates.db?mode=rwc`.
    pub connection_string: String,

    /// How long a statement waits on a locked database file.
    /// Default: 5 seconds
    pub busy_timeout: Duration,

    /// Whether to bootstrap the schema on connect.
    /// Default: true
    pub run_migrations: bool,
}

impl DbConfig {
    /// Creates a configuration from a connection string.
    pub fn new(connection_string: impl Into<String>) -> Self {
        DbConfig {
            connection_string: connection_string.into(),
            busy_timeout: Duration::from_secs(5),
            run_migrations: true,
        }
    }

    /// Creates a configuration for a database file, created if missing.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let dir = tempfile::tempdir()?;
    /// let config = DbConfig::file(dir.path().join("test.db"));
    /// ```
    pub fn file(path: impl AsRef<Path>) -> Self {
        DbConfig::new(format!("sqlite://{}?mode=rwc", path.as_ref().display()))
    }

    /// Sets the busy timeout.
    pub fn busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Sets whether to run the schema bootstrap on connect.
    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }
}

// =============================================================================
// Connection Provider
// =============================================================================

/// Hands out a new, independent connection on each call.
///
/// Cloning is cheap: only the parsed options are copied. Every repository
/// holds its own clone.
#[derive(Debug, Clone)]
pub struct ConnectionProvider {
    options: SqliteConnectOptions,
}

impl ConnectionProvider {
    /// Parses the connection string. Nothing is opened yet.
    ///
    /// Foreign keys are switched on for every connection; SQLite leaves
    /// them off by default and the occupied-room rule depends on them.
    pub fn new(config: &DbConfig) -> DbResult<Self> {
        // sqlx would read any other scheme as a file name
        if !config.connection_string.starts_with("sqlite:") {
            return Err(DbError::ConnectionFailed(format!(
                "unsupported connection string: {}",
                config.connection_string
            )));
        }

        // Each open() would get its own empty database
        if is_in_memory(&config.connection_string) {
            return Err(DbError::ConnectionFailed(format!(
                "in-memory databases don't persist between connections: {}",
                config.connection_string
            )));
        }

        let options = SqliteConnectOptions::from_str(&config.connection_string)
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?
            .foreign_keys(true)
            .busy_timeout(config.busy_timeout);

        Ok(ConnectionProvider { options })
    }

    /// Opens a new connection.
    ///
    /// ## Returns
    /// * `Ok(SqliteConnection)` - Open connection, owned by the caller
    /// * `Err(DbError::ConnectionFailed)` - Database unreachable; not retried
    pub async fn open(&self) -> DbResult<SqliteConnection> {
        let conn = self
            .options
            .connect()
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        debug!("Connection opened");
        Ok(conn)
    }

    /// Closes a connection after its one statement.
    ///
    /// A failure to close is logged, not returned: the statement already
    /// succeeded and the connection is gone either way.
    pub async fn release(&self, conn: SqliteConnection) {
        match conn.close().await {
            Ok(()) => debug!("Connection released"),
            Err(e) => warn!(error = %e, "Failed to close connection cleanly"),
        }
    }
}

fn is_in_memory(connection_string: &str) -> bool {
    connection_string.contains(":memory:") || connection_string.contains("mode=memory")
}

// =============================================================================
// Database
// =============================================================================

/// Entry point handing out repositories that share one provider.
///
/// ## Usage
/// ```rust,ignore
/// let db = Database::new(DbConfig::new(url)).await?;
/// for room in db.rooms().get_all().await? {
///     println!("{room}");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Database {
    provider: ConnectionProvider,
}

impl Database {
    /// Builds the provider and, if enabled, bootstraps the schema.
    ///
    /// ## What This Does
    /// 1. Parses the connection string
    /// 2. Runs the schema bootstrap (if enabled), which also proves the
    ///    database is reachable before the menu appears
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!("Initializing database access");

        let provider = ConnectionProvider::new(&config)?;
        let db = Database { provider };

        if config.run_migrations {
            db.run_migrations().await?;
        }

        Ok(db)
    }

    /// Applies the embedded schema on a dedicated connection.
    pub async fn run_migrations(&self) -> DbResult<()> {
        let mut conn = self.provider.open().await?;
        migrations::run_migrations(&mut conn).await?;
        self.provider.release(conn).await;
        Ok(())
    }

    /// Returns the connection provider.
    ///
    /// For statements not covered by repositories (seeding, tests).
    pub fn provider(&self) -> &ConnectionProvider {
        &self.provider
    }

    /// Returns the room repository.
    pub fn rooms(&self) -> RoomRepository {
        RoomRepository::new(self.provider.clone())
    }

    /// Returns the chore repository.
    pub fn chores(&self) -> ChoreRepository {
        ChoreRepository::new(self.provider.clone())
    }

    /// Returns the roommate repository.
    pub fn roommates(&self) -> RoommateRepository {
        RoommateRepository::new(self.provider.clone())
    }

    /// Checks that a connection can be opened and a query executed.
    pub async fn health_check(&self) -> bool {
        let Ok(mut conn) = self.provider.open().await else {
            return false;
        };

        let ok = sqlx::query("SELECT 1").execute(&mut conn).await.is_ok();
        self.provider.release(conn).await;
        ok
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_db;

    #[tokio::test]
    async fn test_file_database() {
        let (_dir, db) = test_db().await;

        assert!(db.health_check().await);
    }

    #[tokio::test]
    async fn test_config_builder() {
        let config = DbConfig::new("sqlite://x.db")
            .busy_timeout(Duration::from_secs(1))
            .run_migrations(false);

        assert_eq!(config.busy_timeout, Duration::from_secs(1));
        assert!(!config.run_migrations);
    }

    #[tokio::test]
    async fn test_file_config_creates_missing_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.db");

        let db = Database::new(DbConfig::file(&path)).await.unwrap();

        assert!(path.exists());
        assert!(db.health_check().await);
    }

    #[tokio::test]
    async fn test_unreachable_database_is_connectivity_error() {
        let dir = tempfile::tempdir().unwrap();
        // Parent directory doesn't exist and mode=ro refuses to create it.
        let url = format!(
            "sqlite://{}?mode=ro",
            dir.path().join("missing").join("nope.db").display()
        );

        let err = Database::new(DbConfig::new(url)).await.unwrap_err();
        assert!(err.is_connectivity());
    }

    #[tokio::test]
    async fn test_malformed_connection_string() {
        let err = ConnectionProvider::new(&DbConfig::new("postgres://nope")).unwrap_err();
        assert!(err.is_connectivity());
    }

    #[tokio::test]
    async fn test_in_memory_database_rejected() {
        for url in ["sqlite::memory:", "sqlite://house.db?mode=memory"] {
            let err = Database::new(DbConfig::new(url)).await.unwrap_err();
            assert!(matches!(err, DbError::ConnectionFailed(_)), "{url}");
        }
    }

    #[tokio::test]
    async fn test_each_open_is_independent() {
        let (_dir, db) = test_db().await;
        let provider = db.provider();

        let first = provider.open().await.unwrap();
        let second = provider.open().await.unwrap();

        provider.release(first).await;
        provider.release(second).await;
        assert!(db.health_check().await);
    }
}
