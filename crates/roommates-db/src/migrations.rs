//! # Schema Bootstrap
//!
//! Embedded SQL that creates the household tables on a fresh database.
//!
//! ## How It Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Bootstrap Process                                  │
//! │                                                                         │
//! │  Shell Startup                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Check _sqlx_migrations table                                          │
//! │       │                                                                 │
//! │       ├── Table doesn't exist? Create it                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  001_initial_schema.sql                                                │
//! │       ├── already recorded? skip                                       │
//! │       └── otherwise CREATE TABLE IF NOT EXISTS ... (existing           │
//! │           tables from an external provisioner are left alone)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Shell shows the menu                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This is not a migration tool: there is one script, it only creates
//! what is missing, and it never alters an existing table.

use sqlx::sqlite::SqliteConnection;
use tracing::info;

use crate::error::DbResult;

/// Embedded scripts from the workspace `migrations/sqlite` directory.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Applies any script not yet recorded in `_sqlx_migrations`.
///
/// Idempotent: safe to run on every start.
pub async fn run_migrations(conn: &mut SqliteConnection) -> DbResult<()> {
    info!(
        scripts = MIGRATOR.migrations.len(),
        "Checking household schema"
    );

    MIGRATOR.run(conn).await?;

    info!("Household schema ready");
    Ok(())
}
