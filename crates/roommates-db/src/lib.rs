//! # roommates-db: Database Layer for Roommates
//!
//! This crate provides database access for the household records.
//! It uses SQLite with sqlx, opening one connection per repository call.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Roommates Data Flow                              │
//! │                                                                         │
//! │  Shell menu choice ("Show all rooms")                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   roommates-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  Connection   │    │ Repositories  │    │  Migrations  │  │   │
//! │  │   │(connection.rs)│    │               │    │  (embedded)  │  │   │
//! │  │   │               │    │ RoomRepo      │    │              │  │   │
//! │  │   │ Provider      │◄───│ ChoreRepo     │    │ 001_initial  │  │   │
//! │  │   │ open/release  │    │ RoommateRepo  │    │   _schema    │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │     Room · Chore · Roommate · RoommateChore                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`connection`] - Configuration, connection provider, `Database` handle
//! - [`migrations`] - Embedded schema bootstrap
//! - [`error`] - Database error types
//! - [`repository`] - Room, chore and roommate repositories
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roommates_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("sqlite://roommates.db?mode=rwc")).await?;
//!
//! let mut den = Room::new("Den", 2);
//! db.rooms().insert(&mut den).await?;
//! let unassigned = db.chores().unassigned_chores().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod connection;
pub mod error;
pub mod migrations;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use connection::{ConnectionProvider, Database, DbConfig};
pub use error::{DbError, DbResult};

// Repository re-exports for convenience
pub use repository::chore::ChoreRepository;
pub use repository::room::RoomRepository;
pub use repository::roommate::RoommateRepository;
