//! # roommates-core: Household Model Types
//!
//! This crate holds the model types shared by the database layer and the
//! interactive shell, plus the input rules the shell checks before it
//! touches the database.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Roommates Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli (Interactive Shell)                 │   │
//! │  │    Menu ──► Prompt ──► Repository call ──► Print               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ roommates-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │   error   │  │ validation│                  │   │
//! │  │   │   Room    │  │ CoreError │  │   names   │                  │   │
//! │  │   │   Chore   │  │ Validation│  │ occupancy │                  │   │
//! │  │   │ Roommate  │  │   Error   │  │           │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CONSOLE                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  roommates-db (Database Layer)                  │   │
//! │  │              SQLite queries, schema, repositories               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Room, Chore, Roommate and the assignment row
//! - [`error`] - Domain error types
//! - [`validation`] - Input rules for names, occupancy and ids
//!
//! ## Example Usage
//!
//! ```rust
//! use roommates_core::{validation::validate_room, Room};
//!
//! let room = Room::new("Den", 2);
//! assert_eq!(room.id, 0); // not saved yet
//! assert!(validate_room(&room).is_ok());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Id carried by a record that has not been inserted yet.
///
/// The database assigns real ids (starting at 1), so zero never collides.
pub const UNSAVED_ID: i64 = 0;

/// Longest name accepted for a room or chore.
pub const MAX_NAME_LEN: usize = 55;

/// Upper bound for a room's occupancy.
pub const MAX_ROOM_OCCUPANCY: i32 = 20;
