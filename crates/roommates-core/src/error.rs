//! # Error Types
//!
//! Domain-specific error types for roommates-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  roommates-core errors (this file)                                     │
//! │  ├── CoreError        - Household rule failures the shell reports      │
//! │  └── ValidationError  - Input validation failures (re-prompt)          │
//! │                                                                         │
//! │  roommates-db errors (separate crate)                                  │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  Shell errors (in app)                                                 │
//! │  └── ShellError       - What terminates the session                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError ─┐                                  │
//! │        DbError ─────────────────────┴→ ShellError → exit               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (ids, field names)
//! 3. Errors are enum variants, never String
//! 4. Each variant's Display is the line the shell prints

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Household rule errors.
///
/// A repository reports a missing row as `Ok(None)` and a rejected delete
/// as a foreign key violation. The shell turns those outcomes into these
/// variants so the user sees a sentence rather than a SQL message.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No room has the requested id.
    #[error("No room with Id {0}")]
    RoomNotFound(i64),

    /// No chore has the requested id.
    #[error("No chore with Id {0}")]
    ChoreNotFound(i64),

    /// No roommate has the requested id.
    #[error("No roommate with Id {0}")]
    RoommateNotFound(i64),

    /// Room still has at least one roommate living in it.
    ///
    /// ## When This Occurs
    /// - Deleting a room that a Roommate row references
    #[error("Someone is renting room {room_id}. It cannot be removed at this time")]
    RoomOccupied { room_id: i64 },

    /// Chore is still assigned to at least one roommate.
    ///
    /// ## When This Occurs
    /// - Deleting a chore that has rows in the assignment relation
    #[error("Chore {chore_id} is assigned {assignments} time(s). It cannot be removed")]
    ChoreAssigned { chore_id: i64, assignments: usize },

    /// Assignment refers to a chore or roommate that does not exist.
    #[error("Cannot assign chore {chore_id} to roommate {roommate_id}: no such chore or roommate")]
    InvalidAssignment { chore_id: i64, roommate_id: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// The shell re-prompts instead of calling a repository.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Input could not be read as a whole number.
    #[error("{field} must be a whole number, got '{input}'")]
    NotANumber { field: String, input: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
