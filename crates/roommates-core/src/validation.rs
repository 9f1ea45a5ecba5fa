//! # Validation Module
//!
//! Input validation for everything the shell reads from the console.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shell prompt                                                 │
//! │  ├── parse_id / parse_number (malformed numbers re-prompt)             │
//! │  └── THIS MODULE: name and occupancy rules                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── Foreign key constraints (occupied rooms, assigned chores)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use roommates_core::validation::{parse_id, validate_name};
//!
//! assert_eq!(parse_id("Room Id", " 7 ").unwrap(), 7);
//! assert!(validate_name("name", "").is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{Chore, Room};
use crate::{MAX_NAME_LEN, MAX_ROOM_OCCUPANCY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a room or chore name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_NAME_LEN`] characters
///
/// ## Returns
/// The trimmed name.
pub fn validate_name(field: &str, name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a whole number typed at a prompt.
pub fn parse_number(field: &str, input: &str) -> ValidationResult<i64> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::NotANumber {
            field: field.to_string(),
            input: trimmed.to_string(),
        })
}

/// Parses a record id typed at a prompt.
///
/// Ids are assigned by the database starting at 1, so zero and negative
/// numbers are rejected before any query runs.
pub fn parse_id(field: &str, input: &str) -> ValidationResult<i64> {
    let id = parse_number(field, input)?;

    if id <= 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(id)
}

/// Validates a room's maximum occupancy.
///
/// ## Rules
/// - Between 1 and [`MAX_ROOM_OCCUPANCY`]
pub fn validate_max_occupancy(value: i64) -> ValidationResult<i32> {
    if value <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "max occupancy".to_string(),
        });
    }

    if value > i64::from(MAX_ROOM_OCCUPANCY) {
        return Err(ValidationError::OutOfRange {
            field: "max occupancy".to_string(),
            min: 1,
            max: i64::from(MAX_ROOM_OCCUPANCY),
        });
    }

    // In range above, so the narrowing cannot truncate.
    Ok(value as i32)
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates a room before insert or update.
pub fn validate_room(room: &Room) -> ValidationResult<()> {
    validate_name("room name", &room.name)?;
    validate_max_occupancy(i64::from(room.max_occupancy))?;
    Ok(())
}

/// Validates a chore before insert or update.
pub fn validate_chore(chore: &Chore) -> ValidationResult<()> {
    validate_name("chore name", &chore.name)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
