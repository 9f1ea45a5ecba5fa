//! # Domain Types
//!
//! Model types for the household database.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Room       │   │    Roommate     │   │     Chore       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──│  room (FK)      │   │  id             │       │
//! │  │  name           │   │  first/last     │   │  name           │       │
//! │  │  max_occupancy  │   │  rent_portion   │   └────────▲────────┘       │
//! │  └─────────────────┘   │  moved_in_date  │            │                │
//! │                        └────────▲────────┘            │                │
//! │                                 │   ┌─────────────────┴──┐             │
//! │                                 └───│  ChoreAssignment   │             │
//! │                                     │  roommate_id (FK)  │             │
//! │                                     │  chore_id (FK)     │             │
//! │                                     └────────────────────┘             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every id is assigned by the database at insert time. A value built with
//! `new()` carries [`UNSAVED_ID`] until a repository writes the real id back.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::UNSAVED_ID;

// =============================================================================
// Room
// =============================================================================

/// A rentable room in the house.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Room {
    /// Database-assigned identifier.
    pub id: i64,

    /// Display name ("Den", "Attic").
    pub name: String,

    /// How many roommates the room can hold.
    pub max_occupancy: i32,
}

impl Room {
    /// Builds a room that has not been inserted yet.
    pub fn new(name: impl Into<String>, max_occupancy: i32) -> Self {
        Room {
            id: UNSAVED_ID,
            name: name.into(),
            max_occupancy,
        }
    }

    /// Returns true once the database has assigned an id.
    pub fn is_saved(&self) -> bool {
        self.id != UNSAVED_ID
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} Max Occupancy({})",
            self.id, self.name, self.max_occupancy
        )
    }
}

// =============================================================================
// Chore
// =============================================================================

/// A household chore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Chore {
    /// Database-assigned identifier.
    pub id: i64,

    /// What needs doing ("Dishes", "Trash").
    pub name: String,
}

impl Chore {
    /// Builds a chore that has not been inserted yet.
    pub fn new(name: impl Into<String>) -> Self {
        Chore {
            id: UNSAVED_ID,
            name: name.into(),
        }
    }

    /// Returns true once the database has assigned an id.
    pub fn is_saved(&self) -> bool {
        self.id != UNSAVED_ID
    }
}

impl fmt::Display for Chore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.id, self.name)
    }
}

// =============================================================================
// Roommate
// =============================================================================

/// Row of the roommate list: names only, no room join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct RoommateSummary {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl RoommateSummary {
    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for RoommateSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} {}", self.id, self.first_name, self.last_name)
    }
}

/// A roommate with the room they occupy.
///
/// Only produced by the detail lookup, which joins Room. There is no
/// partially filled variant: either every field is present or the lookup
/// returns nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roommate {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,

    /// Percentage of the rent this roommate pays.
    pub rent_portion: i32,

    /// Day the roommate moved in.
    pub moved_in_date: NaiveDate,

    /// The room this roommate occupies.
    pub room: Room,
}

impl Roommate {
    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Drops the detail fields.
    pub fn summary(&self) -> RoommateSummary {
        RoommateSummary {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

impl fmt::Display for Roommate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} pays {}% of rent. They occupy {}.",
            self.id, self.first_name, self.rent_portion, self.room.name
        )
    }
}

// =============================================================================
// Chore Assignment
// =============================================================================

/// One row of the RoommateChore relation.
///
/// Nothing stops the same pair from appearing twice; each call to assign
/// a chore adds a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ChoreAssignment {
    pub id: i64,
    pub roommate_id: i64,
    pub chore_id: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================
