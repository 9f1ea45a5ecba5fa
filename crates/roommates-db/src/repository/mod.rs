//! # Repository Module
//!
//! Repository implementations for the household records.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Call, One Connection                             │
//! │                                                                         │
//! │  Shell                                                                 │
//! │       │                                                                 │
//! │       │  db.rooms().get_by_id(1)                                       │
//! │       ▼                                                                 │
//! │  RoomRepository                                                        │
//! │  ├── provider.open()                                                   │
//! │  ├── SELECT ... WHERE Id = ?1                                          │
//! │  ├── provider.release(conn)                                            │
//! │  └── Ok(Some(Room))                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Each repository owns a ConnectionProvider clone. Nothing is           │
//! │  inherited and no connection outlives the call.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`room::RoomRepository`] - Room CRUD
//! - [`chore::ChoreRepository`] - Chore CRUD, assignment, unassigned query
//! - [`roommate::RoommateRepository`] - Roommate reads with the room join

pub mod chore;
pub mod room;
pub mod roommate;
