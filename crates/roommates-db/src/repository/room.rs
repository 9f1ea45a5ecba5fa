//! # Room Repository
//!
//! Database operations for rooms.
//!
//! ## Delete Protection
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Removing a Room                                      │
//! │                                                                         │
//! │  DELETE FROM Room WHERE Id = 2                                         │
//! │       │                                                                 │
//! │       ├── No Roommate.RoomId = 2  → row removed, Ok(true)             │
//! │       │                                                                 │
//! │       └── Roommate.RoomId = 2     → FOREIGN KEY constraint failed      │
//! │                                     Err(ForeignKeyViolation)           │
//! │                                     room row untouched                 │
//! │                                                                         │
//! │  The repository passes the violation up unchanged. The shell turns     │
//! │  it into "Someone is renting the room".                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use roommates_core::Room;
use tracing::{debug, warn};

use crate::connection::ConnectionProvider;
use crate::error::DbResult;

/// Repository for room database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = RoomRepository::new(provider);
///
/// let mut den = Room::new("Den", 2);
/// repo.insert(&mut den).await?;   // den.id now set
/// let found = repo.get_by_id(den.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct RoomRepository {
    provider: ConnectionProvider,
}

impl RoomRepository {
    /// Creates a new RoomRepository.
    pub fn new(provider: ConnectionProvider) -> Self {
        RoomRepository { provider }
    }

    /// Lists every room in insertion order.
    ///
    /// An empty table yields an empty vector.
    pub async fn get_all(&self) -> DbResult<Vec<Room>> {
        let mut conn = self.provider.open().await?;

        let rooms = sqlx::query_as::<_, Room>(
            r#"
            SELECT
                Id AS id,
                Name AS name,
                MaxOccupancy AS max_occupancy
            FROM Room
            ORDER BY Id
            "#,
        )
        .fetch_all(&mut conn)
        .await?;

        self.provider.release(conn).await;

        debug!(count = rooms.len(), "Listed rooms");
        Ok(rooms)
    }

    /// Gets a room by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Room))` - Room found
    /// * `Ok(None)` - No room has that id
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Room>> {
        let mut conn = self.provider.open().await?;

        let room = sqlx::query_as::<_, Room>(
            r#"
            SELECT
                Id AS id,
                Name AS name,
                MaxOccupancy AS max_occupancy
            FROM Room
            WHERE Id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut conn)
        .await?;

        self.provider.release(conn).await;

        Ok(room)
    }

    /// Inserts a new room.
    ///
    /// `room.id` is ignored on the way in and overwritten with the id the
    /// database assigns.
    ///
    /// ## Returns
    /// The assigned id.
    pub async fn insert(&self, room: &mut Room) -> DbResult<i64> {
        debug!(name = %room.name, "Inserting room");

        let mut conn = self.provider.open().await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO Room (Name, MaxOccupancy)
            VALUES (?1, ?2)
            RETURNING Id
            "#,
        )
        .bind(&room.name)
        .bind(room.max_occupancy)
        .fetch_one(&mut conn)
        .await?;

        self.provider.release(conn).await;

        room.id = id;
        debug!(id, "Room inserted");
        Ok(id)
    }

    /// Overwrites name and max occupancy for `room.id`.
    ///
    /// ## Returns
    /// * `Ok(true)` - Row updated
    /// * `Ok(false)` - No room has that id; nothing changed
    pub async fn update(&self, room: &Room) -> DbResult<bool> {
        debug!(id = room.id, "Updating room");

        let mut conn = self.provider.open().await?;

        let result = sqlx::query(
            r#"
            UPDATE Room SET
                Name = ?2,
                MaxOccupancy = ?3
            WHERE Id = ?1
            "#,
        )
        .bind(room.id)
        .bind(&room.name)
        .bind(room.max_occupancy)
        .execute(&mut conn)
        .await?;

        self.provider.release(conn).await;

        if result.rows_affected() == 0 {
            warn!(id = room.id, "Room update matched no rows");
            return Ok(false);
        }

        Ok(true)
    }

    /// Deletes a room by id.
    ///
    /// ## Returns
    /// * `Ok(true)` - Room removed
    /// * `Ok(false)` - No room has that id
    /// * `Err(DbError::ForeignKeyViolation)` - A roommate still occupies it
    pub async fn delete(&self, id: i64) -> DbResult<bool> {
        debug!(id, "Deleting room");

        let mut conn = self.provider.open().await?;

        let result = sqlx::query("DELETE FROM Room WHERE Id = ?1")
            .bind(id)
            .execute(&mut conn)
            .await?;

        self.provider.release(conn).await;

        Ok(result.rows_affected() > 0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
