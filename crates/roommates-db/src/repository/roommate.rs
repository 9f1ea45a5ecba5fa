//! # Roommate Repository
//!
//! Read-only access to roommates. Rows are provisioned outside this
//! program (see the `seed` binary for development data).
//!
//! ## Detail Lookup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SELECT ... FROM Roommate rm                                           │
//! │  JOIN Room r ON rm.RoomId = r.Id                                       │
//! │  WHERE rm.Id = ?1                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  RoommateRow (flat)  ──into──►  Roommate { .., room: Room { .. } }     │
//! │                                                                         │
//! │  No row → Ok(None). A roommate is never returned half-filled.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use roommates_core::{Chore, Room, Roommate, RoommateSummary};
use tracing::debug;

use crate::connection::ConnectionProvider;
use crate::error::DbResult;

/// Flat result of the Roommate ⋈ Room join.
#[derive(Debug, sqlx::FromRow)]
struct RoommateRow {
    id: i64,
    first_name: String,
    last_name: String,
    rent_portion: i32,
    moved_in_date: NaiveDate,
    room_id: i64,
    room_name: String,
    room_max_occupancy: i32,
}

impl From<RoommateRow> for Roommate {
    fn from(row: RoommateRow) -> Self {
        Roommate {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            rent_portion: row.rent_portion,
            moved_in_date: row.moved_in_date,
            room: Room {
                id: row.room_id,
                name: row.room_name,
                max_occupancy: row.room_max_occupancy,
            },
        }
    }
}

/// Repository for roommate reads.
#[derive(Debug, Clone)]
pub struct RoommateRepository {
    provider: ConnectionProvider,
}

impl RoommateRepository {
    /// Creates a new RoommateRepository.
    pub fn new(provider: ConnectionProvider) -> Self {
        RoommateRepository { provider }
    }

    /// Lists every roommate, names only.
    pub async fn get_all(&self) -> DbResult<Vec<RoommateSummary>> {
        let mut conn = self.provider.open().await?;

        let roommates = sqlx::query_as::<_, RoommateSummary>(
            r#"
            SELECT
                Id AS id,
                FirstName AS first_name,
                LastName AS last_name
            FROM Roommate
            ORDER BY Id
            "#,
        )
        .fetch_all(&mut conn)
        .await?;

        self.provider.release(conn).await;

        debug!(count = roommates.len(), "Listed roommates");
        Ok(roommates)
    }

    /// Gets a roommate with the room they occupy.
    ///
    /// ## Returns
    /// * `Ok(Some(Roommate))` - Roommate found, room embedded
    /// * `Ok(None)` - No roommate has that id
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Roommate>> {
        let mut conn = self.provider.open().await?;

        let row = sqlx::query_as::<_, RoommateRow>(
            r#"
            SELECT
                rm.Id AS id,
                rm.FirstName AS first_name,
                rm.LastName AS last_name,
                rm.RentPortion AS rent_portion,
                rm.MovedInDate AS moved_in_date,
                r.Id AS room_id,
                r.Name AS room_name,
                r.MaxOccupancy AS room_max_occupancy
            FROM Roommate rm
            JOIN Room r ON rm.RoomId = r.Id
            WHERE rm.Id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut conn)
        .await?;

        self.provider.release(conn).await;

        Ok(row.map(Roommate::from))
    }

    /// Lists the chores assigned to a roommate.
    ///
    /// A chore assigned twice shows up twice.
    pub async fn chores_for(&self, roommate_id: i64) -> DbResult<Vec<Chore>> {
        let mut conn = self.provider.open().await?;

        let chores = sqlx::query_as::<_, Chore>(
            r#"
            SELECT c.Id AS id, c.Name AS name
            FROM RoommateChore rc
            JOIN Chore c ON rc.ChoreId = c.Id
            WHERE rc.RoommateId = ?1
            ORDER BY rc.Id
            "#,
        )
        .bind(roommate_id)
        .fetch_all(&mut conn)
        .await?;

        self.provider.release(conn).await;

        Ok(chores)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
