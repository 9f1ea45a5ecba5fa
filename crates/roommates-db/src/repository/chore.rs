//! # Chore Repository
//!
//! Database operations for chores and their assignment to roommates.
//!
//! ## Unassigned Chores
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    LEFT JOIN + IS NULL                                  │
//! │                                                                         │
//! │  Chore                     RoommateChore                               │
//! │  ┌────┬────────┐          ┌────┬────────────┬─────────┐               │
//! │  │ Id │ Name   │          │ Id │ RoommateId │ ChoreId │               │
//! │  ├────┼────────┤          ├────┼────────────┼─────────┤               │
//! │  │ 5  │ Dishes │ ───────► │ 1  │ 1          │ 5       │               │
//! │  │ 6  │ Trash  │ ───────► │ NULL (no match)          │ ← unassigned  │
//! │  └────┴────────┘          └──────────────────────────┘               │
//! │                                                                         │
//! │  Result: [6 - Trash]                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Referential Policy
//! Both columns of RoommateChore are foreign keys without ON DELETE
//! actions. Deleting a chore that is still assigned fails, and assigning a
//! chore or roommate id that doesn't exist fails, both with
//! `DbError::ForeignKeyViolation`. Assignment rows can never dangle.

use roommates_core::{Chore, ChoreAssignment};
use tracing::{debug, warn};

use crate::connection::ConnectionProvider;
use crate::error::DbResult;

/// Repository for chore database operations.
#[derive(Debug, Clone)]
pub struct ChoreRepository {
    provider: ConnectionProvider,
}

impl ChoreRepository {
    /// Creates a new ChoreRepository.
    pub fn new(provider: ConnectionProvider) -> Self {
        ChoreRepository { provider }
    }

    /// Lists every chore in insertion order.
    pub async fn get_all(&self) -> DbResult<Vec<Chore>> {
        let mut conn = self.provider.open().await?;

        let chores = sqlx::query_as::<_, Chore>(
            r#"
            SELECT Id AS id, Name AS name
            FROM Chore
            ORDER BY Id
            "#,
        )
        .fetch_all(&mut conn)
        .await?;

        self.provider.release(conn).await;

        debug!(count = chores.len(), "Listed chores");
        Ok(chores)
    }

    /// Gets a chore by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Chore))` - Chore found
    /// * `Ok(None)` - No chore has that id
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Chore>> {
        let mut conn = self.provider.open().await?;

        let chore = sqlx::query_as::<_, Chore>(
            r#"
            SELECT Id AS id, Name AS name
            FROM Chore
            WHERE Id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut conn)
        .await?;

        self.provider.release(conn).await;

        Ok(chore)
    }

    /// Lists chores that no roommate has been assigned.
    pub async fn unassigned_chores(&self) -> DbResult<Vec<Chore>> {
        let mut conn = self.provider.open().await?;

        let chores = sqlx::query_as::<_, Chore>(
            r#"
            SELECT c.Id AS id, c.Name AS name
            FROM Chore c
            LEFT JOIN RoommateChore rc ON c.Id = rc.ChoreId
            WHERE rc.Id IS NULL
            ORDER BY c.Id
            "#,
        )
        .fetch_all(&mut conn)
        .await?;

        self.provider.release(conn).await;

        debug!(count = chores.len(), "Listed unassigned chores");
        Ok(chores)
    }

    /// Assigns a chore to a roommate.
    ///
    /// Calling this twice with the same pair stores two rows; there is no
    /// uniqueness check.
    ///
    /// ## Returns
    /// * `Ok(id)` - Id of the new assignment row
    /// * `Err(DbError::ForeignKeyViolation)` - Chore or roommate doesn't exist
    pub async fn assign_chore(&self, chore_id: i64, roommate_id: i64) -> DbResult<i64> {
        debug!(chore_id, roommate_id, "Assigning chore");

        let mut conn = self.provider.open().await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO RoommateChore (RoommateId, ChoreId)
            VALUES (?1, ?2)
            RETURNING Id
            "#,
        )
        .bind(roommate_id)
        .bind(chore_id)
        .fetch_one(&mut conn)
        .await?;

        self.provider.release(conn).await;

        Ok(id)
    }

    /// Lists the assignment rows that reference a chore.
    pub async fn assignments_for_chore(&self, chore_id: i64) -> DbResult<Vec<ChoreAssignment>> {
        let mut conn = self.provider.open().await?;

        let rows = sqlx::query_as::<_, ChoreAssignment>(
            r#"
            SELECT Id AS id, RoommateId AS roommate_id, ChoreId AS chore_id
            FROM RoommateChore
            WHERE ChoreId = ?1
            ORDER BY Id
            "#,
        )
        .bind(chore_id)
        .fetch_all(&mut conn)
        .await?;

        self.provider.release(conn).await;

        Ok(rows)
    }

    /// Inserts a new chore and writes the assigned id into `chore.id`.
    pub async fn insert(&self, chore: &mut Chore) -> DbResult<i64> {
        debug!(name = %chore.name, "Inserting chore");

        let mut conn = self.provider.open().await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO Chore (Name)
            VALUES (?1)
            RETURNING Id
            "#,
        )
        .bind(&chore.name)
        .fetch_one(&mut conn)
        .await?;

        self.provider.release(conn).await;

        chore.id = id;
        Ok(id)
    }

    /// Overwrites the name for `chore.id`.
    ///
    /// ## Returns
    /// * `Ok(true)` - Row updated
    /// * `Ok(false)` - No chore has that id; nothing changed
    pub async fn update(&self, chore: &Chore) -> DbResult<bool> {
        debug!(id = chore.id, "Updating chore");

        let mut conn = self.provider.open().await?;

        let result = sqlx::query("UPDATE Chore SET Name = ?2 WHERE Id = ?1")
            .bind(chore.id)
            .bind(&chore.name)
            .execute(&mut conn)
            .await?;

        self.provider.release(conn).await;

        if result.rows_affected() == 0 {
            warn!(id = chore.id, "Chore update matched no rows");
            return Ok(false);
        }

        Ok(true)
    }

    /// Deletes a chore by id.
    ///
    /// ## Returns
    /// * `Ok(true)` - Chore removed
    /// * `Ok(false)` - No chore has that id
    /// * `Err(DbError::ForeignKeyViolation)` - Chore is still assigned
    pub async fn delete(&self, id: i64) -> DbResult<bool> {
        debug!(id, "Deleting chore");

        let mut conn = self.provider.open().await?;

        let result = sqlx::query("DELETE FROM Chore WHERE Id = ?1")
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

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::error::DbError;
    use crate::test_support::{insert_roommate, test_db};
    use crate::Database;
    use roommates_core::{Chore, Room};

    /// Room plus one roommate living in it; returns the roommate id.
    async fn household(db: &Database) -> i64 {
        let mut den = Room::new("Den", 2);
        db.rooms().insert(&mut den).await.unwrap();
        insert_roommate(db, "Jenna", "Solis", 50, den.id).await
    }

    async fn add(db: &Database, name: &str) -> Chore {
        let mut chore = Chore::new(name);
        db.chores().insert(&mut chore).await.unwrap();
        chore
    }

    #[tokio::test]
    async fn test_get_all_empty() {
        let (_dir, db) = test_db().await;

        assert!(db.chores().get_all().await.unwrap().is_empty());
        assert!(db.chores().unassigned_chores().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_and_get_by_id() {
        let (_dir, db) = test_db().await;

        let dishes = add(&db, "Dishes").await;

        assert!(dishes.is_saved());
        assert_eq!(db.chores().get_by_id(dishes.id).await.unwrap(), Some(dishes));
        assert!(db.chores().get_by_id(500).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unassigned_excludes_assigned_chore() {
        let (_dir, db) = test_db().await;
        let roommate_id = household(&db).await;
        let repo = db.chores();

        let dishes = add(&db, "Dishes").await;
        let trash = add(&db, "Trash").await;

        repo.assign_chore(dishes.id, roommate_id).await.unwrap();

        assert_eq!(repo.unassigned_chores().await.unwrap(), vec![trash]);
    }

    #[tokio::test]
    async fn test_unassigned_is_set_difference() {
        let (_dir, db) = test_db().await;
        let roommate_id = household(&db).await;
        let repo = db.chores();

        let mut all = Vec::new();
        for name in ["Dishes", "Trash", "Laundry", "Mop", "Yard"] {
            all.push(add(&db, name).await);
        }

        // Assign every other chore, one of them twice
        for chore in all.iter().step_by(2) {
            repo.assign_chore(chore.id, roommate_id).await.unwrap();
        }
        repo.assign_chore(all[0].id, roommate_id).await.unwrap();

        let assigned: BTreeSet<i64> = all.iter().step_by(2).map(|c| c.id).collect();
        let expected: BTreeSet<i64> = all
            .iter()
            .map(|c| c.id)
            .filter(|id| !assigned.contains(id))
            .collect();

        let unassigned: BTreeSet<i64> = repo
            .unassigned_chores()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();

        assert_eq!(unassigned, expected);
    }

    #[tokio::test]
    async fn test_assign_twice_creates_two_rows() {
        let (_dir, db) = test_db().await;
        let roommate_id = household(&db).await;
        let repo = db.chores();

        let dishes = add(&db, "Dishes").await;

        let first = repo.assign_chore(dishes.id, roommate_id).await.unwrap();
        let second = repo.assign_chore(dishes.id, roommate_id).await.unwrap();

        assert_ne!(first, second);
        let rows = repo.assignments_for_chore(dishes.id).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows
            .iter()
            .all(|r| r.chore_id == dishes.id && r.roommate_id == roommate_id));
    }

    #[tokio::test]
    async fn test_assign_to_missing_roommate_fails() {
        let (_dir, db) = test_db().await;
        let dishes = add(&db, "Dishes").await;

        let err = db.chores().assign_chore(dishes.id, 77).await.unwrap_err();

        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
        assert_eq!(db.chores().unassigned_chores().await.unwrap(), vec![dishes]);
    }

    #[tokio::test]
    async fn test_assign_missing_chore_fails() {
        let (_dir, db) = test_db().await;
        let roommate_id = household(&db).await;

        let err = db.chores().assign_chore(31, roommate_id).await.unwrap_err();

        assert!(err.is_foreign_key_violation());
    }

    #[tokio::test]
    async fn test_update() {
        let (_dir, db) = test_db().await;
        let repo = db.chores();

        let mut chore = add(&db, "Dishes").await;
        chore.name = "Dry dishes".to_string();

        assert!(repo.update(&chore).await.unwrap());
        assert_eq!(repo.get_by_id(chore.id).await.unwrap(), Some(chore));

        let ghost = Chore {
            id: 404,
            name: "Nothing".to_string(),
        };
        assert!(!repo.update(&ghost).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_unassigned() {
        let (_dir, db) = test_db().await;
        let repo = db.chores();

        let dishes = add(&db, "Dishes").await;
        let trash = add(&db, "Trash").await;

        assert!(repo.delete(dishes.id).await.unwrap());
        assert_eq!(repo.get_all().await.unwrap(), vec![trash]);
        assert!(!repo.delete(dishes.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_assigned_chore_fails() {
        let (_dir, db) = test_db().await;
        let roommate_id = household(&db).await;
        let repo = db.chores();

        let dishes = add(&db, "Dishes").await;
        repo.assign_chore(dishes.id, roommate_id).await.unwrap();

        let err = repo.delete(dishes.id).await.unwrap_err();

        assert!(err.is_foreign_key_violation());
        assert_eq!(repo.get_by_id(dishes.id).await.unwrap(), Some(dishes));
    }
}
