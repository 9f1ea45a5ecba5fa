//! # Interactive Shell
//!
//! Numbered menu over any line reader and writer.
//!
//! ## Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  print menu ──► "Select an option > " ──► parse                        │
//! │       ▲                                     │                           │
//! │       │                     not a number ◄──┤ (re-prompt)               │
//! │       │                                     ▼                           │
//! │       │                              dispatch(option)                   │
//! │       │                                     │                           │
//! │       │            prompts ──► one repository call ──► print            │
//! │       │                                     │                           │
//! │       └──── "Press Enter to continue" ◄─────┘                           │
//! │                                                                         │
//! │  Exit or closed input ends the loop.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Generic over `BufRead`/`Write` so tests drive it with a `Cursor` and a
//! `Vec<u8>` instead of the terminal.

use std::io::{BufRead, Write};

use roommates_core::validation::{
    parse_id, parse_number, validate_max_occupancy, validate_name,
};
use roommates_core::{Chore, CoreError, Room};
use roommates_db::{ChoreRepository, Database, DbError, RoomRepository, RoommateRepository};
use tracing::{debug, info};

use crate::error::{ShellError, ShellResult};
use crate::menu::MenuOption;

/// Interactive menu bound to one database.
pub struct Shell<R, W> {
    rooms: RoomRepository,
    chores: ChoreRepository,
    roommates: RoommateRepository,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell reading from `input` and printing to `output`.
    pub fn new(db: &Database, input: R, output: W) -> Self {
        Shell {
            rooms: db.rooms(),
            chores: db.chores(),
            roommates: db.roommates(),
            input,
            output,
        }
    }

    /// Consumes the shell and returns the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu until Exit is chosen or input closes.
    ///
    /// Foreign key rejections and missing ids are reported in place.
    /// Any other database error ends the session and is returned.
    pub async fn run(&mut self) -> ShellResult<()> {
        info!("Shell started");

        loop {
            let option = match self.select_option() {
                Ok(option) => option,
                Err(ShellError::EndOfInput) => break,
                Err(e) => return Err(e),
            };

            if option == MenuOption::Exit {
                break;
            }

            debug!(option = option.label(), "Menu selection");

            match self.dispatch(option).await {
                Ok(()) => {}
                Err(ShellError::EndOfInput) => break,
                Err(e) => return Err(e),
            }

            match self.pause() {
                Ok(()) => {}
                Err(ShellError::EndOfInput) => break,
                Err(e) => return Err(e),
            }
        }

        info!("Shell finished");
        Ok(())
    }

    async fn dispatch(&mut self, option: MenuOption) -> ShellResult<()> {
        match option {
            MenuOption::ShowAllRooms => self.show_all_rooms().await,
            MenuOption::SearchRoom => self.search_room().await,
            MenuOption::AddRoom => self.add_room().await,
            MenuOption::UpdateRoom => self.update_room().await,
            MenuOption::RemoveRoom => self.remove_room().await,
            MenuOption::ShowAllChores => self.show_all_chores().await,
            MenuOption::SearchChore => self.search_chore().await,
            MenuOption::AddChore => self.add_chore().await,
            MenuOption::UpdateChore => self.update_chore().await,
            MenuOption::RemoveChore => self.remove_chore().await,
            MenuOption::ShowUnassignedChores => self.show_unassigned_chores().await,
            MenuOption::AssignChore => self.assign_chore().await,
            MenuOption::SelectRoommate => self.select_roommate().await,
            MenuOption::Exit => Ok(()),
        }
    }

    // =========================================================================
    // Rooms
    // =========================================================================

    async fn show_all_rooms(&mut self) -> ShellResult<()> {
        let rooms = self.rooms.get_all().await?;

        if rooms.is_empty() {
            writeln!(self.output, "No rooms yet.")?;
        }
        for r in &rooms {
            writeln!(
                self.output,
                "{} has an Id of {} and a max occupancy of {}",
                r.name, r.id, r.max_occupancy
            )?;
        }
        Ok(())
    }

    async fn search_room(&mut self) -> ShellResult<()> {
        let id = self.prompt_id("Room Id:", "Room Id")?;

        match self.rooms.get_by_id(id).await? {
            Some(room) => writeln!(self.output, "{room}")?,
            None => self.report(CoreError::RoomNotFound(id))?,
        }
        Ok(())
    }

    async fn add_room(&mut self) -> ShellResult<()> {
        let name = self.prompt_name("Room name:", "Room name")?;
        let max_occupancy = self.prompt_occupancy("Max occupancy:", "Max occupancy")?;

        let mut room = Room::new(name, max_occupancy);
        self.rooms.insert(&mut room).await?;

        writeln!(
            self.output,
            "{} has been added and assigned an Id of {}",
            room.name, room.id
        )?;
        Ok(())
    }

    async fn update_room(&mut self) -> ShellResult<()> {
        let options = self.rooms.get_all().await?;
        if options.is_empty() {
            writeln!(self.output, "No rooms to update.")?;
            return Ok(());
        }
        for r in &options {
            writeln!(self.output, "{r}")?;
        }

        let id = self.prompt_id("Which room would you like to update?", "Room Id")?;
        let Some(mut room) = options.into_iter().find(|r| r.id == id) else {
            return self.report(CoreError::RoomNotFound(id));
        };

        room.name = self.prompt_name("New Name:", "Room name")?;
        room.max_occupancy = self.prompt_occupancy("New Max Occupancy:", "Max occupancy")?;

        if self.rooms.update(&room).await? {
            writeln!(self.output, "Room has been successfully updated")?;
        } else {
            // Removed by someone else since the list was printed
            self.report(CoreError::RoomNotFound(id))?;
        }
        Ok(())
    }

    async fn remove_room(&mut self) -> ShellResult<()> {
        let options = self.rooms.get_all().await?;
        if options.is_empty() {
            writeln!(self.output, "No rooms to remove.")?;
            return Ok(());
        }
        for r in &options {
            writeln!(self.output, "{} - {}", r.id, r.name)?;
        }

        let id = self.prompt_id("Pick a room to remove:", "Room Id")?;

        match self.rooms.delete(id).await {
            Ok(true) => writeln!(self.output, "Room was successfully removed!")?,
            Ok(false) => self.report(CoreError::RoomNotFound(id))?,
            Err(DbError::ForeignKeyViolation { .. }) => {
                self.report(CoreError::RoomOccupied { room_id: id })?
            }
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    // =========================================================================
    // Chores
    // =========================================================================

    async fn show_all_chores(&mut self) -> ShellResult<()> {
        let chores = self.chores.get_all().await?;

        if chores.is_empty() {
            writeln!(self.output, "No chores yet.")?;
        }
        for c in &chores {
            writeln!(self.output, "{} has an Id of {}", c.name, c.id)?;
        }
        Ok(())
    }

    async fn search_chore(&mut self) -> ShellResult<()> {
        let id = self.prompt_id("Chore Id:", "Chore Id")?;

        match self.chores.get_by_id(id).await? {
            Some(chore) => writeln!(self.output, "{chore}")?,
            None => self.report(CoreError::ChoreNotFound(id))?,
        }
        Ok(())
    }

    async fn add_chore(&mut self) -> ShellResult<()> {
        let name = self.prompt_name("Chore name:", "Chore name")?;

        let mut chore = Chore::new(name);
        self.chores.insert(&mut chore).await?;

        writeln!(
            self.output,
            "{} has been added and assigned an Id of {}",
            chore.name, chore.id
        )?;
        Ok(())
    }

    async fn update_chore(&mut self) -> ShellResult<()> {
        let options = self.chores.get_all().await?;
        if options.is_empty() {
            writeln!(self.output, "No chores to update.")?;
            return Ok(());
        }
        for c in &options {
            writeln!(self.output, "{c}")?;
        }

        let id = self.prompt_id("Which chore would you like to update?", "Chore Id")?;
        let Some(mut chore) = options.into_iter().find(|c| c.id == id) else {
            return self.report(CoreError::ChoreNotFound(id));
        };

        chore.name = self.prompt_name("New Name:", "Chore name")?;

        if self.chores.update(&chore).await? {
            writeln!(self.output, "Chore has been successfully updated")?;
        } else {
            self.report(CoreError::ChoreNotFound(id))?;
        }
        Ok(())
    }

    async fn remove_chore(&mut self) -> ShellResult<()> {
        let options = self.chores.get_all().await?;
        if options.is_empty() {
            writeln!(self.output, "No chores to remove.")?;
            return Ok(());
        }
        for c in &options {
            writeln!(self.output, "{c}")?;
        }

        let id = self.prompt_id("Pick a chore to remove:", "Chore Id")?;

        match self.chores.delete(id).await {
            Ok(true) => writeln!(self.output, "Chore was successfully removed!")?,
            Ok(false) => self.report(CoreError::ChoreNotFound(id))?,
            Err(DbError::ForeignKeyViolation { .. }) => {
                let assignments = self.chores.assignments_for_chore(id).await?.len();
                self.report(CoreError::ChoreAssigned {
                    chore_id: id,
                    assignments,
                })?
            }
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    async fn show_unassigned_chores(&mut self) -> ShellResult<()> {
        let chores = self.chores.unassigned_chores().await?;

        if chores.is_empty() {
            writeln!(self.output, "Every chore is assigned.")?;
        }
        for c in &chores {
            writeln!(self.output, "Id: {} - Chore: {}", c.id, c.name)?;
        }
        Ok(())
    }

    async fn assign_chore(&mut self) -> ShellResult<()> {
        let chores = self.chores.get_all().await?;
        if chores.is_empty() {
            writeln!(self.output, "No chores to assign.")?;
            return Ok(());
        }

        writeln!(self.output, "Chores to be Assigned:")?;
        writeln!(self.output, "----------------------")?;
        for c in &chores {
            writeln!(self.output, "{c}")?;
        }
        writeln!(self.output)?;

        let chore_id = self.prompt_id("Which chore would you like to assign?", "Chore Id")?;
        let Some(chore) = chores.into_iter().find(|c| c.id == chore_id) else {
            return self.report(CoreError::ChoreNotFound(chore_id));
        };

        let roommates = self.roommates.get_all().await?;
        if roommates.is_empty() {
            writeln!(self.output, "No roommates to assign chores to.")?;
            return Ok(());
        }

        writeln!(self.output, "Roommates to be Assigned Chores:")?;
        writeln!(self.output, "--------------------------------")?;
        for m in &roommates {
            writeln!(self.output, "{m}")?;
        }
        writeln!(self.output)?;

        let roommate_id = self.prompt_id("Which roommate should do this chore?", "Roommate Id")?;
        let Some(mate) = roommates.into_iter().find(|m| m.id == roommate_id) else {
            return self.report(CoreError::RoommateNotFound(roommate_id));
        };

        match self.chores.assign_chore(chore.id, mate.id).await {
            Ok(_) => writeln!(
                self.output,
                "The chore of {} was assigned to {}",
                chore.name, mate.first_name
            )?,
            // Chore or roommate removed since the lists were printed
            Err(DbError::ForeignKeyViolation { .. }) => self.report(CoreError::InvalidAssignment {
                chore_id: chore.id,
                roommate_id: mate.id,
            })?,
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    // =========================================================================
    // Roommates
    // =========================================================================

    async fn select_roommate(&mut self) -> ShellResult<()> {
        let id = self.prompt_id("Roommate Id:", "Roommate Id")?;

        let Some(roommate) = self.roommates.get_by_id(id).await? else {
            return self.report(CoreError::RoommateNotFound(id));
        };

        writeln!(self.output, "{roommate}")?;
        writeln!(
            self.output,
            "Moved in on {}.",
            roommate.moved_in_date.format("%B %-d, %Y")
        )?;

        let chores = self.roommates.chores_for(id).await?;
        if chores.is_empty() {
            writeln!(self.output, "No chores assigned.")?;
        } else {
            let names: Vec<&str> = chores.iter().map(|c| c.name.as_str()).collect();
            writeln!(self.output, "Chores: {}", names.join(", "))?;
        }
        Ok(())
    }

    // =========================================================================
    // Prompts
    // =========================================================================

    fn select_option(&mut self) -> ShellResult<MenuOption> {
        writeln!(self.output)?;
        for option in MenuOption::ALL {
            writeln!(self.output, "{option}")?;
        }

        loop {
            writeln!(self.output)?;
            let line = self.prompt("Select an option >")?;
            if let Some(option) = MenuOption::parse(&line) {
                return Ok(option);
            }
        }
    }

    fn pause(&mut self) -> ShellResult<()> {
        self.prompt("Press Enter to continue")?;
        Ok(())
    }

    fn report(&mut self, err: CoreError) -> ShellResult<()> {
        debug!(error = %err, "Reported to user");
        writeln!(self.output, "{err}")?;
        Ok(())
    }

    /// Prints `label`, reads one line, strips the line ending.
    ///
    /// Bytes that aren't UTF-8 become U+FFFD, so the line fails whatever
    /// parse follows and the caller re-prompts.
    fn prompt(&mut self, label: &str) -> ShellResult<String> {
        write!(self.output, "{label} ")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(ShellError::EndOfInput);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Prompts until the line parses as a positive id.
    fn prompt_id(&mut self, label: &str, field: &str) -> ShellResult<i64> {
        loop {
            let line = self.prompt(label)?;
            match parse_id(field, &line) {
                Ok(id) => return Ok(id),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    fn prompt_name(&mut self, label: &str, field: &str) -> ShellResult<String> {
        loop {
            let line = self.prompt(label)?;
            match validate_name(field, &line) {
                Ok(name) => return Ok(name),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    fn prompt_occupancy(&mut self, label: &str, field: &str) -> ShellResult<i32> {
        loop {
            let line = self.prompt(label)?;
            match parse_number(field, &line).and_then(validate_max_occupancy) {
                Ok(max) => return Ok(max),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use roommates_db::DbConfig;
    use tempfile::TempDir;

    use super::*;

    async fn test_db() -> (TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(DbConfig::file(dir.path().join("shell.db")))
            .await
            .unwrap();
        (dir, db)
    }

    async fn add_roommate(db: &Database, first: &str, room_id: i64) -> i64 {
        let mut conn = db.provider().open().await.unwrap();
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO Roommate (FirstName, LastName, RentPortion, MovedInDate, RoomId) \
             VALUES (?1, 'Doe', 50, '2022-04-01', ?2) RETURNING Id",
        )
        .bind(first)
        .bind(room_id)
        .fetch_one(&mut conn)
        .await
        .unwrap();
        db.provider().release(conn).await;
        id
    }

    fn pick(option: MenuOption) -> String {
        option.number().to_string()
    }

    /// Runs the shell over `lines` and returns everything it printed.
    async fn run(db: &Database, lines: &[String]) -> String {
        let mut script = lines.join("\n");
        script.push('\n');

        let mut shell = Shell::new(db, Cursor::new(script.into_bytes()), Vec::new());
        shell.run().await.unwrap();
        String::from_utf8(shell.into_output()).unwrap()
    }

    #[tokio::test]
    async fn test_exit_immediately() {
        let (_dir, db) = test_db().await;

        let out = run(&db, &[pick(MenuOption::Exit)]).await;

        assert!(out.contains("1. Show all rooms"));
        assert!(out.contains("14. Exit"));
    }

    #[tokio::test]
    async fn test_closed_input_ends_session() {
        let (_dir, db) = test_db().await;

        let mut shell = Shell::new(&db, Cursor::new(Vec::new()), Vec::new());
        assert!(shell.run().await.is_ok());
    }

    #[tokio::test]
    async fn test_bad_menu_input_reprompts() {
        let (_dir, db) = test_db().await;

        let out = run(
            &db,
            &[
                "rooms".into(),
                "99".into(),
                pick(MenuOption::ShowAllRooms),
                "".into(),
                pick(MenuOption::Exit),
            ],
        )
        .await;

        assert_eq!(out.matches("Select an option >").count(), 4);
        assert!(out.contains("No rooms yet."));
    }

    #[tokio::test]
    async fn test_add_and_search_room() {
        let (_dir, db) = test_db().await;

        let out = run(
            &db,
            &[
                pick(MenuOption::AddRoom),
                "Den".into(),
                "two".into(), // not a number: re-prompt
                "2".into(),
                "".into(),
                pick(MenuOption::SearchRoom),
                "1".into(),
                "".into(),
                pick(MenuOption::ShowAllRooms),
                "".into(),
                pick(MenuOption::Exit),
            ],
        )
        .await;

        assert!(out.contains("Max occupancy must be a whole number, got 'two'"));
        assert!(out.contains("Den has been added and assigned an Id of 1"));
        assert!(out.contains("1 - Den Max Occupancy(2)"));
        assert!(out.contains("Den has an Id of 1 and a max occupancy of 2"));
    }

    #[tokio::test]
    async fn test_search_missing_room() {
        let (_dir, db) = test_db().await;

        let out = run(
            &db,
            &[
                pick(MenuOption::SearchRoom),
                "0".into(),
                "8".into(),
                "".into(),
                pick(MenuOption::Exit),
            ],
        )
        .await;

        assert!(out.contains("Room Id must be positive"));
        assert!(out.contains("No room with Id 8"));
    }

    #[tokio::test]
    async fn test_non_utf8_input_reprompts() {
        let (_dir, db) = test_db().await;
        db.rooms().insert(&mut Room::new("Den", 2)).await.unwrap();

        let mut script = format!("{}\n", pick(MenuOption::SearchRoom)).into_bytes();
        script.extend_from_slice(b"\xff\xfe\n1\n\n");
        script.extend_from_slice(format!("{}\n", pick(MenuOption::Exit)).as_bytes());

        let mut shell = Shell::new(&db, Cursor::new(script), Vec::new());
        shell.run().await.unwrap();
        let out = String::from_utf8(shell.into_output()).unwrap();

        assert!(out.contains("Room Id must be a whole number"));
        assert!(out.contains("1 - Den Max Occupancy(2)"));
    }

    #[tokio::test]
    async fn test_query_failure_ends_session() {
        let dir = tempfile::tempdir().unwrap();
        // No schema: every statement fails with "no such table"
        let config = DbConfig::file(dir.path().join("empty.db")).run_migrations(false);
        let db = Database::new(config).await.unwrap();

        let script = format!("{}\n\n{}\n", pick(MenuOption::ShowAllRooms), pick(MenuOption::Exit));
        let mut shell = Shell::new(&db, Cursor::new(script.into_bytes()), Vec::new());

        let err = shell.run().await.unwrap_err();
        assert!(matches!(err, ShellError::Db(DbError::QueryFailed(_))));
    }

    #[tokio::test]
    async fn test_update_room() {
        let (_dir, db) = test_db().await;
        db.rooms().insert(&mut Room::new("Den", 2)).await.unwrap();

        let out = run(
            &db,
            &[
                pick(MenuOption::UpdateRoom),
                "1".into(),
                "Study".into(),
                "1".into(),
                "".into(),
                pick(MenuOption::Exit),
            ],
        )
        .await;

        assert!(out.contains("Room has been successfully updated"));
        assert_eq!(
            db.rooms().get_by_id(1).await.unwrap(),
            Some(Room {
                id: 1,
                name: "Study".to_string(),
                max_occupancy: 1
            })
        );
    }

    #[tokio::test]
    async fn test_remove_occupied_room_keeps_session() {
        let (_dir, db) = test_db().await;
        let mut den = Room::new("Den", 2);
        let mut attic = Room::new("Attic", 1);
        db.rooms().insert(&mut den).await.unwrap();
        db.rooms().insert(&mut attic).await.unwrap();
        add_roommate(&db, "Jenna", den.id).await;

        let out = run(
            &db,
            &[
                pick(MenuOption::RemoveRoom),
                den.id.to_string(),
                "".into(),
                pick(MenuOption::RemoveRoom),
                attic.id.to_string(),
                "".into(),
                pick(MenuOption::Exit),
            ],
        )
        .await;

        assert!(out.contains("Someone is renting room 1. It cannot be removed at this time"));
        assert!(out.contains("Room was successfully removed!"));
        assert_eq!(db.rooms().get_all().await.unwrap(), vec![den]);
    }

    #[tokio::test]
    async fn test_assign_chore_and_unassigned_list() {
        let (_dir, db) = test_db().await;
        let mut den = Room::new("Den", 2);
        db.rooms().insert(&mut den).await.unwrap();
        let jenna = add_roommate(&db, "Jenna", den.id).await;

        let out = run(
            &db,
            &[
                pick(MenuOption::AddChore),
                "Dishes".into(),
                "".into(),
                pick(MenuOption::AddChore),
                "Trash".into(),
                "".into(),
                pick(MenuOption::AssignChore),
                "1".into(),
                jenna.to_string(),
                "".into(),
                pick(MenuOption::ShowUnassignedChores),
                "".into(),
                pick(MenuOption::Exit),
            ],
        )
        .await;

        assert!(out.contains("Trash has been added and assigned an Id of 2"));
        assert!(out.contains("1 - Jenna Doe"));
        assert!(out.contains("The chore of Dishes was assigned to Jenna"));
        assert!(out.contains("Id: 2 - Chore: Trash"));
        assert!(!out.contains("Id: 1 - Chore: Dishes"));
    }

    #[tokio::test]
    async fn test_assign_to_unknown_roommate() {
        let (_dir, db) = test_db().await;
        let mut den = Room::new("Den", 2);
        db.rooms().insert(&mut den).await.unwrap();
        add_roommate(&db, "Jenna", den.id).await;
        db.chores().insert(&mut Chore::new("Dishes")).await.unwrap();

        let out = run(
            &db,
            &[
                pick(MenuOption::AssignChore),
                "1".into(),
                "5".into(),
                "".into(),
                pick(MenuOption::Exit),
            ],
        )
        .await;

        assert!(out.contains("No roommate with Id 5"));
        assert_eq!(db.chores().unassigned_chores().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_remove_assigned_chore_is_refused() {
        let (_dir, db) = test_db().await;
        let mut den = Room::new("Den", 2);
        db.rooms().insert(&mut den).await.unwrap();
        let jenna = add_roommate(&db, "Jenna", den.id).await;
        let mut dishes = Chore::new("Dishes");
        db.chores().insert(&mut dishes).await.unwrap();
        db.chores().assign_chore(dishes.id, jenna).await.unwrap();

        let out = run(
            &db,
            &[
                pick(MenuOption::RemoveChore),
                dishes.id.to_string(),
                "".into(),
                pick(MenuOption::Exit),
            ],
        )
        .await;

        assert!(out.contains("Chore 1 is assigned 1 time(s). It cannot be removed"));
        assert_eq!(db.chores().get_all().await.unwrap(), vec![dishes]);
    }

    #[tokio::test]
    async fn test_update_and_remove_chore() {
        let (_dir, db) = test_db().await;
        db.chores().insert(&mut Chore::new("Dishes")).await.unwrap();

        let out = run(
            &db,
            &[
                pick(MenuOption::UpdateChore),
                "1".into(),
                "Mop".into(),
                "".into(),
                pick(MenuOption::SearchChore),
                "1".into(),
                "".into(),
                pick(MenuOption::RemoveChore),
                "1".into(),
                "".into(),
                pick(MenuOption::ShowAllChores),
                "".into(),
                pick(MenuOption::Exit),
            ],
        )
        .await;

        assert!(out.contains("Chore has been successfully updated"));
        assert!(out.contains("1 - Mop"));
        assert!(out.contains("Chore was successfully removed!"));
        assert!(out.contains("No chores yet."));
    }

    #[tokio::test]
    async fn test_select_roommate() {
        let (_dir, db) = test_db().await;
        let mut den = Room::new("Den", 2);
        db.rooms().insert(&mut den).await.unwrap();
        let jenna = add_roommate(&db, "Jenna", den.id).await;
        let mut trash = Chore::new("Trash");
        db.chores().insert(&mut trash).await.unwrap();
        db.chores().assign_chore(trash.id, jenna).await.unwrap();

        let out = run(
            &db,
            &[
                pick(MenuOption::SelectRoommate),
                jenna.to_string(),
                "".into(),
                pick(MenuOption::SelectRoommate),
                "42".into(),
                "".into(),
                pick(MenuOption::Exit),
            ],
        )
        .await;

        assert!(out.contains("1 - Jenna pays 50% of rent. They occupy Den."));
        assert!(out.contains("Moved in on April 1, 2022."));
        assert!(out.contains("Chores: Trash"));
        assert!(out.contains("No roommate with Id 42"));
    }
}
