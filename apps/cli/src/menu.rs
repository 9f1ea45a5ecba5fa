//! Numbered menu options.

use std::fmt;

/// One entry of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    // Rooms
    ShowAllRooms,
    SearchRoom,
    AddRoom,
    UpdateRoom,
    RemoveRoom,
    // Chores
    ShowAllChores,
    SearchChore,
    AddChore,
    UpdateChore,
    RemoveChore,
    ShowUnassignedChores,
    AssignChore,
    // Roommates
    SelectRoommate,
    Exit,
}

impl MenuOption {
    /// Every option in the order the menu lists them.
    pub const ALL: [MenuOption; 14] = [
        MenuOption::ShowAllRooms,
        MenuOption::SearchRoom,
        MenuOption::AddRoom,
        MenuOption::UpdateRoom,
        MenuOption::RemoveRoom,
        MenuOption::ShowAllChores,
        MenuOption::SearchChore,
        MenuOption::AddChore,
        MenuOption::UpdateChore,
        MenuOption::RemoveChore,
        MenuOption::ShowUnassignedChores,
        MenuOption::AssignChore,
        MenuOption::SelectRoommate,
        MenuOption::Exit,
    ];

    /// Text shown next to the number.
    pub fn label(self) -> &'static str {
        match self {
            MenuOption::ShowAllRooms => "Show all rooms",
            MenuOption::SearchRoom => "Search for room",
            MenuOption::AddRoom => "Add a room",
            MenuOption::UpdateRoom => "Update a room",
            MenuOption::RemoveRoom => "Remove a room",
            MenuOption::ShowAllChores => "Show all chores",
            MenuOption::SearchChore => "Search for a chore",
            MenuOption::AddChore => "Add a chore",
            MenuOption::UpdateChore => "Update a chore",
            MenuOption::RemoveChore => "Remove a chore",
            MenuOption::ShowUnassignedChores => "Show all unassigned chores",
            MenuOption::AssignChore => "Assign a chore",
            MenuOption::SelectRoommate => "Select a roommate",
            MenuOption::Exit => "Exit",
        }
    }

    /// 1-based number the user types.
    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|o| *o == self)
            .map_or(0, |i| i + 1)
    }

    /// Looks up the option for a typed number.
    pub fn from_number(n: usize) -> Option<MenuOption> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// Parses a menu selection line.
    pub fn parse(input: &str) -> Option<MenuOption> {
        input.trim().parse::<usize>().ok().and_then(Self::from_number)
    }
}

impl fmt::Display for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}
