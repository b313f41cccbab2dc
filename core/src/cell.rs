use serde::{Deserialize, Serialize};

use crate::Coord2;

/// What the player has done to a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Hidden,
    Flagged,
    Revealed,
}

/// One grid position as the engine stores it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    is_mine: bool,
    adjacent_mines: u8,
    visibility: Visibility,
}

impl Cell {
    pub(crate) const fn new(is_mine: bool, adjacent_mines: u8) -> Self {
        Self {
            is_mine,
            adjacent_mines: if is_mine { 0 } else { adjacent_mines },
            visibility: Visibility::Hidden,
        }
    }

    pub const fn is_mine(self) -> bool {
        self.is_mine
    }

    /// Always 0 for mines.
    pub const fn adjacent_mines(self) -> u8 {
        self.adjacent_mines
    }

    pub const fn visibility(self) -> Visibility {
        self.visibility
    }

    pub const fn content(self) -> CellContent {
        if self.is_mine {
            CellContent::Mine
        } else {
            CellContent::Count(self.adjacent_mines)
        }
    }

    pub(crate) fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellContent {
    Count(u8),
    Mine,
}

/// Player-visible state of a cell. `Mine` and `WrongFlag` only show up once
/// the game is over.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    #[default]
    Hidden,
    Flagged,
    Revealed(u8),
    Exploded,
    Mine,
    WrongFlag,
}

impl CellView {
    pub const fn is_concealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged | Self::WrongFlag)
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Hidden => '#',
            Self::Flagged => 'F',
            Self::Revealed(0) => '.',
            Self::Revealed(count) => match char::from_digit(count as u32, 10) {
                Some(digit) => digit,
                None => '?',
            },
            Self::Exploded => '*',
            Self::Mine => 'x',
            Self::WrongFlag => '!',
        }
    }
}

/// A cell whose visibility changed during a command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellChange {
    pub coords: Coord2,
    pub visibility: Visibility,
    pub content: CellContent,
}
