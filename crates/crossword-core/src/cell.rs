use crate::Direction;
use serde::{Deserialize, Serialize};

/// Identifier of a placed word: its index in the board's placement list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WordId(pub usize);

impl std::fmt::Display for WordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Occupancy of a single grid position.
///
/// An empty cell carries no word ids; a cell with a word id always has a letter.
/// Fields are private so the only way to fill a cell is [`Cell::filled`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    letter: Option<char>,
    across: Option<WordId>,
    down: Option<WordId>,
}

impl Cell {
    /// An empty cell
    pub const fn empty() -> Self {
        Self {
            letter: None,
            across: None,
            down: None,
        }
    }

    /// A cell holding `letter`, owned by `across` and/or `down`
    pub const fn filled(letter: char, across: Option<WordId>, down: Option<WordId>) -> Self {
        Self {
            letter: Some(letter),
            across,
            down,
        }
    }

    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    pub fn is_empty(&self) -> bool {
        self.letter.is_none()
    }

    pub fn across(&self) -> Option<WordId> {
        self.across
    }

    pub fn down(&self) -> Option<WordId> {
        self.down
    }

    /// Word id in the given direction
    pub fn word(&self, direction: Direction) -> Option<WordId> {
        match direction {
            Direction::Across => self.across,
            Direction::Down => self.down,
        }
    }

    /// Crossed in both directions
    pub fn is_crossed(&self) -> bool {
        self.across.is_some() && self.down.is_some()
    }

    /// Copy of this cell rewritten by a word running in `direction`.
    /// The id in the other direction is kept.
    pub fn written(&self, letter: char, direction: Direction, id: WordId) -> Self {
        match direction {
            Direction::Across => Self::filled(letter, Some(id), self.down),
            Direction::Down => Self::filled(letter, self.across, Some(id)),
        }
    }
}
