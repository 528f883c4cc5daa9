use crate::coord::Coordinate;
use thiserror::Error;

/// Result type for generation operations
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Errors returned by [`Generator`](crate::Generator)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// Nothing to lay out
    #[error("the word list is empty")]
    EmptyWordList,
    /// A word is empty or contains non-alphabetic characters
    #[error("invalid word {word:?}: words must be non-empty and alphabetic")]
    InvalidWord { word: String },
    /// Every attempt failed to place all words
    #[error("no valid layout for {words} words after {attempts} attempts")]
    NoValidLayout { attempts: usize, words: usize },
}

/// A deserialized [`Board`](crate::Board) whose parts do not fit together
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The cell vector does not cover `rows` x `cols`
    #[error("{rows}x{cols} board needs {} cells, found {found}", rows.saturating_mul(*cols))]
    CellCount { rows: usize, cols: usize, found: usize },
    /// A recorded coordinate lies outside the grid
    #[error("coordinate {coord} lies outside the grid")]
    OffGrid { coord: Coordinate },
    /// A placed word disagrees with the letters in its cells
    #[error("placed word {word:?} does not match the grid at {coord}")]
    LetterMismatch { word: String, coord: Coordinate },
}
