//! Procedural crossword layout engine.
//!
//! Words are grafted one at a time onto a square [`Board`] through shared
//! letters. A word that cannot be placed anywhere throws the whole attempt
//! away; the [`Generator`] then restarts with a fresh board and word order,
//! growing the board after repeated failures, until every word fits or the
//! attempt budget runs out.
//!
//! ```
//! use crossword_core::Generator;
//!
//! let mut generator = Generator::with_seed(42);
//! let board = generator.generate(&["seat", "tea", "east", "set", "eat"]).unwrap();
//! assert_eq!(board.word_count(), 5);
//! ```

pub mod board;
pub mod cell;
pub mod coord;
pub mod error;
pub mod generator;
pub mod placement;
pub mod sizing;

pub use board::{Board, CellDirection, PlacedWord, Placement};
pub use cell::{Cell, WordId};
pub use coord::{Coordinate, Direction};
pub use error::{BoardError, GenerateError, Result};
pub use generator::{validate_words, GenerationReport, Generator, GeneratorConfig};
pub use placement::{CandidatePool, PlacementOutcome};
pub use sizing::{calculate_board_size, minimum_board_size};
