//! The crossword grid.
//!
//! A [`Board`] is a dense rectangle of [`Cell`]s plus the bookkeeping the
//! placement engine needs: every coordinate ever written (in order, duplicates
//! allowed) and every word committed so far.

use crate::cell::{Cell, WordId};
use crate::coord::{projection, Coordinate, Direction};
use crate::error::BoardError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Which word directions already pass through a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellDirection {
    /// No letter
    Unfilled,
    /// Only an across word
    Across,
    /// Only a down word
    Down,
    /// Both an across and a down word
    Crossed,
}

/// A prospective move: where a word starts and which way it runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub anchor: Coordinate,
    pub direction: Direction,
}

impl Placement {
    pub fn new(anchor: Coordinate, direction: Direction) -> Self {
        Self { anchor, direction }
    }
}

/// A word committed to the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedWord {
    pub word: String,
    pub anchor: Coordinate,
    pub direction: Direction,
}

impl PlacedWord {
    /// Number of letters
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Each covered coordinate with the letter this word puts there
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, char)> + '_ {
        projection(self.anchor, self.direction, self.len()).zip(self.word.chars())
    }
}

/// The crossword grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    /// Every coordinate written, in order. May repeat where words cross.
    filled: Vec<Coordinate>,
    placements: Vec<PlacedWord>,
}

/// Wire form of [`Board`], checked before it becomes one
#[derive(Deserialize)]
struct RawBoard {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    filled: Vec<Coordinate>,
    placements: Vec<PlacedWord>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let RawBoard {
            rows,
            cols,
            cells,
            filled,
            placements,
        } = raw;
        if rows.checked_mul(cols) != Some(cells.len()) {
            return Err(BoardError::CellCount {
                rows,
                cols,
                found: cells.len(),
            });
        }

        let board = Self {
            rows,
            cols,
            cells,
            filled,
            placements,
        };
        if let Some(&coord) = board.filled.iter().find(|&&c| !board.contains(c)) {
            return Err(BoardError::OffGrid { coord });
        }
        for placed in &board.placements {
            if !board.contains(placed.anchor) {
                return Err(BoardError::OffGrid {
                    coord: placed.anchor,
                });
            }
            for (coord, letter) in placed.cells() {
                if !board.contains(coord) {
                    return Err(BoardError::OffGrid { coord });
                }
                if board.letter_at(coord) != Some(letter) {
                    return Err(BoardError::LetterMismatch {
                        word: placed.word.clone(),
                        coord,
                    });
                }
            }
        }
        Ok(board)
    }
}

impl Board {
    /// Create an empty `size` x `size` board
    pub fn new(size: usize) -> Self {
        Self {
            rows: size,
            cols: size,
            cells: vec![Cell::empty(); size * size],
            filled: Vec::new(),
            placements: Vec::new(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, coord: Coordinate) -> Option<usize> {
        let row = usize::try_from(coord.row).ok()?;
        let col = usize::try_from(coord.col).ok()?;
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Whether `coord` lies on the grid
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.index(coord).is_some()
    }

    /// The cell at `coord`, or `None` off the grid
    pub fn cell(&self, coord: Coordinate) -> Option<&Cell> {
        self.index(coord).map(|i| &self.cells[i])
    }

    pub fn letter_at(&self, coord: Coordinate) -> Option<char> {
        self.cell(coord).and_then(Cell::letter)
    }

    /// Off-grid positions count as unoccupied
    pub fn is_occupied(&self, coord: Coordinate) -> bool {
        self.letter_at(coord).is_some()
    }

    /// Occupied cells in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (Coordinate, char)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            let coord = Coordinate::new((i / self.cols) as i32, (i % self.cols) as i32);
            cell.letter().map(|letter| (coord, letter))
        })
    }

    /// Coordinates written so far, in placement order
    pub fn filled(&self) -> &[Coordinate] {
        &self.filled
    }

    pub fn is_empty(&self) -> bool {
        self.filled.is_empty()
    }

    pub fn placements(&self) -> &[PlacedWord] {
        &self.placements
    }

    pub fn placement(&self, id: WordId) -> Option<&PlacedWord> {
        self.placements.get(id.0)
    }

    /// Placed words in placement order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.placements.iter().map(|p| p.word.as_str())
    }

    pub fn word_count(&self) -> usize {
        self.placements.len()
    }

    /// Write `word` starting at the placement's anchor.
    ///
    /// Performs no legality checks; callers validate with
    /// [`try_placement`](Self::try_placement) first. Returns `None`, leaving the
    /// board untouched, if any letter would fall off the grid.
    pub fn place_word(&mut self, word: &str, placement: Placement) -> Option<WordId> {
        let len = word.chars().count();
        let indices: Vec<usize> = projection(placement.anchor, placement.direction, len)
            .map(|coord| self.index(coord))
            .collect::<Option<_>>()?;

        let id = WordId(self.placements.len());
        let coords = projection(placement.anchor, placement.direction, len);
        for ((idx, coord), letter) in indices.into_iter().zip(coords).zip(word.chars()) {
            self.cells[idx] = self.cells[idx].written(letter, placement.direction, id);
            self.filled.push(coord);
        }
        self.placements.push(PlacedWord {
            word: word.to_string(),
            anchor: placement.anchor,
            direction: placement.direction,
        });
        Some(id)
    }

    /// Place the opening word at the centre, across or down at random
    pub fn place_first_word<R: Rng + ?Sized>(&mut self, word: &str, rng: &mut R) -> Option<WordId> {
        let direction = if rng.gen_bool(0.5) {
            Direction::Across
        } else {
            Direction::Down
        };
        let center = Coordinate::new(
            (self.rows.saturating_sub(1) / 2) as i32,
            (self.cols.saturating_sub(1) / 2) as i32,
        );
        self.place_word(word, Placement::new(center, direction))
    }

    /// Shrink to the smallest rectangle holding every letter.
    ///
    /// Filled coordinates and placement anchors are translated to the new origin.
    pub fn cull(&mut self) {
        let Some((first, _)) = self.occupied().next() else {
            return;
        };
        let (mut min_row, mut max_row) = (first.row, first.row);
        let (mut min_col, mut max_col) = (first.col, first.col);
        for (coord, _) in self.occupied() {
            min_row = min_row.min(coord.row);
            max_row = max_row.max(coord.row);
            min_col = min_col.min(coord.col);
            max_col = max_col.max(coord.col);
        }

        let rows = (max_row - min_row + 1) as usize;
        let cols = (max_col - min_col + 1) as usize;
        let mut cells = Vec::with_capacity(rows * cols);
        for row in min_row..=max_row {
            for col in min_col..=max_col {
                cells.push(self.cell(Coordinate::new(row, col)).copied().unwrap_or_default());
            }
        }

        self.rows = rows;
        self.cols = cols;
        self.cells = cells;
        for coord in &mut self.filled {
            *coord = coord.offset(-min_row, -min_col);
        }
        for placed in &mut self.placements {
            placed.anchor = placed.anchor.offset(-min_row, -min_col);
        }
    }

    /// Whether a cell is barred from hosting a new crossing.
    ///
    /// Border cells always are. An interior cell is when two diagonal
    /// neighbours on the same side are both occupied.
    pub fn is_corner(&self, coord: Coordinate) -> bool {
        if !self.contains(coord)
            || coord.row == 0
            || coord.row as usize == self.rows - 1
            || coord.col == 0
            || coord.col as usize == self.cols - 1
        {
            return true;
        }

        let upper_left = self.is_occupied(coord.offset(-1, -1));
        let upper_right = self.is_occupied(coord.offset(-1, 1));
        let lower_left = self.is_occupied(coord.offset(1, -1));
        let lower_right = self.is_occupied(coord.offset(1, 1));

        (upper_left && upper_right)
            || (lower_left && lower_right)
            || (upper_left && lower_left)
            || (upper_right && lower_right)
    }

    /// Filled cells that can still take a crossing word
    pub fn candidates(&self) -> Vec<Coordinate> {
        self.filled
            .iter()
            .copied()
            .filter(|&coord| {
                self.cell(coord).is_some_and(|cell| !cell.is_crossed()) && !self.is_corner(coord)
            })
            .collect()
    }

    pub fn direction_at(&self, coord: Coordinate) -> CellDirection {
        match self.cell(coord).map(|c| (c.across(), c.down())) {
            Some((Some(_), None)) => CellDirection::Across,
            Some((None, Some(_))) => CellDirection::Down,
            Some((Some(_), Some(_))) => CellDirection::Crossed,
            _ => CellDirection::Unfilled,
        }
    }

    /// Where a word must start so its `intersection`-th letter lands on `candidate`.
    ///
    /// The new word runs in the direction the candidate lacks. `None` when the
    /// candidate is already crossed or holds no word.
    pub fn next_placement(&self, candidate: Coordinate, intersection: usize) -> Option<Placement> {
        let direction = match self.direction_at(candidate) {
            CellDirection::Across => Direction::Down,
            CellDirection::Down => Direction::Across,
            CellDirection::Unfilled | CellDirection::Crossed => return None,
        };
        let anchor = candidate.advance(direction, -(intersection as i32));
        Some(Placement::new(anchor, direction))
    }

    /// Whether writing a letter at `coord` for a word running in `direction`
    /// would sit beside a parallel word or cut into an unrelated crossing word.
    ///
    /// Off-grid neighbours impose nothing.
    pub fn is_illegal_move(&self, coord: Coordinate, direction: Direction) -> bool {
        let cross = direction.perpendicular();
        let here = self.cell(coord).and_then(|c| c.word(cross));

        coord.sides(direction).into_iter().any(|side| match self.cell(side) {
            None => false,
            Some(neighbour) => {
                neighbour.word(direction).is_some()
                    || (!neighbour.is_empty() && neighbour.word(cross) != here)
            }
        })
    }

    /// Whether `word` may be written at `placement`, crossing at `candidate`.
    ///
    /// The candidate cell is the intended intersection and is exempt. Every
    /// other cell must be on the grid, agree with any letter already there,
    /// not already belong to a word in the same direction, and pass
    /// [`is_illegal_move`](Self::is_illegal_move). The cells just before and
    /// after the word must be empty.
    pub fn try_placement(&self, word: &str, placement: Placement, candidate: Coordinate) -> bool {
        let Placement { anchor, direction } = placement;
        let len = word.chars().count();

        let before = anchor.advance(direction, -1);
        let after = anchor.advance(direction, len as i32);
        if self.is_occupied(before) || self.is_occupied(after) {
            return false;
        }

        projection(anchor, direction, len)
            .zip(word.chars())
            .filter(|&(coord, _)| coord != candidate)
            .all(|(coord, letter)| match self.cell(coord) {
                None => false,
                Some(cell) => {
                    let agrees = cell.letter().map_or(true, |existing| existing == letter);
                    agrees && cell.word(direction).is_none() && !self.is_illegal_move(coord, direction)
                }
            })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            let line: Vec<String> = (0..self.cols)
                .map(|col| {
                    self.letter_at(Coordinate::new(row as i32, col as i32))
                        .unwrap_or('.')
                        .to_string()
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
