//! Laying a single word onto a partially built board.
//!
//! The engine draws candidate cells at random from a [`CandidatePool`],
//! discarding each one that cannot host the word, until the word is placed or
//! the pool runs dry.

use crate::board::Board;
use crate::cell::WordId;
use crate::coord::Coordinate;
use log::{debug, trace};
use rand::Rng;

/// What happened when trying to lay a word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// The word was written to the board
    Placed(WordId),
    /// No candidate cell could host the word
    NoCandidate,
    /// The candidate's letter does not occur in the word
    NoIntersection,
    /// The candidate is already crossed both ways
    NoDirection,
    /// The crossing would break adjacency rules or leave the grid
    Illegal,
}

impl PlacementOutcome {
    pub fn is_placed(&self) -> bool {
        matches!(self, PlacementOutcome::Placed(_))
    }
}

/// Candidate cells still to be tried for the current word
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    cells: Vec<Coordinate>,
    pass: usize,
}

impl CandidatePool {
    /// An empty pool on its first pass
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// How many times the pool has been filled from the board
    pub fn pass(&self) -> usize {
        self.pass
    }

    /// Load the board's current candidates and start the next pass
    pub fn refill(&mut self, board: &Board) {
        self.cells = board.candidates();
        self.pass += 1;
    }

    /// A uniformly random candidate, or `None` when empty
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Coordinate> {
        if self.cells.is_empty() {
            return None;
        }
        Some(self.cells[rng.gen_range(0..self.cells.len())])
    }

    /// Drop one occurrence of `coord`
    pub fn remove(&mut self, coord: Coordinate) {
        if let Some(pos) = self.cells.iter().position(|&c| c == coord) {
            self.cells.remove(pos);
        }
    }
}

/// Try to cross `word` through a single candidate cell, committing it if legal
pub fn attempt_candidate(board: &mut Board, word: &str, candidate: Coordinate) -> PlacementOutcome {
    let Some(intersection) = board
        .letter_at(candidate)
        .and_then(|letter| word.chars().position(|c| c == letter))
    else {
        return PlacementOutcome::NoIntersection;
    };

    let Some(placement) = board.next_placement(candidate, intersection) else {
        return PlacementOutcome::NoDirection;
    };

    if !board.try_placement(word, placement, candidate) {
        return PlacementOutcome::Illegal;
    }

    match board.place_word(word, placement) {
        Some(id) => PlacementOutcome::Placed(id),
        None => PlacementOutcome::Illegal,
    }
}

/// Lay `word` on the board.
///
/// An empty board takes the word at its centre. Otherwise candidates are drawn
/// from `pool`, which is filled from the board once if it starts empty. Returns
/// either [`PlacementOutcome::Placed`] or [`PlacementOutcome::NoCandidate`]
/// (or [`PlacementOutcome::Illegal`] if the opening word does not fit).
pub fn place_word<R: Rng + ?Sized>(
    board: &mut Board,
    word: &str,
    pool: &mut CandidatePool,
    rng: &mut R,
) -> PlacementOutcome {
    if board.is_empty() {
        return match board.place_first_word(word, rng) {
            Some(id) => PlacementOutcome::Placed(id),
            None => PlacementOutcome::Illegal,
        };
    }

    let mut rejected = 0usize;
    loop {
        if pool.is_empty() {
            if pool.pass() > 0 {
                debug!("no candidate for {word:?} after {rejected} rejections");
                return PlacementOutcome::NoCandidate;
            }
            pool.refill(board);
            if pool.is_empty() {
                debug!("board has no candidates for {word:?}");
                return PlacementOutcome::NoCandidate;
            }
        }

        let Some(candidate) = pool.pick(rng) else {
            return PlacementOutcome::NoCandidate;
        };

        match attempt_candidate(board, word, candidate) {
            PlacementOutcome::Placed(id) => {
                trace!("placed {word:?} through {candidate} as {id}");
                return PlacementOutcome::Placed(id);
            }
            outcome => {
                trace!("candidate {candidate} rejected for {word:?}: {outcome:?}");
                rejected += 1;
                pool.remove(candidate);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Placement;
    use crate::coord::Direction;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn board_with_seat() -> Board {
        let mut board = Board::new(12);
        board
            .place_word("seat", Placement::new(Coordinate::new(5, 5), Direction::Across))
            .unwrap();
        board
    }

    #[test]
    fn test_first_word_goes_to_empty_board() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut board = Board::new(12);
        let mut pool = CandidatePool::new();

        let outcome = place_word(&mut board, "seat", &mut pool, &mut rng);
        assert_eq!(outcome, PlacementOutcome::Placed(WordId(0)));
        assert_eq!(board.word_count(), 1);
        // the pool is untouched for the opening word
        assert_eq!(pool.pass(), 0);
    }

    #[test]
    fn test_first_word_too_long() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut board = Board::new(3);
        let outcome = place_word(&mut board, "castle", &mut CandidatePool::new(), &mut rng);
        assert_eq!(outcome, PlacementOutcome::Illegal);
        assert!(board.is_empty());
    }

    #[test]
    fn test_crossing_word_is_placed() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut board = board_with_seat();
        let mut pool = CandidatePool::new();

        let outcome = place_word(&mut board, "east", &mut pool, &mut rng);
        assert!(outcome.is_placed());
        assert_eq!(board.word_count(), 2);
        assert_eq!(board.placements()[1].direction, Direction::Down);
        assert_eq!(pool.pass(), 1);
    }

    #[test]
    fn test_no_shared_letter_fails() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut board = board_with_seat();
        let mut pool = CandidatePool::new();

        let outcome = place_word(&mut board, "xyz", &mut pool, &mut rng);
        assert_eq!(outcome, PlacementOutcome::NoCandidate);
        assert_eq!(board.word_count(), 1);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_exhausted_pool_does_not_refill() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut board = board_with_seat();
        let mut pool = CandidatePool::new();
        pool.refill(&board);
        while let Some(c) = pool.pick(&mut rng) {
            pool.remove(c);
        }

        let outcome = place_word(&mut board, "east", &mut pool, &mut rng);
        assert_eq!(outcome, PlacementOutcome::NoCandidate);
    }

    #[test]
    fn test_attempt_candidate_outcomes() {
        let mut board = board_with_seat();

        assert_eq!(
            attempt_candidate(&mut board, "xyz", Coordinate::new(5, 6)),
            PlacementOutcome::NoIntersection
        );
        assert_eq!(
            attempt_candidate(&mut board, "tea", Coordinate::new(0, 0)),
            PlacementOutcome::NoIntersection
        );
        assert!(attempt_candidate(&mut board, "tea", Coordinate::new(5, 6)).is_placed());
        // (5, 6) now crossed both ways
        assert_eq!(
            attempt_candidate(&mut board, "east", Coordinate::new(5, 6)),
            PlacementOutcome::NoDirection
        );
    }

    #[test]
    fn test_attempt_candidate_illegal() {
        let mut board = board_with_seat();
        // "set" down into the 't' of seat, then "tea" down into the 'a' would
        // run right alongside it
        assert!(attempt_candidate(&mut board, "set", Coordinate::new(5, 8)).is_placed());
        assert_eq!(
            attempt_candidate(&mut board, "tea", Coordinate::new(5, 7)),
            PlacementOutcome::Illegal
        );
    }

    #[test]
    fn test_pool_remove_single_occurrence() {
        let mut board = Board::new(9);
        board
            .place_word("seat", Placement::new(Coordinate::new(4, 2), Direction::Across))
            .unwrap();
        board
            .place_word("tea", Placement::new(Coordinate::new(4, 5), Direction::Down))
            .unwrap();

        let mut pool = CandidatePool::new();
        pool.refill(&board);
        let before = pool.len();
        pool.remove(Coordinate::new(4, 2));
        assert_eq!(pool.len(), before - 1);
        pool.remove(Coordinate::new(0, 0));
        assert_eq!(pool.len(), before - 1);
    }
}
