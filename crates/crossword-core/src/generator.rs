use crate::board::Board;
use crate::error::{GenerateError, Result};
use crate::placement::{place_word, CandidatePool, PlacementOutcome};
use crate::sizing::{calculate_board_size, minimum_board_size};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Configuration for layout generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Maximum full restarts before giving up
    pub max_attempts: usize,
    /// Failed attempts at one size before the board grows (0 = never grow)
    pub restarts_per_size: usize,
    /// Cells added to the side length each time the board grows
    pub growth_step: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: 500,
            restarts_per_size: 25,
            growth_step: 2,
        }
    }
}

impl GeneratorConfig {
    /// Give up early; for interactive use
    pub fn quick() -> Self {
        Self {
            max_attempts: 50,
            restarts_per_size: 10,
            growth_step: 2,
        }
    }

    /// Keep trying on hard word lists
    pub fn patient() -> Self {
        Self {
            max_attempts: 5000,
            restarts_per_size: 50,
            growth_step: 4,
        }
    }

    /// Board side length used for the zero-based `attempt`
    pub fn size_for_attempt(&self, base: usize, attempt: usize) -> usize {
        if self.restarts_per_size == 0 {
            return base;
        }
        base + (attempt / self.restarts_per_size) * self.growth_step
    }
}

/// A finished layout and how it was reached
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// The culled board
    pub board: Board,
    /// Attempts used, including the successful one
    pub attempts: usize,
    /// Side length of the square board the successful attempt started on
    pub board_size: usize,
}

/// Crossword layout generator
pub struct Generator<R = StdRng> {
    config: GeneratorConfig,
    rng: R,
    seed: Option<u64>,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a new generator with default configuration and a random seed
    pub fn new() -> Self {
        Self::with_seed(entropy_seed())
    }

    /// Create a generator with custom configuration and a random seed
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self::with_seed_and_config(entropy_seed(), config)
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self::with_seed_and_config(seed, GeneratorConfig::default())
    }

    pub fn with_seed_and_config(seed: u64, config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }
}

impl<R: Rng> Generator<R> {
    /// Drive generation from a caller-supplied random source
    pub fn from_rng(rng: R, config: GeneratorConfig) -> Self {
        Self {
            config,
            rng,
            seed: None,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Seed the random source was built from, if known
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Lay out every word, returning the culled board
    pub fn generate<S: AsRef<str>>(&mut self, words: &[S]) -> Result<Board> {
        self.generate_report(words).map(|report| report.board)
    }

    /// Lay out every word, restarting from scratch whenever a word cannot be placed
    pub fn generate_report<S: AsRef<str>>(&mut self, words: &[S]) -> Result<GenerationReport> {
        let words = validate_words(words)?;
        let base = calculate_board_size(&words).max(minimum_board_size(&words));
        debug!("generating {} words from base size {base}", words.len());

        let mut last_size = base;
        for attempt in 0..self.config.max_attempts {
            let size = self.config.size_for_attempt(base, attempt);
            if size != last_size {
                warn!("growing board to {size} after {attempt} failed attempts");
                last_size = size;
            }

            if let Some(board) = self.attempt(&words, size) {
                info!(
                    "laid out {} words on {}x{} after {} attempt(s)",
                    words.len(),
                    board.rows(),
                    board.cols(),
                    attempt + 1
                );
                return Ok(GenerationReport {
                    board,
                    attempts: attempt + 1,
                    board_size: size,
                });
            }
        }

        warn!(
            "giving up on {} words after {} attempts",
            words.len(),
            self.config.max_attempts
        );
        Err(GenerateError::NoValidLayout {
            attempts: self.config.max_attempts,
            words: words.len(),
        })
    }

    /// One full pass over the word list on a fresh board
    fn attempt(&mut self, words: &[String], size: usize) -> Option<Board> {
        let mut board = Board::new(size);
        let mut remaining: Vec<&str> = words.iter().map(String::as_str).collect();

        while !remaining.is_empty() {
            let chosen = self.rng.gen_range(0..remaining.len());
            let word = remaining[chosen];

            let mut pool = CandidatePool::new();
            match place_word(&mut board, word, &mut pool, &mut self.rng) {
                PlacementOutcome::Placed(_) => {
                    remaining.remove(chosen);
                }
                outcome => {
                    debug!(
                        "restarting: {word:?} failed with {outcome:?} after {} of {} words",
                        board.word_count(),
                        words.len()
                    );
                    return None;
                }
            }
        }

        if board.word_count() != words.len() {
            warn!(
                "restarting: placed {} of {} words",
                board.word_count(),
                words.len()
            );
            return None;
        }

        board.cull();
        Some(board)
    }
}

/// Check the input list and take owned copies of the words
pub fn validate_words<S: AsRef<str>>(words: &[S]) -> Result<Vec<String>> {
    if words.is_empty() {
        return Err(GenerateError::EmptyWordList);
    }
    words
        .iter()
        .map(|w| {
            let word = w.as_ref();
            if word.is_empty() || !word.chars().all(char::is_alphabetic) {
                Err(GenerateError::InvalidWord {
                    word: word.to_string(),
                })
            } else {
                Ok(word.to_string())
            }
        })
        .collect()
}

/// Fresh seed from the OS
fn entropy_seed() -> u64 {
    let mut seed_bytes = [0u8; 8];
    getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
        // Fallback: use a static counter if getrandom fails
        static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
        let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        seed_bytes = counter.to_le_bytes();
    });
    u64::from_le_bytes(seed_bytes)
}
