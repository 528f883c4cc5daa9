use crossword_core::{Board, Coordinate, Direction, GenerateError, Generator, GeneratorConfig};

const SAMPLE: [&str; 5] = ["seat", "tea", "east", "set", "eat"];

const LONGER: [&str; 8] = [
    "crossword", "puzzle", "letter", "across", "answer", "grid", "down", "clue",
];

fn generate(words: &[&str], seed: u64) -> Board {
    Generator::with_seed_and_config(seed, GeneratorConfig::patient())
        .generate(words)
        .unwrap_or_else(|e| panic!("seed {seed}: {e}"))
}

fn assert_complete(board: &Board, words: &[&str]) {
    assert_eq!(board.word_count(), words.len());
    let mut placed: Vec<&str> = board.words().collect();
    let mut expected = words.to_vec();
    placed.sort_unstable();
    expected.sort_unstable();
    assert_eq!(placed, expected);
}

fn assert_letters_consistent(board: &Board) {
    for placed in board.placements() {
        for (coord, letter) in placed.cells() {
            assert_eq!(
                board.letter_at(coord),
                Some(letter),
                "{:?} disagrees with the grid at {coord}",
                placed.word
            );
        }
    }
    for &coord in board.filled() {
        assert!(board.is_occupied(coord), "filled coordinate {coord} is empty");
    }
}

fn assert_no_parallel_contact(board: &Board) {
    for (coord, _) in board.occupied() {
        let here = board.cell(coord).unwrap();
        for (direction, neighbour) in [(Direction::Across, coord.down()), (Direction::Down, coord.right())] {
            let Some(other) = board.cell(neighbour) else {
                continue;
            };
            let (Some(a), Some(b)) = (here.word(direction), other.word(direction)) else {
                continue;
            };
            if a != b {
                assert!(
                    here.is_crossed() || other.is_crossed(),
                    "parallel {direction} words touch at {coord} / {neighbour}\n{board}"
                );
            }
        }
    }
}

fn assert_word_ends_clear(board: &Board) {
    for placed in board.placements() {
        let before = placed.anchor.advance(placed.direction, -1);
        let after = placed.anchor.advance(placed.direction, placed.len() as i32);
        assert!(!board.is_occupied(before), "{:?} runs into a letter\n{board}", placed.word);
        assert!(!board.is_occupied(after), "{:?} runs into a letter\n{board}", placed.word);
    }
}

fn assert_tight(board: &Board) {
    let last_row = board.rows() as i32 - 1;
    let last_col = board.cols() as i32 - 1;
    let row_has_letter = |row: i32| (0..=last_col).any(|col| board.is_occupied(Coordinate::new(row, col)));
    let col_has_letter = |col: i32| (0..=last_row).any(|row| board.is_occupied(Coordinate::new(row, col)));

    assert!(row_has_letter(0));
    assert!(row_has_letter(last_row));
    assert!(col_has_letter(0));
    assert!(col_has_letter(last_col));
}

fn assert_layout(board: &Board, words: &[&str]) {
    assert_complete(board, words);
    assert_letters_consistent(board);
    assert_no_parallel_contact(board);
    assert_word_ends_clear(board);
    assert_tight(board);
}

#[test]
fn sample_list_holds_invariants_across_seeds() {
    for seed in 0..40 {
        let board = generate(&SAMPLE, seed);
        assert_layout(&board, &SAMPLE);
    }
}

#[test]
fn longer_list_holds_invariants_across_seeds() {
    for seed in 0..10 {
        let board = generate(&LONGER, seed);
        assert_layout(&board, &LONGER);
    }
}

#[test]
fn every_word_crosses_another() {
    for seed in 0..20 {
        let board = generate(&SAMPLE, seed);
        for (i, placed) in board.placements().iter().enumerate() {
            let crossings = placed
                .cells()
                .filter(|&(coord, _)| board.cell(coord).is_some_and(|c| c.is_crossed()))
                .count();
            assert!(crossings > 0, "word {i} ({:?}) stands alone\n{board}", placed.word);
        }
    }
}

#[test]
fn seeded_generation_is_reproducible() {
    let first = generate(&SAMPLE, 2024);
    for _ in 0..3 {
        assert_eq!(generate(&SAMPLE, 2024), first);
    }
}

#[test]
fn single_word_fills_one_line() {
    for seed in 0..10 {
        let board = generate(&["castle"], seed);
        assert!(
            (board.rows(), board.cols()) == (1, 6) || (board.rows(), board.cols()) == (6, 1),
            "seed {seed}:\n{board}"
        );
        assert_eq!(board.occupied().count(), 6);
    }
}

#[test]
fn disjoint_letters_fail_explicitly() {
    let config = GeneratorConfig {
        max_attempts: 30,
        restarts_per_size: 10,
        growth_step: 2,
    };
    let result = Generator::with_seed_and_config(9, config).generate(&["abc", "xyz"]);
    assert!(matches!(result, Err(GenerateError::NoValidLayout { attempts: 30, words: 2 })));
}

#[test]
fn board_serializes_for_renderers() {
    let board = generate(&SAMPLE, 1);
    let json = serde_json::to_value(&board).unwrap();

    assert_eq!(json["rows"], board.rows());
    assert_eq!(json["cols"], board.cols());
    assert_eq!(json["placements"].as_array().map(Vec::len), Some(5));

    let restored: Board = serde_json::from_value(json).unwrap();
    assert_eq!(restored, board);
}
