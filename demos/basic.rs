//! Basic example of using the crossword engine

use crossword_core::{Coordinate, Generator, GeneratorConfig};

fn main() {
    let words = ["seat", "tea", "east", "set", "eat"];

    // Generate a layout
    println!("Laying out {} words...\n", words.len());
    let mut generator = Generator::new();
    let report = match generator.generate_report(&words) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Generation failed: {}", e);
            return;
        }
    };

    println!("Generated layout:");
    println!("{}", report.board);

    // Show some stats
    println!("Seed: {:?}", generator.seed());
    println!("Attempts: {}", report.attempts);
    println!("Starting size: {}x{}", report.board_size, report.board_size);
    println!("Final size: {}x{}", report.board.rows(), report.board.cols());

    for placed in report.board.placements() {
        println!("  {:<8} {} at {}", placed.word, placed.direction, placed.anchor);
    }

    // Reproduce a layout from its seed
    println!("\n--- Reproducing seed 42 ---\n");
    let first = Generator::with_seed(42).generate(&words);
    let second = Generator::with_seed(42).generate(&words);
    if let (Ok(first), Ok(second)) = (first, second) {
        println!("{}", first);
        println!("Identical: {}", first == second);
        println!("Letter at origin: {:?}", first.letter_at(Coordinate::new(0, 0)));
    }

    // A list with nothing in common gives up after a bounded number of attempts
    println!("\n--- Words with no shared letters ---\n");
    let mut quick = Generator::with_config(GeneratorConfig::quick());
    match quick.generate(&["abc", "xyz"]) {
        Ok(board) => println!("Unexpected layout:\n{}", board),
        Err(e) => println!("{}", e),
    }
}
