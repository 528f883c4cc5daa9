mod app;
mod error;
mod logging;
mod render;
mod settings;
mod theme;
mod words;

use app::App;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use crossword_core::GeneratorConfig;
use error::AppError;
use log::debug;
use settings::Settings;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};
use theme::ThemeName;

/// Lay a list of words out as a crossword grid
#[derive(Parser, Debug)]
#[command(name = "crossword", version, about)]
struct Cli {
    /// Words to lay out (commas or spaces separate them)
    #[arg(value_name = "WORD")]
    words: Vec<String>,

    /// Comma-separated word list, added to any positional words
    #[arg(long = "words", value_name = "LIST")]
    word_list: Option<String>,

    /// Read words from a file, one per line (`#` starts a comment)
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Seed for a reproducible layout
    #[arg(short, long)]
    seed: Option<u64>,

    /// Restarts before giving up
    #[arg(long, value_name = "N")]
    max_attempts: Option<usize>,

    /// Print the grid as text and exit
    #[arg(short, long)]
    print: bool,

    /// Print the grid as JSON and exit
    #[arg(long, conflicts_with = "print")]
    json: bool,

    /// Color theme
    #[arg(long, value_enum)]
    theme: Option<ThemeName>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn headless(&self) -> bool {
        self.print || self.json
    }

    /// Words named on the command line or in `--file`, if any
    fn requested_words(&self) -> Result<Option<Vec<String>>, AppError> {
        let mut words = words::parse_list(&self.words);
        if let Some(list) = &self.word_list {
            words.extend(words::parse_list(&[list]));
        }
        if let Some(path) = &self.file {
            words.extend(words::read_word_file(path)?);
        }
        Ok((!words.is_empty()).then_some(words))
    }

    fn config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::default();
        if let Some(max_attempts) = self.max_attempts {
            config.max_attempts = max_attempts;
        }
        config
    }
}

/// Command-line words win, then the last saved list, then the built-in sample
fn choose_words(requested: Option<Vec<String>>, saved: &[String]) -> Vec<String> {
    match requested {
        Some(words) => words,
        None if !saved.is_empty() => saved.to_vec(),
        None => words::DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose, !cli.headless());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let mut settings = Settings::load();
    let requested = cli.requested_words()?;
    let remember = requested.is_some();
    let words = choose_words(requested, &settings.words);
    let config = cli.config();
    debug!("{} word(s), {:?}", words.len(), config);

    if cli.headless() {
        return print_layout(&cli, &words, &config);
    }

    if remember && settings.words != words {
        settings.words = words.clone();
        settings.save_or_warn();
    }
    if let Some(theme) = cli.theme {
        settings.theme = theme;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let mut app = App::new(words, config, settings, cli.seed);
    let result = run_app(&mut stdout, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;

    result?;
    if let Some(layout) = &app.layout {
        // Leave the last layout on the normal screen
        println!("{}", render::board_text(&layout.board, app.hide_letters));
        println!("seed {}", layout.seed);
    }
    Ok(())
}

fn print_layout(cli: &Cli, words: &[String], config: &GeneratorConfig) -> Result<(), AppError> {
    let seed = cli.seed.unwrap_or_else(rand::random);
    let layout = app::generate_layout(words, seed, config)?;
    eprintln!(
        "seed {} ({} attempt(s), working size {})",
        layout.seed, layout.attempts, layout.board_size
    );

    let mut stdout = io::stdout().lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut stdout, &layout.board)?;
        writeln!(stdout)?;
    } else {
        writeln!(stdout, "{}", render::board_text(&layout.board, false))?;
        for placed in layout.board.placements() {
            writeln!(stdout, "{} {} {}", placed.anchor, placed.direction, placed.word)?;
        }
    }
    Ok(())
}

fn run_app(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        let tick_rate = app.get_tick_rate();

        render::render(stdout, app)?;
        stdout.flush()?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout.min(Duration::from_millis(33)))? {
            if let Event::Key(key) = event::read()? {
                // Handle Ctrl+C
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    break;
                }

                match app.handle_key(key) {
                    app::AppAction::Continue => {}
                    app::AppAction::Quit => break,
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_cli_words_take_precedence() {
        let chosen = choose_words(Some(owned(&["sea", "eat"])), &owned(&["tea"]));
        assert_eq!(chosen, vec!["sea", "eat"]);
    }

    #[test]
    fn test_saved_words_used_when_none_given() {
        assert_eq!(choose_words(None, &owned(&["tea"])), vec!["tea"]);
    }

    #[test]
    fn test_default_words_as_last_resort() {
        assert_eq!(choose_words(None, &[]), words::DEFAULT_WORDS.to_vec());
    }

    #[test]
    fn test_cli_parses_word_sources() {
        let cli = Cli::parse_from(["crossword", "seat", "tea,east", "--words", "set,eat", "-s", "7"]);
        assert_eq!(
            cli.requested_words().unwrap(),
            Some(owned(&["seat", "tea", "east", "set", "eat"]))
        );
        assert_eq!(cli.seed, Some(7));
        assert!(!cli.headless());
    }

    #[test]
    fn test_cli_no_words() {
        let cli = Cli::parse_from(["crossword", "--print"]);
        assert_eq!(cli.requested_words().unwrap(), None);
        assert!(cli.headless());
    }

    #[test]
    fn test_cli_max_attempts() {
        let cli = Cli::parse_from(["crossword", "--max-attempts", "9"]);
        assert_eq!(cli.config().max_attempts, 9);
        assert_eq!(cli.config().restarts_per_size, GeneratorConfig::default().restarts_per_size);
    }

    #[test]
    fn test_print_and_json_conflict() {
        assert!(Cli::try_parse_from(["crossword", "--print", "--json"]).is_err());
    }
}
