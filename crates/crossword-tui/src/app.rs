use crate::settings::Settings;
use crate::theme::{Theme, ThemeName};
use crossterm::event::{KeyCode, KeyEvent};
use crossword_core::{Board, GenerateError, Generator, GeneratorConfig};
use log::info;
use std::time::Duration;

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// A generated layout and where it came from
#[derive(Debug, Clone)]
pub struct Layout {
    pub board: Board,
    pub seed: u64,
    pub attempts: usize,
    pub board_size: usize,
}

/// Run the generator once with an explicit seed
pub fn generate_layout(
    words: &[String],
    seed: u64,
    config: &GeneratorConfig,
) -> Result<Layout, GenerateError> {
    let report = Generator::with_seed_and_config(seed, config.clone()).generate_report(words)?;
    Ok(Layout {
        board: report.board,
        seed,
        attempts: report.attempts,
        board_size: report.board_size,
    })
}

/// The main application state
pub struct App {
    /// Words laid out on every regeneration
    pub words: Vec<String>,
    /// Generator settings
    pub config: GeneratorConfig,
    /// Current layout, if the last generation succeeded
    pub layout: Option<Layout>,
    /// Why the last generation failed
    pub error: Option<GenerateError>,
    /// Color theme
    pub theme: Theme,
    /// Whether letters are blanked out (empty puzzle view)
    pub hide_letters: bool,
    /// Message to display
    pub message: Option<String>,
    /// Message timer
    message_timer: u32,
    /// Number of layouts generated this session
    pub generations: usize,
    settings: Settings,
}

impl App {
    /// Create the app and generate the first layout
    pub fn new(words: Vec<String>, config: GeneratorConfig, settings: Settings, seed: Option<u64>) -> Self {
        let mut app = Self {
            words,
            config,
            layout: None,
            error: None,
            theme: settings.theme.theme(),
            hide_letters: false,
            message: None,
            message_timer: 0,
            generations: 0,
            settings,
        };
        app.regenerate(seed);
        app
    }

    /// Get the tick rate
    pub fn get_tick_rate(&self) -> Duration {
        Duration::from_millis(100)
    }

    /// Update timers (called every tick)
    pub fn tick(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }
    }

    /// Show a temporary message
    pub fn show_message(&mut self, msg: &str) {
        self.message = Some(msg.to_string());
        self.message_timer = 30; // ~3 seconds at 100ms poll
    }

    pub fn theme_name(&self) -> ThemeName {
        self.settings.theme
    }

    /// Lay the words out again, from `seed` or a fresh random one
    pub fn regenerate(&mut self, seed: Option<u64>) {
        let seed = seed.unwrap_or_else(rand::random);
        self.generations += 1;
        match generate_layout(&self.words, seed, &self.config) {
            Ok(layout) => {
                info!("seed {seed}: {} attempt(s)", layout.attempts);
                self.layout = Some(layout);
                self.error = None;
            }
            Err(e) => {
                self.layout = None;
                self.error = Some(e);
            }
        }
    }

    fn cycle_theme(&mut self) {
        let next = self.settings.theme.next();
        self.settings.theme = next;
        self.theme = next.theme();
        self.settings.save_or_warn();
        self.show_message(&format!("Theme: {}", next));
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('r') | KeyCode::Char(' ') => {
                self.regenerate(None);
                match &self.layout {
                    Some(layout) => {
                        let msg = format!("New layout (seed {})", layout.seed);
                        self.show_message(&msg);
                    }
                    None => self.show_message("Generation failed"),
                }
            }
            KeyCode::Char('t') => self.cycle_theme(),
            KeyCode::Char('h') => {
                self.hide_letters = !self.hide_letters;
                let msg = if self.hide_letters {
                    "Letters hidden"
                } else {
                    "Letters shown"
                };
                self.show_message(msg);
            }
            _ => {}
        }
        AppAction::Continue
    }
}
