//! TUI application state and logic

use crate::core::{Round, RoundConfig, RoundState, SessionStats};
use crate::lexicon::Lexicon;
use crate::output::formatters::{feedback_text, outcome_text};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest guess the input box accepts
const MAX_INPUT: usize = 32;

/// Application state
pub struct App<'a> {
    pub lexicon: &'a Lexicon,
    pub config: RoundConfig,
    pub round: Round,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: SessionStats,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(lexicon: &'a Lexicon, config: RoundConfig) -> Self {
        let round = Round::random(lexicon, &config, &mut rand::rng());
        Self::with_round(lexicon, config, round)
    }

    /// Start the app on a given round
    #[must_use]
    pub fn with_round(lexicon: &'a Lexicon, config: RoundConfig, round: Round) -> Self {
        let mut app = Self {
            lexicon,
            config,
            round,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: SessionStats::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        };
        app.add_message(
            "Guess a letter, or type the whole word. Press Enter to submit.",
            MessageStyle::Info,
        );
        app
    }

    /// Submit the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        if input.trim().is_empty() {
            return;
        }

        let result = self.round.guess(&input);
        let style = match &result {
            Ok(feedback) if feedback.is_hit() => MessageStyle::Success,
            Ok(_) | Err(_) => MessageStyle::Error,
        };
        self.add_message(&feedback_text(&result), style);

        if self.round.is_over() {
            self.finish_round();
        }
    }

    fn finish_round(&mut self) {
        let status = self.round.status();
        self.stats = self.stats.record(&status);
        debug!(
            "session: {} played, {} won",
            self.stats.played, self.stats.won
        );

        if let Some(text) = outcome_text(&status, self.config.player.as_deref()) {
            let style = if self.round.state() == RoundState::Won {
                MessageStyle::Success
            } else {
                MessageStyle::Error
            };
            self.add_message(&text, style);
        }
        self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
        self.input_mode = InputMode::RoundOver;
    }

    pub fn new_round(&mut self) {
        self.round = Round::random(self.lexicon, &self.config, &mut rand::rng());
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New round started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.input_buffer.chars().count() < MAX_INPUT && !c.is_control() {
            self.input_buffer.push(c);
        }
    }
}

/// Run the TUI application
///
/// Returns the session statistics when the player quits.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<SessionStats> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<SessionStats> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::RoundOver => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') | KeyCode::Enter => {
                        app.new_round();
                    }
                    _ => {
                        // Round is over, ignore other keys
                    }
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.push_char(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        app.submit_guess();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}
