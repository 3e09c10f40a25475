//! # mcq-quiz
//!
//! Turns a PDF of multiple-choice questions into a playable quiz.
//!
//! The pipeline is strictly sequential: a document is extracted to plain
//! text ([`extract`]), the text is parsed into [`Question`]s ([`parser`]),
//! and a [`QuizSession`] shuffles, records answers and scores them. The
//! questions can be played in the terminal or served over HTTP
//! ([`server`]).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mcq_quiz::{Grammar, Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Load questions from a PDF, a text file or a JSON file
//!     let quiz = Quiz::from_path("questions.pdf", Grammar::Positional)?
//!         .with_question_limit(Some(10));
//!
//!     // Run the quiz in the terminal
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! Parsing alone never fails:
//!
//! ```rust
//! let questions = mcq_quiz::parse("Q: 2+2?\nA) 3\n*B) 4\nC) 5\n");
//! assert_eq!(questions[0].correct_letter(), Some("B"));
//! ```

mod app;
pub mod config;
mod data;
pub mod extract;
pub mod logging;
mod models;
pub mod parser;
pub mod protocol;
pub mod server;
pub mod session;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;

pub use app::App;
pub use data::{load_questions, read_document_text, LoadError};
pub use extract::{ExtractionError, PdfExtractor, TextExtractor};
pub use models::{AppState, Question, QuestionOption};
pub use parser::{parse, parse_with, Grammar};
pub use session::QuizSession;

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Error loading questions from file.
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),
    /// IO error during quiz execution.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz over a pool of questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            app: App::with_questions(questions),
        }
    }

    /// Load a quiz from a `.pdf`, `.json` or plain text file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use mcq_quiz::{Grammar, Quiz};
    ///
    /// let quiz = Quiz::from_path("questions.txt", Grammar::Strict).expect("Failed to load quiz");
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P, grammar: Grammar) -> Result<Self, QuizError> {
        let questions = load_questions(path, grammar)?;
        Ok(Self::new(questions))
    }

    /// Ask at most `count` questions per attempt. `None` or zero asks all.
    pub fn with_question_limit(mut self, count: Option<usize>) -> Self {
        self.app.set_question_limit(count);
        self
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::TerminalGuard::enter()?;
        run_event_loop(&mut term, &mut self.app)
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    if app.show_notes() {
        if matches!(key, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?')) {
            app.close_notes();
        }
        return false;
    }

    match key {
        KeyCode::Char('?') => {
            app.toggle_notes();
            return false;
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }

    match app.state {
        AppState::Welcome => handle_welcome_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
    false
}

fn handle_welcome_input(app: &mut App, key: KeyCode) {
    if key == KeyCode::Enter {
        app.start_quiz();
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.submit_answer();
        }
        KeyCode::Left | KeyCode::Char('h') => app.previous_question(),
        KeyCode::Right | KeyCode::Char('l') => app.next_question(),
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.finish_quiz();
        }
        _ => {}
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        _ => {}
    }
}
