//! TUI application state and logic

use crate::core::{Code, Color};
use crate::game::{MAX_ATTEMPTS, Outcome, Session, SessionRunner, SessionState};
use crate::solver::{MAX_SOLVER_LENGTH, Solver, StrategyType};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub runner: SessionRunner,
    pub session: Session,
    pub strategy: StrategyType,
    pub length: usize,
    pub repeat_allowed: bool,
    pub input: Vec<Color>,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
    solver: Option<Solver<StrategyType>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    Finished,
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

impl App {
    /// Start the first session from `runner`
    ///
    /// # Errors
    ///
    /// Returns an error if `length` / `repeat_allowed` is not a valid configuration.
    pub fn new(
        mut runner: SessionRunner,
        length: usize,
        repeat_allowed: bool,
        strategy: StrategyType,
    ) -> Result<Self> {
        let session = runner.start_session(length, repeat_allowed)?;

        let mut app = Self {
            runner,
            session,
            strategy,
            length,
            repeat_allowed,
            input: Vec::with_capacity(length),
            messages: Vec::new(),
            input_mode: InputMode::Guessing,
            should_quit: false,
            solver: None,
        };
        app.add_message(
            &format!("Welcome! Crack the {length}-peg code in {MAX_ATTEMPTS} guesses."),
            MessageStyle::Info,
        );
        app.add_message(
            "Keys 1-6 or r/b/y/g/p/n add a peg, Enter submits, ? for a hint",
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Apply one key press
    ///
    /// # Errors
    ///
    /// Returns an error if the core reports a contract violation.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.quit();
        }

        match self.input_mode {
            InputMode::Finished => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game()?,
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Char('q') => self.quit()?,
                KeyCode::Esc => self.abort()?,
                KeyCode::Char('?') => self.hint()?,
                KeyCode::Char(c) => {
                    if let Some(color) = Color::from_key(c) {
                        self.push_peg(color);
                    }
                }
                KeyCode::Backspace => {
                    self.input.pop();
                }
                KeyCode::Enter => self.submit()?,
                _ => {}
            },
        }
        Ok(())
    }

    pub fn push_peg(&mut self, color: Color) {
        if self.input.len() < self.length {
            self.input.push(color);
        }
    }

    /// Submit the pegs entered so far as a guess
    ///
    /// # Errors
    ///
    /// Returns an error if the core reports a contract violation.
    pub fn submit(&mut self) -> Result<()> {
        if self.input.len() != self.length {
            self.add_message(
                &format!("A guess needs exactly {} pegs", self.length),
                MessageStyle::Error,
            );
            return Ok(());
        }

        let guess = Code::new(std::mem::take(&mut self.input));
        let turn = self.session.submit_guess(guess)?;

        match turn.state {
            SessionState::Won { attempts_used } => {
                let celebration = match attempts_used {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟".to_string(),
                    2..=4 => format!("🔥 MAGNIFICENT! Cracked in {attempts_used} guesses! 🔥"),
                    _ => format!("🎉 SOLVED in {attempts_used} guesses! 🎉"),
                };
                self.add_message(&celebration, MessageStyle::Success);
                self.finish()?;
            }
            SessionState::Lost { secret } => {
                self.add_message(
                    &format!("Out of guesses! The code was {}", secret.to_abbreviations()),
                    MessageStyle::Error,
                );
                self.finish()?;
            }
            SessionState::Playing => self.add_message(
                &format!(
                    "{} in place, {} right colour | {} guesses left",
                    turn.feedback.position_correct,
                    turn.feedback.color_correct,
                    self.session.attempts_remaining()
                ),
                MessageStyle::Info,
            ),
            SessionState::Aborted => {}
        }
        Ok(())
    }

    /// Suggest a guess and pre-fill it as the input
    ///
    /// # Errors
    ///
    /// Returns an error if the solver cannot be built for this configuration.
    pub fn hint(&mut self) -> Result<()> {
        if self.length > MAX_SOLVER_LENGTH {
            self.add_message("No hints for codes this long", MessageStyle::Error);
            return Ok(());
        }

        if self.solver.is_none() {
            self.solver = Some(Solver::new(self.strategy, self.length, self.repeat_allowed)?);
        }

        let suggestion = self
            .solver
            .as_ref()
            .and_then(|solver| solver.next_guess(self.session.history()))
            .cloned();

        match suggestion {
            Some(guess) => {
                self.add_message(
                    &format!("Hint: try {}", guess.to_abbreviations()),
                    MessageStyle::Info,
                );
                self.input = guess.pegs().to_vec();
            }
            None => self.add_message("No code matches the feedback so far", MessageStyle::Error),
        }
        Ok(())
    }

    /// Give up on the current session
    ///
    /// # Errors
    ///
    /// Returns an error if the session already ended.
    pub fn abort(&mut self) -> Result<()> {
        self.session.abort()?;
        self.input.clear();
        self.add_message("Game abandoned.", MessageStyle::Error);
        self.finish()
    }

    /// Abort any active session and exit
    ///
    /// # Errors
    ///
    /// Returns an error if recording the aborted session fails.
    pub fn quit(&mut self) -> Result<()> {
        if !self.session.is_over() {
            self.session.abort()?;
            self.runner.finish(&self.session)?;
        }
        self.should_quit = true;
        Ok(())
    }

    /// Start another session from the same random stream
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is no longer valid.
    pub fn new_game(&mut self) -> Result<()> {
        self.session = self.runner.start_session(self.length, self.repeat_allowed)?;
        self.input.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started! Fresh code generated.", MessageStyle::Info);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.runner.finish(&self.session)?;
        self.input_mode = InputMode::Finished;
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        Ok(())
    }

    /// Outcome of the current session once it is over
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.session.outcome()
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
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<App> {
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

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<App> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(seed: u32) -> App {
        App::new(SessionRunner::with_seed(seed), 4, false, StrategyType::from_name("minimax"))
            .unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn type_guess(app: &mut App, keys: &str) {
        for c in keys.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn welcome_names_the_attempt_limit() {
        let app = app(0);
        let expected = format!("Welcome! Crack the 4-peg code in {MAX_ATTEMPTS} guesses.");
        assert_eq!(app.messages[0].text, expected);
    }

    #[test]
    fn keys_build_and_submit_a_winning_guess() {
        let mut app = app(0);
        // Blue Yellow Red Brown
        type_guess(&mut app, "by1n");

        assert_eq!(app.outcome(), Some(Outcome::Won(1)));
        assert_eq!(app.input_mode, InputMode::Finished);
        assert_eq!(app.runner.stats().games_won, 1);
    }

    #[test]
    fn incomplete_guess_is_not_submitted() {
        let mut app = app(0);
        type_guess(&mut app, "rb");
        assert!(app.session.history().is_empty());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn input_is_capped_at_code_length() {
        let mut app = app(0);
        for c in "rrrrrr".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input.len(), 4);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input.len(), 3);
    }

    #[test]
    fn running_out_of_guesses_loses() {
        let mut app = app(0);
        for _ in 0..MAX_ATTEMPTS {
            type_guess(&mut app, "ggpp");
        }
        assert!(matches!(app.outcome(), Some(Outcome::Lost(_))));
        assert_eq!(app.runner.stats().games_lost, 1);
    }

    #[test]
    fn new_game_continues_the_stream() {
        let mut app = app(0);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.outcome(), Some(Outcome::Aborted));

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Guessing);
        // Purple Brown Green Yellow
        type_guess(&mut app, "pngy");
        assert_eq!(app.outcome(), Some(Outcome::Won(1)));
        assert_eq!(app.runner.stats().games_played, 2);
    }

    #[test]
    fn hint_prefills_input() {
        let mut app = app(0);
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.input.len(), 4);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.history().len(), 1);
    }

    #[test]
    fn quit_aborts_active_session() {
        let mut app = app(0);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
        assert_eq!(app.runner.stats().games_aborted, 1);
    }
}
