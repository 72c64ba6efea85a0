//! Console game mode
//!
//! The line-based front end: prompts for the code length and repeat policy,
//! reads one peg per prompt and prints the board after every miss. All text
//! validation happens here so the core only ever sees well-formed guesses.

use crate::core::{Code, Color};
use crate::game::{
    MAX_CODE_LENGTH, MIN_CODE_LENGTH, Session, SessionConfig, SessionRunner, SessionState,
};
use crate::output::formatters::board_lines;
use crate::solver::{MAX_SOLVER_LENGTH, Solver, StrategyType};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Run the console game on stdin/stdout until the player stops
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the core
/// reports a contract violation.
pub fn run_simple(runner: &mut SessionRunner, strategy: StrategyType) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_console(runner, strategy, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the console game over arbitrary input and output streams
///
/// # Errors
///
/// Returns an error on I/O failure or a core contract violation.
pub fn play_console<R: BufRead, W: Write>(
    runner: &mut SessionRunner,
    strategy: StrategyType,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let mut console = Console {
        input,
        output,
        strategy,
    };

    loop {
        console.banner()?;
        if console.play_session(runner)? == SessionEnd::InputClosed {
            break;
        }

        let again = console.choose("\nDo you want to play again? (Y/N) : ")?;
        if again != Some(true) {
            break;
        }
    }

    let stats = runner.stats();
    console.say("Thanks for playing!")?;
    console.say(format!(
        "Games: {} | Won: {} | Lost: {} | Quit: {}",
        stats.games_played, stats.games_won, stats.games_lost, stats.games_aborted
    ))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionEnd {
    Finished,
    InputClosed,
}

struct Console<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
    strategy: StrategyType,
}

impl<R: BufRead, W: Write> Console<'_, R, W> {
    fn say(&mut self, text: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{text}").context("writing to console")
    }

    /// Prompt and read one trimmed line; `None` once input is exhausted
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}").context("writing prompt")?;
        self.output.flush().context("flushing prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("reading console input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask a Y/N question until answered
    fn choose(&mut self, text: &str) -> Result<Option<bool>> {
        loop {
            let Some(answer) = self.prompt(text)? else {
                return Ok(None);
            };
            match answer.to_uppercase().as_str() {
                "Y" => return Ok(Some(true)),
                "N" => return Ok(Some(false)),
                _ => self.say("Invalid input. Please enter Y or N.")?,
            }
        }
    }

    fn banner(&mut self) -> Result<()> {
        let names: Vec<&str> = Color::ALL.iter().map(|c| c.name()).collect();
        let abbreviations: Vec<&str> = Color::ALL.iter().map(|c| c.abbreviation()).collect();

        self.say("=".repeat(20))?;
        self.say("Welcome to Mastermind!")?;
        self.say("You will be given a sequence of colours and you must guess what they are.")?;
        self.say(format!("There are {} Colours : {}", Color::COUNT, names.join(", ")))?;
        self.say(format!("Enter : {}", abbreviations.join(", ")))?;
        self.say(format!(
            "You have {} turns to guess the sequence.",
            crate::game::MAX_ATTEMPTS
        ))?;
        self.say("Good Luck!")?;
        self.say("=".repeat(20))
    }

    fn configure(&mut self) -> Result<Option<SessionConfig>> {
        let length = loop {
            let Some(text) = self.prompt("\nSelect the number of colours in the code : ")? else {
                return Ok(None);
            };
            match text.parse::<usize>() {
                Ok(n) if (MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&n) => break n,
                Ok(n) if n < MIN_CODE_LENGTH => {
                    self.say(format!("Please enter a number of at least {MIN_CODE_LENGTH}"))?;
                }
                Ok(_) => {
                    self.say(format!("Please enter a number no greater than {MAX_CODE_LENGTH}"))?;
                }
                Err(_) => self.say("Please enter a whole number.")?,
            }
        };

        let repeat_requested = if SessionConfig::forces_repeats(length) {
            self.say("!!! Code will contain repeat colours !!!")?;
            true
        } else {
            match self.choose("\nDo you want to allow repeat colours? (Y/N) : ")? {
                Some(choice) => choice,
                None => return Ok(None),
            }
        };

        let (config, _) = SessionConfig::with_repeat_policy(length, repeat_requested)?;
        Ok(Some(config))
    }

    fn play_session(&mut self, runner: &mut SessionRunner) -> Result<SessionEnd> {
        let Some(config) = self.configure()? else {
            return Ok(SessionEnd::InputClosed);
        };
        let mut session = runner.start_session(config.length, config.repeat_allowed)?;
        let mut solver = None;

        while !session.is_over() {
            let abbreviations: Vec<String> = Color::ALL
                .iter()
                .map(|c| format!("'{}'", c.abbreviation()))
                .collect();
            self.say(format!(
                "Enter : {}, 'hint' or 'exit' to quit",
                abbreviations.join(", ")
            ))?;

            let mut pegs = Vec::with_capacity(config.length);
            while pegs.len() < config.length {
                let Some(text) = self.prompt(&format!("Enter colour {} : ", pegs.len() + 1))?
                else {
                    session.abort()?;
                    runner.finish(&session)?;
                    return Ok(SessionEnd::InputClosed);
                };

                if text.eq_ignore_ascii_case("exit") {
                    session.abort()?;
                    runner.finish(&session)?;
                    self.say("Game abandoned.")?;
                    return Ok(SessionEnd::Finished);
                }
                if text.eq_ignore_ascii_case("hint") {
                    self.hint(&session, &mut solver)?;
                    continue;
                }

                match text.parse::<Color>() {
                    Ok(color) => pegs.push(color),
                    Err(_) => self.say("Invalid input. Please enter a valid colour.")?,
                }
            }

            let turn = session.submit_guess(Code::new(pegs))?;
            match turn.state {
                SessionState::Won { attempts_used } => {
                    self.say(format!(
                        "Congratulations! You guessed the code in {attempts_used} attempts."
                    ))?;
                }
                SessionState::Lost { secret } => {
                    self.say("Incorrect. You have 0 attempts left.")?;
                    self.board(&session)?;
                    self.say(format!(
                        "You have run out of attempts. The code was {secret} ({})",
                        secret.to_abbreviations()
                    ))?;
                    self.say("Better luck next time!")?;
                }
                SessionState::Playing => {
                    self.say(format!(
                        "Incorrect. You have {} attempts left.",
                        session.attempts_remaining()
                    ))?;
                    self.board(&session)?;
                }
                SessionState::Aborted => {}
            }
        }

        runner.finish(&session)?;
        Ok(SessionEnd::Finished)
    }

    fn board(&mut self, session: &Session) -> Result<()> {
        for line in board_lines(session.history(), session.config().length) {
            self.say(line)?;
        }
        Ok(())
    }

    fn hint(
        &mut self,
        session: &Session,
        solver: &mut Option<Solver<StrategyType>>,
    ) -> Result<()> {
        let config = session.config();
        if config.length > MAX_SOLVER_LENGTH {
            return self.say("No hints for codes this long.");
        }

        if solver.is_none() {
            *solver = Some(Solver::new(
                self.strategy,
                config.length,
                config.repeat_allowed,
            )?);
        }
        let Some(solver) = solver.as_ref() else {
            return Ok(());
        };

        let remaining = solver.count_candidates(session.history());
        match solver.next_guess(session.history()) {
            Some(guess) => self.say(format!(
                "Hint: try {} ({remaining} codes still possible)",
                guess.to_abbreviations()
            )),
            None => self.say("No code matches the feedback so far."),
        }
    }
}
