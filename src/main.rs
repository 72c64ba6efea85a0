//! Mastermind - CLI
//!
//! Play in a terminal UI or on the plain console, benchmark the solver, or
//! score a guess by hand.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{BenchmarkConfig, run_benchmark, run_simple, score_codes},
    core::RandomSource,
    game::{MAX_CODE_LENGTH, MIN_CODE_LENGTH, SessionConfig, SessionRunner},
    output::{print_benchmark_result, print_score_result, print_statistics},
    solver::StrategyType,
};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code-breaking game with a deterministic codemaker",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for the codemaker (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u32>,

    /// Number of pegs in the code (4 to 12)
    #[arg(short, long, global = true, default_value = "4", value_parser = parse_length)]
    length: usize,

    /// Allow repeated colours (always on above 6 pegs)
    #[arg(short, long, global = true)]
    repeats: bool,

    /// Hint strategy: minimax (default) or consistent
    #[arg(short, long, global = true, default_value = "minimax")]
    strategy: String,
}

fn parse_length(text: &str) -> Result<usize, String> {
    let length: usize = text
        .parse()
        .map_err(|_| format!("'{text}' is not a whole number"))?;
    if (MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&length) {
        Ok(length)
    } else {
        Err(format!(
            "code length must be between {MIN_CODE_LENGTH} and {MAX_CODE_LENGTH}"
        ))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Console mode (prompts for length and repeats each game)
    Simple,

    /// Let the solver play generated codes
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },

    /// Score a guess against a code, e.g. `score "RD RD BL GN" "RD BL RD GN"`
    Score {
        /// The secret code
        code: String,
        /// The guess to score
        guess: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Seeded exactly once; every session of this process shares the stream
    let rng = cli.seed.map_or_else(RandomSource::from_entropy, RandomSource::new);
    log::info!("codemaker seed: {}", rng.state());
    let mut runner = SessionRunner::new(rng);

    let strategy = StrategyType::from_name(&cli.strategy);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(runner, cli.length, cli.repeats, strategy),
        Commands::Simple => run_simple(&mut runner, strategy),
        Commands::Benchmark { count } => {
            run_benchmark_command(&mut runner, strategy, count, cli.length, cli.repeats)
        }
        Commands::Score { code, guess } => {
            let result = score_codes(&code, &guess)?;
            print_score_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(
    runner: SessionRunner,
    length: usize,
    repeats: bool,
    strategy: StrategyType,
) -> Result<()> {
    use mastermind::interactive::{App, run_tui};

    let (config, forced) = SessionConfig::with_repeat_policy(length, repeats)?;
    if forced {
        println!("!!! Code will contain repeat colours !!!");
    }

    let app = App::new(runner, config.length, config.repeat_allowed, strategy)?;
    let app = run_tui(app)?;
    print_statistics(app.runner.stats());
    Ok(())
}

fn run_benchmark_command(
    runner: &mut SessionRunner,
    strategy: StrategyType,
    count: usize,
    length: usize,
    repeats: bool,
) -> Result<()> {
    let (config, _) = SessionConfig::with_repeat_policy(length, repeats)?;
    println!(
        "Running benchmark on {count} codes ({} pegs, repeats {})...",
        config.length,
        if config.repeat_allowed { "on" } else { "off" }
    );

    let benchmark = BenchmarkConfig {
        count,
        length: config.length,
        repeat_allowed: config.repeat_allowed,
    };
    let result = run_benchmark(runner, strategy, strategy.name(), &benchmark)?;
    print_benchmark_result(&result);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_flag_is_bounded() {
        let cli = Cli::try_parse_from(["mastermind", "--length", "12", "simple"]).unwrap();
        assert_eq!(cli.length, 12);

        assert!(Cli::try_parse_from(["mastermind", "--length", "13"]).is_err());
        assert!(Cli::try_parse_from(["mastermind", "--length", "3"]).is_err());
        assert!(Cli::try_parse_from(["mastermind", "--length", "18446744073709551615"]).is_err());
    }
}
