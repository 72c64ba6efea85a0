//! Display functions for command results

use super::formatters::{code_pegs, create_progress_bar, feedback_marks};
use crate::commands::{BenchmarkResult, ScoreResult};
use crate::game::{MAX_ATTEMPTS, Statistics};
use colored::Colorize;

/// Print the result of scoring one guess against a code
pub fn print_score_result(result: &ScoreResult) {
    let (position, color) = feedback_marks(result.feedback);

    println!("\n{}", "─".repeat(60).cyan());
    println!("Code:   {}  {}", code_pegs(&result.code), result.code.to_abbreviations().bright_black());
    println!("Guess:  {}  {}", code_pegs(&result.guess), result.guess.to_abbreviations().bright_black());
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Correct position: {} {}",
        result.feedback.position_correct.to_string().green().bold(),
        position
    );
    println!(
        "Correct colour:   {} {}",
        result.feedback.color_correct.to_string().yellow().bold(),
        color
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {}", result.strategy);
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Games won:        {}",
        format!("{}/{}", result.games_won, result.total_games).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=MAX_ATTEMPTS {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_games as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}

/// Print the per-process session tally
pub fn print_statistics(stats: &Statistics) {
    println!(
        "\nGames: {} | Won: {} | Lost: {} | Quit: {} | Win rate: {:.0}%",
        stats.games_played,
        stats.games_won.to_string().green(),
        stats.games_lost.to_string().red(),
        stats.games_aborted,
        stats.win_rate()
    );
}
