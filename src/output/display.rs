//! Printing of command results

use super::formatters::{create_progress_bar, entropy_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

/// Failed targets listed before the rest are summarised
const SHOW_FAILED: usize = 20;

fn banner(title: &str, rule: &str) {
    println!("\n{}", rule.repeat(60).cyan());
    println!(" {}", title.bright_cyan().bold());
    println!("{}", rule.repeat(60).cyan());
}

/// Print the guess sequence of a solved (or failed) target
///
/// With `details`, each turn also shows how far the candidate set shrank
/// and the entropy the solver expected from the guess.
pub fn print_solve_result(result: &SolveResult, details: bool) {
    banner(&format!("Target {}", result.target.to_uppercase()), "─");

    for (turn, step) in result.guesses.iter().enumerate() {
        println!(
            "\n{}. {} {} {}",
            turn + 1,
            step.word.to_uppercase().bold(),
            step.pattern.to_emoji(),
            step.pattern.to_string().bright_black()
        );

        if !details {
            continue;
        }

        println!(
            "   candidates  {} -> {}",
            step.candidates_before, step.candidates_after
        );
        if let Some(entropy) = step.entropy {
            println!("   expected    {entropy:.3} bits");
        }
        if let Some(expected) = step.expected_remaining {
            println!("   expected    {expected:.1} left");
        }
        if step.candidates_after > 0 {
            let actual = (step.candidates_before as f64 / step.candidates_after as f64).log2();
            println!("   observed    {actual:.3} bits");
        }
    }

    let turns = result.guesses.len();
    let noun = if turns == 1 { "guess" } else { "guesses" };
    println!();
    if result.success {
        println!("{}", format!("Solved in {turns} {noun}").green().bold());
    } else {
        println!("{}", format!("Not solved after {turns} {noun}").red().bold());
    }
}

/// Print how a single guess splits the current candidates
pub fn print_analysis_result(result: &AnalysisResult) {
    banner(&format!("Analysis of {}", result.word.to_uppercase()), "═");

    let bar = entropy_bar(result.entropy, result.total_candidates, 30);
    println!("\nAgainst {} candidates", result.total_candidates);
    println!(
        "  entropy       [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!("  reduction     {:.1}x", result.expected_reduction);
    println!("  expected left {:.1}", result.expected_remaining);
    println!("  worst case    {}", result.worst_case);
    println!("  letter score  {}", result.letter_score);
    println!(
        "  candidate     {}",
        if result.is_candidate { "yes".green() } else { "no".yellow() }
    );
}

/// Print guess-count statistics over a batch of targets
pub fn print_benchmark_result(result: &BenchmarkResult) {
    banner("Benchmark", "═");

    println!("\n  targets       {}", result.total_words);
    println!(
        "  solved        {}",
        format!("{}/{}", result.solved, result.total_words).green()
    );
    println!(
        "  average       {}",
        format!("{:.3}", result.average_guesses).bright_yellow().bold()
    );
    println!("  range         {}..={}", result.min_guesses, result.max_guesses);
    println!(
        "  elapsed       {:.2}s ({:.1} words/s)",
        result.duration.as_secs_f64(),
        result.words_per_second
    );

    println!("\n{}", "Guesses".bright_cyan().bold());
    let total = result.total_words.max(1) as f64;
    for (&guesses, &count) in &result.distribution {
        let share = count as f64 / total;
        let bar = create_progress_bar(share, 1.0, 40);
        println!("  {guesses}: {} {count:5} ({:5.1}%)", bar.green(), share * 100.0);
    }

    if result.failed.is_empty() {
        return;
    }
    println!("\n{}", "Failed".red().bold());
    for word in result.failed.iter().take(SHOW_FAILED) {
        println!("  {}", word.to_uppercase());
    }
    if result.failed.len() > SHOW_FAILED {
        println!("  ...and {} more", result.failed.len() - SHOW_FAILED);
    }
}
