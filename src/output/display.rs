//! Display functions for command results

use super::formatters::{feedback_tiles, share_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult, Suggestion};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            feedback_tiles(&step.word, &step.feedback),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            match step.variance {
                Some(variance) => println!("  Variance:   {variance:.6}"),
                None => println!("  Variance:   {}", "opening or last candidate".bright_black()),
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print a suggested next guess
pub fn print_suggestion(suggestion: &Suggestion) {
    println!(
        "\n{} {}",
        "Next guess:".bright_cyan().bold(),
        suggestion.guess.to_uppercase().bright_yellow().bold()
    );
    println!("   Candidates left: {}", suggestion.candidates_remaining);

    if let Some(score) = &suggestion.score {
        println!("   Variance:        {:.6}", score.variance);
        println!(
            "   Buckets used:    {} (largest {})",
            score.buckets_used, score.largest
        );
    }

    if !suggestion.candidates.is_empty() {
        println!(
            "   Possible:        {}",
            suggestion.candidates.join(", ").bright_black()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "VARIANCE ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Variance:     {}",
        format!("{:.6}", result.variance).bright_yellow()
    );
    println!(
        "   Buckets used: {} of {}",
        result.buckets_used, result.feedback_space
    );
    println!("   Worst case:   {} candidates remain", result.largest);

    println!("\n📈 {}", "Largest buckets:".bright_cyan().bold());
    for (feedback, count) in &result.top_buckets {
        println!(
            "   {}  [{}] {count}",
            feedback.to_emoji(),
            share_bar(*count, result.total_candidates, 30).green()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}/{}", result.solved, result.total_words).green()
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
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut counts: Vec<_> = result.distribution.iter().collect();
    counts.sort_unstable();
    for (guess_count, &count) in counts {
        println!(
            "   {guess_count}: [{}] {count:4}",
            share_bar(count, result.total_words, 40).green()
        );
    }

    if !result.failed.is_empty() {
        println!("\n{} {}", "Failed:".red().bold(), result.failed.join(", "));
    }
}
