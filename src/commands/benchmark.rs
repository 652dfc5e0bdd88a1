//! Benchmark command
//!
//! Plays many games and reports how many guesses the solver needs.

use crate::core::{CandidatePool, Word};
use crate::game::{DEFAULT_MAX_GUESSES, Game, GameView};
use crate::solver::{SolverConfig, play_step};
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    /// Number of targets to play
    pub count: usize,
    /// Seed for target sampling; random when `None`
    pub seed: Option<u64>,
    pub max_guesses: usize,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            count: 50,
            seed: None,
            max_guesses: DEFAULT_MAX_GUESSES,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: Vec<String>,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved games per guess count
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct targets from the pool
///
/// The same seed always gives the same targets.
#[must_use]
pub fn sample_targets(pool: &CandidatePool, count: usize, seed: Option<u64>) -> Vec<Word> {
    let words = pool.snapshot();
    let mut rng = seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);

    words.choose_multiple(&mut rng, count).cloned().collect()
}

/// Play one game per target and collect statistics
///
/// Averages and the distribution only count solved games.
pub fn run_benchmark(
    seed: &CandidatePool,
    solver_config: &SolverConfig,
    targets: &[Word],
    config: &BenchmarkConfig,
) -> BenchmarkResult {
    let start = Instant::now();
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut failed = Vec::new();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;

    let pb = if config.show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    for target in targets {
        let guesses = match play_game(seed, solver_config, target, config.max_guesses) {
            Some(n) => n,
            None => {
                failed.push(target.text().to_string());
                pb.inc(1);
                continue;
            }
        };

        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;

        let solved: usize = distribution.values().sum();
        pb.set_message(format!("Avg: {:.2}", total_guesses as f64 / solved as f64));
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let solved = targets.len() - failed.len();

    BenchmarkResult {
        total_words: targets.len(),
        solved,
        failed,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        duration,
        words_per_second: targets.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

/// Play a game to the end; the number of guesses if it was won
fn play_game(
    seed: &CandidatePool,
    solver_config: &SolverConfig,
    target: &Word,
    max_guesses: usize,
) -> Option<usize> {
    let mut game = Game::new(target.text(), seed.iter().map(Word::text), max_guesses).ok()?;

    while !game.is_over() {
        if let Err(e) = play_step(&mut game, solver_config) {
            warn!("Game for '{target}' stopped: {e}");
            return None;
        }
    }

    game.is_won().then(|| game.history().len())
}
