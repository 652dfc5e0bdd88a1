//! Word solving command
//!
//! Plays a game against a known target and records every turn.

use crate::core::{CandidatePool, Feedback, Word};
use crate::game::{DEFAULT_MAX_GUESSES, Game, GameView};
use crate::solver::variance::score_guess;
use crate::solver::{Solver, SolverConfig};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub variance: Option<f64>,
}

/// Solve a specific word with the solver over `seed`
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid or not in the word list
/// - The solver runs out of candidates
pub fn solve_word(
    config: SolveConfig,
    seed: &CandidatePool,
    solver_config: &SolverConfig,
) -> Result<SolveResult, String> {
    let mut game = Game::new(&config.target, seed.iter().map(Word::text), config.max_guesses)
        .map_err(|e| e.to_string())?;

    if !game.possible_words().contains(&config.target) {
        return Err(format!("Target '{}' not in word list", config.target));
    }

    let mut guesses: Vec<GuessStep> = Vec::new();

    while !game.is_over() {
        let (guess, candidates) = {
            let solver = Solver::for_game(&game, solver_config.clone());
            let guess = solver.choose_word(&game).map_err(|e| e.to_string())?;
            (guess, solver.candidates(game.history()))
        };

        let variance = (candidates.len() > 1)
            .then(|| score_guess(&guess, &candidates.snapshot()))
            .flatten()
            .map(|score| score.variance);

        let feedback = game.submit_guess(guess.text()).map_err(|e| e.to_string())?;
        let candidates_after = candidates.filtered(&guess, &feedback).len();

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            feedback,
            candidates_before: candidates.len(),
            candidates_after,
            variance,
        });
    }

    Ok(SolveResult {
        success: game.is_won(),
        guesses,
        target: game.solution().text().to_string(),
    })
}
