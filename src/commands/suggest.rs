//! One-shot suggestion command
//!
//! Takes a history written as `guess=feedback` pairs and reports the next guess.

use crate::core::{Feedback, Word};
use crate::game::Turn;
use crate::solver::variance::score_guess;
use crate::solver::{PartitionScore, Solver};

/// Result of a suggestion
pub struct Suggestion {
    pub guess: String,
    pub candidates_remaining: usize,
    pub score: Option<PartitionScore>,
    /// Remaining candidates, only filled when there are few of them
    pub candidates: Vec<String>,
}

/// Most candidates listed in a suggestion
pub const LISTED_CANDIDATES: usize = 10;

/// Parse a turn written as `crane=GY--G` (or `crane:GY--G`)
///
/// # Errors
///
/// Returns an error if the word or feedback is malformed or their lengths differ.
///
/// # Examples
/// ```
/// use wordle_variance::commands::parse_turn;
///
/// let (word, feedback) = parse_turn("crane=--G-G").unwrap();
/// assert_eq!(word.text(), "crane");
/// assert_eq!(feedback.to_letters(), "--G-G");
/// ```
pub fn parse_turn(text: &str) -> Result<Turn, String> {
    let (word, feedback) = text
        .split_once(['=', ':'])
        .ok_or_else(|| format!("Expected GUESS=FEEDBACK, got '{text}'"))?;

    let word = Word::new(word.trim()).map_err(|e| format!("Invalid guess '{word}': {e}"))?;
    let feedback: Feedback = feedback
        .parse()
        .map_err(|e| format!("Invalid feedback '{feedback}': {e}"))?;

    if word.len() != feedback.len() {
        return Err(format!(
            "'{word}' has {} letters but feedback has {} positions",
            word.len(),
            feedback.len()
        ));
    }

    Ok((word, feedback))
}

/// Suggest the next guess for a history of turns
///
/// # Errors
///
/// Returns an error if no candidates remain.
pub fn suggest(solver: &Solver, history: &[Turn]) -> Result<Suggestion, String> {
    let guess = solver.next_guess(history).map_err(|e| e.to_string())?;
    let candidates = solver.candidates(history).snapshot();

    let score = if candidates.len() > 1 {
        score_guess(&guess, &candidates)
    } else {
        None
    };

    let listed = if candidates.len() <= LISTED_CANDIDATES {
        candidates.iter().map(|w| w.text().to_string()).collect()
    } else {
        Vec::new()
    };

    Ok(Suggestion {
        guess: guess.text().to_string(),
        candidates_remaining: candidates.len(),
        score,
        candidates: listed,
    })
}
