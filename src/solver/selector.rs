//! Minimum-variance guess selection
//!
//! Every guess is scored independently against the same read-only candidate
//! set, so guesses are evaluated in parallel.

use super::variance::{PartitionScore, score_guess};
use crate::core::Word;
use log::trace;
use rayon::prelude::*;

/// Select the guess whose feedback buckets have the lowest size variance
///
/// Exact ties go to the lexicographically smallest guess, so the result does
/// not depend on evaluation order. Guesses too long to search are skipped.
/// Returns `None` if no guess can be scored.
///
/// # Examples
/// ```
/// use wordle_variance::core::Word;
/// use wordle_variance::solver::select_best_guess;
///
/// let candidates: Vec<Word> = ["bat", "cab", "cat", "hat"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let (best, score) = select_best_guess(&candidates, &candidates).unwrap();
/// assert_eq!(best.text(), "cab"); // the only guess that separates every word
/// assert_eq!(score.total, 4);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    guesses: &'a [Word],
    candidates: &[Word],
) -> Option<(&'a Word, PartitionScore)> {
    guesses
        .par_iter()
        .filter_map(|guess| {
            let score = score_guess(guess, candidates)?;
            trace!(
                "{guess}: variance {:.6}, {} buckets, largest {}",
                score.variance, score.buckets_used, score.largest
            );
            Some((guess, score))
        })
        .min_by(|(w1, s1), (w2, s2)| s1.spread.cmp(&s2.spread).then_with(|| w1.cmp(w2)))
}
