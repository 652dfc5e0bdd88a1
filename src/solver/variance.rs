//! Partition-size variance for a candidate guess
//!
//! A guess splits the candidate set into one bucket per feedback pattern.
//! The score of a guess is the population variance of the bucket sizes across
//! all 3^L patterns, empty ones included. Lower variance means a more even split.

use crate::core::{Feedback, Word};
use rustc_hash::FxHashMap;

/// Longest word the search will enumerate the feedback space for (3^12 patterns)
pub const MAX_SEARCH_WORD_LENGTH: usize = 12;

/// Partition statistics for one guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartitionScore {
    /// Population variance of the bucket sizes
    pub variance: f64,
    /// Exact comparison key: `N * Σsize² - (Σsize)²` for `N` buckets,
    /// which equals `N² × variance`
    pub spread: u128,
    /// Sum of all bucket sizes (always the candidate count)
    pub total: usize,
    /// Number of non-empty buckets
    pub buckets_used: usize,
    /// Largest bucket (worst-case remaining candidates)
    pub largest: usize,
}

/// Count candidates per feedback code for `guess`
///
/// Candidates whose length differs from the guess are not counted.
#[must_use]
pub fn group_by_feedback(guess: &Word, candidates: &[Word]) -> FxHashMap<u64, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        if let Some(code) = Feedback::compute(guess, candidate).and_then(|f| f.code()) {
            *counts.entry(code).or_insert(0) += 1;
        }
    }

    counts
}

/// Size of every feedback bucket for `guess`, indexed by feedback code
///
/// The result has exactly 3^L entries, one per pattern in code order.
/// Returns `None` if the guess is longer than [`MAX_SEARCH_WORD_LENGTH`].
///
/// # Examples
/// ```
/// use wordle_variance::core::Word;
/// use wordle_variance::solver::variance::partition_sizes;
///
/// let guess = Word::new("cat").unwrap();
/// let candidates = vec![Word::new("cat").unwrap(), Word::new("bat").unwrap()];
///
/// let sizes = partition_sizes(&guess, &candidates).unwrap();
/// assert_eq!(sizes.len(), 27);
/// assert_eq!(sizes.iter().sum::<usize>(), 2);
/// ```
#[must_use]
pub fn partition_sizes(guess: &Word, candidates: &[Word]) -> Option<Vec<usize>> {
    if guess.len() > MAX_SEARCH_WORD_LENGTH {
        return None;
    }
    let counts = group_by_feedback(guess, candidates);

    Some(
        Feedback::all(guess.len())
            .ok()?
            .map(|feedback| {
                feedback
                    .code()
                    .and_then(|code| counts.get(&code).copied())
                    .unwrap_or(0)
            })
            .collect(),
    )
}

/// Population variance of a list of counts
///
/// Returns 0.0 for an empty list.
#[must_use]
pub fn population_variance(values: &[usize]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<usize>() as f64 / n;

    values
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n
}

/// Score `guess` against the candidate set
///
/// Returns `None` if the guess is longer than [`MAX_SEARCH_WORD_LENGTH`].
#[must_use]
pub fn score_guess(guess: &Word, candidates: &[Word]) -> Option<PartitionScore> {
    let sizes = partition_sizes(guess, candidates)?;

    let total: usize = sizes.iter().sum();
    let sum_squares: u128 = sizes.iter().map(|&s| (s as u128) * (s as u128)).sum();
    let spread = sizes.len() as u128 * sum_squares - (total as u128) * (total as u128);

    Some(PartitionScore {
        variance: population_variance(&sizes),
        spread,
        total,
        buckets_used: sizes.iter().filter(|&&s| s > 0).count(),
        largest: sizes.iter().copied().max().unwrap_or(0),
    })
}
