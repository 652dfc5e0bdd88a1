//! Word analysis command
//!
//! Shows how a guess would partition the current candidates.

use crate::core::{Feedback, Word};
use crate::game::Turn;
use crate::solver::Solver;
use crate::solver::variance::{group_by_feedback, score_guess};

/// Most buckets listed in an analysis
pub const LISTED_BUCKETS: usize = 8;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub variance: f64,
    pub total_candidates: usize,
    pub buckets_used: usize,
    pub feedback_space: u64,
    pub largest: usize,
    /// Largest buckets, biggest first
    pub top_buckets: Vec<(Feedback, usize)>,
}

/// Analyze how `word` splits the candidates left after `history`
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid or not in the word list
/// - The word length cannot be searched
pub fn analyze_word(
    word: &str,
    solver: &Solver,
    history: &[Turn],
) -> Result<AnalysisResult, String> {
    let word_obj = Word::new(word).map_err(|e| format!("Invalid word: {e}"))?;

    if !solver.seed().contains(word_obj.text()) {
        return Err(format!("Word '{word}' not in word list"));
    }

    let candidates = solver.candidates(history).snapshot();
    let score = score_guess(&word_obj, &candidates)
        .ok_or_else(|| format!("Cannot analyze {}-letter words", word_obj.len()))?;
    let feedback_space = Feedback::space_size(word_obj.len()).unwrap_or(u64::MAX);

    let mut buckets: Vec<(u64, usize)> = group_by_feedback(&word_obj, &candidates)
        .into_iter()
        .collect();
    buckets.sort_by(|(c1, n1), (c2, n2)| n2.cmp(n1).then(c1.cmp(c2)));

    let top_buckets = buckets
        .into_iter()
        .take(LISTED_BUCKETS)
        .filter_map(|(code, count)| {
            Feedback::decode(code, word_obj.len())
                .ok()
                .map(|feedback| (feedback, count))
        })
        .collect();

    Ok(AnalysisResult {
        word: word_obj.text().to_string(),
        variance: score.variance,
        total_candidates: score.total,
        buckets_used: score.buckets_used,
        feedback_space,
        largest: score.largest,
        top_buckets,
    })
}
