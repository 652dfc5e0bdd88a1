//! Candidate word pool
//!
//! A pool holds unique words of a single length. It iterates in lexicographic
//! order so every search over it is reproducible.

use super::{Feedback, Word};
use log::debug;
use std::collections::BTreeSet;

/// A set of equal-length words that can be narrowed by observed feedback
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePool {
    words: BTreeSet<Word>,
    word_length: Option<usize>,
}

impl CandidatePool {
    /// Build a pool whose word length is fixed by the first valid word
    ///
    /// Non-alphabetic entries and entries of any other length are dropped.
    /// Words are lower-cased, so case variants collapse into one entry.
    ///
    /// # Examples
    /// ```
    /// use wordle_variance::core::CandidatePool;
    ///
    /// let pool = CandidatePool::new(["Crane", "cr4ne", "slate", "CRANE", "cat"]);
    /// assert_eq!(pool.len(), 2);
    /// assert_eq!(pool.word_length(), Some(5));
    /// assert!(pool.contains("crane"));
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(words, None)
    }

    /// Build a pool keeping only valid words of exactly `word_length` letters
    pub fn with_word_length<I, S>(words: I, word_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(words, Some(word_length))
    }

    fn build<I, S>(words: I, mut word_length: Option<usize>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pool = BTreeSet::new();
        let mut skipped = 0usize;

        for text in words {
            let Ok(word) = Word::new(text.as_ref()) else {
                skipped += 1;
                continue;
            };

            let expected = *word_length.get_or_insert(word.len());
            if word.len() != expected {
                skipped += 1;
                continue;
            }

            pool.insert(word);
        }

        if skipped > 0 {
            debug!("Excluded {skipped} entries with invalid characters or length");
        }

        Self {
            words: pool,
            word_length,
        }
    }

    /// Remove every word `w` for which `compute(guess, w) != feedback`
    ///
    /// Requests whose feedback length does not match the guess leave the pool
    /// unchanged. A guess of another length matches no word and empties it.
    pub fn filter(&mut self, guess: &Word, feedback: &Feedback) -> &mut Self {
        if !Self::accepts(guess, feedback) {
            return self;
        }

        self.words
            .retain(|candidate| Feedback::compute(guess, candidate).as_ref() == Some(feedback));
        self
    }

    /// Non-destructive variant of [`CandidatePool::filter`]
    #[must_use]
    pub fn filtered(&self, guess: &Word, feedback: &Feedback) -> Self {
        if !Self::accepts(guess, feedback) {
            return self.clone();
        }

        Self {
            words: self
                .words
                .iter()
                .filter(|&candidate| {
                    Feedback::compute(guess, candidate).as_ref() == Some(feedback)
                })
                .cloned()
                .collect(),
            word_length: self.word_length,
        }
    }

    /// Apply a sequence of filter records in order
    pub fn replay<'h, I>(&mut self, history: I) -> &mut Self
    where
        I: IntoIterator<Item = &'h (Word, Feedback)>,
    {
        for (guess, feedback) in history {
            self.filter(guess, feedback);
        }
        self
    }

    fn accepts(guess: &Word, feedback: &Feedback) -> bool {
        if feedback.len() != guess.len() {
            debug!(
                "Ignoring filter: feedback {feedback} has {} positions but guess '{guess}' has {}",
                feedback.len(),
                guess.len()
            );
            return false;
        }
        true
    }

    /// Number of words in the pool
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the pool has no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word length fixed at construction, if any valid word was seen
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> Option<usize> {
        self.word_length
    }

    /// Membership test, case-insensitive
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.words.contains(&word))
    }

    /// Iterate words in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// Owned copy of the current members in lexicographic order
    #[must_use]
    pub fn snapshot(&self) -> Vec<Word> {
        self.words.iter().cloned().collect()
    }
}

impl<'a> IntoIterator for &'a CandidatePool {
    type Item = &'a Word;
    type IntoIter = std::collections::btree_set::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn texts(pool: &CandidatePool) -> Vec<&str> {
        pool.iter().map(Word::text).collect()
    }

    #[test]
    fn construction_dedups_and_lowercases() {
        let pool = CandidatePool::new(["slate", "SLATE", "Slate", "crane"]);
        assert_eq!(texts(&pool), ["crane", "slate"]);
    }

    #[test]
    fn construction_length_from_first_valid_word() {
        let pool = CandidatePool::new(["c4t", "", "table", "cat", "allot", "tables", "sl ate"]);
        assert_eq!(pool.word_length(), Some(5));
        assert_eq!(texts(&pool), ["allot", "table"]);
    }

    #[test]
    fn construction_with_explicit_length() {
        let pool = CandidatePool::with_word_length(["table", "cat", "dog", "b1rd"], 3);
        assert_eq!(pool.word_length(), Some(3));
        assert_eq!(texts(&pool), ["cat", "dog"]);
    }

    #[test]
    fn empty_pool_has_no_length() {
        let pool = CandidatePool::new(["123", "??"]);
        assert!(pool.is_empty());
        assert_eq!(pool.word_length(), None);
    }

    #[test]
    fn contains_is_case_insensitive() {
        let pool = CandidatePool::new(["crane"]);
        assert!(pool.contains("CRANE"));
        assert!(!pool.contains("slate"));
        assert!(!pool.contains("cr4ne"));
    }

    #[test]
    fn filter_keeps_consistent_words() {
        let mut pool = CandidatePool::new(["crane", "slate", "irate", "crate", "grate"]);
        let guess = word("crane");
        let feedback = Feedback::compute(&guess, &word("grate")).unwrap();

        pool.filter(&guess, &feedback);

        assert!(pool.contains("grate"));
        assert!(!pool.contains("crane"));
        for candidate in &pool {
            assert_eq!(Feedback::compute(&guess, candidate).unwrap(), feedback);
        }
    }

    #[test]
    fn filter_keeps_target_for_every_guess() {
        let words = ["speed", "erase", "eerie", "there", "robot", "floor", "allee", "eagle"];
        let pool = CandidatePool::new(words);

        for target in &pool {
            for guess in &pool {
                let feedback = Feedback::compute(guess, target).unwrap();
                let filtered = pool.filtered(guess, &feedback);
                assert!(
                    filtered.contains(target.text()),
                    "{target} lost after guessing {guess}"
                );
            }
        }
    }

    #[test]
    fn filter_wrong_length_feedback_is_noop() {
        let mut pool = CandidatePool::new(["crane", "slate"]);
        let before = pool.clone();

        pool.filter(&word("crane"), &"GGG".parse().unwrap());
        assert_eq!(pool, before);

        pool.filter(&word("cat"), &"GGGGG".parse().unwrap());
        assert_eq!(pool, before);
    }

    #[test]
    fn filter_other_length_guess_empties_pool() {
        let mut pool = CandidatePool::new(["crane", "slate"]);
        pool.filter(&word("cat"), &"---".parse().unwrap());
        assert!(pool.is_empty());

        let pool = CandidatePool::new(["crane", "slate"]);
        assert!(pool.filtered(&word("cat"), &"---".parse().unwrap()).is_empty());
    }

    #[test]
    fn filtered_leaves_original_untouched() {
        let pool = CandidatePool::new(["crane", "slate"]);
        let narrowed = pool.filtered(&word("crane"), &Feedback::solved(5).unwrap());

        assert_eq!(texts(&narrowed), ["crane"]);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn replay_applies_history_in_order() {
        let mut pool = CandidatePool::new(["crane", "slate", "irate", "crate", "grate"]);
        let target = word("grate");
        let history: Vec<(Word, Feedback)> = ["crane", "irate"]
            .iter()
            .map(|g| {
                let guess = word(g);
                let feedback = Feedback::compute(&guess, &target).unwrap();
                (guess, feedback)
            })
            .collect();

        pool.replay(&history);

        assert!(pool.contains("grate"));
        assert!(pool.len() <= 2);
    }

    #[test]
    fn snapshot_is_sorted_copy() {
        let pool = CandidatePool::new(["table", "allot", "slate"]);
        let snapshot = pool.snapshot();
        let texts: Vec<&str> = snapshot.iter().map(Word::text).collect();
        assert_eq!(texts, ["allot", "slate", "table"]);
    }
}
