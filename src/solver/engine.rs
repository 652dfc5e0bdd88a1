//! Main solver interface

use super::selector::select_best_guess;
use super::variance::MAX_SEARCH_WORD_LENGTH;
use crate::core::{CandidatePool, Feedback, Word};
use crate::game::{Game, GameView, GuessError, Turn};
use log::{debug, info};
use std::fmt;

/// Opening guess for a fresh standard-length puzzle
///
/// Played without search when history is empty, the word length is
/// [`STANDARD_WORD_LENGTH`] and the word is in the allowed pool.
pub const OPENING_WORD: &str = "crane";

/// Word length of the standard puzzle
pub const STANDARD_WORD_LENGTH: usize = 5;

/// Solver settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Fixed first guess; `None` always searches
    pub opening_word: Option<String>,
    /// Examine at most this many candidates as guesses (in lexicographic
    /// order). Bounds latency at the cost of possibly missing the best guess.
    pub max_candidates: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            opening_word: Some(OPENING_WORD.to_string()),
            max_candidates: None,
        }
    }
}

/// Error type for a turn with no guess to offer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// No allowed word is consistent with the history
    NoCandidates,
    /// The feedback space 3^L is too large to enumerate
    SearchSpaceTooLarge { word_length: usize },
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidates => write!(f, "No candidates remain; the feedback may be wrong"),
            Self::SearchSpaceTooLarge { word_length } => write!(
                f,
                "Cannot search {word_length}-letter words (limit is {MAX_SEARCH_WORD_LENGTH})"
            ),
        }
    }
}

impl std::error::Error for SelectError {}

/// Error type for [`play_step`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    Select(SelectError),
    Guess(GuessError),
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(e) => write!(f, "{e}"),
            Self::Guess(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for StepError {}

impl From<SelectError> for StepError {
    fn from(e: SelectError) -> Self {
        Self::Select(e)
    }
}

impl From<GuessError> for StepError {
    fn from(e: GuessError) -> Self {
        Self::Guess(e)
    }
}

/// Variance-minimizing solver
///
/// Holds the seed pool (the allowed-guess list) and derives the candidate set
/// from scratch on every call by replaying the history against it.
pub struct Solver<'a> {
    seed: &'a CandidatePool,
    word_length: usize,
    config: SolverConfig,
}

impl<'a> Solver<'a> {
    /// Create a solver over a seed pool
    ///
    /// The word length is taken from the pool.
    #[must_use]
    pub fn new(seed: &'a CandidatePool, config: SolverConfig) -> Self {
        Self {
            seed,
            word_length: seed.word_length().unwrap_or(0),
            config,
        }
    }

    /// Create a solver over a game's allowed pool and word length
    #[must_use]
    pub fn for_game<G: GameView>(game: &'a G, config: SolverConfig) -> Self {
        Self {
            seed: game.possible_words(),
            word_length: game.word_length(),
            config,
        }
    }

    /// The words consistent with every turn of `history`
    #[must_use]
    pub fn candidates(&self, history: &[Turn]) -> CandidatePool {
        let mut pool = self.seed.clone();
        pool.replay(history);
        pool
    }

    /// Choose the next guess for a game
    ///
    /// # Errors
    /// See [`Solver::next_guess`].
    pub fn choose_word<G: GameView>(&self, game: &G) -> Result<Word, SelectError> {
        self.next_guess(game.history())
    }

    /// Choose the next guess given previous guesses and their feedback
    ///
    /// # Errors
    /// Returns `SelectError::NoCandidates` if no word in the seed pool is
    /// consistent with the history, and `SelectError::SearchSpaceTooLarge` if
    /// the word length is beyond [`MAX_SEARCH_WORD_LENGTH`].
    pub fn next_guess(&self, history: &[Turn]) -> Result<Word, SelectError> {
        let candidates = self.candidates(history);
        debug!(
            "Turn {}: {} candidates remain",
            history.len() + 1,
            candidates.len()
        );

        if history.is_empty()
            && let Some(opening) = self.opening_guess()
        {
            info!("Opening with '{opening}'");
            return Ok(opening);
        }

        if candidates.is_empty() {
            return Err(SelectError::NoCandidates);
        }

        if self.word_length > MAX_SEARCH_WORD_LENGTH {
            return Err(SelectError::SearchSpaceTooLarge {
                word_length: self.word_length,
            });
        }

        let snapshot = candidates.snapshot();

        // A single candidate scores trivially
        if let [only] = snapshot.as_slice() {
            info!("Only '{only}' remains");
            return Ok(only.clone());
        }

        let limit = self
            .config
            .max_candidates
            .map_or(snapshot.len(), |n| n.clamp(1, snapshot.len()));

        let (best, score) = select_best_guess(&snapshot[..limit], &snapshot)
            .ok_or(SelectError::NoCandidates)?;

        info!(
            "Chose '{best}' (variance {:.6}, {} buckets, largest {}) from {} candidates",
            score.variance,
            score.buckets_used,
            score.largest,
            snapshot.len()
        );
        Ok(best.clone())
    }

    /// The configured opening word, if it applies to this puzzle
    fn opening_guess(&self) -> Option<Word> {
        if self.word_length != STANDARD_WORD_LENGTH {
            return None;
        }
        let opening = Word::new(self.config.opening_word.as_deref()?).ok()?;
        if !self.seed.contains(opening.text()) {
            debug!("Opening word '{opening}' is not allowed; searching instead");
            return None;
        }
        Some(opening)
    }

    /// The allowed-guess pool every turn starts from
    #[must_use]
    pub const fn seed(&self) -> &'a CandidatePool {
        self.seed
    }

    /// Solver settings
    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }
}

/// Choose a guess for `game` and submit it
///
/// # Errors
/// Returns `StepError::Select` if there is no guess to offer and
/// `StepError::Guess` if the game rejects it (for example because it is over).
pub fn play_step(game: &mut Game, config: &SolverConfig) -> Result<(Word, Feedback), StepError> {
    let view: &Game = game;
    let guess = Solver::for_game(view, config.clone()).choose_word(view)?;
    let feedback = game.submit_guess(guess.text())?;
    Ok((guess, feedback))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::DEFAULT_MAX_GUESSES;

    const WORDS: [&str; 6] = ["crane", "slate", "irate", "crate", "grate", "trace"];

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn turn(guess: &str, target: &str) -> Turn {
        let guess = word(guess);
        let feedback = Feedback::compute(&guess, &word(target)).unwrap();
        (guess, feedback)
    }

    fn no_opening() -> SolverConfig {
        SolverConfig {
            opening_word: None,
            ..SolverConfig::default()
        }
    }

    #[test]
    fn opening_word_used_for_fresh_standard_game() {
        let seed = CandidatePool::new(WORDS);
        let solver = Solver::new(&seed, SolverConfig::default());

        for _ in 0..3 {
            assert_eq!(solver.next_guess(&[]).unwrap().text(), OPENING_WORD);
        }
    }

    #[test]
    fn opening_word_skipped_when_not_allowed() {
        let seed = CandidatePool::new(["allot", "slate", "table"]);
        let solver = Solver::new(&seed, SolverConfig::default());

        // full search: all three tie, smallest word wins
        assert_eq!(solver.next_guess(&[]).unwrap().text(), "allot");
    }

    #[test]
    fn opening_word_skipped_for_other_lengths() {
        let seed = CandidatePool::new(["bat", "cab", "cat", "hat"]);
        let config = SolverConfig {
            opening_word: Some("bat".to_string()),
            ..SolverConfig::default()
        };
        let solver = Solver::new(&seed, config);

        assert_eq!(solver.next_guess(&[]).unwrap().text(), "cab");
    }

    #[test]
    fn opening_word_skipped_after_first_turn() {
        let seed = CandidatePool::new(WORDS);
        let solver = Solver::new(&seed, SolverConfig::default());
        let history = vec![turn("slate", "grate")];

        let guess = solver.next_guess(&history).unwrap();
        assert_ne!(guess.text(), OPENING_WORD);
        assert!(solver.candidates(&history).contains(guess.text()));
    }

    #[test]
    fn candidates_keep_the_target() {
        let seed = CandidatePool::new(WORDS);
        let solver = Solver::new(&seed, no_opening());

        let history = vec![turn("crane", "grate"), turn("irate", "grate")];
        let candidates = solver.candidates(&history);

        assert!(candidates.contains("grate"));
        assert_eq!(candidates.len(), 1);
        assert_eq!(solver.next_guess(&history).unwrap().text(), "grate");
    }

    #[test]
    fn candidates_rebuilt_from_seed_each_call() {
        let seed = CandidatePool::new(WORDS);
        let solver = Solver::new(&seed, no_opening());

        let narrowed = solver.candidates(&[turn("crane", "grate")]);
        assert!(narrowed.len() < seed.len());
        assert_eq!(solver.candidates(&[]).len(), seed.len());
    }

    #[test]
    fn no_candidates_is_an_error() {
        let seed = CandidatePool::new(WORDS);
        let solver = Solver::new(&seed, no_opening());

        let history = vec![(word("zzzzz"), Feedback::solved(5).unwrap())];
        assert_eq!(solver.next_guess(&history), Err(SelectError::NoCandidates));
    }

    #[test]
    fn other_length_turn_leaves_no_candidates() {
        let seed = CandidatePool::new(["crane", "slate"]);
        let solver = Solver::new(&seed, SolverConfig::default());

        let history = vec![(word("cat"), "---".parse::<Feedback>().unwrap())];
        assert!(solver.candidates(&history).is_empty());
        assert_eq!(solver.next_guess(&history), Err(SelectError::NoCandidates));
    }

    #[test]
    fn empty_seed_is_an_error() {
        let seed = CandidatePool::new(Vec::<String>::new());
        let solver = Solver::new(&seed, no_opening());
        assert_eq!(solver.next_guess(&[]), Err(SelectError::NoCandidates));
    }

    #[test]
    fn long_words_are_rejected() {
        let seed = CandidatePool::new(["abcdefghijklm", "nopqrstuvwxyz"]);
        let solver = Solver::new(&seed, no_opening());
        assert_eq!(
            solver.next_guess(&[]),
            Err(SelectError::SearchSpaceTooLarge { word_length: 13 })
        );
    }

    #[test]
    fn max_candidates_limits_guesses_examined() {
        let seed = CandidatePool::new(["bat", "cab", "cat", "hat"]);
        let config = SolverConfig {
            opening_word: None,
            max_candidates: Some(1),
        };
        let solver = Solver::new(&seed, config);

        // only "bat" is examined, even though "cab" scores better
        assert_eq!(solver.next_guess(&[]).unwrap().text(), "bat");
    }

    #[test]
    fn play_step_submits_to_game() {
        let mut game = Game::new("grate", WORDS, DEFAULT_MAX_GUESSES).unwrap();

        let (guess, feedback) = play_step(&mut game, &SolverConfig::default()).unwrap();

        assert_eq!(guess.text(), OPENING_WORD);
        assert_eq!(feedback.to_letters(), "-GG-G");
        assert_eq!(game.guesses_made(), 1);
    }

    #[test]
    fn play_step_fails_once_game_is_won() {
        let mut game = Game::new("grate", WORDS, DEFAULT_MAX_GUESSES).unwrap();
        game.submit_guess("grate").unwrap();

        // the only candidate is "grate", which the finished game refuses
        assert_eq!(
            play_step(&mut game, &SolverConfig::default()),
            Err(StepError::Guess(GuessError::GameOver))
        );
    }
}
