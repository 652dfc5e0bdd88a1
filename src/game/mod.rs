//! Puzzle game harness
//!
//! Tracks the hidden solution, the allowed-guess pool, the guess limit and the
//! history of scored guesses. Solvers read a game through [`GameView`].

use crate::core::{CandidatePool, Feedback, Word, WordError};
use log::{debug, warn};
use std::fmt;

/// Guess limit used by the standard puzzle
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// A scored guess: the word played and the feedback it received
pub type Turn = (Word, Feedback);

/// Read-only view of a game, as seen by a solver
pub trait GameView {
    /// Length of every word in this game
    fn word_length(&self) -> usize;

    /// Number of accepted guesses so far
    fn guesses_made(&self) -> usize;

    /// Accepted guesses with their feedback, oldest first
    fn history(&self) -> &[Turn];

    /// The allowed-guess pool, fixed for the game's lifetime
    fn possible_words(&self) -> &CandidatePool;
}

/// Error type for games that cannot be set up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidSolution(WordError),
    LengthMismatch { expected: usize, got: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSolution(e) => write!(f, "Invalid solution: {e}"),
            Self::LengthMismatch { expected, got } => {
                write!(f, "Solution must have {expected} letters, got {got}")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Error type for rejected guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    GameOver,
    InvalidWord(WordError),
    WrongLength { expected: usize, got: usize },
    NotAllowed(String),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "The game is already finished"),
            Self::InvalidWord(e) => write!(f, "Invalid guess: {e}"),
            Self::WrongLength { expected, got } => {
                write!(f, "Guess must have {expected} letters, got {got}")
            }
            Self::NotAllowed(word) => write!(f, "'{word}' is not in the allowed word list"),
        }
    }
}

impl std::error::Error for GuessError {}

/// A single puzzle instance
#[derive(Debug, Clone)]
pub struct Game {
    solution: Word,
    allowed: CandidatePool,
    max_guesses: usize,
    history: Vec<Turn>,
    won: bool,
}

impl Game {
    /// Start a game for `solution`, allowing guesses from `allowed`
    ///
    /// Allowed words of a different length than the solution are dropped.
    ///
    /// # Errors
    /// Returns `GameError::InvalidSolution` if the solution is not a word.
    ///
    /// # Examples
    /// ```
    /// use wordle_variance::game::{Game, DEFAULT_MAX_GUESSES};
    ///
    /// let mut game = Game::new("slate", ["crane", "slate", "trace"], DEFAULT_MAX_GUESSES).unwrap();
    /// let feedback = game.submit_guess("crane").unwrap();
    /// assert_eq!(feedback.to_letters(), "--G-G");
    /// assert!(!game.is_won());
    /// ```
    pub fn new<I, S>(solution: &str, allowed: I, max_guesses: usize) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let solution = Word::new(solution).map_err(GameError::InvalidSolution)?;
        let allowed = CandidatePool::with_word_length(allowed, solution.len());

        if !allowed.contains(solution.text()) {
            warn!("Solution '{solution}' is not in the allowed word list");
        }

        Ok(Self {
            solution,
            allowed,
            max_guesses,
            history: Vec::new(),
            won: false,
        })
    }

    /// Reset the game, optionally with a new solution of the same length
    ///
    /// # Errors
    /// Returns `GameError` if the new solution is not a word or has a
    /// different length.
    pub fn restart(&mut self, solution: Option<&str>) -> Result<(), GameError> {
        if let Some(text) = solution {
            let word = Word::new(text).map_err(GameError::InvalidSolution)?;
            if word.len() != self.solution.len() {
                return Err(GameError::LengthMismatch {
                    expected: self.solution.len(),
                    got: word.len(),
                });
            }
            self.solution = word;
        }
        self.history.clear();
        self.won = false;
        Ok(())
    }

    /// Score a guess and record it
    ///
    /// # Errors
    /// Returns `GuessError` if the game is over or the guess is not an allowed
    /// word of the right length. Rejected guesses do not use up a turn.
    pub fn submit_guess(&mut self, text: &str) -> Result<Feedback, GuessError> {
        if self.is_over() {
            return Err(GuessError::GameOver);
        }

        let guess = Word::new(text).map_err(GuessError::InvalidWord)?;
        let expected = self.word_length();
        if guess.len() != expected {
            return Err(GuessError::WrongLength {
                expected,
                got: guess.len(),
            });
        }
        if !self.allowed.contains(guess.text()) {
            return Err(GuessError::NotAllowed(guess.text().to_string()));
        }

        let Some(feedback) = Feedback::compute(&guess, &self.solution) else {
            return Err(GuessError::WrongLength {
                expected,
                got: guess.len(),
            });
        };

        debug!("Guess {} '{guess}' scored {feedback}", self.history.len() + 1);
        self.won = feedback.is_solved();
        self.history.push((guess, feedback.clone()));
        Ok(feedback)
    }

    /// Check if the solution has been guessed
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    /// Check if the guess limit is used up without a win
    #[must_use]
    pub fn is_lost(&self) -> bool {
        !self.won && self.history.len() >= self.max_guesses
    }

    /// Check if no further guesses are accepted
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.won || self.is_lost()
    }

    /// Guess limit for this game
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// The hidden solution
    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }
}

impl GameView for Game {
    fn word_length(&self) -> usize {
        self.solution.len()
    }

    fn guesses_made(&self) -> usize {
        self.history.len()
    }

    fn history(&self) -> &[Turn] {
        &self.history
    }

    fn possible_words(&self) -> &CandidatePool {
        &self.allowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALLOWED: [&str; 5] = ["crane", "slate", "irate", "crate", "grate"];

    fn game(solution: &str) -> Game {
        Game::new(solution, ALLOWED, DEFAULT_MAX_GUESSES).unwrap()
    }

    #[test]
    fn new_game_starts_empty() {
        let game = game("grate");
        assert_eq!(game.word_length(), 5);
        assert_eq!(game.guesses_made(), 0);
        assert!(game.history().is_empty());
        assert_eq!(game.possible_words().len(), 5);
        assert!(!game.is_over());
    }

    #[test]
    fn new_game_rejects_invalid_solution() {
        assert!(matches!(
            Game::new("gr8te", ALLOWED, 6),
            Err(GameError::InvalidSolution(_))
        ));
    }

    #[test]
    fn allowed_pool_uses_solution_length() {
        let game = Game::new("cat", ["crane", "cat", "dog"], 6).unwrap();
        assert_eq!(game.possible_words().len(), 2);
        assert_eq!(game.possible_words().word_length(), Some(3));
    }

    #[test]
    fn submit_records_history() {
        let mut game = game("grate");
        let feedback = game.submit_guess("CRANE").unwrap();

        assert_eq!(feedback.to_letters(), "-GG-G");
        assert_eq!(game.guesses_made(), 1);
        assert_eq!(game.history()[0].0.text(), "crane");
        assert_eq!(game.history()[0].1, feedback);
    }

    #[test]
    fn submit_rejects_invalid_guesses_without_using_a_turn() {
        let mut game = game("grate");

        assert!(matches!(
            game.submit_guess("cr4ne"),
            Err(GuessError::InvalidWord(_))
        ));
        assert_eq!(
            game.submit_guess("cranes"),
            Err(GuessError::WrongLength {
                expected: 5,
                got: 6
            })
        );
        assert_eq!(
            game.submit_guess("audio"),
            Err(GuessError::NotAllowed("audio".to_string()))
        );
        assert_eq!(game.guesses_made(), 0);
    }

    #[test]
    fn winning_ends_the_game() {
        let mut game = game("grate");
        let feedback = game.submit_guess("grate").unwrap();

        assert!(feedback.is_solved());
        assert!(game.is_won());
        assert!(game.is_over());
        assert!(!game.is_lost());
        assert_eq!(game.submit_guess("crane"), Err(GuessError::GameOver));
    }

    #[test]
    fn running_out_of_guesses_loses() {
        let mut game = Game::new("grate", ALLOWED, 2).unwrap();
        game.submit_guess("crane").unwrap();
        assert!(!game.is_lost());
        game.submit_guess("slate").unwrap();

        assert!(game.is_lost());
        assert!(game.is_over());
        assert_eq!(game.submit_guess("grate"), Err(GuessError::GameOver));
    }

    #[test]
    fn restart_clears_state() {
        let mut game = game("grate");
        game.submit_guess("grate").unwrap();

        game.restart(Some("crate")).unwrap();
        assert_eq!(game.guesses_made(), 0);
        assert!(!game.is_won());
        assert_eq!(game.solution().text(), "crate");

        assert_eq!(
            game.restart(Some("cat")),
            Err(GameError::LengthMismatch {
                expected: 5,
                got: 3
            })
        );
        game.restart(None).unwrap();
        assert_eq!(game.solution().text(), "crate");
    }
}
