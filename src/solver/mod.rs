//! Guess selection
//!
//! The solver derives the candidate set from the history, then scores every
//! candidate as a hypothetical guess by the variance of its feedback
//! partition sizes and plays the lowest.

mod engine;
mod selector;
pub mod variance;

pub use engine::{
    OPENING_WORD, STANDARD_WORD_LENGTH, SelectError, Solver, SolverConfig, StepError, play_step,
};
pub use selector::select_best_guess;
pub use variance::{MAX_SEARCH_WORD_LENGTH, PartitionScore};
