//! Core domain types for word-guessing puzzles
//!
//! Words, feedback and candidate pools. Everything here is pure and
//! deterministic; pools iterate in lexicographic order.

mod feedback;
mod pool;
mod word;

pub use feedback::{Feedback, FeedbackError, MAX_ENCODED_LENGTH, Mark};
pub use pool::CandidatePool;
pub use word::{Word, WordError};
