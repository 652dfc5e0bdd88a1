//! Wordle Variance Solver
//!
//! A word-guessing puzzle solver that picks the guess whose feedback
//! partitions the remaining candidates most evenly, measured by the
//! population variance of the partition sizes.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_variance::core::{CandidatePool, Feedback, Word};
//! use wordle_variance::solver::{Solver, SolverConfig};
//!
//! let seed = CandidatePool::new(["allot", "slate", "table"]);
//! let solver = Solver::new(&seed, SolverConfig::default());
//!
//! let guess = solver.next_guess(&[]).unwrap();
//! assert_eq!(guess.text(), "allot");
//!
//! let target = Word::new("table").unwrap();
//! let feedback = Feedback::compute(&guess, &target).unwrap();
//! assert_eq!(feedback.to_letters(), "YY--Y");
//! ```

// Core domain types
pub mod core;

// Game harness the solver plays against
pub mod game;

// Guess selection
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Log setup for the binary
pub mod logging;
