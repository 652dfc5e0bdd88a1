//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;
pub mod suggest;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark, sample_targets};
pub use simple::{run_simple, run_simple_with};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
pub use suggest::{Suggestion, parse_turn, suggest};
