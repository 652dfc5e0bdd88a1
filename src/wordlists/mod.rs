//! Word lists
//!
//! Provides the embedded default list and file loading.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
