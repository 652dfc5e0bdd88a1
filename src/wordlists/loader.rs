//! Word list loading utilities
//!
//! Lists are returned as raw entries; [`CandidatePool`] decides which are
//! valid words.

use crate::core::CandidatePool;
use log::info;
use std::fs;
use std::io;
use std::path::Path;

/// Read one entry per line from a file, skipping blank lines
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_variance::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} entries", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = entries_from_str(&content);
    info!("Read {} entries from {}", words.len(), path.display());
    Ok(words)
}

/// Split text into trimmed, non-empty lines
#[must_use]
pub fn entries_from_str(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build the seed pool from the embedded list or a file
///
/// # Errors
///
/// Returns an I/O error if `path` is given and cannot be read.
pub fn load_pool(path: Option<&Path>) -> io::Result<CandidatePool> {
    let pool = match path {
        Some(path) => CandidatePool::new(load_from_file(path)?),
        None => CandidatePool::new(super::WORDS),
    };
    Ok(pool)
}
