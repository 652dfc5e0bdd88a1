//! Build script to embed the default word list
//!
//! Reads `data/words.txt` and generates a const array of its entries.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const WORD_LIST: &str = "data/words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        WORD_LIST,
        &Path::new(&out_dir).join("words.rs"),
        "WORDS",
        "Default allowed-guess list",
    );

    println!("cargo:rerun-if-changed={WORD_LIST}");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    // Validation is the pool's job; only blank lines are dropped here
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "/// {doc_comment} ({} entries)", words.len()).unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();
    for word in &words {
        writeln!(output, "    {word:?},").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {};", words.len()).unwrap();
}
