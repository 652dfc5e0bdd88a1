//! Simple interactive CLI mode
//!
//! Suggests a guess, reads the feedback the real puzzle gave, and repeats.

use super::suggest::{parse_turn, suggest};
use crate::core::{Feedback, Word};
use crate::game::Turn;
use crate::solver::Solver;
use std::io::{self, BufRead, Write};

/// Run the interactive mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(solver: &Solver) -> Result<(), String> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_simple_with(solver, stdin.lock(), &mut stdout).map_err(|e| e.to_string())
}

/// Run the interactive mode over any input and output
///
/// Each line is one of:
/// - feedback for the suggested guess (`GY--G`, `🟩🟨⬜⬜🟩`)
/// - `word=feedback` when a different word was played
/// - `win`, `undo`, `new` or `quit`
///
/// The session ends on `quit` or end of input.
///
/// # Errors
///
/// Returns an I/O error if writing output or reading input fails.
#[allow(clippy::too_many_lines)] // Interactive loop handles every command inline
pub fn run_simple_with<R: BufRead, W: Write>(
    solver: &Solver,
    mut input: R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "Enter the feedback for each suggested guess:")?;
    writeln!(output, "  G = right letter, right spot   Y = wrong spot   - = absent")?;
    writeln!(output, "  'word=feedback' if you played another word")?;
    writeln!(output, "Commands: win, undo, new, quit\n")?;

    let mut history: Vec<Turn> = Vec::new();
    let mut suggestion: Option<Word> = None;

    loop {
        if suggestion.is_none() {
            match suggest(solver, &history) {
                Ok(next) => {
                    writeln!(
                        output,
                        "Turn {}: {} candidates remaining",
                        history.len() + 1,
                        next.candidates_remaining
                    )?;
                    if !next.candidates.is_empty() {
                        writeln!(output, "  {}", next.candidates.join(", "))?;
                    }
                    writeln!(output, "Suggested guess: {}", next.guess.to_uppercase())?;
                    suggestion = Word::new(next.guess).ok();
                }
                Err(e) => {
                    writeln!(output, "{e}. Type 'undo' or 'new'.")?;
                }
            }
        }

        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim();

        match line.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                writeln!(output, "Bye!")?;
                return Ok(());
            }
            "new" | "n" => {
                history.clear();
                suggestion = None;
                writeln!(output, "New game started.\n")?;
                continue;
            }
            "undo" | "u" => {
                if history.pop().is_some() {
                    writeln!(output, "Undone.\n")?;
                } else {
                    writeln!(output, "Nothing to undo.")?;
                }
                suggestion = None;
                continue;
            }
            _ => {}
        }

        let turn = if line.contains(['=', ':']) {
            parse_turn(line)
        } else if let Some(guess) = suggestion.clone() {
            parse_feedback(line, guess.len()).map(|feedback| (guess, feedback))
        } else {
            Err("No suggestion to give feedback for".to_string())
        };

        match turn {
            Ok((guess, feedback)) => {
                let solved = feedback.is_solved();
                history.push((guess, feedback));
                suggestion = None;

                if solved {
                    writeln!(output, "Solved in {} guesses!", history.len())?;
                    for (word, feedback) in &history {
                        writeln!(output, "  {} {}", word.text().to_uppercase(), feedback.to_emoji())?;
                    }
                    history.clear();
                    writeln!(output, "\nNew game started.\n")?;
                }
            }
            Err(e) => writeln!(output, "{e}")?,
        }
    }
}

/// Parse a feedback line for a guess of `len` letters
fn parse_feedback(line: &str, len: usize) -> Result<Feedback, String> {
    if matches!(line.to_lowercase().as_str(), "win" | "correct" | "solved") {
        return Feedback::solved(len).map_err(|e| e.to_string());
    }

    let feedback: Feedback = line.parse().map_err(|e| format!("{e}"))?;
    if feedback.len() != len {
        return Err(format!("Feedback needs {len} positions, got {}", feedback.len()));
    }
    Ok(feedback)
}
