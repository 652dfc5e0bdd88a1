//! End-to-end scenarios through the public API

use wordle_variance::core::{CandidatePool, Feedback, Mark, Word};
use wordle_variance::game::{Game, GameView};
use wordle_variance::solver::variance::{partition_sizes, score_guess};
use wordle_variance::solver::{OPENING_WORD, SelectError, Solver, SolverConfig, play_step};
use wordle_variance::wordlists::WORDS;

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

#[test]
fn small_pool_without_opening_word_falls_through_to_search() {
    let seed = CandidatePool::new(["allot", "table", "slate"]);
    let solver = Solver::new(&seed, SolverConfig::default());

    // every guess splits the three words into singletons, so all tie
    let snapshot = seed.snapshot();
    let scores: Vec<_> = snapshot
        .iter()
        .map(|g| score_guess(g, &snapshot).unwrap())
        .collect();
    assert!(scores.windows(2).all(|w| w[0].spread == w[1].spread));
    assert!(scores.iter().all(|s| s.buckets_used == 3 && s.largest == 1));

    assert_eq!(solver.next_guess(&[]).unwrap().text(), "allot");
}

#[test]
fn small_pool_with_configured_opening_uses_it() {
    let seed = CandidatePool::new(["allot", "table", "slate"]);
    let config = SolverConfig {
        opening_word: Some("slate".to_string()),
        ..SolverConfig::default()
    };
    let solver = Solver::new(&seed, config);

    assert_eq!(solver.next_guess(&[]).unwrap().text(), "slate");
}

#[test]
fn opening_move_is_fixed() {
    let seed = CandidatePool::new(WORDS);
    let solver = Solver::new(&seed, SolverConfig::default());

    for _ in 0..3 {
        assert_eq!(solver.next_guess(&[]).unwrap().text(), OPENING_WORD);
    }
}

#[test]
fn repeated_letters_worked_example() {
    let feedback = Feedback::compute(&word("speed"), &word("erase")).unwrap();

    assert_eq!(feedback.to_letters(), "Y-YY-");
    assert_eq!(
        feedback.marks(),
        [Mark::Misplaced, Mark::Absent, Mark::Misplaced, Mark::Misplaced, Mark::Absent]
    );
    assert_eq!(feedback.code(), Some(37));
}

#[test]
fn compute_against_itself_is_solved() {
    for text in WORDS.iter().take(50) {
        let w = word(text);
        assert!(Feedback::compute(&w, &w).unwrap().is_solved());
    }
}

#[test]
fn compute_rejects_length_mismatch() {
    assert!(Feedback::compute(&word("crane"), &word("cat")).is_none());
}

#[test]
fn filtering_never_drops_the_target() {
    let seed = CandidatePool::new(WORDS);
    let guesses = ["crane", "speed", "robot", "eerie", "youth"];

    for target in seed.iter().step_by(7) {
        let mut pool = seed.clone();
        for guess in guesses {
            let guess = word(guess);
            let feedback = Feedback::compute(&guess, target).unwrap();
            pool.filter(&guess, &feedback);
            assert!(pool.contains(target.text()), "{target} lost after {guess}");
        }
    }
}

#[test]
fn partition_sizes_cover_every_candidate() {
    let candidates = CandidatePool::new(WORDS).snapshot();

    for guess in ["crane", "speed", "fuzzy"] {
        let sizes = partition_sizes(&word(guess), &candidates).unwrap();
        assert_eq!(sizes.len(), 243);
        assert_eq!(sizes.iter().sum::<usize>(), candidates.len());
    }
}

#[test]
fn pool_construction_normalizes_input() {
    let pool = CandidatePool::new(["Crane", "CRANE", "crane", "cr4ne", "cat", "slate", " "]);

    assert_eq!(pool.len(), 2);
    assert!(pool.contains("crane"));
    assert!(pool.contains("slate"));
    assert!(!pool.contains("cat"));
    assert_eq!(pool.word_length(), Some(5));
}

#[test]
fn exhausted_candidates_are_reported() {
    let seed = CandidatePool::new(["crane", "slate"]);
    let solver = Solver::new(&seed, SolverConfig::default());
    let impossible = vec![(word("crane"), "YYYYY".parse::<Feedback>().unwrap())];

    assert_eq!(solver.next_guess(&impossible), Err(SelectError::NoCandidates));
}

#[test]
fn games_are_won_against_the_embedded_list() {
    let seed = CandidatePool::new(WORDS);
    let config = SolverConfig::default();

    for target in ["about", "speed", "floor", "youth", "table"] {
        let mut game = Game::new(target, WORDS, seed.len()).unwrap();
        while !game.is_over() {
            let (guess, _) = play_step(&mut game, &config).unwrap();
            assert!(seed.contains(guess.text()));
        }

        assert!(game.is_won(), "did not solve {target}");
        assert_eq!(game.history()[0].0.text(), OPENING_WORD);
        assert!(game.guesses_made() <= 8, "{target} took {}", game.guesses_made());
    }
}
