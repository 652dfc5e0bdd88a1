//! Wordle Variance Solver - CLI
//!
//! Solves, suggests, analyzes and benchmarks with the partition-variance heuristic.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use log::info;
use std::path::PathBuf;
use wordle_variance::{
    commands::{
        BenchmarkConfig, SolveConfig, analyze_word, parse_turn, run_benchmark, run_simple,
        sample_targets, solve_word, suggest,
    },
    core::CandidatePool,
    game::{DEFAULT_MAX_GUESSES, Turn},
    logging,
    output::{print_analysis_result, print_benchmark_result, print_solve_result, print_suggestion},
    solver::{OPENING_WORD, Solver, SolverConfig},
    wordlists::loader::load_pool,
};

#[derive(Parser)]
#[command(
    name = "wordle_variance",
    about = "Word puzzle solver that splits the candidates as evenly as possible",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Opening word played on an empty history
    #[arg(long, global = true, default_value = OPENING_WORD)]
    opening: String,

    /// Always search, even for the first guess
    #[arg(long, global = true, conflicts_with = "opening")]
    no_opening: bool,

    /// Only score the first N candidates as guesses (faster, less accurate)
    #[arg(long, global = true)]
    max_candidates: Option<usize>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Simple interactive mode (default)
    Simple,

    /// Solve a target word (random word from the list if omitted)
    Solve {
        /// The target word to solve
        word: Option<String>,

        /// Maximum number of guesses
        #[arg(short = 'm', long, default_value_t = DEFAULT_MAX_GUESSES)]
        max_guesses: usize,

        /// Show candidate counts and variance for every turn
        #[arg(long)]
        verbose_steps: bool,
    },

    /// Suggest the next guess for a history like `crane=--G-G`
    Suggest {
        /// Turns played so far, oldest first
        history: Vec<String>,
    },

    /// Show how a word partitions the candidates
    Analyze {
        /// Word to analyze
        word: String,

        /// Turns played so far, oldest first
        history: Vec<String>,
    },

    /// Benchmark solver performance on random targets
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for picking targets
        #[arg(long)]
        seed: Option<u64>,

        /// Maximum number of guesses per game
        #[arg(short = 'm', long, default_value_t = DEFAULT_MAX_GUESSES)]
        max_guesses: usize,
    },
}

impl Cli {
    fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            opening_word: (!self.no_opening).then(|| self.opening.to_lowercase()),
            max_candidates: self.max_candidates,
        }
    }
}

fn parse_history(history: &[String]) -> Result<Vec<Turn>> {
    history
        .iter()
        .map(|text| parse_turn(text).map_err(|e| anyhow::anyhow!(e)))
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let seed = load_pool(cli.wordlist.as_deref()).with_context(|| {
        format!(
            "Failed to load word list {}",
            cli.wordlist
                .as_deref()
                .map_or_else(|| "(embedded)".into(), |p| p.display().to_string())
        )
    })?;
    if seed.is_empty() {
        bail!("Word list contains no valid words");
    }
    info!(
        "Loaded {} words of length {}",
        seed.len(),
        seed.word_length().unwrap_or_default()
    );

    let solver_config = cli.solver_config();

    match cli.command.unwrap_or(Commands::Simple) {
        Commands::Simple => {
            let solver = Solver::new(&seed, solver_config);
            run_simple(&solver).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Solve {
            word,
            max_guesses,
            verbose_steps,
        } => run_solve_command(
            word,
            max_guesses,
            verbose_steps,
            &seed,
            &solver_config,
        ),
        Commands::Suggest { history } => {
            let history = parse_history(&history)?;
            let solver = Solver::new(&seed, solver_config);
            let suggestion = suggest(&solver, &history).map_err(|e| anyhow::anyhow!(e))?;
            print_suggestion(&suggestion);
            Ok(())
        }
        Commands::Analyze { word, history } => {
            let history = parse_history(&history)?;
            let solver = Solver::new(&seed, solver_config);
            let result =
                analyze_word(&word, &solver, &history).map_err(|e| anyhow::anyhow!(e))?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark {
            count,
            seed: sample_seed,
            max_guesses,
        } => {
            let config = BenchmarkConfig {
                count,
                seed: sample_seed,
                max_guesses,
                show_progress: true,
            };
            run_benchmark_command(&config, &seed, &solver_config);
            Ok(())
        }
    }
}

fn run_solve_command(
    word: Option<String>,
    max_guesses: usize,
    verbose: bool,
    seed: &CandidatePool,
    solver_config: &SolverConfig,
) -> Result<()> {
    let target = match word {
        Some(word) => word.to_lowercase(),
        None => sample_targets(seed, 1, None)
            .pop()
            .map(|w| w.text().to_string())
            .context("Word list is empty")?,
    };

    let mut config = SolveConfig::new(target);
    config.max_guesses = max_guesses;

    let result = solve_word(config, seed, solver_config).map_err(|e| anyhow::anyhow!(e))?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(config: &BenchmarkConfig, seed: &CandidatePool, solver_config: &SolverConfig) {
    let targets = sample_targets(seed, config.count, config.seed);
    println!("Running benchmark on {} random words...", targets.len());

    let result = run_benchmark(seed, solver_config, &targets, config);
    print_benchmark_result(&result);
}
