//! Wordle Helper - CLI
//!
//! Interactive helper, simulation and benchmarking for the entropy solver.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use wordle_helper::{
    commands::{SolveConfig, TargetSelection, analyze_word, run_benchmark, run_simple, solve_word},
    core::Word,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{DEFAULT_POOL_SIZE, Solver, SolverConfig},
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_helper",
    about = "Wordle helper that suggests entropy-maximizing guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Only suggest guesses that reuse every revealed letter
    #[arg(long, global = true)]
    hard: bool,

    /// Opening guess used before any feedback
    #[arg(short, long, global = true)]
    opening: Option<String>,

    /// Maximum number of words scored by entropy each turn
    #[arg(short, long, global = true, default_value_t = DEFAULT_POOL_SIZE)]
    pool_size: usize,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive helper (default)
    Simple,

    /// Play the solver against a known secret word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and entropy per turn
        #[arg(short, long)]
        details: bool,
    },

    /// Analyze the entropy of a guess against the full vocabulary
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Run the solver against many secrets
    Benchmark {
        /// Only test the first N words
        #[arg(short, long, conflicts_with = "sample")]
        limit: Option<usize>,

        /// Test N randomly chosen words
        #[arg(short, long)]
        sample: Option<usize>,

        /// Seed for --sample
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Load the vocabulary from the -w flag, or the embedded list
fn load_vocabulary(wordlist: Option<&str>) -> Result<Vec<Word>> {
    match wordlist {
        Some(path) => load_from_file(path),
        None => Ok(words_from_slice(WORDS)),
    }
}

fn build_solver(cli: &Cli) -> Result<Solver> {
    let vocabulary = load_vocabulary(cli.wordlist.as_deref())?;

    let mut config = SolverConfig::new()
        .with_hard_mode(cli.hard)
        .with_pool_size(cli.pool_size);
    if let Some(opening) = &cli.opening {
        let opening = Word::new(opening.as_str())
            .with_context(|| format!("invalid opening word '{opening}'"))?;
        config = config.with_opening(opening);
    }

    Solver::with_config(&vocabulary, config).context("cannot start solver")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut solver = build_solver(&cli)?;
    log::info!("loaded {} words", solver.vocabulary().len());

    match cli.command.unwrap_or(Commands::Simple) {
        Commands::Simple => run_simple(&mut solver),
        Commands::Solve { word, details } => {
            let result = solve_word(&SolveConfig::new(word), &mut solver)?;
            print_solve_result(&result, details);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &solver)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark {
            limit,
            sample,
            seed,
        } => {
            let selection = match (limit, sample) {
                (_, Some(count)) => TargetSelection::Sample { count, seed },
                (Some(count), None) => TargetSelection::First(count),
                (None, None) => TargetSelection::All,
            };
            let targets = selection.select(solver.vocabulary());

            println!("Running benchmark on {} words...", targets.len());
            let result = run_benchmark(&mut solver, &targets, true)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
