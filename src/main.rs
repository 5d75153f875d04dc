//! Motus Solver - CLI
//!
//! Solving aid for Motus-style word puzzles: constraint filtering over a
//! French word list plus letter-frequency ranking of the survivors.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use motus_solver::{
    commands::{DEFAULT_DISPLAY_LIMIT, SolveConfig, run_simple, run_solve},
    output::print_solve_outcome,
    wordlists::Dictionary,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "motus_solver",
    about = "Motus solving aid: filters a dictionary against your attempts and ranks the candidates",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Target word length (default: inferred from the first attempt)
    #[arg(short = 'l', long, global = true)]
    length: Option<usize>,

    /// Extra word list file(s) to merge into the builtin dictionary
    #[arg(short = 'd', long = "dict", global = true)]
    dict_files: Vec<PathBuf>,

    /// Maximum number of candidates to display
    #[arg(long, global = true, default_value_t = DEFAULT_DISPLAY_LIMIT)]
    limit: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): enter attempts one per line
    Simple,

    /// Solve once from attempt specs given on the command line
    Solve {
        /// Attempts as WORD=PATTERN (g/v=green, y/j=yellow, -/x=absent),
        /// e.g. ENIGME=gy---g
        #[arg(required = true)]
        attempts: Vec<String>,
    },

    /// Show dictionary statistics after loading
    Words,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.dict_files)?;

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => {
            run_simple(&dictionary, cli.length, cli.limit).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Solve { attempts } => {
            let mut config = SolveConfig::new(attempts);
            config.target_length = cli.length;

            let outcome = run_solve(&config, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_outcome(&outcome, cli.limit);
            Ok(())
        }
        Commands::Words => {
            print_dictionary_stats(&dictionary);
            Ok(())
        }
    }
}

/// Build the dictionary: builtin list plus any external files
fn load_dictionary(files: &[PathBuf]) -> Result<Dictionary> {
    let mut dictionary = Dictionary::builtin();

    for path in files {
        let added = dictionary
            .load_file(path)
            .with_context(|| format!("Failed to load word list {}", path.display()))?;
        eprintln!("Loaded {}: {} new words", path.display(), added);
    }

    Ok(dictionary)
}

fn print_dictionary_stats(dictionary: &Dictionary) {
    println!("Words loaded: {}", dictionary.len());

    for length in 3..=12 {
        let count = dictionary.iter().filter(|w| w.len() == length).count();
        if count > 0 {
            println!("  {length:>2} letters: {count}");
        }
    }
}
