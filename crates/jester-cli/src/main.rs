//! CLI frontend for the jester novelty programs.

mod commands;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;

use jester_core::config::DEFAULT_STOP_THRESHOLD;

#[derive(Parser)]
#[command(
    name = "jester",
    about = "Jester — a thought printer, an oracle and a voidchain",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). JESTER_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print thoughts forever, until the jester randomly leaves
    Dance {
        /// RNG seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,

        /// Stop once a random draw in [0, 1) exceeds this value
        #[arg(short, long, default_value_t = DEFAULT_STOP_THRESHOLD)]
        threshold: f64,
    },

    /// Ask the jester a question and receive a random answer
    Ask {
        /// RNG seed for a reproducible answer
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Enter the void and record the visit as a JSON chain
    Voidchain {
        /// RNG seed for a reproducible session identifier
        #[arg(short, long)]
        seed: Option<u64>,

        /// Directory to write voidchain_<id>.json into
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Platform identifier to use instead of the host (linux, win32, darwin, ...)
        #[arg(short, long)]
        platform: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Dance { seed, threshold } => commands::dance::run(seed, threshold),
        Commands::Ask { seed } => commands::ask::run(seed),
        Commands::Voidchain {
            seed,
            dir,
            platform,
        } => commands::voidchain::run(seed, dir, platform),
    };

    if let Err(e) = result {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}
