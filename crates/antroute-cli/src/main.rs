//! AntRoute CLI - Command-line interface for colony route search.

mod commands;
mod config;
mod roadmap;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "antroute")]
#[command(author, version, about = "AntRoute - Shortest routes found by an ant colony", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new AntRoute project
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Search for a route between two towns
    Search {
        /// Road map file (JSON)
        map: String,

        /// Start town id
        #[arg(short, long)]
        from: u16,

        /// Destination town id
        #[arg(short, long)]
        to: u16,

        /// Seed for a reproducible search
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of rounds (overrides antroute.toml)
        #[arg(short, long)]
        rounds: Option<usize>,

        /// Ants per round (overrides antroute.toml)
        #[arg(short, long)]
        ants: Option<usize>,

        /// Write every snapshot to this file as JSON
        #[arg(long)]
        snapshots: Option<String>,
    },

    /// List the connected components of a road map
    Components {
        /// Road map file (JSON)
        map: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Search {
            map,
            from,
            to,
            seed,
            rounds,
            ants,
            snapshots,
        } => commands::search::run(
            &map,
            commands::search::SearchArgs {
                from,
                to,
                seed,
                rounds,
                ants,
                snapshots,
            },
            cli.verbose,
        ),
        Commands::Components { map } => commands::components::run(&map),
    }
}

/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` with `--verbose`.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
