//! Wordbridge CLI - Command-line interface for Wordbridge
//!
//! Builds the word graph from a text file and answers bridge-word and
//! shortest-path queries against it.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "wordbridge")]
#[command(author = "Wordbridge Contributors")]
#[command(version)]
#[command(about = "Bridge words and shortest paths over a text's word graph", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON file with corpus options (lowercase, min_word_len)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the bridge words from WORD1 to WORD2
    Bridge {
        /// Text file to build the graph from
        file: PathBuf,

        word1: String,

        word2: String,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Find the shortest path between two words
    Path {
        /// Text file to build the graph from
        file: PathBuf,

        /// Start word
        from: String,

        /// End word (omit for a path to every reachable word)
        to: Option<String>,

        /// List every shortest path instead of one
        #[arg(short, long)]
        all: bool,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Show graph size, or the full edge list with --json
    Stats {
        /// Text file to build the graph from
        file: PathBuf,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let result = commands::load_options(cli.config.as_deref()).and_then(|options| {
        match cli.command {
            Commands::Bridge {
                file,
                word1,
                word2,
                json,
            } => commands::bridge(&file, &options, &word1, &word2, json),
            Commands::Path {
                file,
                from,
                to,
                all,
                json,
            } => commands::path(&file, &options, &from, to.as_deref(), all, json),
            Commands::Stats { file, json } => commands::stats(&file, &options, json),
        }
    });

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
