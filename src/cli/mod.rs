//! Command-line interface for mutant-finder.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **check**: Classify a DNA sequence given as arguments or as a JSON document
//! - **stats**: Show aggregate counts from a record store file
//! - **serve**: Start the HTTP service
//!
//! ## Usage
//!
//! ```text
//! # Classify rows given on the command line
//! mutant-finder check ATGCGA CAGTGC TTATGT AGAAGG CCCCTA TCACTG
//!
//! # Read a {"dna": [...]} document from stdin, JSON output
//! echo '{"dna": ["AC", "TG"]}' | mutant-finder check --input - --format json
//!
//! # Record results and report on them
//! mutant-finder check --store records.json ACTA TGAC GGGG TTGG
//! mutant-finder stats --store records.json
//!
//! # Start the HTTP service
//! mutant-finder serve --port 8080 --store records.json
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod check;
pub mod stats;

#[derive(Parser)]
#[command(name = "mutant-finder")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Detect mutant DNA by searching for runs of four identical bases")]
#[command(
    long_about = "mutant-finder classifies a square grid of DNA bases (A, C, G, T) as mutant when four identical bases line up horizontally, vertically, or along either diagonal.\n\nIt can classify sequences from the command line, keep a record of results, and serve the same classification over HTTP."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a DNA sequence
    Check(check::CheckArgs),

    /// Show statistics from a record store
    Stats(stats::StatsArgs),

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// JSON file to keep classification records in (in memory if omitted)
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
