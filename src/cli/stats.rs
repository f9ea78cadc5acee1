use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::store::records::{DnaStats, RecordStore};

#[derive(Args)]
pub struct StatsArgs {
    /// Record store file written by `check --store` or `serve --store`
    #[arg(long, required = true)]
    pub store: PathBuf,
}

/// Execute stats subcommand
///
/// # Errors
///
/// Returns an error if the store file is missing or cannot be parsed.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: StatsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    if !args.store.exists() {
        anyhow::bail!("Record store '{}' not found", args.store.display());
    }

    let store = RecordStore::open(&args.store)?;
    let stats = store.stats();

    if verbose {
        eprintln!("Loaded {} records from {}", store.len(), args.store.display());
    }

    match format {
        OutputFormat::Text => print_text(&stats),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        OutputFormat::Tsv => {
            println!("count_mutant_dna\tcount_human_dna\tratio");
            println!(
                "{}\t{}\t{:.4}",
                stats.count_mutant_dna, stats.count_human_dna, stats.ratio
            );
        }
    }

    Ok(())
}

fn print_text(stats: &DnaStats) {
    println!("DNA Statistics");
    println!("{}", "=".repeat(40));
    println!("  Mutant DNA: {}", stats.count_mutant_dna);
    println!("  Human DNA:  {}", stats.count_human_dna);
    println!("  Ratio:      {:.2}", stats.ratio);
}
