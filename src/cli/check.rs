use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::OutputFormat;
use crate::detection::classifier::Classification;
use crate::parsing::request::parse_dna_request;
use crate::store::records::{HumanRecord, RecordStore};
use crate::utils::validation::validate_dna;

#[derive(Args)]
pub struct CheckArgs {
    /// DNA rows, one argument per row (e.g. ATGCGA CAGTGC ...)
    #[arg(conflicts_with = "input")]
    pub rows: Vec<String>,

    /// JSON file holding {"dna": [...]}
    /// Use '-' for stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Record the result in this store file
    #[arg(long)]
    pub store: Option<PathBuf>,
}

/// Execute check subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read, the DNA is invalid, or the
/// result cannot be recorded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CheckArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let rows = read_rows(&args)?;
    let dna = validate_dna(rows.as_deref())?;

    if verbose {
        eprintln!(
            "Read {} rows of {} bases",
            dna.size(),
            dna.base_length()
        );
    }

    let classification = Classification::of(&dna);

    if let Some(path) = &args.store {
        let store = RecordStore::open(path)?;
        store.save(HumanRecord::from(&classification))?;
        if verbose {
            eprintln!("Recorded result in {} ({} records)", path.display(), store.len());
        }
    }

    match format {
        OutputFormat::Text => print_text(&classification),
        OutputFormat::Json => print_json(&classification)?,
        OutputFormat::Tsv => print_tsv(&classification),
    }

    Ok(())
}

fn read_rows(args: &CheckArgs) -> anyhow::Result<Option<Vec<String>>> {
    match &args.input {
        Some(path) => {
            let content = read_input(path)?;
            Ok(parse_dna_request(&content)?)
        }
        None if args.rows.is_empty() => {
            anyhow::bail!("No DNA given: pass rows as arguments or use --input")
        }
        None => Ok(Some(args.rows.clone())),
    }
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        Ok(content)
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))
    }
}

fn print_text(classification: &Classification) {
    println!("DNA: {0}x{0} ({1})", classification.size, classification.id);
    match classification.orientation {
        Some(orientation) => println!("Result: mutant ({orientation} run)"),
        None => println!("Result: not mutant"),
    }
}

fn print_json(classification: &Classification) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(classification)?);
    Ok(())
}

fn print_tsv(classification: &Classification) {
    println!("id\tsize\tis_mutant\torientation");
    println!(
        "{}\t{}\t{}\t{}",
        classification.id,
        classification.size,
        classification.is_mutant,
        classification
            .orientation
            .map_or_else(|| "-".to_string(), |o| o.to_string()),
    );
}
