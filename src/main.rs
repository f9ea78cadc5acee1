use clap::Parser;
use tracing_subscriber::EnvFilter;

use mutant_finder::{cli, web};

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("mutant_finder=debug,info")
    } else {
        EnvFilter::new("mutant_finder=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Check(args) => {
            cli::check::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Stats(args) => {
            cli::stats::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Serve(args) => {
            web::server::run(args)?;
        }
    }

    Ok(())
}
