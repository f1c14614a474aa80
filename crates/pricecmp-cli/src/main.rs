mod brochure;
mod compare;
mod inspect;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use brochure::BrochureCommands;

#[derive(Debug, Parser)]
#[command(name = "pricecmp")]
#[command(about = "Compare grocery prices across store catalogs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare the reference store's catalog against every competitor
    Compare {
        /// Store registry (defaults to `PRICECMP_STORES_PATH`)
        #[arg(long)]
        stores: Option<PathBuf>,
        /// Directory for the reports (defaults to `PRICECMP_OUTPUT_DIR`)
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Primary match threshold, 0-100 (defaults to `PRICECMP_MATCH_THRESHOLD`)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        threshold: Option<u8>,
        /// Skip the spreadsheet report
        #[arg(long)]
        no_xlsx: bool,
    },
    /// Print the product type each name normalizes to
    Normalize {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Print the unit price parsed from each price text
    Price {
        #[arg(required = true)]
        texts: Vec<String>,
    },
    /// Fetch and convert brochure data
    Brochure {
        #[command(subcommand)]
        command: BrochureCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = pricecmp_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Commands::Compare {
            stores,
            output_dir,
            threshold,
            no_xlsx,
        } => {
            let options = compare::CompareOptions {
                stores_path: stores.unwrap_or_else(|| config.stores_path.clone()),
                output_dir: output_dir.unwrap_or_else(|| config.output_dir.clone()),
                threshold: threshold.unwrap_or(config.match_threshold),
                write_xlsx: !no_xlsx,
            };
            compare::run_compare(&options)?;
        }
        Commands::Normalize { names } => inspect::run_normalize(&names),
        Commands::Price { texts } => inspect::run_price(&texts),
        Commands::Brochure { command } => brochure::run_brochure(&config, command).await?,
    }

    Ok(())
}
