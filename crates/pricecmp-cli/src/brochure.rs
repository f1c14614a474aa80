//! Brochure ingest commands: fetch raw JSON, convert it into a catalog CSV.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Subcommand;
use pricecmp_catalog::{
    brochure_rows, load_brochure_document, load_field_mapping, write_brochure_csv,
    BrochureClient, FieldMapping, DEFAULT_MAX_ROWS,
};
use pricecmp_core::AppConfig;

/// Sub-commands available under `brochure`.
#[derive(Debug, Subcommand)]
pub enum BrochureCommands {
    /// Download a brochure JSON document
    Fetch {
        /// Brochure endpoint URL
        url: String,
        /// Where to save the pretty-printed JSON
        out_json: PathBuf,
    },
    /// Convert brochure JSON into a catalog CSV
    Convert {
        /// Brochure JSON file
        json: PathBuf,
        /// Output CSV file
        out_csv: PathBuf,
        /// JSON file mapping output columns to JSON paths
        #[arg(long)]
        mapping: Option<PathBuf>,
        /// Maximum number of brochure items to read
        #[arg(long, default_value_t = DEFAULT_MAX_ROWS)]
        max_rows: usize,
    },
}

pub(crate) async fn run_brochure(
    config: &AppConfig,
    command: BrochureCommands,
) -> anyhow::Result<()> {
    match command {
        BrochureCommands::Fetch { url, out_json } => run_fetch(config, &url, &out_json).await,
        BrochureCommands::Convert {
            json,
            out_csv,
            mapping,
            max_rows,
        } => {
            let written = run_convert(&json, &out_csv, mapping.as_deref(), max_rows)?;
            println!("Wrote {written} rows to {}", out_csv.display());
            Ok(())
        }
    }
}

async fn run_fetch(config: &AppConfig, url: &str, out_json: &Path) -> anyhow::Result<()> {
    let client = BrochureClient::new(
        config.fetch_timeout_secs,
        &config.fetch_user_agent,
        config.fetch_max_retries,
        config.fetch_retry_backoff_base_secs,
    )
    .context("failed to build brochure client")?;

    let document = client
        .fetch_json(url)
        .await
        .with_context(|| format!("failed to fetch brochure from {url}"))?;

    let pretty = serde_json::to_string_pretty(&document)?;
    std::fs::write(out_json, pretty)
        .with_context(|| format!("failed to write {}", out_json.display()))?;
    println!("Saved brochure to {}", out_json.display());
    Ok(())
}

/// Converts one brochure file and returns the number of rows written.
pub(crate) fn run_convert(
    json: &Path,
    out_csv: &Path,
    mapping: Option<&Path>,
    max_rows: usize,
) -> anyhow::Result<usize> {
    let mapping = match mapping {
        Some(path) => load_field_mapping(path)
            .with_context(|| format!("failed to load field mapping {}", path.display()))?,
        None => FieldMapping::default(),
    };

    let document = load_brochure_document(json)?;
    let rows = brochure_rows(&document, &mapping, max_rows)
        .with_context(|| format!("failed to convert {}", json.display()))?;

    let file = std::fs::File::create(out_csv)
        .with_context(|| format!("failed to create {}", out_csv.display()))?;
    write_brochure_csv(file, &rows)?;

    tracing::info!(
        input = %json.display(),
        output = %out_csv.display(),
        rows = rows.len(),
        "converted brochure"
    );
    Ok(rows.len())
}
