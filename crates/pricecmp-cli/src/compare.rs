//! The `compare` command: registry → catalogs → comparison → reports.

use std::path::PathBuf;

use anyhow::Context;
use pricecmp_catalog::{load_catalog, save_csv_report, save_xlsx_report, ReportLayout};
use pricecmp_core::{load_stores, ComparisonSummary, StoreCatalog};
use pricecmp_matcher::{build_comparison, summarize};

pub(crate) const CSV_REPORT: &str = "price_comparison_by_type.csv";
pub(crate) const XLSX_REPORT: &str = "price_comparison_by_type.xlsx";

#[derive(Debug, Clone)]
pub(crate) struct CompareOptions {
    pub stores_path: PathBuf,
    pub output_dir: PathBuf,
    pub threshold: u8,
    pub write_xlsx: bool,
}

/// Runs a full comparison and writes the reports into `options.output_dir`.
///
/// # Errors
///
/// Returns an error if the registry or any catalog cannot be loaded, or a
/// report cannot be written. Matching itself never fails.
pub(crate) fn run_compare(options: &CompareOptions) -> anyhow::Result<ComparisonSummary> {
    let stores = load_stores(&options.stores_path).with_context(|| {
        format!(
            "failed to load store registry {}",
            options.stores_path.display()
        )
    })?;

    let reference = load_catalog(&stores.reference, &stores.resolve_path(&stores.reference))
        .with_context(|| format!("failed to load catalog for {}", stores.reference.name))?;
    let competitors = stores
        .competitors
        .iter()
        .map(|store| {
            load_catalog(store, &stores.resolve_path(store))
                .with_context(|| format!("failed to load catalog for {}", store.name))
        })
        .collect::<anyhow::Result<Vec<StoreCatalog>>>()?;

    tracing::info!(
        reference = %reference.store,
        products = reference.len(),
        competitors = competitors.len(),
        threshold = options.threshold,
        "comparing catalogs"
    );

    let records = build_comparison(&reference, &competitors, options.threshold);
    let layout = ReportLayout::new(
        reference.store.as_str(),
        competitors.iter().map(|c| c.store.as_str()),
    );

    std::fs::create_dir_all(&options.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            options.output_dir.display()
        )
    })?;

    let csv_path = options.output_dir.join(CSV_REPORT);
    save_csv_report(&csv_path, &layout, &records)
        .with_context(|| format!("failed to write {}", csv_path.display()))?;

    let xlsx_path = options.output_dir.join(XLSX_REPORT);
    if options.write_xlsx {
        save_xlsx_report(&xlsx_path, &layout, &records)
            .with_context(|| format!("failed to write {}", xlsx_path.display()))?;
    }

    let summary = summarize(&records);
    print_summary(&summary);
    println!("\nFiles created:");
    println!("- {}", csv_path.display());
    if options.write_xlsx {
        println!("- {}", xlsx_path.display());
    }

    Ok(summary)
}

fn print_summary(summary: &ComparisonSummary) {
    println!("\nSummary:");
    println!("Total products processed: {}", summary.total_products);
    for (store, count) in &summary.found_per_store {
        println!("Products found in {store}: {count}");
    }

    println!("\nPotential savings:");
    println!(
        "Products with better prices elsewhere: {}",
        summary.products_with_savings
    );
    println!("Total potential savings: ${:.2}", summary.total_savings);
    if let Some(average) = summary.average_savings() {
        println!("Average savings per product: ${average:.2}");
    }
}
