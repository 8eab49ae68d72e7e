//! Spreadsheet import: categories and products into SurrealDB.

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::path::PathBuf;
use surrealdb::sql::{Id, Thing};
use tracing::{debug, info, warn};

use crate::inventory::{self, Category, Product};
use crate::surreal::{self, BatchWriter};
use crate::SurrealOpts;

/// Configuration for the products import.
pub struct Config {
    pub spreadsheet: PathBuf,
    pub namespace: String,
    pub database: String,
    /// Conversion rate applied to the spreadsheet's EUR prices.
    pub eur_to_usd: f64,
    pub surreal_opts: SurrealOpts,
}

/// Parse the inventory spreadsheet and upsert categories and products in
/// bounded batches.
pub async fn run(config: Config) -> Result<()> {
    info!("Starting products import to SurrealDB");
    info!("Spreadsheet: {}", config.spreadsheet.display());

    if config.surreal_opts.dry_run {
        warn!("Running in dry-run mode - no data will be written");
    }

    let rows = inventory::read_rows(&config.spreadsheet)?;
    info!("Found {} products to upload", rows.len());

    // BTreeSet keeps category/brand reporting and upsert order stable.
    let categories: BTreeSet<&str> = rows.iter().map(|r| r.category.as_str()).collect();
    let brands: BTreeSet<&str> = rows.iter().map(|r| r.brand.as_str()).collect();
    info!("Unique categories: {categories:?}");
    info!("Unique brands: {brands:?}");

    let products: Vec<Product> = rows
        .iter()
        .map(|r| Product::from_row(r, config.eur_to_usd))
        .collect();
    let total_stock: i64 = products.iter().map(|p| p.stock).sum();

    let surreal = surreal::connect(&config.surreal_opts, &config.namespace, &config.database)
        .await
        .context("Failed to connect to SurrealDB")?;

    info!("Uploading {} categories...", categories.len());
    for category in &categories {
        let id = Thing::from(("categories", Id::String(category.to_string())));
        if config.surreal_opts.dry_run {
            debug!("Dry run: would upsert {id}");
        } else {
            surreal::upsert_record(&surreal, &id, Category::new(category)).await?;
        }
    }

    info!("Uploading {} products...", products.len());
    let mut writer = BatchWriter::new(
        &surreal,
        config.surreal_opts.batch_size,
        config.surreal_opts.dry_run,
    );
    for product in products {
        let id = Thing::from(("products", Id::String(product.id.clone())));
        writer.push(id, product).await?;
    }
    let written = writer.finish().await?;

    info!(
        "Database population complete: {} categories, {} products, {} total units in stock",
        categories.len(),
        written,
        total_stock
    );

    Ok(())
}
