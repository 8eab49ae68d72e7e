//! Local asset linking: point product documents at bundled asset paths
//! instead of hosted URLs, with a default image for products nothing
//! matches.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::assets;
use crate::matcher::{self, ImageCandidate, ProductFields};
use crate::surreal;
use crate::SurrealOpts;

use super::{fetch_products, ImagePatch};

/// Configuration for the local asset linking run.
pub struct Config {
    pub assets_dir: PathBuf,
    /// Path prefix written into product documents (the consuming app's
    /// asset scheme), joined with the matched filename.
    pub asset_prefix: String,
    /// Asset path assigned when no image matches.
    pub default_image: String,
    pub namespace: String,
    pub database: String,
    pub surreal_opts: SurrealOpts,
}

pub async fn run(config: Config) -> Result<()> {
    info!("Updating products with local asset paths");
    info!("Assets directory: {}", config.assets_dir.display());

    if config.surreal_opts.dry_run {
        warn!("Running in dry-run mode - no data will be written");
    }

    let images = assets::scan_images(&config.assets_dir)?;
    info!("Found {} images in assets directory", images.len());

    let candidates: Vec<ImageCandidate> = images
        .iter()
        .map(|image| ImageCandidate::new(image.filename.clone()))
        .collect();

    let surreal = surreal::connect(&config.surreal_opts, &config.namespace, &config.database)
        .await
        .context("Failed to connect to SurrealDB")?;

    let products = fetch_products(&surreal).await?;
    info!("Matching {} products to images...", products.len());

    let prefix = config.asset_prefix.trim_end_matches('/');
    let mut matched = 0usize;
    let mut defaulted = 0usize;

    for product in &products {
        let fields = ProductFields::new(&product.name, &product.brand, &product.category);
        let patch = match matcher::best_match(&fields, &candidates) {
            Some(m) => {
                info!(
                    "{}: '{}' -> '{}' (score: {})",
                    fields.category.to_uppercase(),
                    product.name,
                    m.candidate.filename,
                    m.score
                );
                matched += 1;
                ImagePatch::new(&format!("{prefix}/{}", m.candidate.filename))
            }
            None => {
                info!("No match for: '{}' - using default image", product.name);
                defaulted += 1;
                ImagePatch::new(&config.default_image)
            }
        };
        if !config.surreal_opts.dry_run {
            surreal::merge_record(&surreal, &product.id, patch).await?;
        }
    }

    info!(
        "Update complete: {matched} products matched with images, {defaulted} using default image"
    );

    Ok(())
}
