//! Asset upload: push local images to S3, then link products to the
//! uploaded URLs via the matching heuristic.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::assets::{self, S3Uploader};
use crate::matcher::{self, ImageCandidate, ProductFields};
use crate::surreal;
use crate::SurrealOpts;

use super::{fetch_products, ImagePatch};

/// Configuration for the image upload and linking run.
pub struct Config {
    pub assets_dir: PathBuf,
    pub bucket: String,
    /// Overrides the bucket's virtual-hosted S3 URL, e.g. for a CDN.
    pub public_url_base: Option<String>,
    pub namespace: String,
    pub database: String,
    pub surreal_opts: SurrealOpts,
}

pub async fn run(config: Config) -> Result<()> {
    info!("Starting image upload to S3");
    info!("Assets directory: {}", config.assets_dir.display());
    info!("Target bucket: {}", config.bucket);

    if config.surreal_opts.dry_run {
        warn!("Running in dry-run mode - no uploads or writes will happen");
    }

    let images = assets::scan_images(&config.assets_dir)?;
    info!("Found {} images in assets directory", images.len());

    let uploader = S3Uploader::new(&config.bucket, config.public_url_base.as_deref()).await?;

    // Filename -> public URL, kept in scan order so the matcher sees a
    // stable candidate sequence.
    let mut uploaded: Vec<(String, String)> = Vec::new();
    for (idx, image) in images.iter().enumerate() {
        info!("[{}/{}] Uploading: {}", idx + 1, images.len(), image.filename);
        if config.surreal_opts.dry_run {
            debug!("Dry run: would upload {}", image.filename);
            uploaded.push((image.filename.clone(), uploader.object_url(&image.filename)));
            continue;
        }
        // A single failed upload should not abort the whole run.
        match uploader.upload(&image.path, &image.filename).await {
            Ok(url) => {
                debug!("Uploaded to {url}");
                uploaded.push((image.filename.clone(), url));
            }
            Err(e) => warn!("Failed to upload {}: {e:#}", image.filename),
        }
    }
    info!("Successfully uploaded {} images", uploaded.len());

    let candidates: Vec<ImageCandidate> = uploaded
        .iter()
        .map(|(filename, _)| ImageCandidate::new(filename.clone()))
        .collect();
    let urls: HashMap<&str, &str> = uploaded
        .iter()
        .map(|(filename, url)| (filename.as_str(), url.as_str()))
        .collect();

    info!("Updating product documents with image URLs...");
    let surreal = surreal::connect(&config.surreal_opts, &config.namespace, &config.database)
        .await
        .context("Failed to connect to SurrealDB")?;

    let products = fetch_products(&surreal).await?;
    let mut updated = 0usize;
    let mut skipped = 0usize;

    for product in &products {
        let fields = ProductFields::new(&product.name, &product.brand, &product.category);
        match matcher::best_match(&fields, &candidates) {
            Some(m) => {
                let Some(url) = urls.get(m.candidate.filename.as_str()).copied() else {
                    skipped += 1;
                    continue;
                };
                info!(
                    "Matched: '{}' -> '{}' (score: {})",
                    product.name, m.candidate.filename, m.score
                );
                if !config.surreal_opts.dry_run {
                    surreal::merge_record(&surreal, &product.id, ImagePatch::new(url)).await?;
                }
                updated += 1;
            }
            None => {
                info!("No match found for: '{}'", product.name);
                skipped += 1;
            }
        }
    }

    info!(
        "Upload complete: {} images uploaded, {} products updated, {} without matching images",
        uploaded.len(),
        updated,
        skipped
    );

    Ok(())
}
