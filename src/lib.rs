//! inventory-sync library
//!
//! A library for migrating a product-inventory spreadsheet and its image
//! assets to SurrealDB and AWS S3.
//!
//! # Features
//!
//! - Spreadsheet import: parse `.xlsx`/`.csv` inventory into product and
//!   category documents, upserted in bounded batches
//! - Asset upload: push local image files to S3 under `products/` with
//!   detected content types and public-read access
//! - Image matching: a deterministic, category-driven scoring heuristic that
//!   pairs products with image files when no foreign key exists
//! - Local linking: rewrite product image fields to bundled asset paths,
//!   with a default image for products nothing matches
//!
//! # CLI Usage
//!
//! ```bash
//! # Sanity-check the spreadsheet
//! inventory-sync inspect --spreadsheet inventory.xlsx
//!
//! # Import products and categories
//! inventory-sync products --spreadsheet inventory.xlsx \
//!   --to-namespace shop --to-database catalog
//!
//! # Upload images and link matching products
//! inventory-sync images --assets-dir assets/ --bucket shop-images \
//!   --to-namespace shop --to-database catalog
//! ```

use clap::Parser;

pub mod assets;
pub mod inventory;
pub mod matcher;
pub mod ops;
pub mod surreal;

#[derive(Parser, Clone)]
pub struct SurrealOpts {
    /// SurrealDB endpoint URL
    #[arg(
        long,
        default_value = "http://localhost:8000",
        env = "SURREAL_ENDPOINT"
    )]
    pub surreal_endpoint: String,

    /// SurrealDB username
    #[arg(long, default_value = "root", env = "SURREAL_USERNAME")]
    pub surreal_username: String,

    /// SurrealDB password
    #[arg(long, default_value = "root", env = "SURREAL_PASSWORD")]
    pub surreal_password: String,

    /// Number of record writes committed per batch
    #[arg(long, default_value = "100")]
    pub batch_size: usize,

    /// Dry run mode - don't upload files or write records
    #[arg(long)]
    pub dry_run: bool,
}
