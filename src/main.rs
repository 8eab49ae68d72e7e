//! Command-line interface for inventory-sync
//!
//! # Usage Examples
//!
//! ## Spreadsheet import
//! ```bash
//! # Preview what the spreadsheet parses to
//! inventory-sync inspect --spreadsheet inventory.xlsx
//!
//! # Import products and categories into SurrealDB
//! inventory-sync products \
//!   --spreadsheet inventory.xlsx \
//!   --to-namespace shop --to-database catalog
//! ```
//!
//! ## Image assets
//! ```bash
//! # Upload images to S3 and link matching products
//! inventory-sync images \
//!   --assets-dir assets/ \
//!   --bucket shop-images \
//!   --to-namespace shop --to-database catalog
//!
//! # Point products at bundled asset paths instead
//! inventory-sync link \
//!   --assets-dir assets/ \
//!   --default-image assets/placeholder.jpg \
//!   --to-namespace shop --to-database catalog
//! ```
//!
//! SurrealDB credentials can also come from the environment:
//! `SURREAL_ENDPOINT`, `SURREAL_USERNAME`, `SURREAL_PASSWORD`.

use clap::{Parser, Subcommand};
use inventory_sync::{ops, SurrealOpts};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "inventory-sync")]
#[command(about = "A tool for migrating product inventory spreadsheets and image assets to SurrealDB and S3")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the spreadsheet's sheet name, headers, and first rows
    Inspect {
        /// Inventory spreadsheet (.xlsx or .csv)
        #[arg(long, value_name = "FILE")]
        spreadsheet: PathBuf,
    },

    /// Import the inventory spreadsheet into SurrealDB
    Products {
        /// Inventory spreadsheet (.xlsx or .csv)
        #[arg(long, value_name = "FILE")]
        spreadsheet: PathBuf,

        /// Target SurrealDB namespace
        #[arg(long)]
        to_namespace: String,

        /// Target SurrealDB database
        #[arg(long)]
        to_database: String,

        /// EUR to USD conversion rate applied to spreadsheet prices
        #[arg(long, default_value = "1.10")]
        eur_to_usd: f64,

        /// Target SurrealDB options
        #[command(flatten)]
        to_opts: SurrealOpts,
    },

    /// Upload image assets to S3 and link matching products
    Images {
        /// Directory containing the image files
        #[arg(long, value_name = "DIR")]
        assets_dir: PathBuf,

        /// Target S3 bucket
        #[arg(long, env = "S3_BUCKET")]
        bucket: String,

        /// Base URL for uploaded objects (default: the bucket's S3 URL)
        #[arg(long, value_name = "URL")]
        public_url_base: Option<String>,

        /// Target SurrealDB namespace
        #[arg(long)]
        to_namespace: String,

        /// Target SurrealDB database
        #[arg(long)]
        to_database: String,

        /// Target SurrealDB options
        #[command(flatten)]
        to_opts: SurrealOpts,
    },

    /// Point products at local asset paths instead of hosted URLs
    Link {
        /// Directory containing the image files
        #[arg(long, value_name = "DIR")]
        assets_dir: PathBuf,

        /// Path prefix written into product documents
        #[arg(long, default_value = "assets")]
        asset_prefix: String,

        /// Asset path assigned when no image matches
        #[arg(long, default_value = "assets/placeholder.jpg")]
        default_image: String,

        /// Target SurrealDB namespace
        #[arg(long)]
        to_namespace: String,

        /// Target SurrealDB database
        #[arg(long)]
        to_database: String,

        /// Target SurrealDB options
        #[command(flatten)]
        to_opts: SurrealOpts,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect { spreadsheet } => {
            ops::inspect::run(&spreadsheet)?;
        }
        Commands::Products {
            spreadsheet,
            to_namespace,
            to_database,
            eur_to_usd,
            to_opts,
        } => {
            ops::products::run(ops::products::Config {
                spreadsheet,
                namespace: to_namespace,
                database: to_database,
                eur_to_usd,
                surreal_opts: to_opts,
            })
            .await?;
        }
        Commands::Images {
            assets_dir,
            bucket,
            public_url_base,
            to_namespace,
            to_database,
            to_opts,
        } => {
            ops::images::run(ops::images::Config {
                assets_dir,
                bucket,
                public_url_base,
                namespace: to_namespace,
                database: to_database,
                surreal_opts: to_opts,
            })
            .await?;
        }
        Commands::Link {
            assets_dir,
            asset_prefix,
            default_image,
            to_namespace,
            to_database,
            to_opts,
        } => {
            ops::link::run(ops::link::Config {
                assets_dir,
                asset_prefix,
                default_image,
                namespace: to_namespace,
                database: to_database,
                surreal_opts: to_opts,
            })
            .await?;
        }
    }

    Ok(())
}
