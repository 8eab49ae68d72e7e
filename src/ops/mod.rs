//! The four batch operations exposed by the CLI: inspect, products, images,
//! and link.

pub mod images;
pub mod inspect;
pub mod link;
pub mod products;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use crate::surreal::Client;

/// The product fields the matching operations read back from SurrealDB.
#[derive(Debug, Deserialize)]
pub(crate) struct StoredProduct {
    pub id: Thing,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub category: String,
}

pub(crate) async fn fetch_products(surreal: &Client) -> Result<Vec<StoredProduct>> {
    let mut response = surreal
        .query("SELECT id, name, brand, category FROM products")
        .await
        .context("Failed to fetch products")?;
    let products: Vec<StoredProduct> = response.take(0).context("Failed to decode products")?;
    Ok(products)
}

/// Image fields merged into a product document after a match (or, for the
/// link operation, after falling back to the default image).
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ImagePatch {
    #[serde(rename = "imageUrl")]
    image_url: String,
    #[serde(rename = "imageUrls")]
    image_urls: Vec<String>,
}

impl ImagePatch {
    pub(crate) fn new(url: &str) -> Self {
        Self {
            image_url: url.to_string(),
            image_urls: vec![url.to_string()],
        }
    }
}
