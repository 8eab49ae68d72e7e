//! Product and category documents written to SurrealDB.

use serde::Serialize;
use surrealdb::sql::Datetime;

use super::InventoryRow;

/// Image URL assigned at import time, before any asset matching has run.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/200";

/// A product document in the shape the shop frontend reads.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(rename = "imageUrls")]
    pub image_urls: Vec<String>,
    pub category: String,
    pub brand: String,
    pub rating: f64,
    pub reviews: i64,
    pub stock: i64,
    #[serde(rename = "createdAt")]
    pub created_at: Datetime,
    pub specifications: Specifications,
}

#[derive(Debug, Clone, Serialize)]
pub struct Specifications {
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Material")]
    pub material: String,
}

impl Product {
    /// Build a product document from a spreadsheet row, converting the EUR
    /// price to USD at the given rate and rounding to cents.
    pub fn from_row(row: &InventoryRow, eur_to_usd: f64) -> Self {
        let price = (row.price_eur * eur_to_usd * 100.0).round() / 100.0;
        Self {
            id: short_id(),
            name: row.name.clone(),
            description: format!("{} {} - {}", row.brand, row.name, row.profile),
            price,
            image_url: PLACEHOLDER_IMAGE_URL.to_string(),
            image_urls: vec![PLACEHOLDER_IMAGE_URL.to_string()],
            category: row.category.clone(),
            brand: row.brand.clone(),
            rating: 4.5,
            reviews: 0,
            stock: row.stock,
            created_at: Datetime::from(chrono::Utc::now()),
            specifications: Specifications {
                kind: row.profile.clone(),
                material: "Carbon".to_string(),
            },
        }
    }
}

/// A category document, keyed by its name.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub name: String,
    #[serde(rename = "createdAt")]
    pub created_at: Datetime,
}

impl Category {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            created_at: Datetime::from(chrono::Utc::now()),
        }
    }
}

// First 12 characters of a v4 UUID, the id format the original import used.
fn short_id() -> String {
    uuid::Uuid::new_v4().to_string()[..12].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> InventoryRow {
        InventoryRow {
            brand: "brandz".to_string(),
            category: "racket".to_string(),
            name: "pro racket x1".to_string(),
            profile: "Advanced".to_string(),
            price_eur: 199.90,
            stock: 12,
        }
    }

    #[test]
    fn price_converts_to_usd_and_rounds_to_cents() {
        let product = Product::from_row(&row(), 1.10);
        assert_eq!(product.price, 219.89);
    }

    #[test]
    fn description_combines_brand_name_and_profile() {
        let product = Product::from_row(&row(), 1.10);
        assert_eq!(product.description, "brandz pro racket x1 - Advanced");
    }

    #[test]
    fn new_products_get_the_placeholder_image() {
        let product = Product::from_row(&row(), 1.10);
        assert_eq!(product.image_url, PLACEHOLDER_IMAGE_URL);
        assert_eq!(product.image_urls, vec![PLACEHOLDER_IMAGE_URL.to_string()]);
    }

    #[test]
    fn ids_are_12_chars_and_unique() {
        let a = Product::from_row(&row(), 1.10);
        let b = Product::from_row(&row(), 1.10);
        assert_eq!(a.id.len(), 12);
        assert_eq!(b.id.len(), 12);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn document_serializes_with_frontend_field_names() {
        let product = Product::from_row(&row(), 1.10);
        let value = serde_json::to_value(&product).unwrap();
        assert!(value.get("imageUrl").is_some());
        assert!(value.get("imageUrls").is_some());
        assert!(value.get("createdAt").is_some());
        assert_eq!(value["specifications"]["Type"], "Advanced");
        assert_eq!(value["specifications"]["Material"], "Carbon");
    }

    #[test]
    fn free_products_stay_at_zero() {
        let mut r = row();
        r.price_eur = 0.0;
        let product = Product::from_row(&r, 1.10);
        assert_eq!(product.price, 0.0);
    }
}
