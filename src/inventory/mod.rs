//! Inventory spreadsheet parsing and product document construction.

mod product;
mod sheet;

pub use product::{Category, Product, Specifications, PLACEHOLDER_IMAGE_URL};
pub use sheet::{read_rows, read_sheet, InventoryRow, SheetReport};
