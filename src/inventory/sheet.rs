//! Spreadsheet input
//!
//! The inventory arrives as a workbook (`.xlsx`) or a plain CSV export with
//! a fixed column order: brand, category, name, profile, price_eur, stock.
//! Both formats are reduced to the same stringly-typed rows before parsing.

use anyhow::{bail, Context, Result};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// One parsed inventory row in spreadsheet column order.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRow {
    pub brand: String,
    pub category: String,
    pub name: String,
    pub profile: String,
    pub price_eur: f64,
    pub stock: i64,
}

/// Raw sheet contents plus metadata, used by the inspect command and as the
/// common input for row parsing.
#[derive(Debug)]
pub struct SheetReport {
    pub sheet_name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Read the sheet as strings, dispatching on the file extension.
pub fn read_sheet(path: &Path) -> Result<SheetReport> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);
    match ext.as_deref() {
        Some("xlsx" | "xls" | "xlsm") => read_workbook(path),
        Some("csv") => read_csv(path),
        _ => bail!(
            "Unsupported spreadsheet format: {} (expected .xlsx or .csv)",
            path.display()
        ),
    }
}

/// Parse the sheet's data rows, skipping any row with an empty brand cell.
pub fn read_rows(path: &Path) -> Result<Vec<InventoryRow>> {
    let sheet = read_sheet(path)?;
    let mut rows = Vec::new();
    for cells in &sheet.rows {
        if cells.first().map_or(true, |c| c.trim().is_empty()) {
            continue;
        }
        rows.push(parse_row(cells)?);
    }
    Ok(rows)
}

fn parse_row(cells: &[String]) -> Result<InventoryRow> {
    let cell = |i: usize| {
        cells
            .get(i)
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    };

    let price_raw = cell(4);
    let price_eur = if price_raw.is_empty() {
        0.0
    } else {
        price_raw
            .parse::<f64>()
            .with_context(|| format!("Invalid price_eur value: {price_raw:?}"))?
    };

    // Workbook cells hold stock as a float even when it is a whole number.
    let stock_raw = cell(5);
    let stock = if stock_raw.is_empty() {
        0
    } else {
        stock_raw
            .parse::<f64>()
            .map(|v| v as i64)
            .with_context(|| format!("Invalid stock value: {stock_raw:?}"))?
    };

    Ok(InventoryRow {
        brand: cell(0),
        category: cell(1),
        name: cell(2),
        profile: cell(3),
        price_eur,
        stock,
    })
}

fn read_workbook(path: &Path) -> Result<SheetReport> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook: {}", path.display()))?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .context("Workbook has no sheets")?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read sheet {sheet_name:?}"))?;

    let mut row_iter = range.rows();
    let headers = row_iter
        .next()
        .map(|r| r.iter().map(cell_to_string).collect())
        .unwrap_or_default();
    let rows = row_iter
        .map(|r| r.iter().map(cell_to_string).collect())
        .collect();

    Ok(SheetReport {
        sheet_name,
        headers,
        rows,
    })
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn read_csv(path: &Path) -> Result<SheetReport> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers = reader
        .headers()
        .context("Failed to read CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.context("Failed to read CSV record")?;
        rows.push(record.iter().map(|c| c.to_string()).collect());
    }

    let sheet_name = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(SheetReport {
        sheet_name,
        headers,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn csv_fixture(contents: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn read_csv_rows() {
        let file = csv_fixture(
            "brand,category,name,profile,price_eur,stock\n\
             brandz,racket,pro racket x1,Advanced,199.90,12\n\
             ace,padel balls,tour ball,All,5.50,100\n",
        );

        let rows = read_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            InventoryRow {
                brand: "brandz".to_string(),
                category: "racket".to_string(),
                name: "pro racket x1".to_string(),
                profile: "Advanced".to_string(),
                price_eur: 199.90,
                stock: 12,
            }
        );
        assert_eq!(rows[1].stock, 100);
    }

    #[test]
    fn rows_with_empty_brand_are_skipped() {
        let file = csv_fixture(
            "brand,category,name,profile,price_eur,stock\n\
             ,,,,,\n\
             ace,padel balls,tour ball,All,5.50,100\n",
        );

        let rows = read_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].brand, "ace");
    }

    #[test]
    fn empty_price_and_stock_default_to_zero() {
        let file = csv_fixture(
            "brand,category,name,profile,price_eur,stock\n\
             ace,padel balls,tour ball,All,,\n",
        );

        let rows = read_rows(file.path()).unwrap();
        assert_eq!(rows[0].price_eur, 0.0);
        assert_eq!(rows[0].stock, 0);
    }

    #[test]
    fn invalid_price_is_an_error() {
        let file = csv_fixture(
            "brand,category,name,profile,price_eur,stock\n\
             ace,padel balls,tour ball,All,not-a-price,5\n",
        );

        let err = read_rows(file.path()).unwrap_err();
        assert!(err.to_string().contains("price_eur"));
    }

    #[test]
    fn whole_number_stock_from_float_cell() {
        let file = csv_fixture(
            "brand,category,name,profile,price_eur,stock\n\
             ace,padel balls,tour ball,All,5.50,100.0\n",
        );

        let rows = read_rows(file.path()).unwrap();
        assert_eq!(rows[0].stock, 100);
    }

    #[test]
    fn sheet_report_exposes_headers_and_name() {
        let file = csv_fixture(
            "brand,category,name,profile,price_eur,stock\n\
             ace,padel balls,tour ball,All,5.50,100\n",
        );

        let report = read_sheet(file.path()).unwrap();
        assert_eq!(report.headers[0], "brand");
        assert_eq!(report.headers[4], "price_eur");
        assert_eq!(report.rows.len(), 1);
        assert!(!report.sheet_name.is_empty());
    }

    #[test]
    fn unsupported_extension_is_an_error() {
        let result = read_sheet(Path::new("inventory.pdf"));
        assert!(result.is_err());
    }
}
