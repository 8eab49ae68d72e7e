//! Spreadsheet sanity check: print what a run would parse.

use anyhow::Result;
use std::path::Path;

use crate::inventory;

const PREVIEW_ROWS: usize = 10;

/// Print the sheet name, headers, and first rows to stdout. The report is
/// the command's output, so it bypasses the tracing pipeline.
pub fn run(spreadsheet: &Path) -> Result<()> {
    let report = inventory::read_sheet(spreadsheet)?;

    println!("Sheet name: {}", report.sheet_name);
    println!("Headers: {:?}", report.headers);
    println!();

    for (idx, row) in report.rows.iter().take(PREVIEW_ROWS).enumerate() {
        println!("Row {idx}: {row:?}");
    }
    if report.rows.len() > PREVIEW_ROWS {
        println!("... {} more rows", report.rows.len() - PREVIEW_ROWS);
    }

    println!();
    println!("Total data rows: {}", report.rows.len());

    let parsed = inventory::read_rows(spreadsheet)?;
    println!("Parseable product rows: {}", parsed.len());

    Ok(())
}
