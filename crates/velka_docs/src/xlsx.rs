use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::utility::{cell_range, column_number_to_name, row_col_to_cell};
use rust_xlsxwriter::{DocProperties, ExcelDateTime, Format, Workbook, Worksheet};

/// `=SUM(X{first}:X{last})` over a single column, zero-based rows inclusive.
pub fn sum_formula(col: u16, first_row: u32, last_row: u32) -> String {
    format!("=SUM({})", cell_range(first_row, col, last_row, col))
}

/// `=<minuend>-<subtrahend>` on the same row.
pub fn difference_formula(row: u32, minuend_col: u16, subtrahend_col: u16) -> String {
    format!(
        "={}-{}",
        row_col_to_cell(row, minuend_col),
        row_col_to_cell(row, subtrahend_col)
    )
}

/// Writes `title` into row 1, merged across columns `0..=last_col`.
pub fn write_title(worksheet: &mut Worksheet, last_col: u16, title: &str, format: &Format) -> Result<()> {
    worksheet
        .merge_range(0, 0, 0, last_col, title, format)
        .with_context(|| format!("Failed to merge title across {}", cell_range(0, 0, 0, last_col)))?;
    Ok(())
}

/// Writes one formatted header cell per entry of `headers`, starting at column A.
pub fn write_header_row(
    worksheet: &mut Worksheet,
    row: u32,
    headers: &[&str],
    format: &Format,
) -> Result<()> {
    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string_with_format(row, col as u16, *header, format)
            .with_context(|| format!("Failed to write header at column {col}"))?;
    }
    Ok(())
}

/// Sets the same width on columns `0..count`.
pub fn set_uniform_column_width(worksheet: &mut Worksheet, count: u16, width: f64) -> Result<()> {
    for col in 0..count {
        worksheet
            .set_column_width(col, width)
            .with_context(|| format!("Failed to set width of column {}", column_number_to_name(col)))?;
    }
    Ok(())
}

/// Pins the document properties so the package content only depends on the
/// given date.
pub fn set_document_properties(workbook: &mut Workbook, title: &str, date: NaiveDate) -> Result<()> {
    let created = ExcelDateTime::from_ymd(date.year() as u16, date.month() as u8, date.day() as u8)
        .with_context(|| format!("Invalid document date {date}"))?;
    let properties = DocProperties::new()
        .set_title(title)
        .set_creation_datetime(&created);
    workbook.set_properties(&properties);
    Ok(())
}

/// Serializes the workbook to bytes.
pub fn workbook_bytes(workbook: &mut Workbook) -> Result<Vec<u8>> {
    workbook
        .save_to_buffer()
        .context("Failed to save workbook to buffer")
}
