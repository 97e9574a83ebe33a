//! Budget template: estimate vs. actual income with per-row differences.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_xlsxwriter::Workbook;
use velka_docs::xlsx;

use crate::styles;

pub const TITLE: &str = "Velkavapaus.fi - Budjettipohja v1";
pub const SHEET_NAME: &str = "Budjetti";

pub const HEADERS: [&str; 5] = [
    "Kategoria",
    "Arvio (EUR)",
    "Toteutunut (EUR)",
    "Ero (EUR)",
    "Huomio",
];

pub const INCOME_ROWS: [&str; 3] = ["Palkka", "Tuet", "Muut tulot"];

// Zero-based sheet coordinates.
const HEADER_ROW: u32 = 2;
const FIRST_INCOME_ROW: u32 = 3;
const COL_ESTIMATE: u16 = 1;
const COL_ACTUAL: u16 = 2;
const COL_DIFFERENCE: u16 = 3;
const COL_NOTE: u16 = 4;

pub fn workbook(date: NaiveDate) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .with_context(|| format!("Failed to set sheet name: {SHEET_NAME}"))?;

    let last_col = HEADERS.len() as u16 - 1;
    xlsx::write_title(worksheet, last_col, TITLE, &styles::title_format())?;
    xlsx::write_header_row(worksheet, HEADER_ROW, &HEADERS, &styles::header())?;

    let bordered = styles::bordered();
    let bordered_money = styles::bordered_money();
    for (i, category) in INCOME_ROWS.iter().enumerate() {
        let row = FIRST_INCOME_ROW + i as u32;
        worksheet
            .write_string_with_format(row, 0, *category, &bordered)
            .with_context(|| format!("Failed to write category {category}"))?;
        worksheet.write_blank(row, COL_ESTIMATE, &bordered_money)?;
        worksheet.write_blank(row, COL_ACTUAL, &bordered_money)?;
        let difference = xlsx::difference_formula(row, COL_ACTUAL, COL_ESTIMATE);
        worksheet
            .write_formula_with_format(row, COL_DIFFERENCE, difference.as_str(), &bordered_money)
            .with_context(|| format!("Failed to write difference formula {difference}"))?;
        worksheet.write_blank(row, COL_NOTE, &bordered)?;
    }

    let last_income_row = FIRST_INCOME_ROW + INCOME_ROWS.len() as u32 - 1;
    let total_row = last_income_row + 1;
    let money = styles::money();
    worksheet.write_string_with_format(total_row, 0, "Yhteensä tulot", &styles::bold())?;
    for col in [COL_ESTIMATE, COL_ACTUAL] {
        let total = xlsx::sum_formula(col, FIRST_INCOME_ROW, last_income_row);
        worksheet
            .write_formula_with_format(total_row, col, total.as_str(), &money)
            .with_context(|| format!("Failed to write total formula {total}"))?;
    }

    xlsx::set_uniform_column_width(worksheet, HEADERS.len() as u16, styles::COLUMN_WIDTH)?;
    xlsx::set_document_properties(&mut workbook, TITLE, date)?;
    Ok(workbook)
}

pub fn render(date: NaiveDate) -> Result<Vec<u8>> {
    xlsx::workbook_bytes(&mut workbook(date)?)
}
