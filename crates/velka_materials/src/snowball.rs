//! Debt snowball template: a fixed block of blank debt rows with totals.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_xlsxwriter::Workbook;
use rust_xlsxwriter::utility::row_col_to_cell;
use velka_docs::xlsx;

use crate::styles;

pub const TITLE: &str = "Velkavapaus.fi - Velkalumipallo v1";
pub const SHEET_NAME: &str = "Velat";

pub const HEADERS: [&str; 6] = [
    "Velka",
    "Jäljellä (EUR)",
    "Korko %",
    "Minimi/kk (EUR)",
    "Eräpäivä",
    "Huomio",
];

pub const DEBT_ROWS: u32 = 12;

// Zero-based sheet coordinates: header on row 3, debts on rows 4-15.
const HEADER_ROW: u32 = 2;
const FIRST_DEBT_ROW: u32 = 3;
const COL_BALANCE: u16 = 1;
const COL_MINIMUM: u16 = 3;

pub fn workbook(date: NaiveDate) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .with_context(|| format!("Failed to set sheet name: {SHEET_NAME}"))?;

    let columns = HEADERS.len() as u16;
    xlsx::write_title(worksheet, columns - 1, TITLE, &styles::title_format())?;
    xlsx::write_header_row(worksheet, HEADER_ROW, &HEADERS, &styles::header())?;

    let bordered = styles::bordered();
    let bordered_money = styles::bordered_money();
    let last_debt_row = FIRST_DEBT_ROW + DEBT_ROWS - 1;
    for row in FIRST_DEBT_ROW..=last_debt_row {
        for col in 0..columns {
            let format = if col == COL_BALANCE || col == COL_MINIMUM {
                &bordered_money
            } else {
                &bordered
            };
            worksheet
                .write_blank(row, col, format)
                .with_context(|| format!("Failed to format {}", row_col_to_cell(row, col)))?;
        }
    }

    let total_row = last_debt_row + 1;
    let money = styles::money();
    worksheet.write_string_with_format(total_row, 0, "Yhteensä", &styles::bold())?;
    for col in [COL_BALANCE, COL_MINIMUM] {
        let total = xlsx::sum_formula(col, FIRST_DEBT_ROW, last_debt_row);
        worksheet
            .write_formula_with_format(total_row, col, total.as_str(), &money)
            .with_context(|| format!("Failed to write total formula {total}"))?;
    }

    xlsx::set_uniform_column_width(worksheet, columns, styles::COLUMN_WIDTH)?;
    xlsx::set_document_properties(&mut workbook, TITLE, date)?;
    Ok(workbook)
}

pub fn render(date: NaiveDate) -> Result<Vec<u8>> {
    xlsx::workbook_bytes(&mut workbook(date)?)
}
