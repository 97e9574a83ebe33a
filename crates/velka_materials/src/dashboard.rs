//! Monthly dashboard: three numbers to fill in once a month.

use anyhow::Result;
use chrono::NaiveDate;
use velka_docs::pdf::{Document, Table, TableStyle, mm};

use crate::styles;

pub const TITLE: &str = "Velkavapaus - Kuukausi-dashboard";

pub const METRICS_HEADER: [&str; 3] = ["Mittari", "Tämän kuun arvo", "Edellinen kuukausi"];

pub const METRICS: [&str; 3] = [
    "Velkojen kokonaismäärä (EUR)",
    "Kuukauden nettosaldo (EUR)",
    "Hyökkäyssumma (EUR)",
];

pub const NOTE_ROWS: usize = 6;

fn metrics_table() -> Result<Table> {
    let rows = std::iter::once(METRICS_HEADER.map(String::from).to_vec())
        .chain(
            METRICS
                .iter()
                .map(|label| vec![label.to_string(), String::new(), String::new()]),
        )
        .collect();
    let style = TableStyle {
        header_font_size: 11.0,
        body_font_size: 11.0,
        padding_top: 8.0,
        padding_bottom: 8.0,
        ..styles::grid_table()
    };
    Ok(Table::new(rows, vec![mm(70.0), mm(40.0), mm(40.0)])?.with_style(style))
}

fn notes_table() -> Result<Table> {
    let table = Table::new(vec![vec![String::new()]; NOTE_ROWS], vec![mm(150.0)])?
        .with_style(styles::plain_grid())
        .with_row_heights(vec![mm(12.0); NOTE_ROWS])?;
    Ok(table)
}

pub fn document(date: NaiveDate) -> Result<Document> {
    let mut doc = Document::new(TITLE, styles::page()).with_creation_date(date);
    doc.heading(TITLE, styles::h1())
        .paragraph("Täytä kerran kuussa. Kolme lukua riittää.", styles::body())
        .table(metrics_table()?)
        .spacer(16.0)
        .heading("Muistiinpanot / päätökset seuraavalle kuulle:", styles::h2())
        .table(notes_table()?);
    Ok(doc)
}

pub fn render(date: NaiveDate) -> Result<Vec<u8>> {
    document(date)?.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> Document {
        document(NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()).unwrap()
    }

    #[test]
    fn test_metrics_table_has_blank_values() {
        let doc = doc();
        let metrics = doc.tables().next().unwrap();
        assert_eq!(metrics.row_count(), 4);
        assert_eq!(metrics.column_count(), 3);
        assert_eq!(metrics.cell(1, 0), Some(METRICS[0]));
        for row in 1..4 {
            assert_eq!(metrics.cell(row, 1), Some(""));
            assert_eq!(metrics.cell(row, 2), Some(""));
        }
        assert_eq!(metrics.style().padding_top, 8.0);
    }

    #[test]
    fn test_six_blank_note_rows() {
        let doc = doc();
        let notes = doc.tables().nth(1).unwrap();
        assert_eq!(notes.row_count(), 6);
        assert_eq!(notes.column_count(), 1);
        assert!(notes.rows().iter().all(|r| r[0].is_empty()));
        assert!(notes.style().grid.is_some());
        assert!(notes.style().header_background.is_none());
        assert_eq!(notes.row_heights().unwrap().len(), 6);
    }

    #[test]
    fn test_renders_one_page_with_grid() {
        let doc = doc();
        assert_eq!(doc.page_count().unwrap(), 1);
        let text = String::from_utf8(doc.render().unwrap()).unwrap();
        // 4×3 metrics cells + 6 note cells
        assert_eq!(text.matches("re S").count(), 18);
    }
}
