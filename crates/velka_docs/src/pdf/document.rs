use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::debug;

use super::layout::{LayoutError, Layouter};
use super::style::{PageSetup, ParagraphStyle, TableStyle};
use super::writer::PdfBuilder;

/// A span of text inside a paragraph. `\n` in `text` forces a line break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub bold: bool,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

/// Styled, word-wrapped text.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    pub style: ParagraphStyle,
}

impl Paragraph {
    pub fn new(text: impl Into<String>, style: ParagraphStyle) -> Self {
        Self {
            runs: vec![Run::plain(text)],
            style,
        }
    }

    pub fn rich(runs: Vec<Run>, style: ParagraphStyle) -> Self {
        Self { runs, style }
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// A fixed grid of text cells. Row 0 is the header row.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    rows: Vec<Vec<String>>,
    col_widths: Vec<f64>,
    row_heights: Option<Vec<f64>>,
    style: TableStyle,
}

impl Table {
    /// Builds a table; every row must have one cell per column width.
    pub fn new(rows: Vec<Vec<String>>, col_widths: Vec<f64>) -> Result<Self, LayoutError> {
        if col_widths.is_empty() {
            return Err(LayoutError::NoColumns);
        }
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != col_widths.len())
        {
            return Err(LayoutError::RaggedRow {
                row,
                found: cells.len(),
                expected: col_widths.len(),
            });
        }
        Ok(Self {
            rows,
            col_widths,
            row_heights: None,
            style: TableStyle::default(),
        })
    }

    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    /// Fixes the height of every row instead of sizing rows to their text.
    pub fn with_row_heights(mut self, heights: Vec<f64>) -> Result<Self, LayoutError> {
        if heights.len() != self.rows.len() {
            return Err(LayoutError::RowHeights {
                heights: heights.len(),
                rows: self.rows.len(),
            });
        }
        self.row_heights = Some(heights);
        Ok(self)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.col_widths.len()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    pub fn col_widths(&self) -> &[f64] {
        &self.col_widths
    }

    pub fn row_heights(&self) -> Option<&[f64]> {
        self.row_heights.as_deref()
    }

    pub fn style(&self) -> &TableStyle {
        &self.style
    }

    pub fn width(&self) -> f64 {
        self.col_widths.iter().sum()
    }
}

/// An atomic layout unit.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Kept on the same page as the start of the following block.
    Heading(Paragraph),
    Paragraph(Paragraph),
    Spacer(f64),
    Table(Table),
    PageBreak,
}

/// An ordered list of blocks rendered onto paginated output.
#[derive(Debug, Clone)]
pub struct Document {
    title: String,
    page: PageSetup,
    creation_date: Option<NaiveDate>,
    blocks: Vec<Block>,
}

impl Document {
    pub fn new(title: impl Into<String>, page: PageSetup) -> Self {
        Self {
            title: title.into(),
            page,
            creation_date: None,
            blocks: Vec::new(),
        }
    }

    /// Date written to the PDF Info dictionary.
    pub fn with_creation_date(mut self, date: NaiveDate) -> Self {
        self.creation_date = Some(date);
        self
    }

    pub fn push(&mut self, block: Block) -> &mut Self {
        self.blocks.push(block);
        self
    }

    pub fn heading(&mut self, text: impl Into<String>, style: ParagraphStyle) -> &mut Self {
        self.push(Block::Heading(Paragraph::new(text, style)))
    }

    pub fn paragraph(&mut self, text: impl Into<String>, style: ParagraphStyle) -> &mut Self {
        self.push(Block::Paragraph(Paragraph::new(text, style)))
    }

    pub fn rich_paragraph(&mut self, runs: Vec<Run>, style: ParagraphStyle) -> &mut Self {
        self.push(Block::Paragraph(Paragraph::rich(runs, style)))
    }

    pub fn spacer(&mut self, height: f64) -> &mut Self {
        self.push(Block::Spacer(height))
    }

    pub fn table(&mut self, table: Table) -> &mut Self {
        self.push(Block::Table(table))
    }

    pub fn page_break(&mut self) -> &mut Self {
        self.push(Block::PageBreak)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// All tables in block order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }

    /// Lays the blocks out and returns one content stream per page.
    pub fn layout(&self) -> Result<Vec<String>, LayoutError> {
        Layouter::new(self.page).run(&self.blocks)
    }

    pub fn page_count(&self) -> Result<usize, LayoutError> {
        Ok(self.layout()?.len())
    }

    /// Renders the document to PDF bytes.
    pub fn render(&self) -> Result<Vec<u8>> {
        let pages = self
            .layout()
            .with_context(|| format!("Failed to lay out \"{}\"", self.title))?;
        debug!(title = %self.title, pages = pages.len(), "Laid out document");

        let builder = PdfBuilder::new(&self.title, self.page, self.creation_date);
        Ok(builder.build(&pages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::fonts::FontFace;

    fn body() -> ParagraphStyle {
        ParagraphStyle::new(FontFace::Helvetica, 11.0, 15.0)
    }

    #[test]
    fn test_table_dimensions() {
        let table = Table::new(
            vec![
                vec!["A".into(), "B".into()],
                vec!["1".into(), "2".into()],
                vec!["3".into(), "4".into()],
            ],
            vec![50.0, 100.0],
        )
        .unwrap();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.cell(2, 1), Some("4"));
        assert_eq!(table.cell(3, 0), None);
        assert!((table.width() - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_ragged_table_rejected() {
        let err = Table::new(
            vec![vec!["A".into(), "B".into()], vec!["only one".into()]],
            vec![50.0, 50.0],
        )
        .unwrap_err();
        assert_eq!(
            err,
            LayoutError::RaggedRow {
                row: 1,
                found: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn test_table_without_columns_rejected() {
        assert_eq!(
            Table::new(vec![], vec![]).unwrap_err(),
            LayoutError::NoColumns
        );
    }

    #[test]
    fn test_row_heights_must_match_rows() {
        let table = Table::new(vec![vec![String::new()]; 3], vec![100.0]).unwrap();
        assert!(table.clone().with_row_heights(vec![10.0; 2]).is_err());
        let table = table.with_row_heights(vec![10.0; 3]).unwrap();
        assert_eq!(table.row_heights(), Some(&[10.0, 10.0, 10.0][..]));
    }

    #[test]
    fn test_builder_keeps_block_order() {
        let mut doc = Document::new("Order", PageSetup::a4(18.0, 16.0));
        doc.heading("Title", body())
            .spacer(8.0)
            .paragraph("Body", body())
            .page_break();
        let kinds: Vec<&str> = doc
            .blocks()
            .iter()
            .map(|b| match b {
                Block::Heading(_) => "heading",
                Block::Paragraph(_) => "paragraph",
                Block::Spacer(_) => "spacer",
                Block::Table(_) => "table",
                Block::PageBreak => "break",
            })
            .collect();
        assert_eq!(kinds, ["heading", "spacer", "paragraph", "break"]);
    }

    #[test]
    fn test_render_with_creation_date() {
        let mut doc = Document::new("Saved", PageSetup::a4(18.0, 16.0))
            .with_creation_date(NaiveDate::from_ymd_opt(2025, 3, 4).unwrap());
        doc.paragraph("Hello", body());
        let bytes = doc.render().unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));
        assert!(String::from_utf8_lossy(&bytes).contains("/CreationDate (D:20250304000000)"));
    }

    #[test]
    fn test_paragraph_text_joins_runs() {
        let p = Paragraph::rich(vec![Run::bold("1. "), Run::plain("Lumipallo")], body());
        assert_eq!(p.text(), "1. Lumipallo");
    }
}
