//! Flow layout: word wrapping and pagination of blocks into page content
//! streams.

use std::fmt::Write as _;

use thiserror::Error;
use tracing::debug;

use super::document::{Block, Paragraph, Run, Table};
use super::fonts::FontFace;
use super::style::{PageSetup, TableStyle, VAlign};
use super::writer::pdf_escape;

/// Slack for floating point comparisons against the frame edges.
const EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("table has no columns")]
    NoColumns,

    #[error("table row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("table has {heights} row heights for {rows} rows")]
    RowHeights { heights: usize, rows: usize },

    #[error("table row {row} is {height:.1}pt tall but the page frame is {frame:.1}pt")]
    RowTooTall { row: usize, height: f64, frame: f64 },
}

// ---------------------------------------------------------------------------
// Line breaking
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Segment {
    pub text: String,
    pub font: FontFace,
}

/// One laid-out line: font segments and their total width at the wrap size.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Line {
    pub segments: Vec<Segment>,
    pub width: f64,
}

impl Line {
    fn push(&mut self, text: &str, font: FontFace, size: f64) {
        self.width += font.text_width(text, size);
        match self.segments.last_mut() {
            Some(last) if last.font == font => last.text.push_str(text),
            _ => self.segments.push(Segment {
                text: text.to_string(),
                font,
            }),
        }
    }

    fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[cfg(test)]
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

enum Token {
    /// A whitespace-free word; may mix fonts when runs meet mid-word.
    Word(Vec<Segment>),
    Break,
}

fn tokenize(runs: &[Run], base: FontFace) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word: Vec<Segment> = Vec::new();

    for run in runs {
        let font = if run.bold { base.bold() } else { base };
        let mut buf = String::new();
        for c in run.text.chars() {
            if c.is_whitespace() {
                if !buf.is_empty() {
                    word.push(Segment {
                        text: std::mem::take(&mut buf),
                        font,
                    });
                }
                if !word.is_empty() {
                    tokens.push(Token::Word(std::mem::take(&mut word)));
                }
                if c == '\n' {
                    tokens.push(Token::Break);
                }
            } else {
                buf.push(c);
            }
        }
        if !buf.is_empty() {
            word.push(Segment { text: buf, font });
        }
    }
    if !word.is_empty() {
        tokens.push(Token::Word(word));
    }
    tokens
}

/// Greedy word wrap. A single word wider than `max_width` gets a line of its
/// own and overflows.
pub(crate) fn wrap(runs: &[Run], base: FontFace, size: f64, max_width: f64) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut line = Line::default();

    for token in tokenize(runs, base) {
        match token {
            Token::Break => lines.push(std::mem::take(&mut line)),
            Token::Word(segments) => {
                let word_width: f64 = segments
                    .iter()
                    .map(|s| s.font.text_width(&s.text, size))
                    .sum();
                if !line.is_empty() {
                    let space_font = line.segments.last().map_or(base, |s| s.font);
                    let space = space_font.text_width(" ", size);
                    if line.width + space + word_width > max_width + EPSILON {
                        lines.push(std::mem::take(&mut line));
                    } else {
                        line.push(" ", space_font, size);
                    }
                }
                for segment in &segments {
                    line.push(&segment.text, segment.font, size);
                }
            }
        }
    }
    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Walks the block list top to bottom, emitting one content stream per page.
pub(crate) struct Layouter {
    page: PageSetup,
    pages: Vec<String>,
    current: String,
    y: f64,
    has_content: bool,
}

impl Layouter {
    pub fn new(page: PageSetup) -> Self {
        Self {
            page,
            pages: Vec::new(),
            current: String::new(),
            y: page.height - page.margin_top,
            has_content: false,
        }
    }

    pub fn run(mut self, blocks: &[Block]) -> Result<Vec<String>, LayoutError> {
        for (index, block) in blocks.iter().enumerate() {
            match block {
                Block::Heading(p) => {
                    let next_line = blocks.get(index + 1).map_or(0.0, first_line_height);
                    self.paragraph(p, next_line);
                }
                Block::Paragraph(p) => self.paragraph(p, 0.0),
                Block::Spacer(height) => self.spacer(*height),
                Block::Table(table) => self.table(table)?,
                Block::PageBreak => {
                    if self.has_content {
                        self.new_page();
                    }
                }
            }
        }
        if self.has_content || self.pages.is_empty() {
            self.pages.push(self.current);
        }
        Ok(self.pages)
    }

    fn bottom(&self) -> f64 {
        self.page.margin_bottom
    }

    fn remaining(&self) -> f64 {
        self.y - self.bottom()
    }

    fn new_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
        self.y = self.page.height - self.page.margin_top;
        self.has_content = false;
    }

    /// `keep_with` is extra height that must fit below the whole paragraph
    /// (the first line of whatever follows a heading).
    fn paragraph(&mut self, p: &Paragraph, keep_with: f64) {
        let style = &p.style;
        if self.has_content {
            self.y -= style.space_before;
        }

        let lines = wrap(&p.runs, style.font, style.font_size, self.page.frame_width());
        if keep_with > 0.0 {
            let needed = lines.len() as f64 * style.leading + style.space_after + keep_with;
            if self.has_content && needed > self.remaining() + EPSILON {
                self.new_page();
            }
        }

        for line in &lines {
            if self.has_content && style.leading > self.remaining() + EPSILON {
                self.new_page();
            }
            let baseline = self.y - style.font_size;
            let _ = writeln!(self.current, "{}", style.color.fill_op());
            self.text_line(line, self.page.margin_left, baseline, style.font_size);
            self.y -= style.leading;
            self.has_content = true;
        }

        self.y -= style.space_after;
    }

    fn spacer(&mut self, height: f64) {
        if height > self.remaining() + EPSILON {
            self.new_page();
        } else {
            self.y -= height;
        }
    }

    fn table(&mut self, table: &Table) -> Result<(), LayoutError> {
        let style = table.style();
        let frame = self.page.frame_height();
        let width = table.width();
        if width > self.page.frame_width() + EPSILON {
            debug!(
                width,
                frame = self.page.frame_width(),
                "Table overflows the page frame"
            );
        }
        let x0 = self.page.margin_left + (self.page.frame_width() - width) / 2.0;

        for (row_idx, row) in table.rows().iter().enumerate() {
            let is_header = row_idx == 0;
            let (font, size) = if is_header {
                (style.header_font, style.header_font_size)
            } else {
                (style.body_font, style.body_font_size)
            };
            let leading = TableStyle::leading_for(size);

            let cells: Vec<Vec<Line>> = row
                .iter()
                .zip(table.col_widths())
                .map(|(text, col_width)| {
                    let inner = col_width - style.padding_left - style.padding_right;
                    wrap(&[Run::plain(text.as_str())], font, size, inner)
                })
                .collect();

            let height = match table.row_heights() {
                Some(heights) => heights[row_idx],
                None => {
                    let max_lines = cells.iter().map(Vec::len).max().unwrap_or(1);
                    max_lines as f64 * leading + style.padding_top + style.padding_bottom
                }
            };
            if height > frame + EPSILON {
                return Err(LayoutError::RowTooTall {
                    row: row_idx,
                    height,
                    frame,
                });
            }
            if self.has_content && height > self.remaining() + EPSILON {
                debug!(row = row_idx, "Table continues on next page");
                self.new_page();
            }

            let top = self.y;
            let bottom = top - height;

            if let (true, Some(bg)) = (is_header, style.header_background) {
                let _ = writeln!(
                    self.current,
                    "{}\n{x0:.2} {bottom:.2} {width:.2} {height:.2} re f",
                    bg.fill_op()
                );
            }

            let _ = writeln!(self.current, "0 0 0 rg");
            let mut x = x0;
            for (lines, col_width) in cells.iter().zip(table.col_widths()) {
                let content = lines.len() as f64 * leading;
                let block_top = match style.valign {
                    VAlign::Top => top - style.padding_top,
                    VAlign::Middle => bottom + (height + content) / 2.0,
                    VAlign::Bottom => bottom + style.padding_bottom + content,
                };
                for (i, line) in lines.iter().enumerate() {
                    if line.is_empty() {
                        continue;
                    }
                    let baseline = block_top - size - i as f64 * leading;
                    self.text_line(line, x + style.padding_left, baseline, size);
                }
                x += col_width;
            }

            if let Some((line_width, color)) = style.grid {
                let _ = writeln!(self.current, "{}\n{line_width:.2} w", color.stroke_op());
                let mut x = x0;
                for col_width in table.col_widths() {
                    let _ = writeln!(
                        self.current,
                        "{x:.2} {bottom:.2} {col_width:.2} {height:.2} re S"
                    );
                    x += col_width;
                }
            }

            self.y = bottom;
            self.has_content = true;
        }
        Ok(())
    }

    fn text_line(&mut self, line: &Line, x: f64, baseline: f64, size: f64) {
        if line.is_empty() {
            return;
        }
        let _ = writeln!(self.current, "BT\n{x:.2} {baseline:.2} Td");
        for segment in &line.segments {
            let _ = writeln!(
                self.current,
                "/{} {size} Tf\n({}) Tj",
                segment.font.resource_name(),
                pdf_escape(&segment.text)
            );
        }
        let _ = writeln!(self.current, "ET");
    }
}

/// Height of the first line a block would place, used for keep-with-next.
fn first_line_height(block: &Block) -> f64 {
    match block {
        Block::Heading(p) | Block::Paragraph(p) => p.style.space_before + p.style.leading,
        Block::Table(t) => {
            let style = t.style();
            match t.row_heights() {
                Some(heights) => heights.first().copied().unwrap_or(0.0),
                None => {
                    TableStyle::leading_for(style.header_font_size)
                        + style.padding_top
                        + style.padding_bottom
                }
            }
        }
        Block::Spacer(_) | Block::PageBreak => 0.0,
    }
}
