//! Paginated PDF generation.
//!
//! Documents are built from content blocks (headings, paragraphs, spacers,
//! tables, page breaks), laid out onto pages with Helvetica metrics, and
//! serialized as PDF 1.4 with raw object construction. Uses the built-in
//! Helvetica faces, so no font files are embedded.

mod document;
mod fonts;
mod layout;
mod style;
mod writer;

pub use document::{Block, Document, Paragraph, Run, Table};
pub use fonts::FontFace;
pub use layout::LayoutError;
pub use style::{PageSetup, ParagraphStyle, Rgb, TableStyle, VAlign, mm};
