//! Visual constants shared by every artifact.

use rust_xlsxwriter::{Color, Format, FormatBorder};
use velka_docs::pdf::{FontFace, PageSetup, ParagraphStyle, Rgb, TableStyle, VAlign};

// ---------------------------------------------------------------------------
// PDF
// ---------------------------------------------------------------------------

/// A4 with 18 mm side margins and 16 mm top/bottom margins.
pub fn page() -> PageSetup {
    PageSetup::a4(18.0, 16.0)
}

pub fn body() -> ParagraphStyle {
    ParagraphStyle::new(FontFace::Helvetica, 11.0, 15.0)
        .space_before(6.0)
        .space_after(8.0)
}

pub fn h1() -> ParagraphStyle {
    ParagraphStyle::new(FontFace::HelveticaBold, 20.0, 22.0).space_after(12.0)
}

pub fn h2() -> ParagraphStyle {
    ParagraphStyle::new(FontFace::HelveticaBold, 14.0, 18.0)
        .space_before(12.0)
        .space_after(8.0)
}

/// Grey date-stamp line.
pub fn small() -> ParagraphStyle {
    ParagraphStyle::new(FontFace::Helvetica, 9.0, 12.0)
        .space_before(6.0)
        .color(Rgb::GREY)
}

/// Thin light-grey grid with a bold header on a white-smoke band.
pub fn grid_table() -> TableStyle {
    TableStyle {
        header_background: Some(Rgb::WHITE_SMOKE),
        header_font: FontFace::HelveticaBold,
        grid: Some((0.25, Rgb::LIGHT_GREY)),
        ..Default::default()
    }
}

/// Grid only, no header treatment.
pub fn plain_grid() -> TableStyle {
    TableStyle {
        grid: Some((0.25, Rgb::LIGHT_GREY)),
        ..Default::default()
    }
}

pub fn top_aligned(style: TableStyle) -> TableStyle {
    TableStyle {
        valign: VAlign::Top,
        ..style
    }
}

// ---------------------------------------------------------------------------
// XLSX
// ---------------------------------------------------------------------------

pub const MONEY_FORMAT: &str = "#,##0.00 \"EUR\"";
pub const COLUMN_WIDTH: f64 = 18.0;

const BORDER_COLOR: Color = Color::RGB(0xD0D0D0);
const HEADER_FILL: Color = Color::RGB(0xF2F2F2);

pub fn title_format() -> Format {
    Format::new().set_bold().set_font_size(14)
}

pub fn bold() -> Format {
    Format::new().set_bold()
}

pub fn header() -> Format {
    bordered().set_bold().set_background_color(HEADER_FILL)
}

pub fn bordered() -> Format {
    Format::new()
        .set_border(FormatBorder::Thin)
        .set_border_color(BORDER_COLOR)
}

pub fn money() -> Format {
    Format::new().set_num_format(MONEY_FORMAT)
}

pub fn bordered_money() -> Format {
    bordered().set_num_format(MONEY_FORMAT)
}
