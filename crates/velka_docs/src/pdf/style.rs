use super::fonts::FontFace;

/// Points per millimetre.
const PT_PER_MM: f64 = 72.0 / 25.4;

/// Converts millimetres to PDF points.
pub fn mm(value: f64) -> f64 {
    value * PT_PER_MM
}

/// An RGB colour with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub f64, pub f64, pub f64);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0.0, 0.0, 0.0);
    pub const GREY: Rgb = Rgb(0.5, 0.5, 0.5);
    pub const LIGHT_GREY: Rgb = Rgb(0.827, 0.827, 0.827);
    pub const WHITE_SMOKE: Rgb = Rgb(0.96, 0.96, 0.96);

    pub(crate) fn fill_op(self) -> String {
        format!("{:.3} {:.3} {:.3} rg", self.0, self.1, self.2)
    }

    pub(crate) fn stroke_op(self) -> String {
        format!("{:.3} {:.3} {:.3} RG", self.0, self.1, self.2)
    }
}

/// Page size and margins, all in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSetup {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl PageSetup {
    /// A4 portrait with the given margins in millimetres.
    pub fn a4(left_right_mm: f64, top_bottom_mm: f64) -> Self {
        Self {
            width: 595.28,
            height: 841.89,
            margin_left: mm(left_right_mm),
            margin_right: mm(left_right_mm),
            margin_top: mm(top_bottom_mm),
            margin_bottom: mm(top_bottom_mm),
        }
    }

    pub fn frame_width(&self) -> f64 {
        self.width - self.margin_left - self.margin_right
    }

    pub fn frame_height(&self) -> f64 {
        self.height - self.margin_top - self.margin_bottom
    }
}

/// Typography for a paragraph or heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParagraphStyle {
    pub font: FontFace,
    pub font_size: f64,
    /// Baseline-to-baseline distance.
    pub leading: f64,
    pub space_before: f64,
    pub space_after: f64,
    pub color: Rgb,
}

impl ParagraphStyle {
    pub fn new(font: FontFace, font_size: f64, leading: f64) -> Self {
        Self {
            font,
            font_size,
            leading,
            space_before: 0.0,
            space_after: 0.0,
            color: Rgb::BLACK,
        }
    }

    pub fn space_before(mut self, points: f64) -> Self {
        self.space_before = points;
        self
    }

    pub fn space_after(mut self, points: f64) -> Self {
        self.space_after = points;
        self
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }
}

/// Vertical placement of text inside a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    Top,
    Middle,
    #[default]
    Bottom,
}

/// Visual attributes applied to a whole table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStyle {
    pub header_background: Option<Rgb>,
    pub header_font: FontFace,
    pub header_font_size: f64,
    pub body_font: FontFace,
    pub body_font_size: f64,
    pub valign: VAlign,
    pub padding_left: f64,
    pub padding_right: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
    /// Grid line width and colour; `None` draws no grid.
    pub grid: Option<(f64, Rgb)>,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            header_background: None,
            header_font: FontFace::Helvetica,
            header_font_size: 10.0,
            body_font: FontFace::Helvetica,
            body_font_size: 10.0,
            valign: VAlign::Bottom,
            padding_left: 6.0,
            padding_right: 6.0,
            padding_top: 3.0,
            padding_bottom: 3.0,
            grid: None,
        }
    }
}

impl TableStyle {
    /// Leading used for a cell font size.
    pub(crate) fn leading_for(font_size: f64) -> f64 {
        font_size * 1.2
    }
}
