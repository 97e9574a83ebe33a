//! Helpers for inspecting generated XLSX packages.

use std::io::{Cursor, Read};

/// Reads one part of an XLSX package as text.
pub fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut part = archive.by_name(name).unwrap();
    let mut xml = String::new();
    part.read_to_string(&mut xml).unwrap();
    xml
}

/// Resolves the formatting of individual cells in the first worksheet
/// through `<cellXfs>` in `xl/styles.xml`.
pub struct CellFormats {
    sheet: String,
    styles: String,
}

impl CellFormats {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            sheet: read_part(bytes, "xl/worksheets/sheet1.xml"),
            styles: read_part(bytes, "xl/styles.xml"),
        }
    }

    /// The `<xf>` record applied to `cell`, e.g. `"B4"`.
    fn xf(&self, cell: &str) -> String {
        let open = format!("<c r=\"{cell}\"");
        let start = self
            .sheet
            .find(&open)
            .unwrap_or_else(|| panic!("no cell {cell}"));
        let tag = &self.sheet[start..start + self.sheet[start..].find('>').unwrap()];
        let index = attr(tag, "s").unwrap_or(0) as usize;

        let xfs = section(&self.styles, "<cellXfs", "</cellXfs>");
        let record = xfs
            .split("<xf ")
            .nth(index + 1)
            .unwrap_or_else(|| panic!("no cellXfs entry {index}"));
        format!(" {record}")
    }

    pub fn num_fmt_id(&self, cell: &str) -> u32 {
        attr(&self.xf(cell), "numFmtId").unwrap_or(0)
    }

    /// The `<border>` element of `cell`, or `None` for the empty default.
    pub fn border(&self, cell: &str) -> Option<String> {
        let id = attr(&self.xf(cell), "borderId").unwrap_or(0) as usize;
        if id == 0 {
            return None;
        }
        let borders = section(&self.styles, "<borders", "</borders>");
        let body = &borders[borders.find('>').unwrap() + 1..];
        body.split("</border>").nth(id).map(str::to_string)
    }

    /// Id of the custom number format with the given (XML-escaped) code.
    pub fn custom_num_fmt(&self, code: &str) -> u32 {
        let marker = format!("formatCode=\"{code}\"");
        let end = self
            .styles
            .find(&marker)
            .unwrap_or_else(|| panic!("no numFmt {code}"));
        let start = self.styles[..end].rfind("<numFmt ").unwrap();
        attr(&self.styles[start..end], "numFmtId").unwrap()
    }

    /// Asserts a thin `#D0D0D0` border on all four sides of `cell`.
    pub fn assert_thin_grey_border(&self, cell: &str) {
        let border = self
            .border(cell)
            .unwrap_or_else(|| panic!("{cell} has no border"));
        for side in ["left", "right", "top", "bottom"] {
            assert!(
                border.contains(&format!("<{side} style=\"thin\">")),
                "{cell} missing thin {side} border: {border}"
            );
        }
        assert!(border.contains("FFD0D0D0"), "{cell} border colour: {border}");
    }
}

/// The XML escape of the currency format code.
pub const MONEY_FORMAT_XML: &str = "#,##0.00 &quot;EUR&quot;";

fn section<'a>(xml: &'a str, open: &str, close: &str) -> &'a str {
    let start = xml.find(open).unwrap_or_else(|| panic!("no {open}"));
    let end = start + xml[start..].find(close).unwrap();
    &xml[start..end]
}

fn attr(tag: &str, name: &str) -> Option<u32> {
    let key = format!(" {name}=\"");
    let start = tag.find(&key)? + key.len();
    let end = start + tag[start..].find('"')?;
    tag[start..end].parse().ok()
}
