use chrono::NaiveDate;

use super::fonts::{FontFace, encode_win_ansi};
use super::style::PageSetup;

/// Escape text for a PDF string literal. Text is WinAnsi-encoded and bytes
/// outside printable ASCII are written as octal escapes, so the result is
/// always ASCII.
pub(crate) fn pdf_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in encode_win_ansi(s) {
        match byte {
            b'\\' => out.push_str("\\\\"),
            b'(' => out.push_str("\\("),
            b')' => out.push_str("\\)"),
            0x20..=0x7E => out.push(byte as char),
            _ => out.push_str(&format!("\\{byte:03o}")),
        }
    }
    out
}

/// PDF 1.4 file builder for pre-laid-out page content streams.
///
/// Object layout: 1 catalog, 2 page tree, 3-4 fonts, 5 info, then a
/// (page, content) object pair per page.
pub(crate) struct PdfBuilder {
    title: String,
    page: PageSetup,
    creation_date: Option<NaiveDate>,
}

const FONTS: [FontFace; 2] = [FontFace::Helvetica, FontFace::HelveticaBold];
const FIRST_PAGE_OBJ: usize = 6;

impl PdfBuilder {
    pub fn new(title: &str, page: PageSetup, creation_date: Option<NaiveDate>) -> Self {
        Self {
            title: title.to_string(),
            page,
            creation_date,
        }
    }

    fn page_obj(index: usize) -> usize {
        FIRST_PAGE_OBJ + index * 2
    }

    /// Build the complete PDF file as bytes.
    pub fn build(&self, pages: &[String]) -> Vec<u8> {
        let mut pdf = String::new();
        let mut offsets: Vec<usize> = Vec::new();

        pdf.push_str("%PDF-1.4\n");

        // Obj 1: Catalog
        offsets.push(pdf.len());
        pdf.push_str("1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");

        // Obj 2: Pages
        let kids: Vec<String> = (0..pages.len())
            .map(|i| format!("{} 0 R", Self::page_obj(i)))
            .collect();
        offsets.push(pdf.len());
        pdf.push_str(&format!(
            "2 0 obj\n<< /Type /Pages /Kids [{}] /Count {} >>\nendobj\n",
            kids.join(" "),
            pages.len()
        ));

        // Obj 3-4: Fonts
        for (i, font) in FONTS.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.push_str(&format!(
                "{} 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>\nendobj\n",
                3 + i,
                font.base_font()
            ));
        }

        // Obj 5: Info
        offsets.push(pdf.len());
        pdf.push_str(&format!(
            "5 0 obj\n<< /Title ({}) /Producer (velka_docs)",
            pdf_escape(&self.title)
        ));
        if let Some(date) = self.creation_date {
            pdf.push_str(&format!(
                " /CreationDate (D:{}000000)",
                date.format("%Y%m%d")
            ));
        }
        pdf.push_str(" >>\nendobj\n");

        let fonts: String = FONTS
            .iter()
            .enumerate()
            .map(|(i, f)| format!("/{} {} 0 R", f.resource_name(), 3 + i))
            .collect::<Vec<_>>()
            .join(" ");

        for (i, content) in pages.iter().enumerate() {
            let page_obj = Self::page_obj(i);

            offsets.push(pdf.len());
            pdf.push_str(&format!(
                "{page_obj} 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
                 /Contents {} 0 R /Resources << /Font << {fonts} >> >> >>\nendobj\n",
                self.page.width,
                self.page.height,
                page_obj + 1
            ));

            offsets.push(pdf.len());
            pdf.push_str(&format!(
                "{} 0 obj\n<< /Length {} >>\nstream\n{}\nendstream\nendobj\n",
                page_obj + 1,
                content.len(),
                content
            ));
        }

        // Cross-reference table
        let xref_offset = pdf.len();
        let num_objects = offsets.len() + 1; // +1 for free entry
        pdf.push_str(&format!("xref\n0 {num_objects}\n"));
        pdf.push_str("0000000000 65535 f \n");
        for offset in &offsets {
            pdf.push_str(&format!("{:010} 00000 n \n", offset));
        }

        pdf.push_str(&format!(
            "trailer\n<< /Size {num_objects} /Root 1 0 R /Info 5 0 R >>\n"
        ));
        pdf.push_str(&format!("startxref\n{xref_offset}\n%%EOF\n"));

        pdf.into_bytes()
    }
}
