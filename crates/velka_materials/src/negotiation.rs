//! Ready-made phrasings for contacting creditors.

use anyhow::Result;
use chrono::NaiveDate;
use velka_docs::pdf::Document;

use crate::styles;

pub const TITLE: &str = "Velkavapaus - Neuvottelupohjat velkojille";

/// (subtitle, body) pairs.
pub const TEMPLATES: [(&str, &str); 4] = [
    (
        "Maksuerän pienennys",
        "Pyydän tilapäistä maksuerän pienennystä seuraavien 1-3 kuukauden ajaksi. \
         Tavoitteeni on hoitaa velkani vastuullisesti.",
    ),
    (
        "Eräpäivän siirto",
        "Onko mahdollista siirtää eräpäivää palkkapäiväni vastaavaksi?",
    ),
    (
        "Korkojen tarkistus",
        "Onko lainani korkoon mahdollista tehdä tarkistus moitteettoman maksuhistorian perusteella?",
    ),
    (
        "Maksusuunnitelma",
        "Haluaisin sopia kirjallisen maksusuunnitelman.",
    ),
];

pub fn document(date: NaiveDate) -> Result<Document> {
    let mut doc = Document::new(TITLE, styles::page()).with_creation_date(date);
    doc.heading(TITLE, styles::h1());
    for (subtitle, body) in TEMPLATES {
        doc.heading(subtitle, styles::h2())
            .paragraph(body, styles::body())
            .spacer(8.0);
    }
    Ok(doc)
}

pub fn render(date: NaiveDate) -> Result<Vec<u8>> {
    document(date)?.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use velka_docs::pdf::Block;

    #[test]
    fn test_four_subtitle_body_pairs() {
        let doc = document(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()).unwrap();
        let blocks = doc.blocks();
        // title + 4 × (subtitle, body, spacer)
        assert_eq!(blocks.len(), 13);
        for (i, (subtitle, body)) in TEMPLATES.iter().enumerate() {
            let at = 1 + i * 3;
            assert!(matches!(&blocks[at], Block::Heading(p) if p.text() == *subtitle));
            assert!(matches!(&blocks[at + 1], Block::Paragraph(p) if p.text() == *body));
            assert!(matches!(blocks[at + 2], Block::Spacer(_)));
        }
        assert_eq!(doc.tables().count(), 0);
    }

    #[test]
    fn test_renders_single_page() {
        let doc = document(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()).unwrap();
        assert_eq!(doc.page_count().unwrap(), 1);
        let text = String::from_utf8(doc.render().unwrap()).unwrap();
        assert!(text.contains("(Maksusuunnitelma) Tj"));
    }
}
