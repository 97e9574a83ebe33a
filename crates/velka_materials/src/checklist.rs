//! 14-point checklist rendered as a checkbox table.

use anyhow::Result;
use chrono::NaiveDate;
use velka_docs::pdf::{Document, Table, mm};

use crate::styles;

pub const TITLE: &str = "Velkavapaus - 14 kohdan tarkistuslista";

pub const ITEMS: [&str; 14] = [
    "Olen listannut kaikki velat (saldo, korko, eräpäivä).",
    "Tiedän pakolliset kuukausimenoni.",
    "Budjetti on tehty (arvio + toteutunut).",
    "Minimierät on automatisoitu.",
    "Olen valinnut strategian.",
    "Hyökkäyssumma on päätetty.",
    "Olen etsinyt kuluvuotoja.",
    "Yksi kuluvuoto on katkaistu.",
    "Olen ollut yhteydessä velkojaan.",
    "Eräpäivät on synkronoitu.",
    "Minulla on viikkorutiini.",
    "Tiedän kuukauden nettosaldon.",
    "En ole ottanut uutta velkaa.",
    "Seuraava askel on kirjattu.",
];

fn checklist_table() -> Result<Table> {
    // First column stays blank for a hand-drawn tick.
    let rows = std::iter::once("Tehtävä")
        .chain(ITEMS)
        .map(|item| vec![String::new(), item.to_string()])
        .collect();
    Ok(Table::new(rows, vec![mm(12.0), mm(150.0)])?.with_style(styles::grid_table()))
}

pub fn document(date: NaiveDate) -> Result<Document> {
    let mut doc = Document::new(TITLE, styles::page()).with_creation_date(date);
    doc.heading(TITLE, styles::h1())
        .paragraph(crate::date_line(date), styles::small())
        .spacer(8.0)
        .table(checklist_table()?);
    Ok(doc)
}

pub fn render(date: NaiveDate) -> Result<Vec<u8>> {
    document(date)?.render()
}
