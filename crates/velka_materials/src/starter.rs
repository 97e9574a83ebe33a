//! Starter package: the 7-day getting-started guide.

use anyhow::Result;
use chrono::NaiveDate;
use velka_docs::pdf::{Document, Run, Table, TableStyle, mm};

use crate::styles;

pub const TITLE: &str = "Velkavapaus.fi - Starttipaketti v1";

const INTRO: &str = "Tämä on nopea, käytännönläheinen paketti sinulle, joka haluat saada velat \
hallintaan ilman itsesyytöstä tai perfektionismia. Tavoite: 7 päivän aikana selkeys - \
suunnitelma - ensimmäinen konkreettinen askel.";

const NEEDS: &str = "* 30-60 minuuttia rauhallista aikaa (ja kynä).\n\
* Pääsy tiliotteisiin / luottokorttilaskuihin / lainaerittelyihin.\n\
* Velkavapaus.fi:n Excel-pohjat: Budjettipohja v1 ja Velkalumipallo v1.";

pub const PROGRAM_HEADER: [&str; 4] = ["Päivä", "Tehtävä", "Kesto", "Tulos"];

pub const PROGRAM: [[&str; 4]; 7] = [
    ["1", "Listaa kaikki velat ja pakolliset menot.", "30-60 min", "Velkalista"],
    ["2", "Rakennetaan budjetti: tulot, pakolliset, joustavat.", "30-45 min", "Budjettipohja täytetty"],
    ["3", "Etsi 1-3 pientä kuluvuotoa ja päätä stoppi.", "20 min", "Ensimmäinen säästö"],
    ["4", "Valitse strategia: lumipallo tai korkojahti.", "20-30 min", "Yksi valinta"],
    ["5", "Neuvottele: laskut/korot/eräpäivät.", "15-30 min", "Ehto paranee"],
    ["6", "Aseta automaatio: veloille minimit + hyökkäys.", "15 min", "Jatkuvuus"],
    ["7", "Tee seuraavan 30 päivän sääntö.", "15 min", "Rytmi ja mittarit"],
];

const SNOWBALL: &str = "1) Maksa kaikista veloista minimierät ajallaan.\n\
2) Valitse hyökkäysvelka: pienin saldo (lumipallo) tai korkein korko (korkojahti).\n\
3) Laita kaikki ylimääräinen raha hyökkäysvelkaan.\n\
4) Toista - maksusumma kasvaa kuin lumipallo.";

const PSYCHOLOGY: &str = "Velka ei ole älykkyysongelma. Se on kuormitusongelma.\n\n\
Kun ihminen on stressaantunut, väsynyt tai epävarma tulevaisuudesta, aivot siirtyvät \
selviytymistilaan. Tässä tilassa lyhyen aikavälin helpotus voittaa pitkän aikavälin järjen.\n\n\
Tämä ei ole heikkoutta. Tämä on neurobiologiaa.\n\n\
Velkakierre ei katkea ryhdistäytymällä, vaan vähentämällä kognitiivista kuormaa.";

fn strategies() -> Vec<Run> {
    vec![
        Run::bold("1. Velkalumipallo (pienin saldo ensin)"),
        Run::plain(
            "\nHyvä jos: motivaatio on heikko, velkoja on monta, tarvitset nopeasti voittoja.\n\n",
        ),
        Run::bold("2. Korkojahti (korkein korko ensin)"),
        Run::plain("\nHyvä jos: talous on jo hallinnassa, jaksat pitkää projektia.\n\n"),
        Run::bold("3. Hybridimalli"),
        Run::plain("\nMaksa 1-2 pienintä velkaa pois ensin, sitten siirry korkojahtiin."),
    ]
}

fn program_table() -> Result<Table> {
    let rows = std::iter::once(PROGRAM_HEADER)
        .chain(PROGRAM)
        .map(|row| row.iter().map(|c| c.to_string()).collect())
        .collect();
    let style = styles::top_aligned(TableStyle {
        body_font_size: 9.5,
        ..styles::grid_table()
    });
    Ok(Table::new(rows, vec![mm(18.0), mm(98.0), mm(25.0), mm(35.0)])?.with_style(style))
}

pub fn document(date: NaiveDate) -> Result<Document> {
    let mut doc = Document::new(TITLE, styles::page()).with_creation_date(date);

    doc.heading(TITLE, styles::h1())
        .paragraph(crate::date_line(date), styles::small())
        .spacer(8.0)
        .paragraph(INTRO, styles::body())
        .heading("Mitä tarvitset", styles::h2())
        .paragraph(NEEDS, styles::body())
        .heading("7 päivän mini-ohjelma", styles::h2())
        .table(program_table()?)
        .spacer(10.0)
        .heading("Velkalumipallo käytännössä", styles::h2())
        .paragraph(SNOWBALL, styles::body())
        .page_break()
        .heading("Velkaantumisen psykologia", styles::h2())
        .paragraph(PSYCHOLOGY, styles::body())
        .heading("Velkastrategiat", styles::h2())
        .rich_paragraph(strategies(), styles::body());

    Ok(doc)
}

pub fn render(date: NaiveDate) -> Result<Vec<u8>> {
    document(date)?.render()
}
