use std::io::{Cursor, Read};

use chrono::NaiveDate;
use velka_core::MaterialsConfig;
use velka_materials::{Artifact, generate_all};

fn pinned_config(dir: &std::path::Path) -> MaterialsConfig {
    MaterialsConfig {
        output_dir: dir.join("public").join("materials"),
        date_stamp: NaiveDate::from_ymd_opt(2025, 6, 30),
        ..Default::default()
    }
}

fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut part = archive.by_name(name).unwrap();
    let mut xml = String::new();
    part.read_to_string(&mut xml).unwrap();
    xml
}

#[test]
fn test_generates_all_six_files() {
    let tmp = tempfile::tempdir().unwrap();
    let config = pinned_config(tmp.path());
    let mut out = Vec::new();

    let generated = generate_all(&config, &mut out).unwrap();
    assert_eq!(generated.len(), 6);

    for g in &generated {
        let bytes = std::fs::read(&g.path).unwrap();
        assert!(!bytes.is_empty());
        assert_eq!(bytes.len(), g.size);
        match g.artifact.extension() {
            "pdf" => {
                assert!(bytes.starts_with(b"%PDF-1.4"));
                assert!(bytes.ends_with(b"%%EOF\n"));
            }
            "xlsx" => {
                let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");
                assert!(sheet.contains("<sheetData>"));
            }
            other => panic!("unexpected extension {other}"),
        }
    }
}

#[test]
fn test_console_output() {
    let tmp = tempfile::tempdir().unwrap();
    let config = pinned_config(tmp.path());
    let mut out = Vec::new();
    generate_all(&config, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let generated_lines: Vec<&str> = text
        .lines()
        .filter(|l| l.starts_with("Generated: "))
        .collect();
    assert_eq!(generated_lines.len(), 6);
    assert!(generated_lines[0].ends_with("Velkavapaus_Starttipaketti_v1.pdf"));
    assert!(generated_lines[5].ends_with("Velkavapaus_Velkalumipallo_v1.xlsx"));
    assert!(text.ends_with("\nAll materials generated successfully!\n"));
}

#[test]
fn test_pinned_date_is_byte_identical_across_runs() {
    let tmp = tempfile::tempdir().unwrap();
    let config = pinned_config(tmp.path());

    let first: Vec<Vec<u8>> = generate_all(&config, &mut Vec::new())
        .unwrap()
        .iter()
        .map(|g| std::fs::read(&g.path).unwrap())
        .collect();
    let second: Vec<Vec<u8>> = generate_all(&config, &mut Vec::new())
        .unwrap()
        .iter()
        .map(|g| std::fs::read(&g.path).unwrap())
        .collect();
    assert_eq!(first, second);
}

#[test]
fn test_date_stamp_printed_in_documents() {
    let tmp = tempfile::tempdir().unwrap();
    let config = pinned_config(tmp.path());
    let generated = generate_all(&config, &mut Vec::new()).unwrap();

    let starter = generated
        .iter()
        .find(|g| g.artifact == Artifact::StarterPackage)
        .unwrap();
    let text = String::from_utf8(std::fs::read(&starter.path).unwrap()).unwrap();
    // "Päiväys" with WinAnsi octal escapes
    assert!(text.contains("(P\\344iv\\344ys: 2025-06-30) Tj"));
    assert!(text.contains("/CreationDate (D:20250630000000)"));
}

#[test]
fn test_recreates_deleted_output_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let config = pinned_config(tmp.path());
    generate_all(&config, &mut Vec::new()).unwrap();

    std::fs::remove_dir_all(&config.output_dir).unwrap();
    assert!(!config.output_dir.exists());

    let generated = generate_all(&config, &mut Vec::new()).unwrap();
    assert!(generated.iter().all(|g| g.path.is_file()));
}

#[test]
fn test_overwrites_existing_files() {
    let tmp = tempfile::tempdir().unwrap();
    let config = pinned_config(tmp.path());
    config.ensure_output_dir().unwrap();
    let stale = config.artifact_path("Tarkistuslista", "pdf");
    std::fs::write(&stale, b"stale").unwrap();

    generate_all(&config, &mut Vec::new()).unwrap();
    assert!(std::fs::read(&stale).unwrap().starts_with(b"%PDF"));
}

#[test]
fn test_manifest_written_when_enabled() {
    let tmp = tempfile::tempdir().unwrap();
    let config = MaterialsConfig {
        write_manifest: true,
        ..pinned_config(tmp.path())
    };
    let mut out = Vec::new();
    generate_all(&config, &mut out).unwrap();

    let path = config.artifact_path("materials", "json");
    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(manifest["generated_on"], "2025-06-30");
    let files = manifest["files"].as_array().unwrap();
    assert_eq!(files.len(), 6);
    assert_eq!(
        files[3]["display_name"],
        "Velkavapaus Kuukausi Dashboard v1"
    );
    assert_eq!(String::from_utf8(out).unwrap().matches("Generated: ").count(), 7);
}

#[test]
fn test_manifest_absent_by_default() {
    let tmp = tempfile::tempdir().unwrap();
    let config = pinned_config(tmp.path());
    generate_all(&config, &mut Vec::new()).unwrap();
    assert!(!config.artifact_path("materials", "json").exists());
    assert_eq!(std::fs::read_dir(&config.output_dir).unwrap().count(), 6);
}

#[test]
fn test_unwritable_output_dir_fails() {
    let tmp = tempfile::tempdir().unwrap();
    // A regular file where the directory should be.
    let blocker = tmp.path().join("blocker");
    std::fs::write(&blocker, b"").unwrap();
    let config = MaterialsConfig {
        output_dir: blocker.join("materials"),
        ..pinned_config(tmp.path())
    };
    let err = generate_all(&config, &mut Vec::new()).unwrap_err();
    assert!(err.downcast_ref::<velka_core::MaterialsError>().is_some());
}
