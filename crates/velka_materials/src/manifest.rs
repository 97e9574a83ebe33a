//! JSON listing of the generated files for the website's materials page.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;
use velka_core::MaterialsConfig;

use crate::GeneratedArtifact;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub file_name: String,
    pub display_name: String,
    /// Upper-case extension, e.g. `PDF`.
    pub file_type: String,
    pub size_bytes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub generated_on: String,
    pub files: Vec<ManifestEntry>,
}

/// Human-readable name derived from a file name: extension dropped,
/// `_`/`-` turned into spaces, and camel-case humps split.
pub fn display_name(file_name: &str) -> String {
    let stem = match file_name.rfind('.') {
        Some(dot) if dot > 0 => &file_name[..dot],
        _ => file_name,
    };
    let mut out = String::with_capacity(stem.len() + 4);
    let mut prev: Option<char> = None;
    for c in stem.chars() {
        let c = if c == '_' || c == '-' { ' ' } else { c };
        if let Some(p) = prev {
            if is_lower(p) && is_upper(c) {
                out.push(' ');
            }
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

fn is_lower(c: char) -> bool {
    c.is_ascii_lowercase() || matches!(c, 'ä' | 'ö' | 'å')
}

fn is_upper(c: char) -> bool {
    c.is_ascii_uppercase() || matches!(c, 'Ä' | 'Ö' | 'Å')
}

/// `date` is the stamp the artifacts were rendered with.
pub fn build_manifest(
    config: &MaterialsConfig,
    date: NaiveDate,
    generated: &[GeneratedArtifact],
) -> Manifest {
    let files = generated
        .iter()
        .map(|g| {
            let file_name = config.file_name(g.artifact.stem(), g.artifact.extension());
            ManifestEntry {
                display_name: display_name(&file_name),
                file_type: g.artifact.extension().to_uppercase(),
                size_bytes: g.size,
                file_name,
            }
        })
        .collect();
    Manifest {
        generated_on: date.format("%Y-%m-%d").to_string(),
        files,
    }
}

/// Writes `<prefix>_materials_<version>.json` next to the artifacts.
pub fn write_manifest(
    config: &MaterialsConfig,
    date: NaiveDate,
    generated: &[GeneratedArtifact],
) -> Result<PathBuf> {
    let manifest = build_manifest(config, date, generated);
    let path = config.artifact_path("materials", "json");
    let content = serde_json::to_string_pretty(&manifest)?;
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write manifest: {}", path.display()))?;
    info!(path = %path.display(), files = manifest.files.len(), "Wrote manifest");
    Ok(path)
}
