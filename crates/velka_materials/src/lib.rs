//! The Velkavapaus.fi downloadable materials: four PDF guides and two XLSX
//! templates, rendered from fixed Finnish content.

pub mod budget;
pub mod checklist;
pub mod dashboard;
pub mod manifest;
pub mod negotiation;
pub mod snowball;
pub mod starter;
pub mod styles;

#[cfg(test)]
mod test_support;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;
use velka_core::{MaterialsConfig, MaterialsError};

/// One generated output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    StarterPackage,
    Checklist,
    NegotiationTemplates,
    MonthlyDashboard,
    BudgetTemplate,
    SnowballTemplate,
}

impl Artifact {
    /// Generation order.
    pub const ALL: [Artifact; 6] = [
        Self::StarterPackage,
        Self::Checklist,
        Self::NegotiationTemplates,
        Self::MonthlyDashboard,
        Self::BudgetTemplate,
        Self::SnowballTemplate,
    ];

    /// File name stem between the prefix and the version.
    pub fn stem(self) -> &'static str {
        match self {
            Self::StarterPackage => "Starttipaketti",
            Self::Checklist => "Tarkistuslista",
            Self::NegotiationTemplates => "Neuvottelupohjat",
            Self::MonthlyDashboard => "KuukausiDashboard",
            Self::BudgetTemplate => "Budjettipohja",
            Self::SnowballTemplate => "Velkalumipallo",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::BudgetTemplate | Self::SnowballTemplate => "xlsx",
            _ => "pdf",
        }
    }

    /// Renders the artifact's file content.
    pub fn render(self, date: NaiveDate) -> Result<Vec<u8>> {
        match self {
            Self::StarterPackage => starter::render(date),
            Self::Checklist => checklist::render(date),
            Self::NegotiationTemplates => negotiation::render(date),
            Self::MonthlyDashboard => dashboard::render(date),
            Self::BudgetTemplate => budget::render(date),
            Self::SnowballTemplate => snowball::render(date),
        }
    }
}

/// A file written by [`generate_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub artifact: Artifact,
    pub path: PathBuf,
    pub size: usize,
}

/// The grey date line printed under document titles.
pub fn date_line(date: NaiveDate) -> String {
    format!("Päiväys: {}", date.format("%Y-%m-%d"))
}

/// Renders every artifact into the configured output directory, replacing
/// existing files, and reports each written path to `out`.
pub fn generate_all(config: &MaterialsConfig, out: &mut impl Write) -> Result<Vec<GeneratedArtifact>> {
    config
        .ensure_output_dir()
        .map_err(|e| MaterialsError::OutputDir(format!("{e:#}")))?;

    let date = config.effective_date();
    info!(%date, dir = %config.output_dir.display(), "Generating materials");

    let mut generated = Vec::with_capacity(Artifact::ALL.len());
    for artifact in Artifact::ALL {
        let path = config.artifact_path(artifact.stem(), artifact.extension());
        let bytes = artifact
            .render(date)
            .map_err(|e| match artifact.extension() {
                "pdf" => MaterialsError::Layout(format!("{e:#}")),
                _ => MaterialsError::Spreadsheet(format!("{e:#}")),
            })
            .with_context(|| format!("Failed to build {}", artifact.stem()))?;
        std::fs::write(&path, &bytes).map_err(|e| MaterialsError::Write {
            artifact: path.display().to_string(),
            reason: e.to_string(),
        })?;

        info!(
            artifact = artifact.stem(),
            path = %path.display(),
            bytes = bytes.len(),
            "Wrote artifact"
        );
        writeln!(out, "Generated: {}", path.display())?;
        generated.push(GeneratedArtifact {
            artifact,
            path,
            size: bytes.len(),
        });
    }

    if config.write_manifest {
        let path = manifest::write_manifest(config, date, &generated)?;
        writeln!(out, "Generated: {}", path.display())?;
    }

    writeln!(out, "\nAll materials generated successfully!")?;
    Ok(generated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        let config = MaterialsConfig::default();
        let names: Vec<String> = Artifact::ALL
            .iter()
            .map(|a| config.file_name(a.stem(), a.extension()))
            .collect();
        assert_eq!(
            names,
            [
                "Velkavapaus_Starttipaketti_v1.pdf",
                "Velkavapaus_Tarkistuslista_v1.pdf",
                "Velkavapaus_Neuvottelupohjat_v1.pdf",
                "Velkavapaus_KuukausiDashboard_v1.pdf",
                "Velkavapaus_Budjettipohja_v1.xlsx",
                "Velkavapaus_Velkalumipallo_v1.xlsx",
            ]
        );
    }

    #[test]
    fn test_date_line() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(date_line(date), "Päiväys: 2025-03-09");
    }

    #[test]
    fn test_every_artifact_renders_its_format() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        for artifact in Artifact::ALL {
            let bytes = artifact.render(date).unwrap();
            match artifact.extension() {
                "pdf" => assert!(bytes.starts_with(b"%PDF-"), "{artifact:?}"),
                _ => assert_eq!(&bytes[0..2], b"PK", "{artifact:?}"),
            }
        }
    }
}
