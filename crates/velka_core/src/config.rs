use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Name of the optional config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "velkavapaus.json";

// ---------------------------------------------------------------------------
// MaterialsConfig
// ---------------------------------------------------------------------------

/// Generator configuration.
///
/// Every field has a default, so a missing `velkavapaus.json` (the normal
/// case) yields the fixed output layout under `public/materials`. A partial
/// file only overrides the fields it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialsConfig {
    // Output
    pub output_dir: PathBuf,
    pub file_prefix: String,
    pub version: String,
    pub write_manifest: bool,

    /// Pins the date printed on the documents and embedded in file metadata.
    /// `None` means the local date at generation time.
    pub date_stamp: Option<NaiveDate>,

    // Logging
    pub log_dir: Option<PathBuf>,
    pub log_level: String,
}

impl Default for MaterialsConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("public/materials"),
            file_prefix: "Velkavapaus".into(),
            version: "v1".into(),
            write_manifest: false,
            date_stamp: None,
            log_dir: None,
            log_level: "info".into(),
        }
    }
}

impl MaterialsConfig {
    /// Returns the config file path: `./velkavapaus.json`
    pub fn config_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE_NAME)
    }

    /// Loads `./velkavapaus.json` if present, otherwise the defaults.
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_path())
    }

    /// Load config from a specific file path. A missing file is not an error.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            let config: Self = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            info!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to a specific file path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// The date stamped on generated documents.
    pub fn effective_date(&self) -> NaiveDate {
        self.date_stamp
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Builds `<prefix>_<stem>_<version>.<extension>`.
    pub fn file_name(&self, stem: &str, extension: &str) -> String {
        format!(
            "{}_{}_{}.{}",
            self.file_prefix, stem, self.version, extension
        )
    }

    /// Full output path for an artifact file.
    pub fn artifact_path(&self, stem: &str, extension: &str) -> PathBuf {
        self.output_dir.join(self.file_name(stem, extension))
    }

    /// Creates the output directory if it does not exist yet.
    pub fn ensure_output_dir(&self) -> Result<()> {
        if !self.output_dir.exists() {
            std::fs::create_dir_all(&self.output_dir).with_context(|| {
                format!(
                    "Failed to create directory: {}",
                    self.output_dir.display()
                )
            })?;
            info!("Created output directory {}", self.output_dir.display());
        }
        Ok(())
    }
}
