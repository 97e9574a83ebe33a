use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level generator error type.
#[derive(Error, Debug)]
pub enum MaterialsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Output directory error: {0}")]
    OutputDir(String),

    #[error("Failed to write {artifact}: {reason}")]
    Write { artifact: String, reason: String },

    #[error("Document layout error: {0}")]
    Layout(String),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),
}

/// Coarse classification used when reporting a failed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// Invalid or unreadable configuration.
    ConfigError,
    /// Disk, permissions, paths.
    FileSystemError,
    /// The content could not be rendered.
    RenderError,
}

impl MaterialsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Config(_) => ErrorCategory::ConfigError,
            Self::OutputDir(_) | Self::Write { .. } => ErrorCategory::FileSystemError,
            Self::Layout(_) | Self::Spreadsheet(_) => ErrorCategory::RenderError,
        }
    }

    /// Short hint logged next to the error chain. The details stay in the
    /// `Display` text so they are printed once.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Config(_) => "Fix or remove velkavapaus.json and run again.",
            Self::OutputDir(_) | Self::Write { .. } => {
                "Could not write materials. Check disk space and permissions."
            }
            Self::Layout(_) => "A document no longer fits its page layout.",
            Self::Spreadsheet(_) => "A spreadsheet template could not be built.",
        }
    }
}
