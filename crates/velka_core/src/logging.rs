use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::MaterialsConfig;

/// Prefix of the daily rolling log files under `log_dir`.
pub const LOG_FILE_PREFIX: &str = "velkavapaus-materials";

/// Default filter when `RUST_LOG` is unset.
fn default_filter(level: &str) -> String {
    format!("{level},velka_docs={level},velka_materials={level},velka_app={level}")
}

/// Initializes logging from the config. Compact output always goes to
/// stderr; with `log_dir` set, a daily rolling file is written as well.
///
/// Returns the file writer guard, which must be kept alive until exit.
pub fn init_logging(config: &MaterialsConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(&config.log_level)));

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    Ok(guard)
}
