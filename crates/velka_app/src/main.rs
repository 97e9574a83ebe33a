use std::io::Write;

use tracing::{error, info};

use velka_core::config::MaterialsConfig;
use velka_core::error_handler::MaterialsError;
use velka_core::logging;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> anyhow::Result<()> {
    let (config, load_error) = match MaterialsConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (MaterialsConfig::default(), Some(e)),
    };
    // Logging comes up with defaults when the config file is broken, so the
    // failure below is still reported through it.
    let _log_guard = logging::init_logging(&config)?;
    if let Some(e) = load_error {
        let err = MaterialsError::Config(format!("{e:#}"));
        error!(category = ?err.category(), "{}", err.user_message());
        return Err(err.into());
    }
    info!(
        "velkavapaus-materials v{VERSION} (output_dir={}, manifest={})",
        config.output_dir.display(),
        config.write_manifest
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match velka_materials::generate_all(&config, &mut out) {
        Ok(generated) => {
            out.flush()?;
            info!("Generated {} artifacts", generated.len());
            Ok(())
        }
        Err(e) => {
            if let Some(err) = e.downcast_ref::<MaterialsError>() {
                error!(category = ?err.category(), "{}", err.user_message());
            }
            Err(e)
        }
    }
}
