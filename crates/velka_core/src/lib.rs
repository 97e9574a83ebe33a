pub mod config;
pub mod error_handler;
pub mod logging;

pub use config::MaterialsConfig;
pub use error_handler::{ErrorCategory, MaterialsError};
