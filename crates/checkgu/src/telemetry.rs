//! Logging setup for hosts embedding the library.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::ConfigError;

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Installs a global `tracing` subscriber and bridges `log` records into it.
///
/// `RUST_LOG` takes precedence over the configured level. Calling this more
/// than once is a no-op.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ConfigError> {
    if INITIALIZED.get().is_some() {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| ConfigError::Validation {
            message: format!("Invalid log level '{}': {}", config.level, e),
        })?;

    let builder = fmt().with_env_filter(filter).with_target(true);
    let result = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    let _ = INITIALIZED.set(());

    match result {
        Ok(()) => {
            // Another component may already have installed a `log` logger.
            if let Err(e) = tracing_log::LogTracer::init() {
                tracing::debug!("log bridge not installed: {}", e);
            }
            tracing::info!("Checkgu v{} logging initialized", env!("CARGO_PKG_VERSION"));
        }
        Err(e) => log::debug!("Tracing subscriber already set: {}", e),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_ok() {
        let config = LoggingConfig::default();
        assert!(init_logging(&config).is_ok());
        assert!(init_logging(&config).is_ok());
    }
}
