use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install the global subscriber, appending to the configured log file.
///
/// `RUST_LOG` takes precedence over the configured level. Does nothing when
/// logging is disabled; an already installed subscriber is kept.
pub fn init_tracing(config: &LoggingConfig) -> io::Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
    if let Err(e) = installed {
        debug!(error = %e, "tracing subscriber already installed");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_logging_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            enabled: false,
            level: "info".to_string(),
            file: dir.path().join("game.log"),
        };
        init_tracing(&config).unwrap();
        assert!(!config.file.exists());
    }

    #[test]
    fn test_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            file: dir.path().join("game.log"),
            ..LoggingConfig::default()
        };
        init_tracing(&config).unwrap();
        assert!(config.file.exists());
    }

    #[test]
    fn test_second_init_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            file: dir.path().join("game.log"),
            ..LoggingConfig::default()
        };
        init_tracing(&config).unwrap();
        init_tracing(&config).unwrap();
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            file: dir.path().join("missing").join("game.log"),
            ..LoggingConfig::default()
        };
        assert!(init_tracing(&config).is_err());
    }
}
