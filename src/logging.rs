//! File-backed `tracing` setup. The terminal belongs to the TUI, so log
//! output goes to a file instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{Config, ConfigError};

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "CONTACT_FORM_LOG";

/// Errors that can occur while installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log file or its directory could not be opened.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The log location could not be resolved.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber was already installed.
    #[error("logging already initialised: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Builds the filter: `CONTACT_FORM_LOG` if set and valid, else `directive`.
pub fn build_filter(directive: &str) -> Result<EnvFilter, LoggingError> {
    let filter = EnvFilter::try_from_env(LOG_ENV).or_else(|_| EnvFilter::try_new(directive))?;
    Ok(filter)
}

/// Installs the global subscriber writing to the configured log file.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init(config: &Config) -> Result<(), LoggingError> {
    let path = config.log_path()?;
    let file = open_log_file(&path)?;
    let filter = build_filter(&config.log_filter)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()?;

    tracing::info!(log_file = %path.display(), "logging initialised");
    Ok(())
}

/// Opens `path` for appending, creating parent directories as needed.
fn open_log_file(path: &Path) -> Result<fs::File, LoggingError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_log_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("form.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn open_log_file_appends() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form.log");
        writeln!(open_log_file(&path).unwrap(), "one").unwrap();
        writeln!(open_log_file(&path).unwrap(), "two").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    mod build_filter_fn {
        use tracing_subscriber::filter::LevelFilter;

        use super::*;

        /// `LOG_ENV` is process-global; tests touching it run one at a time.
        static ENV_LOCK: Mutex<()> = Mutex::new(());

        fn with_log_env<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
            let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            // SAFETY: every access to LOG_ENV in this crate's tests holds ENV_LOCK.
            unsafe {
                match value {
                    Some(v) => std::env::set_var(LOG_ENV, v),
                    None => std::env::remove_var(LOG_ENV),
                }
            }
            let result = f();
            // SAFETY: as above.
            unsafe { std::env::remove_var(LOG_ENV) };
            result
        }

        #[test]
        fn uses_directive_when_env_unset() {
            let filter = with_log_env(None, || build_filter("debug").unwrap());
            assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
        }

        #[test]
        fn env_overrides_directive() {
            let filter = with_log_env(Some("warn"), || build_filter("debug").unwrap());
            assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
        }

        #[test]
        fn invalid_env_falls_back_to_directive() {
            let filter =
                with_log_env(Some("x=notalevel"), || build_filter("debug").unwrap());
            assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
        }

        #[test]
        fn invalid_directive_without_env_is_error() {
            let err = with_log_env(None, || build_filter("x=notalevel").unwrap_err());
            assert!(matches!(err, LoggingError::Filter(_)), "got {err:?}");
        }
    }

}
