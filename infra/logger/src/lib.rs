//! Tracing setup shared by DigiUrban binaries.
//!
//! One subscriber per process: a compact console layer, an optional rolling file layer (plain
//! text or JSON lines) and an [`EnvFilter`] in front of both.
//!
//! [`Logger::from_config`] is what the shell calls with the `[logging]` section. The builder
//! underneath is public for tests and tools that want a different mix; its
//! [`LoggerBuilder::env_filter`] takes directives like `"digiurban_kernel=debug,config=warn"`
//! and otherwise `RUST_LOG` is honoured.
//!
//! ## Example
//!
//! ```rust
//! # use digiurban_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("digiurban")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use digiurban_domain::config::LoggingConfig;
use private::Sealed;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
pub struct LoggerConfig {
    console: bool,
    path: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    env_filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: true,
            path: None,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            env_filter: None,
        }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);
#[derive(Debug)]
pub struct NoFile;
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}
impl Sealed for NoFile {}
impl Sealed for WithFile {}

/// Typestate builder for the process-wide subscriber: a name is mandatory, and the file
/// settings (rotation, retention, JSON) only exist once [`Self::path`] chose a directory.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName, F: Sealed = NoFile> {
    config: LoggerConfig,
    name: N,
    file_state: std::marker::PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<NoName, F> {
    /// Binary name, used as the prefix of rolling log files.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName, F> {
        LoggerBuilder {
            name: WithName(name.into()),
            config: self.config,
            file_state: std::marker::PhantomData,
        }
    }
}

impl LoggerBuilder<WithName, WithFile> {
    #[must_use = "builder methods return the updated builder"]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.config.max_files = max;
        self
    }

    #[must_use = "builder methods return the updated builder"]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// One JSON object per line in the log files.
    #[must_use = "builder methods return the updated builder"]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.config.json = enabled;
        self
    }
}

impl<F: Sealed> LoggerBuilder<WithName, F> {
    #[must_use = "builder methods return the updated builder"]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Per-target directives such as `digiurban_kernel=debug,digiurban_store=trace`.
    ///
    /// When set, `RUST_LOG` is ignored. A directive that does not parse fails
    /// [`LoggerBuilder::init`].
    #[must_use = "builder methods return the updated builder"]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    #[must_use = "builder methods return the updated builder"]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Directory of the rolling log files; created on init when absent.
    pub fn path(self, path: impl Into<PathBuf>) -> LoggerBuilder<WithName, WithFile> {
        let mut config = self.config;
        config.path = Some(path.into());
        LoggerBuilder { config, name: self.name, file_state: std::marker::PhantomData }
    }

    /// Installs the subscriber for the whole process.
    ///
    /// Entity lifecycle events logged by the kernel and the store reach every enabled layer.
    /// Lines written to the file go through a background worker owned by the returned
    /// [`Logger`]; dropping it early loses whatever is still buffered.
    ///
    /// # Errors
    /// * [`LoggerError::Subscriber`] when another subscriber is already installed.
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero retention, a bad filter
    ///   or no enabled output.
    pub fn init(self) -> Result<Logger, LoggerError> {
        validate_config(&self.config, &self.name.0)?;

        let env_filter = build_env_filter(&self.config)?;

        let mut layers = Vec::new();

        if self.config.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = if let Some(path) = self.config.path {
            fs::create_dir_all(&path).map_err(|e| LoggerError::Internal {
                message: e.to_string().into(),
                context: Some(format!("Failed to create path: {}", path.display()).into()),
            })?;

            let file_appender = RollingFileAppender::builder()
                .rotation(self.config.rotation)
                .filename_prefix(&self.name.0)
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(self.config.max_files)
                .build(path)?;

            let (non_blocking, g) = tracing_appender::non_blocking(file_appender);

            let file_layer = layer().with_writer(non_blocking).with_ansi(false);

            let boxed =
                if self.config.json { file_layer.json().boxed() } else { file_layer.boxed() };

            layers.push(boxed);
            Some(g)
        } else {
            None
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "neither console nor file output is enabled".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }
}

/// Keeps the file worker alive. Hold it in `main` until the shell exits.
#[must_use = "dropping the handle stops the file writer"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Console output at `INFO`, no files.
    #[must_use = "builder methods return the updated builder"]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder {
            config: LoggerConfig::default(),
            name: NoName,
            file_state: std::marker::PhantomData,
        }
    }

    /// Initializes logging from the `[logging]` config section.
    ///
    /// `json` applies to the file layer, which exists only when `directory` is set.
    ///
    /// # Errors
    /// [`LoggerError::InvalidConfiguration`] for an unknown level, otherwise as
    /// [`LoggerBuilder::init`].
    pub fn from_config(name: &str, config: &LoggingConfig) -> Result<Self, LoggerError> {
        let level = parse_level(&config.level)?;
        let mut builder = Self::builder().name(name).console(config.console).level(level);
        if let Some(filter) = &config.env_filter {
            builder = builder.env_filter(filter.as_str());
        }

        match &config.directory {
            Some(directory) => builder.path(directory).json(config.json).init(),
            None => builder.init(),
        }
    }

    /// Best-effort synchronization point before shutdown; the worker flushes on drop.
    pub fn flush(&self) {
        tracing::debug!("Logger flushed");
    }

    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Flushing log files");
        }
    }
}

/// Parses `"info"`, `"DEBUG"`, `"off"`, ...
///
/// # Errors
/// [`LoggerError::InvalidConfiguration`] naming the rejected level.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    LevelFilter::from_str(level.trim()).map_err(|e| LoggerError::InvalidConfiguration {
        message: format!("Invalid log level '{level}': {e}").into(),
        context: None,
    })
}

fn validate_config(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if config.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    Ok(())
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    config.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    #[serial]
    fn builder_defaults() {
        let builder = Logger::builder().name("digiurban").env_filter("digiurban_kernel=debug");
        assert!(builder.config.console);
        assert_eq!(builder.config.level, LevelFilter::INFO);
        assert_eq!(builder.config.env_filter.as_deref(), Some("digiurban_kernel=debug"));
        assert!(builder.config.path.is_none());
        assert!(!builder.config.json);
    }

    #[test]
    #[serial]
    fn file_settings_follow_path() {
        let tmp_dir = tempdir().unwrap();
        let log_dir = tmp_dir.path().join("logs");
        let builder = Logger::builder()
            .name("digiurban")
            .console(false)
            .path(log_dir.clone())
            .max_files(5)
            .json(true)
            .level(LevelFilter::DEBUG);

        assert!(!builder.config.console);
        assert!(builder.config.json);
        assert_eq!(builder.config.level, LevelFilter::DEBUG);
        assert_eq!(builder.config.max_files, 5);
        assert_eq!(builder.config.path.as_deref(), Some(log_dir.as_path()));
    }

    #[test]
    fn levels_parse_case_insensitively() {
        assert_eq!(parse_level("DEBUG").unwrap(), LevelFilter::DEBUG);
        assert_eq!(parse_level(" warn ").unwrap(), LevelFilter::WARN);
        assert_eq!(parse_level("off").unwrap(), LevelFilter::OFF);
        assert!(matches!(parse_level("loud"), Err(LoggerError::InvalidConfiguration { .. })));
    }

    #[test]
    fn empty_name_and_zero_retention_are_rejected() {
        assert!(validate_config(&LoggerConfig::default(), "  ").is_err());
        let config = LoggerConfig { max_files: 0, ..LoggerConfig::default() };
        assert!(validate_config(&config, "digiurban").is_err());
    }

    #[test]
    fn invalid_env_filter_is_reported() {
        let config =
            LoggerConfig { env_filter: Some("digiurban=loudest".to_owned()), ..LoggerConfig::default() };
        assert!(matches!(build_env_filter(&config), Err(LoggerError::InvalidConfiguration { .. })));
    }
}
