//! Diagnostic logging with a process-wide level filter
//!
//! Records are written to stderr through `env_logger`. The sink is installed
//! once per process; the level threshold is applied on every call to
//! [`set_log`] / [`init_logging`] through `log::set_max_level`, so the
//! threshold can be raised or lowered at runtime.
//!
//! Accepted level names (case-insensitive): `TRACE`, `DEBUG`, `INFO`,
//! `SUCCESS`, `WARNING`, `ERROR`, `CRITICAL`.

use std::env::VarError;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Once;

use log::{debug, trace, LevelFilter};
use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind, Result};

static INIT_LOGGER: Once = Once::new();

/// Environment variable read by [`LoggingConfig::from_env`]
pub const LOG_LEVEL_ENV: &str = "DROIDSCOPE_LOG";

/// Severity threshold for diagnostic output
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// Everything, including per-call tracing
    Trace,
    /// Debugging detail
    Debug,
    /// Normal operational messages
    #[default]
    Info,
    /// Completed operations; filtered like `Info`
    Success,
    /// Recoverable problems
    Warning,
    /// Failed operations
    Error,
    /// Failures that abort the analysis; filtered like `Error`
    Critical,
}

impl LogLevel {
    /// All levels, most verbose first
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Success,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
    ];

    /// Canonical upper-case name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Success => "SUCCESS",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    /// Maximum `log` level let through at this threshold
    ///
    /// `log` has no `SUCCESS` or `CRITICAL`; they collapse onto `Info` and
    /// `Error`.
    #[must_use]
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info | LogLevel::Success => LevelFilter::Info,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Error | LogLevel::Critical => LevelFilter::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let level = match s.trim().to_ascii_uppercase().as_str() {
            "TRACE" => LogLevel::Trace,
            "DEBUG" => LogLevel::Debug,
            "INFO" => LogLevel::Info,
            "SUCCESS" => LogLevel::Success,
            "WARNING" | "WARN" => LogLevel::Warning,
            "ERROR" => LogLevel::Error,
            "CRITICAL" => LogLevel::Critical,
            _ => crate::bail!(configuration, "unknown log level `{}`", s),
        };
        Ok(level)
    }
}

/// Terminal coloring for the stderr sink
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color when stderr is a terminal
    #[default]
    Auto,
    /// Always emit ANSI colors
    Always,
    /// Never emit ANSI colors
    Never,
}

impl From<ColorChoice> for env_logger::WriteStyle {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => env_logger::WriteStyle::Auto,
            ColorChoice::Always => env_logger::WriteStyle::Always,
            ColorChoice::Never => env_logger::WriteStyle::Never,
        }
    }
}

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level written to stderr
    pub level: LogLevel,
    /// Prefix records with a microsecond timestamp
    pub timestamps: bool,
    /// ANSI coloring behavior
    pub color: ColorChoice,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            timestamps: true,
            color: ColorChoice::default(),
        }
    }
}

impl LoggingConfig {
    /// Build a config from [`LOG_LEVEL_ENV`], falling back to defaults when unset
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error when the variable holds an unknown
    /// level or is not valid unicode.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        match std::env::var(LOG_LEVEL_ENV) {
            Ok(value) => {
                config.level = value
                    .parse()
                    .map_err(|e: Error| e.context(format!("reading {LOG_LEVEL_ENV}")))?;
            }
            Err(VarError::NotPresent) => {}
            Err(e) => {
                return Err(Error::with_source(ErrorKind::Configuration, e)
                    .context(format!("reading {LOG_LEVEL_ENV}")));
            }
        }
        Ok(config)
    }

    /// Same config with a different level
    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }
}

/// Install the stderr sink (first call only) and apply `config.level`
///
/// Sink options (`timestamps`, `color`) only take effect on the call that
/// installs the sink. If another logger is already installed, only the
/// level threshold is applied.
pub fn init_logging(config: &LoggingConfig) {
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder
            .target(env_logger::Target::Stderr)
            .filter_level(LevelFilter::Trace)
            .write_style(config.color.into());
        if config.timestamps {
            builder.format_timestamp_micros();
        } else {
            builder.format_timestamp(None);
        }
        let _ = builder.try_init();
    });
    log::set_max_level(config.level.to_level_filter());
    debug!("log level set to {}", config.level);
}

/// Route diagnostics to stderr, passing only records at or above `level`
///
/// Can be called repeatedly; each call replaces the previous threshold.
///
/// `log` has no `SUCCESS` or `CRITICAL` records, so those thresholds are
/// looser than their names: `SUCCESS` also lets `INFO` records through and
/// `CRITICAL` also lets `ERROR` records through.
pub fn set_log(level: LogLevel) {
    init_logging(&LoggingConfig::default().with_level(level));
}

/// Logging entry points and structured helpers shared by the droidscope crates
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging from [`LOG_LEVEL_ENV`]
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error when the variable holds an unknown level.
    pub fn init() -> Result<()> {
        let config = LoggingConfig::from_env()?;
        init_logging(&config);
        Ok(())
    }

    /// Initialize logging for test environments
    ///
    /// Output is captured by the test harness; repeated calls are harmless.
    pub fn init_test() {
        let _ = env_logger::Builder::new()
            .filter_level(LevelFilter::Trace)
            .is_test(true)
            .try_init();
    }

    /// Log a whole-file read
    pub fn log_file_read(path: &Path, len: usize) {
        debug!("read {len} bytes from {}", path.display());
    }

    /// Log an offset read, noting short reads at end of stream
    pub fn log_range_read(offset: u64, requested: Option<u64>, returned: usize) {
        match requested {
            Some(size) if (returned as u64) < size => {
                trace!("short read at offset {offset}: wanted {size} bytes, got {returned}");
            }
            Some(size) => trace!("read {size} bytes at offset {offset}"),
            None => trace!("read {returned} trailing bytes from offset {offset}"),
        }
    }
}
