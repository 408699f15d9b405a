//! # Logger
//!
//! Installs the process-wide `tracing` subscriber: a console layer in one of three
//! [`Format`]s, an optional rolling file layer written by a non-blocking worker, and an
//! [`EnvFilter`] built from a default level, programmatic directives and `RUST_LOG`.
//!
//! ## Example
//!
//! ```rust
//! # use tessera_logger::{Format, LevelFilter, Logger};
//! let _logger = Logger::builder()
//!     .name("tessera")
//!     .format(Format::Pretty)
//!     .level(LevelFilter::DEBUG)
//!     .env_filter("hyper=info")
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

/// Line layout of a log output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// One line per event, abbreviated targets.
    #[default]
    Compact,
    /// Multi-line, human oriented.
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for Format {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(LoggerError::invalid(format!("Unknown log format '{other}'"))),
        }
    }
}

/// Parses a level name (`trace`..`error`, or `off`).
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for unknown names.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    LevelFilter::from_str(level.trim())
        .map_err(|e| LoggerError::invalid(format!("Invalid log level '{level}': {e}")))
}

#[derive(Debug)]
struct LoggerConfig {
    console: bool,
    format: Format,
    level: LevelFilter,
    env_filter: Option<String>,
    path: Option<PathBuf>,
    file_format: Format,
    rotation: Rotation,
    max_files: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: true,
            format: Format::Compact,
            level: LevelFilter::INFO,
            env_filter: None,
            path: None,
            file_format: Format::Compact,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
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

/// Type-state builder: a name is required before [`init`](LoggerBuilder::init), and the
/// file options only exist once [`path`](LoggerBuilder::path) was set.
#[derive(Debug)]
#[must_use = "The logger is not installed until you call .init()"]
pub struct LoggerBuilder<N: Sealed = NoName, F: Sealed = NoFile> {
    config: LoggerConfig,
    name: N,
    file: PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<NoName, F> {
    /// Names the logger; also the prefix of rolling log files.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName, F> {
        LoggerBuilder { config: self.config, name: WithName(name.into()), file: PhantomData }
    }
}

impl<F: Sealed> LoggerBuilder<WithName, F> {
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    pub const fn format(mut self, format: Format) -> Self {
        self.config.format = format;
        self
    }

    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Adds filter directives (e.g. `tessera_themes=debug,hyper=info`).
    ///
    /// When set, `RUST_LOG` is ignored; invalid directives make [`init`](Self::init) fail.
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Also writes rolling log files into `path`.
    pub fn path(self, path: impl Into<PathBuf>) -> LoggerBuilder<WithName, WithFile> {
        let mut config = self.config;
        config.path = Some(path.into());
        LoggerBuilder { config, name: self.name, file: PhantomData }
    }

    /// Installs the global subscriber.
    ///
    /// Keep the returned [`Logger`] alive: it owns the worker that flushes file output.
    ///
    /// # Errors
    /// [`LoggerError::Subscriber`] when a subscriber is already installed,
    /// [`LoggerError::InvalidConfiguration`] for bad settings, [`LoggerError::Io`] or
    /// [`LoggerError::Appender`] when the log directory cannot be used.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { config, name: WithName(name), .. } = self;
        validate(&config, &name)?;

        let filter = env_filter(&config)?;
        let mut layers = Vec::new();

        if config.console {
            layers.push(console_layer(config.format));
        }

        let guard = match &config.path {
            Some(path) => {
                let (file, guard) = file_layer(&config, &name, path)?;
                layers.push(file);
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::invalid("No output enabled: enable the console or set a path"));
        }

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;
        tracing::debug!(logger = %name, files = guard.is_some(), "Logger installed");

        Ok(Logger { name, guard })
    }
}

impl LoggerBuilder<WithName, WithFile> {
    pub const fn max_files(mut self, max: usize) -> Self {
        self.config.max_files = max;
        self
    }

    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// Layout of the file output, independent from the console one.
    pub const fn file_format(mut self, format: Format) -> Self {
        self.config.file_format = format;
        self
    }
}

/// The installed logging system.
#[must_use = "Dropping this handle stops the background log writer."]
#[derive(Debug)]
pub struct Logger {
    name: String,
    guard: Option<WorkerGuard>,
}

impl Logger {
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName, file: PhantomData }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether file output is active.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

fn validate(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::invalid("Logger name cannot be empty"));
    }
    if config.max_files == 0 {
        return Err(LoggerError::invalid("max_files must be greater than zero"));
    }
    Ok(())
}

fn env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    match &config.env_filter {
        None => Ok(builder.from_env_lossy()),
        Some(directives) => builder.parse(directives).map_err(|e| {
            LoggerError::invalid(format!("Invalid env filter '{directives}': {e}"))
        }),
    }
}

fn console_layer<S>(format: Format) -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let base = layer().with_ansi(true);
    match format {
        Format::Compact => base.compact().boxed(),
        Format::Pretty => base.pretty().boxed(),
        Format::Json => base.json().with_ansi(false).boxed(),
    }
}

fn file_layer<S>(
    config: &LoggerConfig,
    name: &str,
    path: &Path,
) -> Result<(BoxedLayer<S>, WorkerGuard), LoggerError>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    std::fs::create_dir_all(path).context(format!("Creating {}", path.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(config.rotation.clone())
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(config.max_files)
        .build(path)
        .context(format!("Log directory {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let base = layer().with_writer(writer).with_ansi(false);
    let boxed = match config.file_format {
        Format::Compact => base.compact().boxed(),
        Format::Pretty => base.pretty().boxed(),
        Format::Json => base.json().boxed(),
    };

    Ok((boxed, guard))
}
