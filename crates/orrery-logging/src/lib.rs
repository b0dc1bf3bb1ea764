//! JSONL logging and request correlation for Orrery
//!
//! # Features
//!
//! - **JSONL Output**: Structured JSON lines format for log aggregation (default)
//! - **Pretty Output**: Human-readable console format for development
//! - **File Rotation**: Daily/hourly log rotation via tracing-appender
//! - **Request Correlation**: Per-request UUIDs attached to the request span
//!
//! # Quick Start
//!
//! ```ignore
//! use orrery_logging::{LogConfig, OrrerySubscriberBuilder};
//!
//! // Simple setup with defaults (JSONL to console)
//! let _guard = OrrerySubscriberBuilder::new().init();
//!
//! // Development mode with pretty human-readable output
//! let _guard = OrrerySubscriberBuilder::new()
//!     .with_config(LogConfig::development())
//!     .init();
//! ```
//!
//! # Request Context
//!
//! ```ignore
//! use orrery_logging::RequestContext;
//!
//! let ctx = RequestContext::new("GET", "/api/top");
//! let span = ctx.span();
//! let _entered = span.enter();
//!
//! // Logs here carry request_id, method and path
//! tracing::info!("Ranking planets");
//! ```

pub mod config;
pub mod request;

pub use config::{ConsoleConfig, FileConfig, JsonlConfig, LogConfig, RotationStrategy};
pub use request::{REQUEST_ID_HEADER, RequestContext, RequestSpanExt, fields};
pub use tracing_appender::non_blocking::WorkerGuard;

use std::fs::{self, File};

use thiserror::Error;
use tracing_appender::non_blocking::NonBlocking;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Errors that can occur while installing the subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Log directory or file could not be created
    #[error("Log file error: {0}")]
    File(String),

    /// A global subscriber is already installed
    #[error("Subscriber already initialized: {0}")]
    AlreadyInitialized(String),
}

impl From<std::io::Error> for LoggingError {
    fn from(err: std::io::Error) -> Self {
        LoggingError::File(err.to_string())
    }
}

/// Builder for configuring and initializing the Orrery logging subscriber
///
/// By default, console output uses JSONL format. Use `LogConfig::development()`
/// for human-readable pretty output during development.
pub struct OrrerySubscriberBuilder {
    config: LogConfig,
}

impl OrrerySubscriberBuilder {
    /// Create a new subscriber builder with default configuration
    pub fn new() -> Self {
        Self {
            config: LogConfig::default(),
        }
    }

    /// Use a specific configuration
    pub fn with_config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the default log level
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.config.default_level = level.into();
        self
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.config.console.enabled = enabled;
        self
    }

    /// Configure file output
    pub fn with_file_output(mut self, config: FileConfig) -> Self {
        self.config.file = Some(config);
        self
    }

    /// The configuration this builder will install
    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Initialize the subscriber globally
    ///
    /// Returns a guard that must be kept alive for the duration of the
    /// program when file output is enabled. Failures are reported on stderr
    /// and leave logging uninitialized.
    pub fn init(self) -> Option<WorkerGuard> {
        match self.try_init() {
            Ok(guard) => guard,
            Err(e) => {
                eprintln!("Warning: Failed to initialize logging: {}", e);
                None
            }
        }
    }

    /// Try to initialize the subscriber globally
    pub fn try_init(self) -> Result<Option<WorkerGuard>, LoggingError> {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.config.default_level));

        let console = &self.config.console;
        let jsonl = &self.config.jsonl;

        let pretty_console = (console.enabled && console.pretty).then(|| {
            fmt::layer()
                .with_ansi(console.ansi)
                .with_target(true)
        });

        let jsonl_console = (console.enabled && !console.pretty).then(|| {
            fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(jsonl.include_spans)
                .flatten_event(jsonl.flatten_events)
                .with_file(jsonl.include_location)
                .with_line_number(jsonl.include_location)
        });

        let (file_layer, guard) = match &self.config.file {
            Some(file_config) => {
                let (writer, guard) = create_file_writer(file_config)?;
                let layer = fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(jsonl.include_spans)
                    .flatten_event(jsonl.flatten_events)
                    .with_file(jsonl.include_location)
                    .with_line_number(jsonl.include_location)
                    .with_writer(writer);
                (Some(layer), Some(guard))
            }
            None => (None, None),
        };

        Registry::default()
            .with(env_filter)
            .with(pretty_console)
            .with(jsonl_console)
            .with(file_layer)
            .try_init()
            .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;

        Ok(guard)
    }
}

impl Default for OrrerySubscriberBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the file writer: truncates for `Never` rotation, appends for others
fn create_file_writer(
    file_config: &FileConfig,
) -> Result<(NonBlocking, WorkerGuard), LoggingError> {
    fs::create_dir_all(&file_config.directory)?;

    let rotation = match file_config.rotation {
        RotationStrategy::Never => {
            let path = file_config
                .directory
                .join(format!("{}.log", file_config.prefix));
            let file = File::create(&path)?;
            return Ok(tracing_appender::non_blocking(file));
        }
        RotationStrategy::Daily => Rotation::DAILY,
        RotationStrategy::Hourly => Rotation::HOURLY,
    };

    let appender = RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(&file_config.prefix)
        .filename_suffix("log")
        .build(&file_config.directory)
        .map_err(|e| LoggingError::File(e.to_string()))?;

    Ok(tracing_appender::non_blocking(appender))
}

/// Initialize logging for testing (minimal output, ignores double init)
pub fn init_testing() {
    let _ = OrrerySubscriberBuilder::new()
        .with_config(LogConfig::testing())
        .try_init();
}
