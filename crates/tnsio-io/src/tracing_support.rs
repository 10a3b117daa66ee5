//! Structured logging for `.tns` import and export
//!
//! Codec functions always emit `tracing` events; this module only decides
//! where they go. Applications that already install a subscriber can ignore
//! it.
//!
//! # Example
//!
//! ```no_run
//! use tnsio_io::tracing_support::{init_tracing, TracingConfig, TracingFormat};
//!
//! init_tracing(TracingConfig {
//!     format: TracingFormat::Compact,
//!     filter: "tnsio_io=debug".to_string(),
//!     ..TracingConfig::default()
//! })
//! .unwrap();
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter directive (default `tnsio_io=info,warn`)
//! - `TNSIO_LOG_FORMAT`: `json`, `compact` or `pretty` (default `pretty`)

use anyhow::Result;
use std::path::Path;
use std::time::Duration;
use tnsio_core::VariantTag;
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Tracing output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingFormat {
    /// Pretty-printed human-readable format
    Pretty,
    /// JSON format for structured logging
    Json,
    /// Compact format (single line per event)
    Compact,
}

impl TracingFormat {
    /// Parse from string; unknown names fall back to `Pretty`
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => TracingFormat::Json,
            "compact" => TracingFormat::Compact,
            _ => TracingFormat::Pretty,
        }
    }
}

/// Tracing configuration
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub format: TracingFormat,
    /// Filter directive (e.g., "tnsio_io=debug,info")
    pub filter: String,
    pub with_ansi: bool,
    pub with_target: bool,
    pub with_file: bool,
    pub with_line_number: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        let format = std::env::var("TNSIO_LOG_FORMAT")
            .map(|s| TracingFormat::parse(&s))
            .unwrap_or(TracingFormat::Pretty);

        let filter =
            std::env::var("RUST_LOG").unwrap_or_else(|_| "tnsio_io=info,warn".to_string());

        Self {
            format,
            filter,
            with_ansi: true,
            with_target: true,
            with_file: false,
            with_line_number: false,
        }
    }
}

/// Install a global subscriber
///
/// Call once at startup. Fails if the filter does not parse or a global
/// subscriber is already set.
#[cfg(feature = "tracing")]
pub fn init_tracing(config: TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.filter)?;

    match config.format {
        TracingFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .pretty()
                .with_ansi(config.with_ansi)
                .with_target(config.with_target)
                .with_file(config.with_file)
                .with_line_number(config.with_line_number)
                .with_filter(filter);

            tracing_subscriber::registry().with(fmt_layer).try_init()?;
        }
        TracingFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_target(config.with_target)
                .with_file(config.with_file)
                .with_line_number(config.with_line_number)
                .with_filter(filter);

            tracing_subscriber::registry().with(fmt_layer).try_init()?;
        }
        TracingFormat::Compact => {
            let fmt_layer = fmt::layer()
                .compact()
                .with_ansi(config.with_ansi)
                .with_target(config.with_target)
                .with_file(config.with_file)
                .with_line_number(config.with_line_number)
                .with_filter(filter);

            tracing_subscriber::registry().with(fmt_layer).try_init()?;
        }
    }

    Ok(())
}

/// Stub for when the `tracing` feature is disabled
#[cfg(not(feature = "tracing"))]
pub fn init_tracing(_config: TracingConfig) -> Result<()> {
    Ok(())
}

/// Record one completed file operation
pub fn record_io(operation: &str, path: &Path, tag: VariantTag, bytes: u64, duration: Duration) {
    tracing::info!(
        operation = operation,
        path = %path.display(),
        variant = %tag,
        bytes = bytes,
        duration_ms = duration.as_millis() as u64,
        "io_operation"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_format_parse() {
        assert_eq!(TracingFormat::parse("json"), TracingFormat::Json);
        assert_eq!(TracingFormat::parse("JSON"), TracingFormat::Json);
        assert_eq!(TracingFormat::parse("compact"), TracingFormat::Compact);
        assert_eq!(TracingFormat::parse("unknown"), TracingFormat::Pretty);
    }

    #[test]
    fn test_default_config() {
        let config = TracingConfig::default();
        assert!(config.with_ansi);
        assert!(!config.with_file);
    }

    #[test]
    fn test_record_io_without_subscriber() {
        record_io(
            "import",
            Path::new("/tmp/tensor.tns"),
            VariantTag::Dense,
            2048,
            Duration::from_millis(3),
        );
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn test_init_rejects_bad_filter() {
        let config = TracingConfig {
            filter: "tnsio_io=notalevel".to_string(),
            ..TracingConfig::default()
        };
        assert!(init_tracing(config).is_err());
    }
}
