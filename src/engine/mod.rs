//! Backend boundary.
//!
//! The facade delegates every record to a [`StructuredEngine`]. The
//! production engine bridges to the tracing ecosystem; the capture engine
//! keeps records in memory for tests and embedding. Both resolve
//! enablement through [`EffectiveConfig::threshold_for`], so swapping
//! engines never changes which records are emitted.
//!
//! [`EffectiveConfig::threshold_for`]: crate::config::EffectiveConfig::threshold_for

pub mod bridge;
pub mod capture;

pub use bridge::TracingEngine;
pub use capture::CaptureEngine;

use crate::domain::{LogRecord, ReportingSource, SeverityLevel};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("failed to open log sink {path}: {source}")]
    Sink {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to flush log sink: {0}")]
    Flush(String),
}

/// A structured logging engine the facade can delegate to.
///
/// Emission is fire-and-forget: sink I/O failures are the engine's
/// concern and must not surface to callers. `flush` is the optional
/// disposal hook; engines with nothing to release inherit the no-op
/// default, so disposing such an engine never errors.
#[cfg_attr(test, mockall::automock)]
pub trait StructuredEngine: Send + Sync {
    /// Whether a record from `source` at `level` would be emitted.
    fn enabled(&self, source: &ReportingSource, level: SeverityLevel) -> bool;

    /// Emits a record to the engine's sinks.
    fn emit(&self, record: LogRecord);

    /// Releases engine resources, flushing buffered output.
    fn flush(&self) -> Result<(), EngineError> {
        Ok(())
    }
}
