use super::{EngineError, StructuredEngine};
use crate::config::EffectiveConfig;
use crate::domain::{LogRecord, ReportingSource, SeverityLevel};
use std::fs::File;
use std::sync::Arc;
use tracing::Dispatch;
use tracing_subscriber::Registry;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;

/// Production engine bridging to the tracing ecosystem.
///
/// Builds a private [`Dispatch`] from the effective configuration: a
/// compact console layer on stderr and a JSON-lines file layer. The
/// dispatcher is never installed as the global default, so independently
/// configured facades coexist within one process.
#[derive(Debug)]
pub struct TracingEngine {
    config: Arc<EffectiveConfig>,
    dispatch: Dispatch,
    /// Kept open for the lifetime of the engine so `flush` can sync it.
    file: Option<Arc<File>>,
}

impl TracingEngine {
    pub fn new(config: Arc<EffectiveConfig>) -> Result<Self, EngineError> {
        let console_layer = config.console.enabled.then(|| {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact()
        });

        let file = if config.file.enabled {
            Some(Arc::new(open_sink_file(&config)?))
        } else {
            None
        };
        let file_layer = file.clone().map(|file| {
            fmt::layer()
                .json()
                .with_ansi(false)
                .with_target(false)
                .with_writer(file)
        });

        let subscriber = Registry::default().with(console_layer).with(file_layer);
        Ok(Self {
            config,
            dispatch: Dispatch::new(subscriber),
            file,
        })
    }
}

fn open_sink_file(config: &EffectiveConfig) -> Result<File, EngineError> {
    let path = &config.file.path;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| EngineError::Sink {
            path: path.clone(),
            source: e,
        })?;
    }
    File::create(path).map_err(|e| EngineError::Sink {
        path: path.clone(),
        source: e,
    })
}

impl StructuredEngine for TracingEngine {
    fn enabled(&self, source: &ReportingSource, level: SeverityLevel) -> bool {
        self.config.enabled(source, level)
    }

    fn emit(&self, record: LogRecord) {
        if !self.config.enabled(&record.source, record.level) {
            return;
        }

        let properties = serde_json::to_string(&record.properties).unwrap_or_default();
        let enrichment = serde_json::to_string(&record.enrichment).unwrap_or_default();
        let error = record.error.as_deref();
        let source = record.source.as_str();

        // Event macros need a const level, so the mapped severity selects
        // the arm. Template and values pass through verbatim as fields.
        tracing::dispatcher::with_default(&self.dispatch, || {
            match tracing::Level::from(record.level) {
                tracing::Level::ERROR => tracing::error!(
                    source,
                    severity = %record.level,
                    properties = %properties,
                    enrichment = %enrichment,
                    error,
                    "{}",
                    record.template
                ),
                tracing::Level::WARN => tracing::warn!(
                    source,
                    severity = %record.level,
                    properties = %properties,
                    enrichment = %enrichment,
                    error,
                    "{}",
                    record.template
                ),
                tracing::Level::INFO => tracing::info!(
                    source,
                    severity = %record.level,
                    properties = %properties,
                    enrichment = %enrichment,
                    error,
                    "{}",
                    record.template
                ),
                tracing::Level::DEBUG => tracing::debug!(
                    source,
                    severity = %record.level,
                    properties = %properties,
                    enrichment = %enrichment,
                    error,
                    "{}",
                    record.template
                ),
                tracing::Level::TRACE => tracing::trace!(
                    source,
                    severity = %record.level,
                    properties = %properties,
                    enrichment = %enrichment,
                    error,
                    "{}",
                    record.template
                ),
            }
        });
    }

    fn flush(&self) -> Result<(), EngineError> {
        if let Some(file) = &self.file {
            file.sync_all()
                .map_err(|e| EngineError::Flush(e.to_string()))?;
        }
        Ok(())
    }
}
