use crate::config::EffectiveConfig;
use crate::domain::record::error_chain;
use crate::domain::{LogRecord, ReportingSource, SeverityLevel};
use crate::engine::StructuredEngine;
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;

/// A logger bound to one reporting source.
///
/// Every record built here carries the source identity and the
/// configured enrichment. Enablement is answered by the engine through
/// the shared threshold logic, and `emit` consults the same answer
/// before delegating, so the check and the emission path cannot drift.
pub struct ContextualLogger {
    source: ReportingSource,
    config: Arc<EffectiveConfig>,
    engine: Arc<dyn StructuredEngine>,
}

impl ContextualLogger {
    pub(crate) fn new(
        source: ReportingSource,
        config: Arc<EffectiveConfig>,
        engine: Arc<dyn StructuredEngine>,
    ) -> Self {
        Self {
            source,
            config,
            engine,
        }
    }

    pub fn source(&self) -> &ReportingSource {
        &self.source
    }

    pub fn is_enabled(&self, level: SeverityLevel) -> bool {
        self.engine.enabled(&self.source, level)
    }

    /// Builds a record and hands it to the engine, unless the level is
    /// below this source's threshold. Template and values pass through
    /// verbatim and in order.
    pub fn emit(
        &self,
        level: SeverityLevel,
        template: &str,
        values: &[Value],
        error: Option<&dyn std::error::Error>,
    ) {
        if !self.is_enabled(level) {
            return;
        }

        self.engine.emit(LogRecord {
            timestamp: Utc::now(),
            source: self.source.clone(),
            level,
            template: template.to_string(),
            properties: values.to_vec(),
            error: error.map(error_chain),
            enrichment: self.config.enrichment.clone(),
        });
    }
}
