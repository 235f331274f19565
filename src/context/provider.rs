use super::logger::ContextualLogger;
use crate::config::EffectiveConfig;
use crate::domain::ReportingSource;
use crate::engine::StructuredEngine;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Hands out contextual loggers, one per distinct reporting source.
///
/// Loggers are created lazily on first request and cached, so repeated
/// requests for the same source return the same instance. The cache is
/// the only guarded section in the crate: concurrent first requests for
/// one source are settled under the write lock, so backend state is
/// never initialized twice for a source.
pub struct ContextualLoggerProvider {
    config: Arc<EffectiveConfig>,
    engine: Arc<dyn StructuredEngine>,
    loggers: RwLock<HashMap<ReportingSource, Arc<ContextualLogger>>>,
}

impl ContextualLoggerProvider {
    pub fn new(config: Arc<EffectiveConfig>, engine: Arc<dyn StructuredEngine>) -> Self {
        Self {
            config,
            engine,
            loggers: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the contextual logger bound to `source`.
    pub fn get(&self, source: &ReportingSource) -> Arc<ContextualLogger> {
        {
            let loggers = self.loggers.read();
            if let Some(logger) = loggers.get(source) {
                return logger.clone();
            }
        }

        let mut loggers = self.loggers.write();
        loggers
            .entry(source.clone())
            .or_insert_with(|| {
                tracing::debug!(source = %source, "binding contextual logger");
                Arc::new(ContextualLogger::new(
                    source.clone(),
                    self.config.clone(),
                    self.engine.clone(),
                ))
            })
            .clone()
    }

    /// Number of bound loggers (for tests).
    pub fn bound_count(&self) -> usize {
        self.loggers.read().len()
    }
}
