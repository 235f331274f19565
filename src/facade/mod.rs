//! Public logging facade.
//!
//! `LogFacade` composes configuration composition, per-source contextual
//! loggers, and a structured engine behind a small leveled API. Engines
//! are injected explicitly; nothing here touches global logger state, so
//! independently configured facades coexist in one process.

use crate::config::{EffectiveConfig, HostingContext, compose};
use crate::context::ContextualLoggerProvider;
use crate::domain::{FacadeError, ReportingSource, SeverityLevel};
use crate::engine::{StructuredEngine, TracingEngine};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Level-based logging API bound to one reporting source.
///
/// The facade is `Send + Sync` and safe to share across threads without
/// caller-side locking. It has two states: active, and closed after
/// [`shutdown`](Self::shutdown). Once closed, log methods silently
/// no-op and [`is_enabled`](Self::is_enabled) answers `false`; a closed
/// facade never partially emits.
pub struct LogFacade {
    config: Arc<EffectiveConfig>,
    provider: Arc<ContextualLoggerProvider>,
    engine: Arc<dyn StructuredEngine>,
    source: ReportingSource,
    closed: Arc<AtomicBool>,
}

impl LogFacade {
    /// Builds a facade from an already-composed configuration, backed by
    /// the tracing engine.
    pub fn new(config: EffectiveConfig, source: ReportingSource) -> Result<Self, FacadeError> {
        let config = Arc::new(config);
        let engine: Arc<dyn StructuredEngine> = Arc::new(TracingEngine::new(config.clone())?);
        Ok(Self::assemble(config, engine, source))
    }

    /// Builds a facade around an injected engine.
    pub fn with_engine(
        engine: Arc<dyn StructuredEngine>,
        config: EffectiveConfig,
        source: ReportingSource,
    ) -> Self {
        Self::assemble(Arc::new(config), engine, source)
    }

    /// Builds a facade with the default configuration chain: hosting
    /// defaults, then the base config file, then the user override file.
    pub fn with_default_configuration(
        hosting: &HostingContext,
        base_path: Option<&Path>,
        user_path: Option<&Path>,
        source: ReportingSource,
    ) -> Result<Self, FacadeError> {
        let config = compose(hosting, base_path, user_path)?;
        Self::new(config, source)
    }

    fn assemble(
        config: Arc<EffectiveConfig>,
        engine: Arc<dyn StructuredEngine>,
        source: ReportingSource,
    ) -> Self {
        let provider = Arc::new(ContextualLoggerProvider::new(config.clone(), engine.clone()));
        Self {
            config,
            provider,
            engine,
            source,
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Derives a facade bound to another source, sharing the engine, the
    /// logger cache, and the shutdown state.
    pub fn scoped(&self, source: ReportingSource) -> Self {
        Self {
            config: self.config.clone(),
            provider: self.provider.clone(),
            engine: self.engine.clone(),
            source,
            closed: self.closed.clone(),
        }
    }

    /// The source this facade's log methods report as.
    pub fn source(&self) -> &ReportingSource {
        &self.source
    }

    /// The configuration this facade was built from.
    pub fn config(&self) -> &EffectiveConfig {
        &self.config
    }

    /// Whether the contextual logger for `source` would emit at `level`.
    ///
    /// Answered by the same threshold logic the emitting methods use.
    /// Returns `false` once the facade is closed.
    pub fn is_enabled(&self, source: &ReportingSource, level: SeverityLevel) -> bool {
        if self.closed.load(Ordering::Acquire) {
            return false;
        }
        self.provider.get(source).is_enabled(level)
    }

    pub fn log_critical(&self, template: &str, values: &[Value]) {
        self.emit(SeverityLevel::Fatal, template, values, None);
    }

    pub fn log_critical_with_error(
        &self,
        error: &dyn std::error::Error,
        template: &str,
        values: &[Value],
    ) {
        self.emit(SeverityLevel::Fatal, template, values, Some(error));
    }

    pub fn log_error(&self, template: &str, values: &[Value]) {
        self.emit(SeverityLevel::Error, template, values, None);
    }

    pub fn log_error_with_error(
        &self,
        error: &dyn std::error::Error,
        template: &str,
        values: &[Value],
    ) {
        self.emit(SeverityLevel::Error, template, values, Some(error));
    }

    pub fn log_warning(&self, template: &str, values: &[Value]) {
        self.emit(SeverityLevel::Warning, template, values, None);
    }

    pub fn log_warning_with_error(
        &self,
        error: &dyn std::error::Error,
        template: &str,
        values: &[Value],
    ) {
        self.emit(SeverityLevel::Warning, template, values, Some(error));
    }

    pub fn log_information(&self, template: &str, values: &[Value]) {
        self.emit(SeverityLevel::Information, template, values, None);
    }

    pub fn log_debug(&self, template: &str, values: &[Value]) {
        self.emit(SeverityLevel::Debug, template, values, None);
    }

    pub fn log_trace(&self, template: &str, values: &[Value]) {
        self.emit(SeverityLevel::Verbose, template, values, None);
    }

    fn emit(
        &self,
        level: SeverityLevel,
        template: &str,
        values: &[Value],
        error: Option<&dyn std::error::Error>,
    ) {
        if self.closed.load(Ordering::Acquire) {
            return;
        }
        self.provider.get(&self.source).emit(level, template, values, error);
    }

    /// Releases engine resources.
    ///
    /// The first call flushes the engine; the transition is one-way.
    /// Later calls are no-ops returning `Ok`, so shutting down twice is
    /// safe and releases nothing twice. Engines without a disposal hook
    /// inherit the trait's no-op, so closing them never errors; genuine
    /// flush failures are reported.
    pub fn shutdown(&self) -> Result<(), FacadeError> {
        if self.closed.swap(true, Ordering::AcqRel) {
            return Ok(());
        }
        tracing::debug!(source = %self.source, "shutting down log facade");
        self.engine.flush()?;
        Ok(())
    }
}
