use super::{EngineError, StructuredEngine};
use crate::config::EffectiveConfig;
use crate::domain::{LogRecord, ReportingSource, SeverityLevel};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory engine that records every emission.
///
/// Applies the same threshold logic as the production engine, so tests
/// exercising enablement observe exactly what a real sink would receive.
pub struct CaptureEngine {
    config: Arc<EffectiveConfig>,
    records: Mutex<Vec<LogRecord>>,
    flushes: AtomicUsize,
}

impl CaptureEngine {
    pub fn new(config: Arc<EffectiveConfig>) -> Self {
        Self {
            config,
            records: Mutex::new(Vec::new()),
            flushes: AtomicUsize::new(0),
        }
    }

    /// Snapshot of everything emitted so far, in emission order.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    pub fn record_count(&self) -> usize {
        self.records.lock().len()
    }

    /// How many times `flush` has been called.
    pub fn flush_count(&self) -> usize {
        self.flushes.load(Ordering::Acquire)
    }
}

impl StructuredEngine for CaptureEngine {
    fn enabled(&self, source: &ReportingSource, level: SeverityLevel) -> bool {
        self.config.enabled(source, level)
    }

    fn emit(&self, record: LogRecord) {
        if !self.config.enabled(&record.source, record.level) {
            return;
        }
        self.records.lock().push(record);
    }

    fn flush(&self) -> Result<(), EngineError> {
        self.flushes.fetch_add(1, Ordering::AcqRel);
        Ok(())
    }
}
