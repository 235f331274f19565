mod compose;
mod hosting;
mod layer;

pub use compose::compose;
pub use hosting::HostingContext;
pub use layer::{ConfigLayer, ConsoleLayer, FileLayer};

use crate::domain::{ReportingSource, SeverityLevel};
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Console sink settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleSinkConfig {
    pub enabled: bool,
}

/// File sink settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSinkConfig {
    pub enabled: bool,
    pub path: PathBuf,
}

/// The effective logging configuration.
///
/// Produced once by [`compose`] from defaults, an optional base config
/// file, and an optional user override file. Frozen after composition:
/// changing settings requires composing a new value and constructing a
/// new facade from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    /// Minimum severity emitted when no per-source override applies.
    pub minimum: SeverityLevel,
    /// Per-source severity overrides, keyed by source name.
    pub overrides: BTreeMap<String, SeverityLevel>,
    pub console: ConsoleSinkConfig,
    pub file: FileSinkConfig,
    /// Properties attached to every emitted record.
    pub enrichment: BTreeMap<String, String>,
}

impl EffectiveConfig {
    /// Resolves the severity threshold for a source.
    ///
    /// This is the single enablement authority: every engine and the
    /// facade's `is_enabled` consult it, so the check and the emission
    /// path cannot disagree.
    pub fn threshold_for(&self, source: &ReportingSource) -> SeverityLevel {
        self.overrides
            .get(source.as_str())
            .copied()
            .unwrap_or(self.minimum)
    }

    /// Whether a record from `source` at `level` clears its threshold.
    pub fn enabled(&self, source: &ReportingSource, level: SeverityLevel) -> bool {
        level >= self.threshold_for(source)
    }
}
