use super::{ConfigError, EffectiveConfig};
use crate::domain::SeverityLevel;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// One configuration layer: a partial settings fragment parsed from a
/// TOML file.
///
/// Every field is optional. A layer only replaces the settings it names;
/// everything else survives from the layers beneath it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigLayer {
    pub minimum: Option<SeverityLevel>,
    #[serde(default)]
    pub overrides: BTreeMap<String, SeverityLevel>,
    pub console: Option<ConsoleLayer>,
    pub file: Option<FileLayer>,
    #[serde(default)]
    pub enrichment: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConsoleLayer {
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileLayer {
    pub enabled: Option<bool>,
    pub path: Option<PathBuf>,
}

impl ConfigLayer {
    /// Loads a layer from a TOML file.
    ///
    /// An absent file is not an error and yields `None`; composition
    /// proceeds with the layers that are present. A file that exists but
    /// cannot be read or parsed fails with a [`ConfigError`] naming the
    /// offending path, and no partial layer is produced.
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        let layer = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Some(layer))
    }

    /// Applies this layer on top of `config`, replacing the settings the
    /// layer names and adding the ones it introduces.
    pub(crate) fn apply(self, config: &mut EffectiveConfig) {
        if let Some(minimum) = self.minimum {
            config.minimum = minimum;
        }
        for (source, level) in self.overrides {
            config.overrides.insert(source, level);
        }
        if let Some(console) = self.console
            && let Some(enabled) = console.enabled
        {
            config.console.enabled = enabled;
        }
        if let Some(file) = self.file {
            if let Some(enabled) = file.enabled {
                config.file.enabled = enabled;
            }
            if let Some(path) = file.path {
                config.file.path = path;
            }
        }
        for (key, value) in self.enrichment {
            config.enrichment.insert(key, value);
        }
    }
}
