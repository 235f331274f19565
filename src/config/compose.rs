use super::layer::ConfigLayer;
use super::{ConfigError, EffectiveConfig, HostingContext};
use std::path::Path;

/// Composes the effective configuration from its layers.
///
/// The hosting context seeds the built-in defaults; the base config file
/// and the user override file are layered on top in that order, each
/// replacing the settings it names. Absent files are skipped. A present
/// but malformed file fails composition with the path named and no
/// partial configuration is produced.
///
/// Composition is deterministic: identical layer contents always yield an
/// equal [`EffectiveConfig`].
pub fn compose(
    hosting: &HostingContext,
    base_path: Option<&Path>,
    user_path: Option<&Path>,
) -> Result<EffectiveConfig, ConfigError> {
    let mut config = hosting.seed_defaults();

    for path in [base_path, user_path].into_iter().flatten() {
        match ConfigLayer::load(path)? {
            Some(layer) => {
                tracing::debug!(path = %path.display(), "applying config layer");
                layer.apply(&mut config);
            }
            None => {
                tracing::debug!(path = %path.display(), "config layer absent, skipping");
            }
        }
    }

    validate(&config)?;
    Ok(config)
}

fn validate(config: &EffectiveConfig) -> Result<(), ConfigError> {
    if config.file.enabled && config.file.path.as_os_str().is_empty() {
        return Err(ConfigError::Invalid(
            "file sink is enabled but no path is configured".to_string(),
        ));
    }
    if config.overrides.keys().any(|source| source.is_empty()) {
        return Err(ConfigError::Invalid(
            "severity override with an empty source name".to_string(),
        ));
    }
    Ok(())
}
