use super::{ConsoleSinkConfig, EffectiveConfig, FileSinkConfig};
use crate::domain::SeverityLevel;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Describes the hosting context the facade runs in.
///
/// Seeds the built-in defaults: which sinks exist, where the file sink
/// writes, and which enrichment properties every record carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostingContext {
    /// Environment name, e.g. "production" or "staging".
    pub environment: String,
    /// Base directory; the default file sink writes below it.
    pub base_dir: PathBuf,
    /// Machine name attached to every record.
    pub machine_name: String,
}

impl HostingContext {
    pub fn new(environment: impl Into<String>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            environment: environment.into(),
            base_dir: base_dir.into(),
            machine_name: detect_machine_name(),
        }
    }

    /// Builds a context from the process environment: `RASK_ENVIRONMENT`
    /// names the environment (defaulting to "production") and the machine
    /// name comes from the host.
    pub fn detect(base_dir: impl Into<PathBuf>) -> Self {
        let environment =
            std::env::var("RASK_ENVIRONMENT").unwrap_or_else(|_| "production".to_string());
        Self::new(environment, base_dir)
    }

    pub fn with_machine_name(mut self, machine_name: impl Into<String>) -> Self {
        self.machine_name = machine_name.into();
        self
    }

    /// The built-in defaults for this hosting context.
    ///
    /// Console and file sinks enabled, Information threshold, records
    /// enriched with the environment and machine name. Config layers are
    /// applied on top of this baseline.
    pub(crate) fn seed_defaults(&self) -> EffectiveConfig {
        EffectiveConfig {
            minimum: SeverityLevel::Information,
            overrides: BTreeMap::new(),
            console: ConsoleSinkConfig { enabled: true },
            file: FileSinkConfig {
                enabled: true,
                path: self.base_dir.join("logs").join("facade.log"),
            },
            enrichment: BTreeMap::from([
                ("environment".to_string(), self.environment.clone()),
                ("machine_name".to_string(), self.machine_name.clone()),
            ]),
        }
    }
}

fn detect_machine_name() -> String {
    if let Ok(hostname) = hostname::get()
        && let Some(hostname_str) = hostname.to_str()
    {
        return hostname_str.to_string();
    }
    "unknown".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    fn defaults_point_the_file_sink_below_the_base_dir() {
        let hosting = HostingContext::new("staging", "/var/lib/app");
        let defaults = hosting.seed_defaults();

        assert_eq!(defaults.minimum, SeverityLevel::Information);
        assert!(defaults.console.enabled);
        assert!(defaults.file.enabled);
        assert_eq!(
            defaults.file.path,
            PathBuf::from("/var/lib/app/logs/facade.log")
        );
        assert_eq!(
            defaults.enrichment.get("environment").map(String::as_str),
            Some("staging")
        );
        assert!(defaults.enrichment.contains_key("machine_name"));
    }

    #[test]
    fn machine_name_can_be_overridden() {
        let hosting = HostingContext::new("test", "/tmp").with_machine_name("build-agent-7");
        assert_eq!(
            hosting
                .seed_defaults()
                .enrichment
                .get("machine_name")
                .map(String::as_str),
            Some("build-agent-7")
        );
    }

    #[test]
    #[serial]
    fn detect_reads_the_environment_variable() {
        unsafe {
            env::set_var("RASK_ENVIRONMENT", "integration");
        }
        let hosting = HostingContext::detect("/tmp");
        unsafe {
            env::remove_var("RASK_ENVIRONMENT");
        }
        assert_eq!(hosting.environment, "integration");
    }

    #[test]
    #[serial]
    fn detect_defaults_to_production() {
        unsafe {
            env::remove_var("RASK_ENVIRONMENT");
        }
        let hosting = HostingContext::detect("/tmp");
        assert_eq!(hosting.environment, "production");
    }
}
