use super::severity::SeverityLevel;
use super::source::ReportingSource;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// A structured record handed to the backend engine.
///
/// The message template and its property values are carried verbatim, in
/// caller order. Substitution of placeholders into the template is the
/// backend's concern; the facade never reorders, drops, or interpolates
/// values.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub source: ReportingSource,
    pub level: SeverityLevel,
    pub template: String,
    pub properties: Vec<Value>,
    /// Rendered error chain for records carrying a failure, outermost first.
    pub error: Option<String>,
    /// Properties from configuration attached to every record.
    pub enrichment: BTreeMap<String, String>,
}

/// Renders an error and its source chain into a single line.
pub fn error_chain(error: &dyn std::error::Error) -> String {
    let mut rendered = error.to_string();
    let mut current = error.source();
    while let Some(cause) = current {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        current = cause.source();
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use thiserror::Error;

    #[derive(Error, Debug)]
    #[error("connection refused")]
    struct Inner;

    #[derive(Error, Debug)]
    #[error("flush failed")]
    struct Outer(#[from] Inner);

    #[test]
    fn error_chain_walks_sources_outermost_first() {
        let outer = Outer(Inner);
        assert_eq!(error_chain(&outer), "flush failed: connection refused");
    }

    #[test]
    fn error_chain_renders_leaf_errors_alone() {
        assert_eq!(error_chain(&Inner), "connection refused");
    }

    #[test]
    fn records_serialize_with_verbatim_template_and_values() {
        let record = LogRecord {
            timestamp: Utc::now(),
            source: ReportingSource::new("worker"),
            level: SeverityLevel::Information,
            template: "handled {Count} jobs".to_string(),
            properties: vec![Value::from(42)],
            error: None,
            enrichment: BTreeMap::from([("environment".to_string(), "test".to_string())]),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["template"], "handled {Count} jobs");
        assert_eq!(json["properties"][0], 42);
        assert_eq!(json["source"], "worker");
        assert_eq!(json["level"], "information");
        assert_eq!(json["enrichment"]["environment"], "test");
    }
}
