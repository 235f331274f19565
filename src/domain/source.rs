use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Identity of the component emitting log records.
///
/// Sources are cheap to clone and usable as map keys, so a provider can
/// hand out one contextual logger per distinct source. The identity is a
/// pure value: two sources with the same name are the same source.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReportingSource(Arc<str>);

impl ReportingSource {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// Derives a source from a Rust type path, for callers that scope
    /// their logger to the component type rather than a free-form name.
    pub fn of<T: ?Sized>() -> Self {
        Self::new(std::any::type_name::<T>())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReportingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ReportingSource {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ReportingSource {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl Serialize for ReportingSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Scheduler;

    #[test]
    fn same_name_is_same_source() {
        let a = ReportingSource::new("app::scheduler");
        let b = ReportingSource::from("app::scheduler".to_string());
        assert_eq!(a, b);

        let mut map = HashMap::new();
        map.insert(a, 1);
        assert_eq!(map.get(&b), Some(&1));
    }

    #[test]
    fn of_uses_the_type_path() {
        let source = ReportingSource::of::<Scheduler>();
        assert!(source.as_str().ends_with("Scheduler"));
        assert_eq!(source, ReportingSource::of::<Scheduler>());
    }

    #[test]
    fn displays_as_its_name() {
        assert_eq!(ReportingSource::new("worker").to_string(), "worker");
    }
}
