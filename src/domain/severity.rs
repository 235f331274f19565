use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error raised when a value outside the known severity set reaches a decode
/// boundary. Never swallowed, never replaced by a default.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("severity level \"{value}\" is not supported")]
pub struct UnsupportedLevelError {
    pub value: String,
}

/// Abstract log severity, ordered from least to most severe.
///
/// The ordering is total and fixed: `Verbose < Debug < Information <
/// Warning < Error < Fatal`. Enablement checks compare against this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeverityLevel {
    Verbose,
    Debug,
    Information,
    Warning,
    Error,
    Fatal,
}

impl SeverityLevel {
    /// Every severity in ascending order.
    pub const ALL: [Self; 6] = [
        Self::Verbose,
        Self::Debug,
        Self::Information,
        Self::Warning,
        Self::Error,
        Self::Fatal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Verbose => "verbose",
            Self::Debug => "debug",
            Self::Information => "information",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }

    /// Decodes a raw discriminant (0 = Verbose .. 5 = Fatal).
    ///
    /// Values outside the set fail with [`UnsupportedLevelError`]; no
    /// fallback value is ever produced.
    pub fn from_repr(value: u8) -> Result<Self, UnsupportedLevelError> {
        match value {
            0 => Ok(Self::Verbose),
            1 => Ok(Self::Debug),
            2 => Ok(Self::Information),
            3 => Ok(Self::Warning),
            4 => Ok(Self::Error),
            5 => Ok(Self::Fatal),
            _ => Err(UnsupportedLevelError {
                value: value.to_string(),
            }),
        }
    }
}

/// Maps the abstract severity onto the backend's severity model.
///
/// The match is total with no wildcard arm: adding a severity without a
/// backend mapping is a compile error, not a runtime default. `tracing`
/// defines no level above `ERROR`, so `Fatal` maps there as well; the
/// mapping stays monotone under the backend's ordering.
impl From<SeverityLevel> for tracing::Level {
    fn from(level: SeverityLevel) -> Self {
        match level {
            SeverityLevel::Verbose => tracing::Level::TRACE,
            SeverityLevel::Debug => tracing::Level::DEBUG,
            SeverityLevel::Information => tracing::Level::INFO,
            SeverityLevel::Warning => tracing::Level::WARN,
            SeverityLevel::Error => tracing::Level::ERROR,
            SeverityLevel::Fatal => tracing::Level::ERROR,
        }
    }
}

impl FromStr for SeverityLevel {
    type Err = UnsupportedLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "debug" => Ok(Self::Debug),
            "information" => Ok(Self::Information),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            _ => Err(UnsupportedLevelError {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SeverityLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// Deserialization routes through `FromStr` so config files carrying an
// unknown level fail with the unsupported-level message instead of a
// generic enum-variant error.
impl<'de> Deserialize<'de> for SeverityLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_total_and_ascending() {
        for pair in SeverityLevel::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} should sort below {}", pair[0], pair[1]);
        }
        assert!(SeverityLevel::Verbose < SeverityLevel::Fatal);
    }

    #[test]
    fn mapping_covers_every_level() {
        // tracing orders levels by verbosity (TRACE is the greatest), so a
        // rising severity must map to a non-rising tracing level.
        for pair in SeverityLevel::ALL.windows(2) {
            let lower = tracing::Level::from(pair[0]);
            let higher = tracing::Level::from(pair[1]);
            assert!(
                higher <= lower,
                "mapping must preserve severity order: {} -> {lower}, {} -> {higher}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn fatal_and_error_share_the_backend_maximum() {
        assert_eq!(
            tracing::Level::from(SeverityLevel::Fatal),
            tracing::Level::ERROR
        );
        assert_eq!(
            tracing::Level::from(SeverityLevel::Error),
            tracing::Level::ERROR
        );
    }

    #[test]
    fn from_str_round_trips_every_level() {
        for level in SeverityLevel::ALL {
            assert_eq!(level.as_str().parse::<SeverityLevel>(), Ok(level));
        }
        // Case-insensitive, matching config-file conventions.
        assert_eq!("Warning".parse::<SeverityLevel>(), Ok(SeverityLevel::Warning));
    }

    #[test]
    fn from_str_rejects_unknown_levels() {
        let err = "critical".parse::<SeverityLevel>().unwrap_err();
        assert_eq!(err.value, "critical");
        assert!(err.to_string().contains("\"critical\" is not supported"));
    }

    #[test]
    fn from_repr_round_trips_and_rejects_out_of_range() {
        for (repr, level) in SeverityLevel::ALL.into_iter().enumerate() {
            assert_eq!(SeverityLevel::from_repr(repr as u8), Ok(level));
        }
        let err = SeverityLevel::from_repr(6).unwrap_err();
        assert_eq!(err.value, "6");
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&SeverityLevel::Information).unwrap();
        assert_eq!(json, "\"information\"");
        let level: SeverityLevel = serde_json::from_str("\"fatal\"").unwrap();
        assert_eq!(level, SeverityLevel::Fatal);
    }

    #[test]
    fn serde_rejects_unknown_levels_with_unsupported_message() {
        let err = serde_json::from_str::<SeverityLevel>("\"loud\"").unwrap_err();
        assert!(err.to_string().contains("\"loud\" is not supported"));
    }
}
