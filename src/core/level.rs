//! Severity levels and their filtering priority

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::LoggerError;

/// Call severity. The discriminant is the filtering priority: a call is
/// emitted when its priority is greater than or equal to the logger's
/// configured minimum.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Level {
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl Level {
    pub fn to_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// Filtering priority of this level.
    pub fn priority(&self) -> u8 {
        *self as u8
    }

    /// Parse a severity name, mapping anything unrecognized to `Info`.
    ///
    /// This is the constructor-path parse: a logger built from config input
    /// must come up rather than reject, so `"nonsense"` yields the default.
    /// Matching is case-insensitive over exactly `DEBUG`, `INFO`, `WARN`
    /// and `ERROR`.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::Debug => Blue,
            Level::Info => Green,
            Level::Warn => Yellow,
            Level::Error => Red,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARN" => Ok(Level::Warn),
            "ERROR" => Ok(Level::Error),
            _ => Err(LoggerError::unknown_level(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert_eq!(Level::Debug.priority(), 0);
        assert_eq!(Level::Info.priority(), 1);
        assert_eq!(Level::Warn.priority(), 2);
        assert_eq!(Level::Error.priority(), 3);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("debug".parse::<Level>().ok(), Some(Level::Debug));
        assert_eq!("Info".parse::<Level>().ok(), Some(Level::Info));
        assert_eq!("WARN".parse::<Level>().ok(), Some(Level::Warn));
        assert_eq!("eRrOr".parse::<Level>().ok(), Some(Level::Error));
    }

    #[test]
    fn test_parse_strict_rejects_unknown() {
        let err = "TRACE".parse::<Level>().unwrap_err();
        assert!(matches!(err, LoggerError::UnknownLevel(_)));
        assert!("WARNING".parse::<Level>().is_err());
        assert!("".parse::<Level>().is_err());
    }

    #[test]
    fn test_parse_lenient_defaults_to_info() {
        assert_eq!(Level::parse_lenient("ERROR"), Level::Error);
        assert_eq!(Level::parse_lenient("warn"), Level::Warn);
        assert_eq!(Level::parse_lenient("unexpected input"), Level::Info);
        assert_eq!(Level::parse_lenient(""), Level::Info);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Level::Debug.to_string(), "DEBUG");
        assert_eq!(Level::Error.to_string(), "ERROR");
    }
}
