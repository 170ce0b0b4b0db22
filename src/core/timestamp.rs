//! Timestamp formatting utilities
//!
//! Provides standardized, configurable timestamp formats for log output.
//! Supports RFC 3339 (the default), ISO 8601, Unix milliseconds, and custom
//! strftime formats.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standardized timestamp format options
///
/// Formats commonly used in logging systems and compatible with log
/// aggregation tools (Elasticsearch, Splunk, Loki, etc.)
///
/// # Examples
///
/// ```
/// use kvlog::TimestampFormat;
/// use chrono::Utc;
///
/// let format = TimestampFormat::Rfc3339;
/// let timestamp = format.format(&Utc::now());
/// // Output: "2025-01-08T10:30:45.123456+00:00"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339 format: `2025-01-08T10:30:45.123456+00:00`
    ///
    /// This is the default format for the canonical JSON line.
    #[default]
    Rfc3339,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// ISO 8601 with microseconds: `2025-01-08T10:30:45.123456Z`
    ///
    /// Provides higher precision for ordering concurrent log entries.
    Iso8601Micros,

    /// Unix timestamp in milliseconds: `1736332245123`
    ///
    /// Compact numeric timestamp; still rendered as a JSON string.
    UnixMillis,

    /// Custom strftime format
    ///
    /// Allows specifying any strftime-compatible format string.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvlog::TimestampFormat;
    ///
    /// // Apache log format
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    ///
    /// // Simple date only
    /// let format = TimestampFormat::Custom("%Y-%m-%d".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this format
    ///
    /// # Examples
    ///
    /// ```
    /// use kvlog::TimestampFormat;
    /// use chrono::Utc;
    ///
    /// let format = TimestampFormat::Iso8601;
    /// let timestamp = format.format(&Utc::now());
    /// assert!(timestamp.ends_with('Z'));
    /// ```
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Iso8601Micros => datetime.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}
