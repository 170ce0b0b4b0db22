//! Canonical JSON line serialization

use std::collections::BTreeMap;

use chrono::Utc;

use super::body::{Body, FieldValue};
use super::event::LogEvent;
use super::timestamp::TimestampFormat;

/// Keys owned by the line envelope. Body fields with these names are
/// renamed with a `body_` prefix rather than dropped.
pub const RESERVED_KEYS: [&str; 3] = ["level", "title", "timestamp"];

const RENAME_PREFIX: &str = "body_";

/// Renders each event as exactly one JSON object with a fixed field order:
/// `timestamp`, `level`, `title`, then every body field in Unicode
/// codepoint key order.
///
/// The timestamp is captured when [`serialize`](Serializer::serialize) is
/// called, so it reflects serialization time, not call time. Serialization
/// is total: unserializable values degrade (debug string, then type name)
/// and the emission path never sees an error. The returned line carries no
/// trailing newline; that is the appender's decision.
///
/// # Example
///
/// ```
/// use kvlog::{Body, LogEvent, Serializer};
///
/// let serializer = Serializer::new();
/// let event = LogEvent::new("INFO", "user-created", Body::new().with("id", 7));
/// let line = serializer.serialize(&event);
/// assert!(line.starts_with("{\"timestamp\":"));
/// assert!(line.ends_with("\"id\":7}"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Serializer {
    timestamp_format: TimestampFormat,
}

impl Serializer {
    /// Create a serializer with RFC 3339 timestamps
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Serialize `event` to one JSON line, capturing the timestamp now.
    #[must_use]
    pub fn serialize(&self, event: &LogEvent) -> String {
        let timestamp = self.timestamp_format.format(&Utc::now());
        self.render(&timestamp, event)
    }

    fn render(&self, timestamp: &str, event: &LogEvent) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(3 + event.body.len());
        parts.push(format!("\"timestamp\":{}", encode_str(timestamp)));
        parts.push(format!("\"level\":{}", encode_str(&event.level)));
        parts.push(format!("\"title\":{}", encode_str(&event.title)));
        for (key, value) in disambiguated_entries(&event.body) {
            parts.push(format!("{}:{}", encode_str(&key), encode_value(value)));
        }
        format!("{{{}}}", parts.join(","))
    }
}

/// Body entries keyed for output: reserved names get the rename prefix,
/// repeated until the result no longer collides with another body key, so
/// no field is ever dropped.
fn disambiguated_entries(body: &Body) -> BTreeMap<String, &FieldValue> {
    let mut entries: BTreeMap<String, &FieldValue> = BTreeMap::new();
    for (key, value) in body.iter() {
        if !RESERVED_KEYS.contains(&key.as_str()) {
            entries.insert(key.clone(), value);
        }
    }
    for reserved in RESERVED_KEYS {
        if let Some(value) = body.get(reserved) {
            let mut renamed = format!("{}{}", RENAME_PREFIX, reserved);
            while entries.contains_key(&renamed) {
                renamed.insert_str(0, RENAME_PREFIX);
            }
            entries.insert(renamed, value);
        }
    }
    entries
}

/// JSON-encode a string. Encoding a `str` cannot fail in practice; the
/// empty-string literal keeps the line well-formed if it ever does.
fn encode_str(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| String::from("\"\""))
}

/// JSON-encode a field value. Payload degradation already happened inside
/// `to_json_value`; a failure at this final step writes a literal `null`
/// so the line stays valid JSON.
fn encode_value(value: &FieldValue) -> String {
    serde_json::to_string(&value.to_json_value()).unwrap_or_else(|_| String::from("null"))
}
