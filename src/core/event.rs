//! In-flight log event passed through the middleware pipeline

use serde::Serialize;

use super::body::Body;

/// A single log call after merging, before serialization.
///
/// `level` is a label rather than a [`Level`](super::level::Level) so hooks
/// can rewrite it and `log_as` can emit custom labels; filtering happened
/// against the call's priority before the event was built. Hooks receive
/// `&mut LogEvent` and every mutation is visible to later hooks and to the
/// serialized output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEvent {
    pub level: String,
    pub title: String,
    pub body: Body,
}

impl LogEvent {
    pub fn new(level: impl Into<String>, title: impl Into<String>, body: Body) -> Self {
        Self {
            level: level.into(),
            title: title.into(),
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::body::FieldValue;

    #[test]
    fn test_event_creation() {
        let event = LogEvent::new("INFO", "user-created", Body::new().with("id", 7));
        assert_eq!(event.level, "INFO");
        assert_eq!(event.title, "user-created");
        assert_eq!(event.body.get("id"), Some(&FieldValue::Int(7)));
    }
}
