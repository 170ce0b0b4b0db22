//! Consumer-facing logging contract and test double

use parking_lot::Mutex;

use super::body::Body;
use super::context::Context;
use super::level::Level;
use super::logger::Logger;

/// Object-safe emission contract for code that takes "anything that can
/// log" without committing to the concrete [`Logger`].
///
/// `Logger` implements it directly; [`MockProvider`] records calls for
/// consumer-side tests.
pub trait Provider: Send + Sync {
    fn debug(&self, ctx: &Context, title: &str, bodies: &[Body]);
    fn info(&self, ctx: &Context, title: &str, bodies: &[Body]);
    fn warn(&self, ctx: &Context, title: &str, bodies: &[Body]);
    fn error(&self, ctx: &Context, title: &str, bodies: &[Body]);
    /// Emission plus termination semantics; see [`Logger::fatal`].
    fn fatal(&self, ctx: &Context, title: &str, bodies: &[Body]);
}

impl Provider for Logger {
    fn debug(&self, ctx: &Context, title: &str, bodies: &[Body]) {
        Logger::debug(self, ctx, title, bodies);
    }

    fn info(&self, ctx: &Context, title: &str, bodies: &[Body]) {
        Logger::info(self, ctx, title, bodies);
    }

    fn warn(&self, ctx: &Context, title: &str, bodies: &[Body]) {
        Logger::warn(self, ctx, title, bodies);
    }

    fn error(&self, ctx: &Context, title: &str, bodies: &[Body]) {
        Logger::error(self, ctx, title, bodies);
    }

    fn fatal(&self, ctx: &Context, title: &str, bodies: &[Body]) {
        Logger::fatal(self, ctx, title, bodies);
    }
}

/// One call recorded by [`MockProvider`]: the level label, the title, and
/// the call-site bodies merged left-to-right.
#[derive(Debug, Clone, PartialEq)]
pub struct MockCall {
    pub level: String,
    pub title: String,
    pub body: Body,
}

/// Recording [`Provider`] for tests.
///
/// Nothing is filtered, serialized, or written; `fatal` records the label
/// `FATAL` and does not terminate anything.
///
/// # Example
///
/// ```
/// use kvlog::{body, Context, MockProvider, Provider};
///
/// fn create_user(logger: &dyn Provider) {
///     logger.info(&Context::new(), "user-created", &[body! { "id" => 7 }]);
/// }
///
/// let mock = MockProvider::new();
/// create_user(&mock);
///
/// let calls = mock.calls();
/// assert_eq!(calls.len(), 1);
/// assert_eq!(calls[0].title, "user-created");
/// ```
#[derive(Debug, Default)]
pub struct MockProvider {
    calls: Mutex<Vec<MockCall>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, level: &str, title: &str, bodies: &[Body]) {
        self.calls.lock().push(MockCall {
            level: level.to_string(),
            title: title.to_string(),
            body: Body::merged(bodies),
        });
    }

    /// Snapshot of recorded calls in emission order
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().clone()
    }

    /// Titles of recorded calls in emission order
    pub fn titles(&self) -> Vec<String> {
        self.calls.lock().iter().map(|call| call.title.clone()).collect()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

impl Provider for MockProvider {
    fn debug(&self, _ctx: &Context, title: &str, bodies: &[Body]) {
        self.record(Level::Debug.to_str(), title, bodies);
    }

    fn info(&self, _ctx: &Context, title: &str, bodies: &[Body]) {
        self.record(Level::Info.to_str(), title, bodies);
    }

    fn warn(&self, _ctx: &Context, title: &str, bodies: &[Body]) {
        self.record(Level::Warn.to_str(), title, bodies);
    }

    fn error(&self, _ctx: &Context, title: &str, bodies: &[Body]) {
        self.record(Level::Error.to_str(), title, bodies);
    }

    fn fatal(&self, _ctx: &Context, title: &str, bodies: &[Body]) {
        self.record("FATAL", title, bodies);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body;
    use crate::core::body::FieldValue;

    #[test]
    fn test_mock_records_in_order() {
        let mock = MockProvider::new();
        let ctx = Context::new();

        mock.info(&ctx, "first", &[]);
        mock.warn(&ctx, "second", &[]);

        assert_eq!(mock.titles(), vec!["first", "second"]);
        assert_eq!(mock.calls()[1].level, "WARN");
    }

    #[test]
    fn test_mock_merges_call_site_bodies() {
        let mock = MockProvider::new();
        mock.error(
            &Context::new(),
            "t",
            &[body! { "k" => "old", "a" => 1 }, body! { "k" => "new" }],
        );

        let call = &mock.calls()[0];
        assert_eq!(call.body.get("k"), Some(&FieldValue::String("new".into())));
        assert_eq!(call.body.get("a"), Some(&FieldValue::Int(1)));
    }

    #[test]
    fn test_mock_fatal_records_without_terminating() {
        let mock = MockProvider::new();
        mock.fatal(&Context::new(), "boom", &[]);

        assert_eq!(mock.calls()[0].level, "FATAL");
    }

    #[test]
    fn test_mock_clear() {
        let mock = MockProvider::new();
        mock.debug(&Context::new(), "t", &[]);
        mock.clear();
        assert!(mock.calls().is_empty());
    }

    #[test]
    fn test_provider_is_object_safe() {
        let mock = MockProvider::new();
        let provider: &dyn Provider = &mock;
        provider.info(&Context::new(), "through-dyn", &[]);
        assert_eq!(mock.titles(), vec!["through-dyn"]);
    }
}
