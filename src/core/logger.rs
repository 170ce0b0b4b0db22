//! Main logger implementation

use super::{
    appender::Appender,
    body::Body,
    context::{log_values, Context, ContextExtractor},
    error::Result,
    event::LogEvent,
    hook::{self, Hook},
    level::Level,
    metrics::LoggerMetrics,
    serializer::Serializer,
    timestamp::TimestampFormat,
};
use std::sync::Arc;

/// Invoked by `fatal` after the event has been emitted and the after-hooks
/// have run. Defaults to `process::exit(1)`; tests and supervised runtimes
/// substitute their own teardown.
pub type FatalHandler = Arc<dyn Fn() + Send + Sync>;

/// The logging facade.
///
/// Emission (`debug` through `fatal`, `log`, `log_as`) is `&self`, runs to
/// completion on the calling thread, and never returns an error: hook,
/// extractor, and appender failures are isolated and visible only through
/// stderr diagnostics and [`LoggerMetrics`]. Hook registration is
/// `&mut self`: configure first, then share the logger via `Arc`.
///
/// # Example
///
/// ```
/// use kvlog::{body, Context, Logger};
///
/// let logger = Logger::new("INFO");
/// let ctx = Context::new().with_values(body! { "request_id" => "abc-123" });
///
/// logger.info(&ctx, "request-handled", &[body! { "status" => 200 }]);
/// logger.debug(&ctx, "ignored-below-min-level", &[]);
/// ```
pub struct Logger {
    min_level: Level,
    extractors: Vec<Box<dyn ContextExtractor>>,
    before_hooks: Vec<Box<dyn Hook>>,
    after_hooks: Vec<Box<dyn Hook>>,
    serializer: Serializer,
    appender: Box<dyn Appender>,
    metrics: Arc<LoggerMetrics>,
    on_fatal: FatalHandler,
}

impl Logger {
    /// Create a logger writing canonical lines to the console, with the
    /// [`log_values`] extractor installed.
    ///
    /// `min_level` is parsed leniently: case-insensitive `DEBUG`, `INFO`,
    /// `WARN` or `ERROR`, anything else falls back to `INFO`.
    #[must_use]
    pub fn new(min_level: &str) -> Self {
        Logger::builder().level(min_level).extractor(log_values).build()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use kvlog::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .level("DEBUG")
    ///     .extractor(log_values)
    ///     .appender(MemoryAppender::new())
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    #[inline]
    pub fn debug(&self, ctx: &Context, title: impl Into<String>, bodies: &[Body]) {
        self.log(ctx, Level::Debug, title, bodies);
    }

    #[inline]
    pub fn info(&self, ctx: &Context, title: impl Into<String>, bodies: &[Body]) {
        self.log(ctx, Level::Info, title, bodies);
    }

    #[inline]
    pub fn warn(&self, ctx: &Context, title: impl Into<String>, bodies: &[Body]) {
        self.log(ctx, Level::Warn, title, bodies);
    }

    #[inline]
    pub fn error(&self, ctx: &Context, title: impl Into<String>, bodies: &[Body]) {
        self.log(ctx, Level::Error, title, bodies);
    }

    /// Emit at `ERROR` priority with the `ERROR` label, then invoke the
    /// fatal handler. The handler runs after the after-hooks; by default it
    /// terminates the process with exit code 1.
    ///
    /// # Example
    /// ```no_run
    /// use kvlog::{Context, Logger};
    ///
    /// let logger = Logger::new("INFO");
    /// logger.fatal(&Context::new(), "config-unreadable", &[]);
    /// // unreachable with the default handler
    /// ```
    pub fn fatal(&self, ctx: &Context, title: impl Into<String>, bodies: &[Body]) {
        self.log_as(ctx, Level::Error, Level::Error.to_str(), title, bodies);
        (self.on_fatal)();
    }

    /// Emit at an explicit level with its canonical label.
    #[inline]
    pub fn log(&self, ctx: &Context, level: Level, title: impl Into<String>, bodies: &[Body]) {
        self.log_as(ctx, level, level.to_str(), title, bodies);
    }

    /// Lower-level entry point: filter by `priority`, emit `label` verbatim
    /// as the level field. This is how custom labels (audit trails, vendor
    /// schemas) reach the output without widening the [`Level`] enum.
    pub fn log_as(
        &self,
        ctx: &Context,
        priority: Level,
        label: impl Into<String>,
        title: impl Into<String>,
        bodies: &[Body],
    ) {
        if priority < self.min_level {
            self.metrics.record_filtered();
            return;
        }

        let mut body = self.gather_context(ctx);
        for extra in bodies {
            body.extend_from(extra);
        }

        let mut event = LogEvent::new(label, title, body);
        hook::run_chain("before", &self.before_hooks, ctx, &mut event, &self.metrics);

        let line = self.serializer.serialize(&event);
        self.append_isolated(&line, &event);

        hook::run_chain("after", &self.after_hooks, ctx, &mut event, &self.metrics);
    }

    /// Run every extractor in registration order and merge their bodies,
    /// later extractors overwriting earlier ones. Extractors are infallible
    /// by contract; one that panics is skipped and reported.
    fn gather_context(&self, ctx: &Context) -> Body {
        let mut body = Body::new();
        for (idx, extractor) in self.extractors.iter().enumerate() {
            let extracted =
                std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| extractor.extract(ctx)));
            match extracted {
                Ok(extracted) => body.merge(extracted),
                Err(_) => {
                    self.metrics.record_extractor_failure();
                    eprintln!("[LOGGER ERROR] Context extractor #{} panicked", idx);
                }
            }
        }
        body
    }

    /// Hand the rendered line to the appender with panic isolation, so a
    /// failing sink can never take the caller down.
    fn append_isolated(&self, line: &str, event: &LogEvent) {
        self.metrics.record_emitted();

        let append_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            self.appender.append(line, event)
        }));

        match append_result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                self.metrics.record_appender_failure();
                eprintln!(
                    "[LOGGER ERROR] Appender '{}' failed: {}",
                    self.appender.name(),
                    e
                );
            }
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                self.metrics.record_appender_failure();
                eprintln!(
                    "[LOGGER CRITICAL] Appender '{}' panicked: {}",
                    self.appender.name(),
                    panic_msg
                );
            }
        }
    }

    /// Append a hook to the before-chain. Hooks run in registration order
    /// and cannot be removed.
    pub fn add_before_each(&mut self, hook: impl Hook + 'static) {
        self.before_hooks.push(Box::new(hook));
    }

    /// Append a hook to the after-chain. Hooks run in registration order
    /// and cannot be removed.
    pub fn add_after_each(&mut self, hook: impl Hook + 'static) {
        self.after_hooks.push(Box::new(hook));
    }

    /// The configured minimum severity
    pub fn min_level(&self) -> Level {
        self.min_level
    }

    /// Get the logger metrics for observability
    ///
    /// # Example
    ///
    /// ```
    /// use kvlog::prelude::*;
    ///
    /// let logger = Logger::builder().appender(MemoryAppender::new()).build();
    /// logger.info(&Context::new(), "hello", &[]);
    ///
    /// assert_eq!(logger.metrics().emitted_count(), 1);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.appender.flush()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new("INFO")
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use kvlog::prelude::*;
///
/// let logger = Logger::builder()
///     .level("DEBUG")
///     .extractor(log_values)
///     .before_each(|_: &Context, event: &mut LogEvent| {
///         event.body.set("service", "api-gateway");
///         Ok(())
///     })
///     .appender(MemoryAppender::new())
///     .build();
/// ```
pub struct LoggerBuilder {
    min_level: Level,
    extractors: Vec<Box<dyn ContextExtractor>>,
    before_hooks: Vec<Box<dyn Hook>>,
    after_hooks: Vec<Box<dyn Hook>>,
    timestamp_format: TimestampFormat,
    appender: Option<Box<dyn Appender>>,
    on_fatal: Option<FatalHandler>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: Level::Info,
            extractors: Vec::new(),
            before_hooks: Vec::new(),
            after_hooks: Vec::new(),
            timestamp_format: TimestampFormat::default(),
            appender: None,
            on_fatal: None,
        }
    }

    /// Set minimum severity from a config string
    ///
    /// Lenient: case-insensitive, anything unrecognized falls back to
    /// `INFO`.
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: &str) -> Self {
        self.min_level = Level::parse_lenient(level);
        self
    }

    /// Set minimum severity
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Append a context extractor; extractors run in registration order
    #[must_use = "builder methods return a new value"]
    pub fn extractor<E: ContextExtractor + 'static>(mut self, extractor: E) -> Self {
        self.extractors.push(Box::new(extractor));
        self
    }

    /// Append a hook to the before-chain
    #[must_use = "builder methods return a new value"]
    pub fn before_each<H: Hook + 'static>(mut self, hook: H) -> Self {
        self.before_hooks.push(Box::new(hook));
        self
    }

    /// Append a hook to the after-chain
    #[must_use = "builder methods return a new value"]
    pub fn after_each<H: Hook + 'static>(mut self, hook: H) -> Self {
        self.after_hooks.push(Box::new(hook));
        self
    }

    /// Set the output appender, replacing the default console appender
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appender = Some(Box::new(appender));
        self
    }

    /// Set the timestamp format for serialized lines
    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Replace the process-exit behavior of `fatal`
    ///
    /// # Example
    ///
    /// ```
    /// use kvlog::prelude::*;
    /// use std::sync::Arc;
    ///
    /// let logger = Logger::builder()
    ///     .appender(MemoryAppender::new())
    ///     .on_fatal(Arc::new(|| {
    ///         eprintln!("shutting down");
    ///     }))
    ///     .build();
    /// ```
    #[must_use = "builder methods return a new value"]
    pub fn on_fatal(mut self, handler: FatalHandler) -> Self {
        self.on_fatal = Some(handler);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        Logger {
            min_level: self.min_level,
            extractors: self.extractors,
            before_hooks: self.before_hooks,
            after_hooks: self.after_hooks,
            serializer: Serializer::new().with_timestamp_format(self.timestamp_format),
            appender: self
                .appender
                .unwrap_or_else(|| Box::new(crate::appenders::ConsoleAppender::new())),
            metrics: Arc::new(LoggerMetrics::new()),
            on_fatal: self
                .on_fatal
                .unwrap_or_else(|| Arc::new(|| std::process::exit(1))),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::MemoryAppender;
    use crate::body;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn test_builder_basic() {
        let logger = Logger::builder().min_level(Level::Debug).build();
        assert_eq!(logger.min_level(), Level::Debug);
    }

    #[test]
    fn test_builder_level_string_lenient() {
        assert_eq!(Logger::builder().level("error").build().min_level(), Level::Error);
        assert_eq!(Logger::builder().level("bogus").build().min_level(), Level::Info);
    }

    #[test]
    fn test_filtered_call_short_circuits() {
        let sink = MemoryAppender::new();
        let logger = Logger::builder().level("WARN").appender(sink.clone()).build();

        logger.info(&Context::new(), "dropped", &[]);

        assert!(sink.lines().is_empty());
        assert_eq!(logger.metrics().filtered_count(), 1);
        assert_eq!(logger.metrics().emitted_count(), 0);
    }

    #[test]
    fn test_equal_priority_passes_filter() {
        let sink = MemoryAppender::new();
        let logger = Logger::builder().level("WARN").appender(sink.clone()).build();

        logger.warn(&Context::new(), "kept", &[]);

        assert_eq!(sink.lines().len(), 1);
    }

    #[test]
    fn test_call_site_body_wins_over_extractor() {
        let sink = MemoryAppender::new();
        let logger = Logger::builder()
            .extractor(|_: &Context| body! { "origin" => "extractor", "keep" => 1 })
            .appender(sink.clone())
            .build();

        logger.info(&Context::new(), "t", &[body! { "origin" => "call-site" }]);

        let parsed: serde_json::Value = serde_json::from_str(&sink.lines()[0]).unwrap();
        assert_eq!(parsed["origin"], "call-site");
        assert_eq!(parsed["keep"], 1);
    }

    #[test]
    fn test_log_as_custom_label() {
        let sink = MemoryAppender::new();
        let logger = Logger::builder().appender(sink.clone()).build();

        logger.log_as(&Context::new(), Level::Warn, "AUDIT", "login", &[]);

        let parsed: serde_json::Value = serde_json::from_str(&sink.lines()[0]).unwrap();
        assert_eq!(parsed["level"], "AUDIT");
    }

    #[test]
    fn test_registration_appends_in_order() {
        let sink = MemoryAppender::new();
        let mut logger = Logger::builder().appender(sink.clone()).build();
        logger.add_before_each(|_: &Context, event: &mut LogEvent| {
            event.title.push('1');
            Ok(())
        });
        logger.add_before_each(|_: &Context, event: &mut LogEvent| {
            event.title.push('2');
            Ok(())
        });

        logger.info(&Context::new(), "t", &[]);

        let parsed: serde_json::Value = serde_json::from_str(&sink.lines()[0]).unwrap();
        assert_eq!(parsed["title"], "t12");
    }

    #[test]
    fn test_fatal_invokes_handler_after_emission() {
        let sink = MemoryAppender::new();
        let fired = Arc::new(AtomicBool::new(false));
        let fired_clone = Arc::clone(&fired);
        let logger = Logger::builder()
            .appender(sink.clone())
            .on_fatal(Arc::new(move || {
                fired_clone.store(true, Ordering::SeqCst);
            }))
            .build();

        logger.fatal(&Context::new(), "boom", &[]);

        assert!(fired.load(Ordering::SeqCst));
        let parsed: serde_json::Value = serde_json::from_str(&sink.lines()[0]).unwrap();
        assert_eq!(parsed["level"], "ERROR");
    }

    #[test]
    fn test_default_logger_is_info() {
        let logger = Logger::default();
        assert_eq!(logger.min_level(), Level::Info);
    }
}
