//! # kvlog
//!
//! A leveled, structured logging facade that emits one JSON object per event.
//!
//! ## Features
//!
//! - **Structured Bodies**: Key/value bodies merged left to right at each call site
//! - **Context Values**: Ambient fields extracted from an immutable request context
//! - **Middleware Hooks**: Ordered before/after hooks that may rewrite events in flight
//! - **Isolated Failures**: A failing hook or appender never breaks the calling code
//! - **Thread Safe**: Emission takes `&self` and is designed for concurrent use
//!
//! ## Quick Start
//!
//! ```
//! use kvlog::prelude::*;
//! use kvlog::body;
//!
//! let logger = Logger::new("INFO");
//! let ctx = Context::new().with_values(body! { "request_id" => "abc-123" });
//!
//! logger.info(&ctx, "request-handled", &[body! { "status" => 200 }]);
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ChannelAppender, ConsoleAppender, FileAppender, MemoryAppender};
    pub use crate::core::{
        log_values, Appender, Body, Context, ContextExtractor, FatalHandler, FieldValue, Hook,
        Level, LogEvent, Logger, LoggerBuilder, LoggerError, LoggerMetrics, Result,
    };
}

pub use appenders::{ChannelAppender, ConsoleAppender, FileAppender, MemoryAppender};
pub use core::{
    log_values, Appender, Body, Context, ContextExtractor, FatalHandler, FieldValue, Hook, Level,
    LogEvent, Logger, LoggerBuilder, LoggerError, LoggerMetrics, MockCall, MockProvider,
    OpaqueValue, Provider, Result, Serializer, TimestampFormat, RESERVED_KEYS,
};
