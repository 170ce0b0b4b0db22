//! Core logger types and traits

pub mod appender;
pub mod body;
pub mod context;
pub mod error;
pub mod event;
pub mod hook;
pub mod level;
pub mod logger;
pub mod metrics;
pub mod provider;
pub mod serializer;
pub mod timestamp;

pub use appender::Appender;
pub use body::{Body, FieldValue, OpaqueValue};
pub use context::{log_values, Context, ContextExtractor};
pub use error::{LoggerError, Result};
pub use event::LogEvent;
pub use hook::Hook;
pub use level::Level;
pub use logger::{FatalHandler, Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use provider::{MockCall, MockProvider, Provider};
pub use serializer::{Serializer, RESERVED_KEYS};
pub use timestamp::TimestampFormat;
