//! Logging macros for ergonomic structured calls.
//!
//! `body!` builds a [`Body`](crate::Body) map literal; the leveled macros
//! forward to the facade with any number of trailing bodies.
//!
//! # Examples
//!
//! ```
//! use kvlog::prelude::*;
//! use kvlog::{body, info};
//!
//! let logger = Logger::new("INFO");
//! let ctx = Context::new();
//!
//! // Basic logging
//! info!(logger, &ctx, "server-started");
//!
//! // With structured bodies
//! info!(logger, &ctx, "request-handled", body! { "status" => 200 });
//!
//! // Later bodies overwrite earlier ones key by key
//! info!(
//!     logger,
//!     &ctx,
//!     "user-updated",
//!     body! { "id" => 42, "plan" => "free" },
//!     body! { "plan" => "pro" },
//! );
//! ```

/// Build a [`Body`](crate::Body) from `key => value` pairs.
///
/// Values can be anything convertible into a
/// [`FieldValue`](crate::FieldValue).
///
/// # Examples
///
/// ```
/// use kvlog::body;
///
/// let empty = body! {};
/// let fields = body! {
///     "user_id" => 42,
///     "active" => true,
///     "tags" => vec!["a", "b"],
/// };
/// assert!(empty.is_empty());
/// assert_eq!(fields.len(), 3);
/// ```
#[macro_export]
macro_rules! body {
    () => {
        $crate::Body::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut body = $crate::Body::new();
        $( body.set($key, $value); )+
        body
    }};
}

/// Log at an explicit level.
///
/// # Examples
///
/// ```
/// # use kvlog::prelude::*;
/// # let logger = Logger::new("INFO");
/// # let ctx = Context::new();
/// use kvlog::{body, log};
/// log!(logger, &ctx, Level::Info, "cache-warm");
/// log!(logger, &ctx, Level::Error, "cache-miss", body! { "key" => "users:42" });
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $ctx:expr, $level:expr, $title:expr $(, $body:expr)* $(,)?) => {
        $logger.log($ctx, $level, $title, &[$($body),*])
    };
}

/// Log a debug-level event.
///
/// # Examples
///
/// ```
/// # use kvlog::prelude::*;
/// # let logger = Logger::new("DEBUG");
/// # let ctx = Context::new();
/// use kvlog::{body, debug};
/// debug!(logger, &ctx, "query-planned", body! { "rows" => 10 });
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $ctx:expr, $title:expr $(, $body:expr)* $(,)?) => {
        $crate::log!($logger, $ctx, $crate::Level::Debug, $title $(, $body)*)
    };
}

/// Log an info-level event.
///
/// # Examples
///
/// ```
/// # use kvlog::prelude::*;
/// # let logger = Logger::new("INFO");
/// # let ctx = Context::new();
/// use kvlog::{body, info};
/// info!(logger, &ctx, "application-started");
/// info!(logger, &ctx, "items-processed", body! { "count" => 100 });
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $ctx:expr, $title:expr $(, $body:expr)* $(,)?) => {
        $crate::log!($logger, $ctx, $crate::Level::Info, $title $(, $body)*)
    };
}

/// Log a warn-level event.
///
/// # Examples
///
/// ```
/// # use kvlog::prelude::*;
/// # let logger = Logger::new("INFO");
/// # let ctx = Context::new();
/// use kvlog::{body, warn};
/// warn!(logger, &ctx, "disk-space-low", body! { "free_mb" => 512 });
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $ctx:expr, $title:expr $(, $body:expr)* $(,)?) => {
        $crate::log!($logger, $ctx, $crate::Level::Warn, $title $(, $body)*)
    };
}

/// Log an error-level event.
///
/// # Examples
///
/// ```
/// # use kvlog::prelude::*;
/// # let logger = Logger::new("INFO");
/// # let ctx = Context::new();
/// use kvlog::{body, error};
/// error!(logger, &ctx, "database-unreachable", body! { "attempt" => 3 });
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $ctx:expr, $title:expr $(, $body:expr)* $(,)?) => {
        $crate::log!($logger, $ctx, $crate::Level::Error, $title $(, $body)*)
    };
}

/// Log with `ERROR` severity, then invoke the logger's fatal handler.
///
/// # Examples
///
/// ```no_run
/// # use kvlog::prelude::*;
/// # let logger = Logger::new("INFO");
/// # let ctx = Context::new();
/// use kvlog::{body, fatal};
/// fatal!(logger, &ctx, "config-unreadable", body! { "path" => "/etc/app.toml" });
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $ctx:expr, $title:expr $(, $body:expr)* $(,)?) => {
        $logger.fatal($ctx, $title, &[$($body),*])
    };
}
