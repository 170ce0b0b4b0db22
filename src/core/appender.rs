//! Appender trait for log output destinations

use super::{error::Result, event::LogEvent};

/// Output collaborator receiving each rendered line.
///
/// `append` takes `&self` because emission runs concurrently from any
/// thread holding the logger; appenders use interior mutability for their
/// writers. `event` carries the structured form for sinks that want more
/// than the canonical text. Errors and panics are isolated by the facade
/// and surface only on its diagnostic path.
pub trait Appender: Send + Sync {
    fn append(&self, line: &str, event: &LogEvent) -> Result<()>;
    fn flush(&self) -> Result<()>;
    fn name(&self) -> &str;
}
