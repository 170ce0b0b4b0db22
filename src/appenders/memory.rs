//! In-memory appender for tests and short-lived tools

use crate::core::{Appender, LogEvent, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Buffers each rendered line in memory.
///
/// Cloning shares the buffer, so a test keeps one handle and hands the
/// other to the logger:
///
/// # Example
///
/// ```
/// use kvlog::appenders::MemoryAppender;
/// use kvlog::{Context, Logger};
///
/// let sink = MemoryAppender::new();
/// let logger = Logger::builder().appender(sink.clone()).build();
///
/// logger.info(&Context::new(), "captured", &[]);
/// assert_eq!(sink.lines().len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MemoryAppender {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of captured lines in emission order
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Appender for MemoryAppender {
    fn append(&self, line: &str, _event: &LogEvent) -> Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
