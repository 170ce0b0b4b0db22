//! File appender implementation

use crate::core::{Appender, LogEvent, Result};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends one canonical line per event to a log file.
///
/// The buffered writer lives behind a mutex so concurrent emission from
/// many threads stays ordered. Buffered data is flushed on drop.
pub struct FileAppender {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl FileAppender {
    /// Open `path` for appending, creating the file if needed.
    ///
    /// With the `file` feature (on by default) an advisory exclusive lock
    /// is held for the lifetime of the appender, so two processes cannot
    /// interleave writes into the same log file.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use kvlog::appenders::FileAppender;
    ///
    /// let appender = FileAppender::new("/var/log/app.log").unwrap();
    /// ```
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        #[cfg(feature = "file")]
        {
            use fs2::FileExt;
            file.try_lock_exclusive().map_err(|_| {
                crate::core::LoggerError::file_lock(path.display().to_string())
            })?;
        }

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Appender for FileAppender {
    fn append(&self, line: &str, _event: &LogEvent) -> Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}
