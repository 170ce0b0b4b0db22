//! Error types for the logging facade

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unrecognized severity name on the strict parsing path
    #[error("Unknown log level: '{0}'")]
    UnknownLevel(String),

    /// Hook failure surfaced by the middleware pipeline
    #[error("Hook error: {0}")]
    HookError(String),

    /// File appender error with path
    #[error("File appender error for '{path}': {message}")]
    FileAppenderError { path: String, message: String },

    /// File lock error
    #[error("Failed to acquire file lock on '{path}'")]
    FileLockError { path: String },

    /// Appender error (generic)
    #[error("Appender error: {0}")]
    AppenderError(String),

    /// Channel appender has no connected receiver
    #[error("Channel appender disconnected")]
    ChannelDisconnected,

    /// Channel appender buffer is full
    #[error("Channel appender full: {capacity} lines buffered")]
    ChannelFull { capacity: usize },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an unknown-level error
    pub fn unknown_level(name: impl Into<String>) -> Self {
        LoggerError::UnknownLevel(name.into())
    }

    /// Create a hook error
    pub fn hook(msg: impl Into<String>) -> Self {
        LoggerError::HookError(msg.into())
    }

    /// Create a file appender error
    pub fn file_appender(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileAppenderError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a file lock error
    pub fn file_lock(path: impl Into<String>) -> Self {
        LoggerError::FileLockError { path: path.into() }
    }

    /// Create an appender error (generic)
    pub fn appender<S: Into<String>>(msg: S) -> Self {
        LoggerError::AppenderError(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::unknown_level("TRACE");
        assert!(matches!(err, LoggerError::UnknownLevel(_)));

        let err = LoggerError::hook("redaction failed");
        assert!(matches!(err, LoggerError::HookError(_)));

        let err = LoggerError::file_appender("/var/log/app.log", "Permission denied");
        assert!(matches!(err, LoggerError::FileAppenderError { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::unknown_level("TRACE");
        assert_eq!(err.to_string(), "Unknown log level: 'TRACE'");

        let err = LoggerError::file_lock("/var/log/app.log");
        assert_eq!(
            err.to_string(),
            "Failed to acquire file lock on '/var/log/app.log'"
        );

        let err = LoggerError::ChannelFull { capacity: 1024 };
        assert_eq!(err.to_string(), "Channel appender full: 1024 lines buffered");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: LoggerError = io_err.into();

        assert!(matches!(err, LoggerError::IoError(_)));
        assert!(err.to_string().contains("access denied"));
    }
}
