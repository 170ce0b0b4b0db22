//! Channel appender implementation

use crate::core::{Appender, LogEvent, LoggerError, Result};
use crossbeam_channel::{unbounded, Receiver, Sender, TrySendError};

/// Forwards each rendered line into a crossbeam channel, decoupling slow
/// consumers (shippers, aggregation threads) from the emission path.
///
/// `try_send` keeps emission non-blocking: a full bounded channel or a
/// dropped receiver surfaces as an appender error, which the facade
/// isolates and counts without disturbing the caller.
///
/// # Example
///
/// ```
/// use kvlog::appenders::ChannelAppender;
/// use kvlog::{Context, Logger};
///
/// let (appender, receiver) = ChannelAppender::unbounded();
/// let logger = Logger::builder().appender(appender).build();
///
/// logger.info(&Context::new(), "queued", &[]);
/// assert!(receiver.recv().unwrap().contains("queued"));
/// ```
pub struct ChannelAppender {
    sender: Sender<String>,
}

impl ChannelAppender {
    pub fn new(sender: Sender<String>) -> Self {
        Self { sender }
    }

    /// Create an appender with a fresh unbounded channel, returning the
    /// receiving side.
    pub fn unbounded() -> (Self, Receiver<String>) {
        let (sender, receiver) = unbounded();
        (Self::new(sender), receiver)
    }
}

impl Appender for ChannelAppender {
    fn append(&self, line: &str, _event: &LogEvent) -> Result<()> {
        match self.sender.try_send(line.to_string()) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => Err(LoggerError::ChannelFull {
                capacity: self.sender.capacity().unwrap_or(0),
            }),
            Err(TrySendError::Disconnected(_)) => Err(LoggerError::ChannelDisconnected),
        }
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "channel"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Body;

    #[test]
    fn test_lines_arrive_in_order() {
        let (appender, receiver) = ChannelAppender::unbounded();
        let event = LogEvent::new("INFO", "t", Body::new());

        appender.append("first", &event).unwrap();
        appender.append("second", &event).unwrap();

        assert_eq!(receiver.recv().unwrap(), "first");
        assert_eq!(receiver.recv().unwrap(), "second");
    }

    #[test]
    fn test_full_bounded_channel_errors() {
        let (sender, _receiver) = crossbeam_channel::bounded(1);
        let appender = ChannelAppender::new(sender);
        let event = LogEvent::new("INFO", "t", Body::new());

        appender.append("fits", &event).unwrap();
        let err = appender.append("overflow", &event).unwrap_err();
        assert!(matches!(err, LoggerError::ChannelFull { capacity: 1 }));
    }

    #[test]
    fn test_disconnected_receiver_errors() {
        let (appender, receiver) = ChannelAppender::unbounded();
        drop(receiver);
        let event = LogEvent::new("INFO", "t", Body::new());

        let err = appender.append("nowhere", &event).unwrap_err();
        assert!(matches!(err, LoggerError::ChannelDisconnected));
    }
}
