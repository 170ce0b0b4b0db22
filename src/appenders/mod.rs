//! Appender implementations

pub mod channel;
pub mod console;
pub mod file;
pub mod memory;

pub use channel::ChannelAppender;
pub use console::ConsoleAppender;
pub use file::FileAppender;
pub use memory::MemoryAppender;

// Re-export the trait next to its implementations
pub use crate::core::Appender;
