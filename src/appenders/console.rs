//! Console appender implementation

use crate::core::{Appender, Level, LogEvent, Result};

/// Writes each canonical line to the console: `ERROR`-labeled events go to
/// stderr, everything else to stdout.
///
/// With the `console` feature (on by default) the whole line is tinted by
/// severity; custom labels stay untinted. Colors can be switched off for
/// pipes and log collectors with [`with_colors`](ConsoleAppender::with_colors).
pub struct ConsoleAppender {
    use_colors: bool,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn render(&self, line: &str, event: &LogEvent) -> String {
        if !self.use_colors {
            return line.to_string();
        }
        paint(line, event)
    }
}

#[cfg(feature = "console")]
fn paint(line: &str, event: &LogEvent) -> String {
    use colored::Colorize;
    match event.level.parse::<Level>() {
        Ok(level) => line.color(level.color_code()).to_string(),
        Err(_) => line.to_string(),
    }
}

#[cfg(not(feature = "console"))]
fn paint(line: &str, _event: &LogEvent) -> String {
    line.to_string()
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&self, line: &str, event: &LogEvent) -> Result<()> {
        let output = self.render(line, event);

        // Route ERROR-labeled events to stderr, others to stdout
        match event.level.parse::<Level>() {
            Ok(Level::Error) => eprintln!("{}", output),
            _ => println!("{}", output),
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        use std::io::Write;
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
