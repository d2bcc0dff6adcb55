//! Output sink for progress and listing text.
//!
//! The downloader never prints directly; it writes display text through
//! the [`Output`] trait so tests can capture it in a buffer.

use std::io::Write;

use tracing::warn;

/// Sink for user-facing display text.
pub trait Output {
    /// Write a full line of text.
    fn line(&mut self, text: &str);

    /// Write text without a line break (progress prefixes like
    /// `Downloading name... ` completed later by [`Output::line`]).
    fn partial(&mut self, text: &str);
}

/// Production output writing to stdout.
#[derive(Debug, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for ConsoleOutput {
    fn line(&mut self, text: &str) {
        println!("{}", text);
    }

    fn partial(&mut self, text: &str) {
        print!("{}", text);
        // Partial text must be visible while the following download runs
        if let Err(e) = std::io::stdout().flush() {
            warn!(error = %e, "failed to flush stdout");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_output_constructs() {
        let mut out = ConsoleOutput::new();
        out.line("");
    }
}
