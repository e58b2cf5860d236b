// Captured program output

use crate::program::ast::SourceLocation;
use std::io::{self, Write};

/// Terminal that records every printed line with the statement that printed it
#[derive(Debug, Clone)]
pub struct Terminal {
    pub lines: Vec<TerminalLine>,
}

impl Terminal {
    pub fn new() -> Self {
        Terminal { lines: Vec::new() }
    }

    /// Record one complete line
    pub fn print_line(&mut self, text: String, location: SourceLocation) {
        self.lines.push(TerminalLine { text, location });
    }

    /// Get all lines as a vector of strings
    pub fn get_output(&self) -> Vec<String> {
        self.lines.iter().map(|tl| tl.text.clone()).collect()
    }

    /// Lines printed by the statement at `line`
    pub fn lines_from(&self, line: usize) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .filter(move |tl| tl.location.line == line)
            .map(|tl| tl.text.as_str())
    }

    /// Write every line, newline-terminated
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        for line in &self.lines {
            writeln!(out, "{}", line.text)?;
        }
        out.flush()
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

/// A line of terminal output with source location tracking
#[derive(Debug, Clone)]
pub struct TerminalLine {
    pub text: String,
    pub location: SourceLocation,
}
