//! One-line status messages with a colored icon.
//!
//! Errors go to stderr, everything else to stdout.

use crate::color::{self, Color};

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Neutral information
    Info,
    /// Completed successfully
    Success,
    /// Something worth noticing
    Warn,
    /// Something failed
    Error,
}

impl Level {
    /// Icon shown before the message.
    pub fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ",
            Level::Success => "✓",
            Level::Warn => "⚠",
            Level::Error => "✗",
        }
    }

    /// Color of the icon.
    pub fn color(self) -> Color {
        match self {
            Level::Info => Color::Blue,
            Level::Success => Color::Green,
            Level::Warn => Color::Yellow,
            Level::Error => Color::Red,
        }
    }
}

/// Render a message line without printing it.
pub fn render(level: Level, msg: &str) -> String {
    format!("{} {msg}", color::paint(level.icon(), level.color()))
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", render(Level::Info, msg));
}

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", render(Level::Success, msg));
}

/// Print a warning message
pub fn warn(msg: &str) {
    println!("{}", render(Level::Warn, msg));
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", render(Level::Error, msg));
}

/// Print a step indicator such as `[2/5] Building`
pub fn step(num: usize, total: usize, msg: &str) {
    println!("{} {msg}", color::blue(&format!("[{num}/{total}]")));
}
