//! Colored strings using ANSI foreground codes.
//!
//! ```
//! use termkit::color::{self, Color};
//!
//! let warning = color::yellow("careful");
//! let same = Color::Yellow.paint("careful");
//! assert_eq!(warning, same);
//! ```
//!
//! Colors can be turned off process-wide with [`set_enabled`]. If the
//! `NO_COLOR` environment variable is set (to any value), colors are always
//! off and [`set_enabled`] has no effect. See <https://no-color.org>.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicBool, Ordering};

/// Resets the foreground color only, leaving other attributes alone.
const FG_RESET: &str = "\x1b[39m";

static NO_COLOR: LazyLock<bool> = LazyLock::new(|| std::env::var_os("NO_COLOR").is_some());
static ENABLED: AtomicBool = AtomicBool::new(true);

/// The eight standard terminal foreground colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Black (30)
    Black,
    /// Red (31)
    Red,
    /// Green (32)
    Green,
    /// Yellow (33)
    Yellow,
    /// Blue (34)
    Blue,
    /// Magenta (35)
    Magenta,
    /// Cyan (36)
    Cyan,
    /// White (37)
    White,
}

impl Color {
    /// Every color, in SGR code order.
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// Lowercase name of the color.
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }

    /// Wrap `s` in this color. Same as [`paint`].
    pub fn paint(self, s: &str) -> String {
        paint(s, self)
    }
}

impl From<Color> for colored::Color {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => colored::Color::Black,
            Color::Red => colored::Color::Red,
            Color::Green => colored::Color::Green,
            Color::Yellow => colored::Color::Yellow,
            Color::Blue => colored::Color::Blue,
            Color::Magenta => colored::Color::Magenta,
            Color::Cyan => colored::Color::Cyan,
            Color::White => colored::Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown color name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color '{0}' (expected black, red, green, yellow, blue, magenta, cyan or white)")]
pub struct ParseColorError(String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Color::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

/// Enable or disable colors for the whole process.
///
/// Does nothing when `NO_COLOR` is set.
pub fn set_enabled(enabled: bool) {
    if *NO_COLOR {
        log::debug!("NO_COLOR is set, ignoring color override");
        return;
    }
    ENABLED.store(enabled, Ordering::Relaxed);
}

/// Whether colors are currently emitted.
pub fn is_enabled() -> bool {
    !*NO_COLOR && ENABLED.load(Ordering::Relaxed)
}

/// Wrap `s` in `color`, or return it unchanged when colors are disabled.
pub fn paint(s: &str, color: Color) -> String {
    if !is_enabled() {
        return s.to_string();
    }
    wrap(s, color)
}

fn wrap(s: &str, color: Color) -> String {
    // An inner reset would end our color early
    let body = s.replace(FG_RESET, "");
    let code = colored::Color::from(color).to_fg_str();
    format!("\x1b[{code}m{body}{FG_RESET}")
}

/// Black string.
pub fn black(s: &str) -> String {
    paint(s, Color::Black)
}

/// Red string.
pub fn red(s: &str) -> String {
    paint(s, Color::Red)
}

/// Green string.
pub fn green(s: &str) -> String {
    paint(s, Color::Green)
}

/// Yellow string.
pub fn yellow(s: &str) -> String {
    paint(s, Color::Yellow)
}

/// Blue string.
pub fn blue(s: &str) -> String {
    paint(s, Color::Blue)
}

/// Magenta string.
pub fn magenta(s: &str) -> String {
    paint(s, Color::Magenta)
}

/// Cyan string.
pub fn cyan(s: &str) -> String {
    paint(s, Color::Cyan)
}

/// White string.
pub fn white(s: &str) -> String {
    paint(s, Color::White)
}
