//! Error kinds reported by toolbelt commands.

use errkit::Kind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The user asked for something that cannot be done
    Invalid,
    /// Reading or writing failed
    Io,
}

impl Kind for ErrorKind {
    fn kind(&self) -> &str {
        match self {
            ErrorKind::Invalid => "invalid operation",
            ErrorKind::Io => "I/O error",
        }
    }
}
