//! # errkit
//!
//! Structured errors for CLI tools.
//!
//! Every [`Error`] carries:
//! - a [`Kind`]: a small classification of what went wrong, independent of the message
//! - an [`Op`]: the call site that produced or wrapped the error (e.g. `config.read`)
//! - a human readable reason
//! - an optional wrapped cause
//!
//! ## Quick Start
//!
//! ```
//! use errkit::{Error, Kind, Op};
//!
//! #[derive(Debug)]
//! enum AppKind {
//!     Internal,
//! }
//!
//! impl Kind for AppKind {
//!     fn kind(&self) -> &str {
//!         match self {
//!             AppKind::Internal => "internal error",
//!         }
//!     }
//! }
//!
//! let err = Error::wrap(
//!     AppKind::Internal,
//!     "unable to create file",
//!     Op("config.write"),
//!     "dir not exist",
//! );
//! assert_eq!(err.to_string(), "internal error: unable to create file: dir not exist");
//! assert_eq!(
//!     format!("{err:#}"),
//!     "config.write: internal error: unable to create file: dir not exist"
//! );
//! ```
//!
//! ## Formatting
//!
//! The plain form (`{}`) is meant for end users and collapses a kind that is
//! repeated by a wrapped error. The detailed form (`{:#}`) adds the operation
//! label of every layer and puts each nested [`Error`] on its own indented line.
//!
//! ## Matching
//!
//! [`is`] checks whether a [`StateCode`] sentinel appears anywhere in the cause
//! chain, [`find`] returns the first cause of a concrete type.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chain;
pub mod error;
pub mod list;

pub use chain::{find, is, StateCode};
pub use error::{BoxError, Error, Kind, Op};
pub use list::List;

/// Result type defaulting to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
