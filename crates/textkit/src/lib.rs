//! # textkit
//!
//! Small text helpers for CLI tools. Most APIs come in a `str` and a byte
//! slice flavor.
//!
//! ```
//! use textkit::expand_variables_str;
//!
//! let out = expand_variables_str("hello ${name}", |name| match name {
//!     "name" => "world",
//!     _ => "",
//! });
//! assert_eq!(out, "hello world");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod expand;

pub use expand::{expand_variables, expand_variables_str};
