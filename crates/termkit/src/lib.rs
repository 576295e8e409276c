//! # termkit
//!
//! Terminal UI toolkit for building CLI applications.
//!
//! This crate provides reusable building blocks for CLI interfaces:
//! - **Spinner**: Animated progress indicator running on a background thread
//! - **Colors**: ANSI foreground colors with a global toggle and `NO_COLOR` support
//! - **Messages**: Consistent info, warning, error, and success output
//!
//! ## Quick Start
//!
//! ```no_run
//! use termkit::{color, messages, Spinner, SpinnerConfig};
//!
//! // Spinner
//! let spinner = Spinner::new(SpinnerConfig::new().with_start_message("Loading..."));
//! spinner.start();
//! // ... do work ...
//! spinner.stop();
//!
//! // Colors
//! println!("{}", color::green("ready"));
//!
//! // Messages
//! messages::success("Done!");
//! ```
//!
//! ## Design Philosophy
//!
//! termkit provides opinionated defaults for a consistent look:
//! - Success: green checkmark (✓)
//! - Error: red cross (✗)
//! - Warning: yellow warning sign (⚠)
//! - Info: blue info icon (ℹ)
//! - Spinner: braille dots, 100ms per frame, stderr

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod color;
pub mod messages;
pub mod spinner;

// Re-export commonly used items at crate root for convenience
pub use color::Color;
pub use messages::{error, info, step, success, warn};
pub use spinner::{Spinner, SpinnerConfig};
