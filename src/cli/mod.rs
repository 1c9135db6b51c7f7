//! CLI module for nusell.
//!
//! The binary is a thin front end over the screens in [`crate::app`]: it
//! mounts one, waits for it to settle, and prints what it shows.
//!
//! ```ignore
//! use nusell::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args()) {
//!     CliCommand::Version => nusell::cli::handle_version_command(),
//!     CliCommand::Home => { /* mount HomeScreen */ }
//!     CliCommand::Profile(mode) => { /* mount ProfileScreen */ }
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{handle_version_command, VERSION};
