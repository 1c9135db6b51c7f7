//! Command-line argument parsing for nusell.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use crate::models::ViewMode;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Load the profile screen, ending on the given tab (default)
    Profile(ViewMode),
    /// Load the home feed
    Home,
}

/// Parse command-line arguments and return the appropriate command.
///
/// `--version` wins over everything; `--home` wins over `--likes`.
/// Unknown arguments are ignored.
///
/// # Examples
///
/// ```
/// use nusell::cli::args::{parse_args, CliCommand};
/// use nusell::models::ViewMode;
///
/// let args = vec!["nusell".to_string(), "--likes".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Profile(ViewMode::Likes));
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut command = CliCommand::Profile(ViewMode::Posts);
    // Skip the program name
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--home" => command = CliCommand::Home,
            "--likes" if command != CliCommand::Home => {
                command = CliCommand::Profile(ViewMode::Likes)
            }
            _ => {}
        }
    }
    command
}
