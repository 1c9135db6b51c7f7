//! Plain-text output for the command-line front end.

mod boxes;

pub use boxes::*;
