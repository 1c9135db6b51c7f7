//! nusell - content synchronization core for the nusell marketplace client
//!
//! This library exposes modules for use by the binary and integration tests.

pub mod adapters;
pub mod app;
pub mod auth;
pub mod cli;
pub mod cli_output;
pub mod config;
pub mod error;
pub mod models;
pub mod sync;
pub mod traits;
