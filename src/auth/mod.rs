//! Account-side helpers that run before a session exists.
//!
//! Authentication itself is handled by the hosted provider; the client only
//! validates what it sends.

pub mod registration;

pub use registration::{RegistrationError, RegistrationForm};
