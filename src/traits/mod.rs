//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`RemoteStore`] - Queries against the hosted backend
//! - [`SessionProvider`] - The currently signed-in user

pub mod session;
pub mod store;

pub use session::SessionProvider;
pub use store::RemoteStore;
