//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`RestStore`] - Remote data store over the backend's row API
//! - [`StaticSession`] - Session provider for a fixed user id
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockStore`] - In-memory tables, failure injection, holds
//! - [`mock::MockSession`] - Switchable signed-in user

pub mod mock;
pub mod rest_store;
pub mod static_session;

pub use mock::{MockSession, MockStore};
pub use rest_store::RestStore;
pub use static_session::StaticSession;
