//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockStore`] - In-memory remote data store with failure injection and holds
//! - [`MockSession`] - Session provider with a switchable user

pub mod session;
pub mod store;

pub use session::MockSession;
pub use store::{MockStore, QueryKind, RecordedQuery};
