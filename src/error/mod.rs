//! Error handling for the sync core.
//!
//! - **Store errors** (`StoreError`): what a remote data store implementation
//!   returns for a single query
//! - **Sync errors** (`SyncError`): what the screen reports upward, tagged with
//!   the load that failed
//! - **Error categories** (`ErrorCategory`): banner wording and whether pulling
//!   to refresh is worth suggesting
//!
//! | SyncError | Meaning | Category |
//! |-----------|---------|----------|
//! | NotFound | profile row missing | Missing |
//! | Transport | connectivity or 5xx | Network / Server |
//! | Load | any other query failure | Client |
//! | NoSession | nobody signed in | User |

mod category;
mod store;
mod sync;

pub use category::ErrorCategory;
pub use store::{classify_reqwest_error, StoreError};
pub use sync::{LoadOperation, SyncError};

/// Type alias for Results using SyncError.
pub type SyncResult<T> = Result<T, SyncError>;
