//! Container error type.

use thiserror::Error;

use crate::persist::StorageError;

/// Errors surfaced by the session store.
///
/// Everything here is non-fatal: the container stays usable after any of
/// these, and state is left untouched when a dispatch fails.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A cart or profile mutation was dispatched with nobody signed in.
    #[error("no active session")]
    NoActiveSession,

    /// The persistence backend could not be read.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
