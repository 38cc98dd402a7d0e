//! Error types for store operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by [`FileStore`](crate::store::FileStore) mutations.
///
/// Load-time problems are never errors: a missing or unparsable backing
/// file silently recovers to an empty store, with the path taken reported
/// by [`LoadOutcome`](crate::store::LoadOutcome).
#[derive(Debug, Error)]
pub enum StoreError {
    /// A document title was empty or whitespace-only.
    #[error("document title must not be empty")]
    EmptyTitle,

    /// Writing the backing file failed. The current operation is aborted;
    /// the store remains usable and the next successful mutation rewrites
    /// the file in full.
    #[error("failed to persist store to {path}")]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The collection could not be serialized to JSON.
    #[error("failed to encode store snapshot")]
    Encode(#[from] serde_json::Error),
}
