//! `dfl set-status` — apply a lifecycle transition.

use anyhow::{bail, Result};
use docflow_core::{DocumentStatus, FileStore};

/// Changes a document's status. An unknown id is a recoverable error
/// message, not a panic; persistence failures abort this operation only.
pub fn run_set_status(
    store: &mut FileStore,
    id: u64,
    status: DocumentStatus,
    comment: &str,
) -> Result<()> {
    if !store.change_status(id, status, comment)? {
        bail!("document with id {} not found", id);
    }
    println!("Document #{} status set to '{}'.", id, status.label());
    Ok(())
}
