//! `dfl history` — a document's audit trail.

use anyhow::{bail, Result};
use docflow_core::FileStore;

/// Prints a document's metadata and its numbered audit-trail entries.
pub fn run_history(store: &FileStore, id: u64) -> Result<()> {
    let doc = match store.get(id) {
        Some(doc) => doc,
        None => bail!("document with id {} not found", id),
    };

    println!("History of '{}' (id {})", doc.title, doc.id);
    if doc.description.is_empty() {
        println!("Description: none");
    } else {
        println!("Description: {}", doc.description);
    }
    println!("Current status: {}", doc.status.label());
    println!("{}", "-".repeat(60));

    for (i, entry) in doc.history.iter().enumerate() {
        println!("{}. {}", i + 1, entry);
    }

    Ok(())
}
