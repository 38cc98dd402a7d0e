//! `dfl add` — create a document.

use anyhow::Result;
use docflow_core::FileStore;

/// Creates a document and prints a confirmation with its assigned id.
pub fn run_add(store: &mut FileStore, title: &str, description: &str) -> Result<()> {
    let doc = store.add(title, description)?;
    println!("Document #{} '{}' created.", doc.id, doc.title);
    Ok(())
}
