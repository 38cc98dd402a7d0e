//! `dfl find` — filter documents by current status.

use docflow_core::{DocumentStatus, FileStore};

use crate::list::truncate;

/// Prints documents whose current status matches, as an id-sorted table.
pub fn run_find(store: &FileStore, status: DocumentStatus) {
    let documents = store.filter_by_status(status);

    if documents.is_empty() {
        println!("No documents with status '{}'.", status.label());
        return;
    }

    println!(
        "Documents with status '{}' ({})",
        status.label(),
        documents.len()
    );
    println!("{:<4} {:<30} {:<20}", "ID", "TITLE", "UPDATED");
    println!("{}", "-".repeat(60));

    for doc in documents {
        println!(
            "{:<4} {:<30} {:<20}",
            doc.id,
            truncate(&doc.title, 28),
            doc.updated_at
        );
    }
}
