//! `dfl list` — the document overview table.

use docflow_core::FileStore;

/// Truncate to at most `max` characters (not bytes) for column display.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Prints all documents as an id-sorted table.
pub fn run_list(store: &FileStore) {
    let documents = store.list_all();

    if documents.is_empty() {
        println!("No documents found.");
        return;
    }

    println!("Documents ({})", documents.len());
    println!(
        "{:<4} {:<30} {:<15} {:<20}",
        "ID", "TITLE", "STATUS", "UPDATED"
    );
    println!("{}", "-".repeat(75));

    for doc in documents {
        println!(
            "{:<4} {:<30} {:<15} {:<20}",
            doc.id,
            truncate(&doc.title, 28),
            doc.status.label(),
            doc.updated_at
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("short", 28), "short");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("ééééé", 3), "ééé");
    }
}
