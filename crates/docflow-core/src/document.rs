//! The document entity and its append-only audit trail.
//!
//! A [`Document`] is created only by the store (id allocation is
//! centralized there) and mutated only through
//! [`change_status`](Document::change_status), which appends one
//! audit-trail entry and advances `updated_at`. Documents are never
//! deleted; archival is a status value, not removal.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::status::DocumentStatus;

/// Timestamp format used for `created_at`, `updated_at`, and audit-trail
/// entries. Second precision, lexicographically sortable.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn now_stamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// A document tracked through the approval lifecycle.
///
/// `id` is store-assigned and immutable after creation. `status`,
/// `updated_at`, and `history` change together through
/// [`change_status`](Document::change_status). `history` is append-only:
/// entry 0 records the creation, every later entry records exactly one
/// status transition, so its length is always 1 + the number of
/// transitions ever applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: DocumentStatus,
    pub created_at: String,
    pub updated_at: String,
    pub history: Vec<String>,
}

impl Document {
    /// Creates a draft document with a single creation entry in its
    /// audit trail.
    ///
    /// Titles that are empty or whitespace-only are rejected with
    /// [`StoreError::EmptyTitle`].
    pub fn new(
        id: u64,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(StoreError::EmptyTitle);
        }

        let created_at = now_stamp();
        let history = vec![format!("Document created ({})", created_at)];

        Ok(Self {
            id,
            title,
            description: description.into(),
            status: DocumentStatus::Draft,
            updated_at: created_at.clone(),
            created_at,
            history,
        })
    }

    /// Applies a status transition, appending an audit-trail entry and
    /// advancing `updated_at`.
    ///
    /// A transition to the current status is not special-cased: it still
    /// appends an entry and bumps the timestamp.
    pub fn change_status(&mut self, new_status: DocumentStatus, comment: &str) {
        let old_status = self.status;
        self.status = new_status;
        self.updated_at = now_stamp();

        let mut entry = format!(
            "Status changed from '{}' to '{}'",
            old_status.label(),
            new_status.label()
        );
        if !comment.is_empty() {
            entry.push_str(&format!(" ({})", comment));
        }
        entry.push_str(&format!(" - {}", self.updated_at));

        self.history.push(entry);
    }
}
