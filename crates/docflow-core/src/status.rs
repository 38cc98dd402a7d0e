//! Document lifecycle statuses.
//!
//! Five closed states covering the approval workflow. Every status is
//! reachable from every other and none is terminal — an archived document
//! can still be moved back to review. The workflow deliberately enforces
//! no transition graph; callers pick any target status.
//!
//! Each variant carries two fixed strings: a machine name used in the
//! persisted JSON (`"DRAFT"`, …) and a human-readable label used in
//! tables and audit-trail entries. Keeping them separate means display
//! wording can change without invalidating existing store files.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a [`Document`](crate::document::Document).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentStatus {
    /// Newly created, not yet submitted.
    Draft,
    /// Submitted and awaiting a decision.
    Review,
    /// Accepted by the reviewer.
    Approved,
    /// Declined by the reviewer.
    Rejected,
    /// Retired from the active set. Not terminal: archived documents can
    /// still be transitioned.
    Archived,
}

impl DocumentStatus {
    /// All variants, in menu order.
    pub const ALL: [DocumentStatus; 5] = [
        DocumentStatus::Draft,
        DocumentStatus::Review,
        DocumentStatus::Approved,
        DocumentStatus::Rejected,
        DocumentStatus::Archived,
    ];

    /// Stable machine-readable name, identical to the serde form.
    pub fn machine_name(&self) -> &'static str {
        match self {
            DocumentStatus::Draft => "DRAFT",
            DocumentStatus::Review => "REVIEW",
            DocumentStatus::Approved => "APPROVED",
            DocumentStatus::Rejected => "REJECTED",
            DocumentStatus::Archived => "ARCHIVED",
        }
    }

    /// Human-readable label for tables and audit-trail entries.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentStatus::Draft => "Draft",
            DocumentStatus::Review => "In review",
            DocumentStatus::Approved => "Approved",
            DocumentStatus::Rejected => "Rejected",
            DocumentStatus::Archived => "Archived",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DocumentStatus {
    type Err = String;

    /// Parses a machine name, case-insensitively (`draft` and `DRAFT`
    /// both work). Used for CLI argument parsing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DRAFT" => Ok(DocumentStatus::Draft),
            "REVIEW" => Ok(DocumentStatus::Review),
            "APPROVED" => Ok(DocumentStatus::Approved),
            "REJECTED" => Ok(DocumentStatus::Rejected),
            "ARCHIVED" => Ok(DocumentStatus::Archived),
            _ => Err(format!(
                "unknown status '{}' (expected one of: draft, review, approved, rejected, archived)",
                s
            )),
        }
    }
}
