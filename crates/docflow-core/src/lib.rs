//! # Docflow Core
//!
//! Domain logic for Docflow: the document entity with its append-only
//! audit trail, the closed set of lifecycle statuses, and the
//! JSON-file-backed store that owns id allocation, persistence, and the
//! read-only query projections.
//!
//! This crate contains no terminal or CLI concerns. The `docflow` binary
//! crate prompts, parses, and renders; everything it shows comes from the
//! types and operations defined here.

pub mod document;
pub mod error;
pub mod status;
pub mod store;

pub use document::Document;
pub use error::StoreError;
pub use status::DocumentStatus;
pub use store::{FileStore, LoadOutcome, DEFAULT_STORE_FILE};
