//! JSON-file-backed document store.
//!
//! [`FileStore`] owns the authoritative collection of documents, id
//! allocation, and persistence. Every mutation serializes the whole
//! collection and rewrites the backing file before returning — fine at
//! single-user scale, and the known ceiling if collections ever grow
//! large.
//!
//! The store is strictly single-threaded: there is no file locking and no
//! on-disk versioning. A concurrent host must treat it as one
//! mutual-exclusion domain (one lock or one owning thread) for all reads
//! and writes.
//!
//! Load problems recover silently: a missing, unreadable, or unparsable
//! backing file yields an empty store with the id counter reset to 1.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::StoreError;
use crate::status::DocumentStatus;

/// Default backing file name.
pub const DEFAULT_STORE_FILE: &str = "documents.json";

/// How [`FileStore::open`] obtained its initial contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The backing file existed and parsed cleanly.
    Loaded,
    /// No backing file yet; started empty.
    FileAbsent,
    /// The backing file was unreadable or unparsable; started empty.
    Recovered,
}

/// On-disk layout: the full collection plus the next-id counter.
///
/// Both fields tolerate absence so older or hand-edited files still load.
#[derive(Serialize, Deserialize)]
struct StoreSnapshot {
    #[serde(default)]
    documents: Vec<Document>,
    #[serde(default = "default_next_id")]
    next_id: u64,
}

fn default_next_id() -> u64 {
    1
}

/// The owning collection of documents, keyed by id.
///
/// Constructed explicitly with a backing-file path; callers hold and pass
/// the store rather than going through any process-wide global. Ids start
/// at 1, increase strictly, and are never reused (deletion is not
/// supported; archival is a status, not removal).
pub struct FileStore {
    path: PathBuf,
    documents: BTreeMap<u64, Document>,
    next_id: u64,
    load_outcome: LoadOutcome,
}

impl FileStore {
    /// Opens a store backed by `path`, reading it if present.
    ///
    /// Never fails: any load problem yields an empty store with the id
    /// counter reset to 1. The path taken is reported by
    /// [`load_outcome`](FileStore::load_outcome) so callers and tests can
    /// tell recovery from a genuinely empty store.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (documents, next_id, load_outcome) = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<StoreSnapshot>(&contents) {
                Ok(snapshot) => {
                    let documents: BTreeMap<u64, Document> = snapshot
                        .documents
                        .into_iter()
                        .map(|doc| (doc.id, doc))
                        .collect();
                    (documents, snapshot.next_id, LoadOutcome::Loaded)
                }
                Err(_) => (BTreeMap::new(), 1, LoadOutcome::Recovered),
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                (BTreeMap::new(), 1, LoadOutcome::FileAbsent)
            }
            Err(_) => (BTreeMap::new(), 1, LoadOutcome::Recovered),
        };

        Self {
            path,
            documents,
            next_id,
            load_outcome,
        }
    }

    /// How this store obtained its initial contents.
    pub fn load_outcome(&self) -> LoadOutcome {
        self.load_outcome
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates a document with the next free id and persists immediately.
    ///
    /// The id counter only advances when creation succeeds, so a rejected
    /// title does not burn an id.
    pub fn add(&mut self, title: &str, description: &str) -> Result<Document, StoreError> {
        let doc = Document::new(self.next_id, title, description)?;
        self.documents.insert(doc.id, doc.clone());
        self.next_id += 1;
        self.save()?;
        Ok(doc)
    }

    /// Looks up a document by id. Absence is a normal outcome, not an
    /// error.
    pub fn get(&self, id: u64) -> Option<&Document> {
        self.documents.get(&id)
    }

    /// All documents, in ascending id order.
    pub fn list_all(&self) -> Vec<&Document> {
        self.documents.values().collect()
    }

    /// Documents whose current status equals `status`, in id order.
    /// An empty result is a normal outcome.
    pub fn filter_by_status(&self, status: DocumentStatus) -> Vec<&Document> {
        self.documents
            .values()
            .filter(|doc| doc.status == status)
            .collect()
    }

    /// Applies a status transition to the document with `id` and
    /// persists.
    ///
    /// Returns `Ok(false)` when no such document exists. This and
    /// [`add`](FileStore::add) are the only write paths.
    pub fn change_status(
        &mut self,
        id: u64,
        new_status: DocumentStatus,
        comment: &str,
    ) -> Result<bool, StoreError> {
        match self.documents.get_mut(&id) {
            Some(doc) => {
                doc.change_status(new_status, comment);
                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Rewrites the backing file with the full collection as indented
    /// UTF-8 JSON.
    ///
    /// Writes to a sibling temp file and renames it into place, so a
    /// failed write cannot leave a truncated store behind.
    pub fn save(&self) -> Result<(), StoreError> {
        let snapshot = StoreSnapshot {
            documents: self.documents.values().cloned().collect(),
            next_id: self.next_id,
        };
        let json = serde_json::to_string_pretty(&snapshot)?;

        let tmp = self.path.with_extension("json.tmp");
        let persist_err = |source: io::Error| StoreError::Persist {
            path: self.path.clone(),
            source,
        };
        fs::write(&tmp, json).map_err(persist_err)?;
        fs::rename(&tmp, &self.path).map_err(persist_err)?;
        Ok(())
    }
}
