//! The persistent store: one JSON document behind a single writer lock.
//!
//! All reads and mutations go through [`CardStore`]. Mutations hold the lock
//! across the read-modify-write *and* the save, which serializes racing
//! commands for the same user. Loading fails soft (an empty default document)
//! so a missing or corrupt file never prevents startup; save failures are
//! logged and never surfaced to command handlers.

mod document;
pub mod remote;

pub use document::{CardDef, Catalog, Document, PlayerRecord};

use std::path::{Path, PathBuf};
use tokio::sync::{Mutex, mpsc};
use tracing::{error, warn};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid document: {0}")]
    Json(#[from] serde_json::Error),
}

pub struct CardStore {
    path: PathBuf,
    doc: Mutex<Document>,
    /// Serialized snapshots are handed off here after each save; the remote
    /// sync task (if configured) pushes the newest one.
    remote_tx: Option<mpsc::UnboundedSender<String>>,
}

impl CardStore {
    /// Loads the document from `path`, falling back to an empty default when
    /// the file is missing or unparseable.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let doc = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(doc) => doc,
                Err(e) => {
                    warn!(target: "store.load", path = %path.display(), error = %e,
                          "document unparseable, starting from empty");
                    Document::default()
                }
            },
            Err(e) => {
                warn!(target: "store.load", path = %path.display(), error = %e,
                      "no document on disk, starting from empty");
                Document::default()
            }
        };
        Self {
            path,
            doc: Mutex::new(doc),
            remote_tx: None,
        }
    }

    /// Builds a store around an already-materialized document (seeded from the
    /// remote copy, or a fixture in tests).
    pub fn from_document(path: impl Into<PathBuf>, doc: Document) -> Self {
        Self {
            path: path.into(),
            doc: Mutex::new(doc),
            remote_tx: None,
        }
    }

    /// Attaches the remote sync channel; snapshots of every successful save
    /// are sent through it.
    pub fn with_remote(mut self, tx: mpsc::UnboundedSender<String>) -> Self {
        self.remote_tx = Some(tx);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runs a read-only closure against a consistent snapshot of the document.
    pub async fn read<T>(&self, f: impl FnOnce(&Document) -> T) -> T {
        let doc = self.doc.lock().await;
        f(&doc)
    }

    /// Runs a mutation under the writer lock and persists the document if (and
    /// only if) the closure succeeds. The lock is held across the save, so
    /// concurrent mutations are fully serialized. Closures must leave the
    /// document untouched on their error path; the reward engine validates
    /// before mutating.
    pub async fn update<T, E>(
        &self,
        f: impl FnOnce(&mut Document) -> Result<T, E>,
    ) -> Result<T, E> {
        let mut doc = self.doc.lock().await;
        let out = f(&mut doc)?;
        if let Err(e) = self.save(&doc).await {
            error!(target: "store.save", path = %self.path.display(), error = %e,
                   "failed to persist document");
        }
        Ok(out)
    }

    /// Serializes the full document and replaces the backing file via a temp
    /// file and rename, so an interrupted write never leaves a torn document.
    async fn save(&self, doc: &Document) -> Result<(), StoreError> {
        let serialized = serde_json::to_string_pretty(doc)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, serialized.as_bytes()).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        if let Some(tx) = &self.remote_tx {
            // The sync task owns retries; a closed channel just means sync is off.
            tx.send(serialized).ok();
        }
        Ok(())
    }

    /// One-off serialize + write, used by tests and the startup remote seed.
    pub async fn flush(&self) -> Result<(), StoreError> {
        let doc = self.doc.lock().await;
        self.save(&doc).await
    }
}
