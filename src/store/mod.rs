//! Append-only record store: a JSON file per collection as the record of
//! truth, plus a best-effort document mirror.
//!
//! Every append rewrites the whole collection file under a per-collection
//! lock, so concurrent appends serialize instead of racing the
//! read-modify-write cycle. Reads never touch the mirror.

mod mirror;

pub use mirror::Mirror;

use std::{
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;
use tokio::{fs, sync::Mutex};
use tracing::warn;

use crate::models::{Analytics, ContactMessage, Photo, Project};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    ContactMessages,
    Projects,
    Skills,
    Education,
    Photography,
}

impl Collection {
    pub const ALL: [Self; 5] = [
        Self::ContactMessages,
        Self::Projects,
        Self::Skills,
        Self::Education,
        Self::Photography,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::ContactMessages => "contact_messages",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Education => "education",
            Self::Photography => "photography",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },

    #[error("{path} is not a valid collection file: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: io::Error,
    },

    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Outcome of an append. The primary file write succeeded; the mirror insert
/// may not have.
#[derive(Debug, Clone)]
pub struct Written {
    pub id: String,
    pub mirror_written: bool,
}

#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    data_dir: PathBuf,
    locks: [Mutex<()>; Collection::ALL.len()],
    mirror: Mirror,
}

impl Store {
    pub fn new(data_dir: PathBuf, mirror: Mirror) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                data_dir,
                locks: std::array::from_fn(|_| Mutex::new(())),
                mirror,
            }),
        }
    }

    fn path(&self, collection: Collection) -> PathBuf {
        self.inner.data_dir.join(format!("{}.json", collection.name()))
    }

    /// Append a record to the collection file, then mirror it. The record
    /// must carry its own `id`. A mirror failure is reported, never raised.
    pub async fn append<T: Serialize>(
        &self,
        collection: Collection,
        record: &T,
    ) -> Result<Written, StoreError> {
        let doc = serde_json::to_value(record)?;
        let id = doc
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();

        {
            let _guard = self.inner.locks[collection.index()].lock().await;
            let mut records = self.read_for_append(collection).await?;
            records.push(doc.clone());
            self.write_collection(collection, &records).await?;
        }

        let mirror_written = match self.inner.mirror.insert(collection.name(), &id, &doc).await {
            Ok(()) => true,
            Err(e) => {
                warn!("mirror insert into {} failed: {e}", collection.name());
                false
            }
        };

        Ok(Written { id, mirror_written })
    }

    /// Every record in file order. A missing, unreadable, or corrupt file
    /// degrades to an empty list.
    pub async fn list<T: DeserializeOwned>(&self, collection: Collection) -> Vec<T> {
        let path = self.path(collection);
        let Some(bytes) = self.read_bytes(&path).await else {
            return Vec::new();
        };

        match serde_json::from_slice(&bytes) {
            Ok(records) => records,
            Err(e) => {
                warn!("{} is not a valid collection file: {e}", path.display());
                Vec::new()
            }
        }
    }

    /// Write `records` as the full collection, but only when the collection
    /// is currently empty. Idempotent across restarts.
    pub async fn seed_if_empty<T: Serialize>(
        &self,
        collection: Collection,
        records: &[T],
    ) -> Result<bool, StoreError> {
        let _guard = self.inner.locks[collection.index()].lock().await;

        let existing: Vec<Value> = self.list(collection).await;
        if !existing.is_empty() {
            return Ok(false);
        }

        let docs = records
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        self.write_collection(collection, &docs).await?;
        Ok(true)
    }

    /// Collection counts plus the timestamp of the last-appended record of
    /// the timestamped collections. Append order decides "most recent".
    pub async fn aggregate(&self) -> Analytics {
        let contacts: Vec<ContactMessage> = self.list(Collection::ContactMessages).await;
        let projects: Vec<Project> = self.list(Collection::Projects).await;
        let photos: Vec<Photo> = self.list(Collection::Photography).await;
        let education: Vec<Value> = self.list(Collection::Education).await;

        Analytics {
            total_contacts: contacts.len(),
            total_projects: projects.len(),
            total_photos: photos.len(),
            total_education: education.len(),
            last_contact: contacts.last().map(|m| m.timestamp),
            most_recent_project: projects.last().map(|p| p.created_at),
            most_recent_photo: photos.last().map(|p| p.created_at),
        }
    }

    async fn read_bytes(&self, path: &Path) -> Option<Vec<u8>> {
        let bytes = match fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    warn!("failed to read {}: {e}", path.display());
                }
                return None;
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return None;
        }
        Some(bytes)
    }

    /// Strict read for the append path: a missing or blank file is an empty
    /// collection, anything unreadable or unparseable refuses the append.
    /// Appending over a corrupt file would silently truncate it.
    async fn read_for_append(&self, collection: Collection) -> Result<Vec<Value>, StoreError> {
        let path = self.path(collection);
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Read { path, source: e }),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        serde_json::from_slice(&bytes).map_err(|e| StoreError::Parse { path, source: e })
    }

    /// Full rewrite via temp file + rename, so a failed write never leaves a
    /// half-written collection behind.
    async fn write_collection(
        &self,
        collection: Collection,
        records: &[Value],
    ) -> Result<(), StoreError> {
        let path = self.path(collection);
        let body = serde_json::to_vec_pretty(records)?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, &body).await.map_err(|e| StoreError::Write {
            path: tmp.clone(),
            source: e,
        })?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| StoreError::Write { path, source: e })?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn mirror(&self) -> &Mirror {
        &self.inner.mirror
    }
}
