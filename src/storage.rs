use crate::domain::StudentRecord;
use crate::error::Result;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// Abstract record store backing the extract and load phases.
///
/// The JSON-file implementation stands in for a real user API; a
/// database- or HTTP-backed store only needs these two calls.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Read the full snapshot. A store that does not exist yet is an
    /// empty store, not an error.
    async fn load_all(&self) -> Result<Vec<StudentRecord>>;

    /// Overwrite the full snapshot.
    async fn save_all(&self, records: &[StudentRecord]) -> Result<()>;
}

/// Record store persisted as a single pretty-printed JSON array.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn load_all(&self) -> Result<Vec<StudentRecord>> {
        if !self.path.exists() {
            debug!("Store file {} absent, treating as empty", self.path.display());
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        let records: Vec<StudentRecord> = serde_json::from_str(&content)?;
        debug!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    async fn save_all(&self, records: &[StudentRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json)?;
        debug!("Wrote {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}

/// In-memory store for tests and dry runs.
pub struct InMemoryStore {
    records: Mutex<Vec<StudentRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn with_records(records: Vec<StudentRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn load_all(&self) -> Result<Vec<StudentRecord>> {
        Ok(self.records.lock().unwrap().clone())
    }

    async fn save_all(&self, records: &[StudentRecord]) -> Result<()> {
        *self.records.lock().unwrap() = records.to_vec();
        Ok(())
    }
}
