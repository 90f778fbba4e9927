use crate::domain::StudentRecord;
use crate::error::Result;
use crate::storage::RecordStore;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Looks student identifiers up in the record store.
pub struct Extractor {
    store: Arc<dyn RecordStore>,
}

impl Extractor {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Fetch the records matching `ids`, preserving input order.
    ///
    /// Unknown identifiers are logged and skipped; the result simply
    /// omits them and may be empty.
    pub async fn extract(&self, ids: &[u32]) -> Result<Vec<StudentRecord>> {
        let all = self.store.load_all().await?;
        let by_id: HashMap<u32, StudentRecord> =
            all.into_iter().map(|r| (r.id, r)).collect();

        let mut found = Vec::new();
        for id in ids {
            match by_id.get(id) {
                Some(record) => {
                    info!("Extracted: {} ({})", record.name, record.course);
                    println!("Extracted: {} ({})", record.name, record.course);
                    found.push(record.clone());
                }
                None => {
                    warn!("Student id {} not found in the record store", id);
                    println!("Student id {id} not found in the record store, skipping");
                }
            }
        }

        Ok(found)
    }
}
