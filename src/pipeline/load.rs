use crate::domain::StudentRecord;
use crate::error::Result;
use crate::storage::RecordStore;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Merges transformed records into the full snapshot and persists it.
pub struct Loader {
    store: Arc<dyn RecordStore>,
    output: Arc<dyn RecordStore>,
}

impl Loader {
    pub fn new(store: Arc<dyn RecordStore>, output: Arc<dyn RecordStore>) -> Self {
        Self { store, output }
    }

    /// Overwrite-or-insert each transformed record by id, then write
    /// the merged snapshot to the output store.
    ///
    /// A transformed record replaces the prior entry wholesale; there
    /// is no field-level merge. Existing records keep their snapshot
    /// order and unknown ids append at the end.
    pub async fn load(&self, transformed: Vec<StudentRecord>) -> Result<Vec<StudentRecord>> {
        let mut merged = self.store.load_all().await?;
        let mut index: HashMap<u32, usize> = merged
            .iter()
            .enumerate()
            .map(|(i, record)| (record.id, i))
            .collect();

        for record in transformed {
            match index.get(&record.id).copied() {
                Some(i) => {
                    info!("Loaded: record for {} updated", record.name);
                    println!("Loaded: record for {} updated", record.name);
                    merged[i] = record;
                }
                None => {
                    info!("Loaded: new student {} added", record.name);
                    println!("Loaded: new student {} added", record.name);
                    index.insert(record.id, merged.len());
                    merged.push(record);
                }
            }
        }

        self.output.save_all(&merged).await?;
        info!("Wrote {} records to the output store", merged.len());

        Ok(merged)
    }
}
