use crate::error::{EtlError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

#[derive(Debug, Deserialize)]
struct IdRow {
    student_id: u32,
}

/// Read the ordered identifier column from the source CSV.
///
/// Columns other than `student_id` are ignored. A missing file aborts
/// the run before any extraction happens, so it gets its own error
/// variant instead of a bare I/O error.
pub fn read_student_ids(path: &Path) -> Result<Vec<u32>> {
    if !path.exists() {
        return Err(EtlError::SourceMissing(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut ids = Vec::new();
    for row in reader.deserialize::<IdRow>() {
        ids.push(row?.student_id);
    }

    info!("Read {} student ids from {}", ids.len(), path.display());
    Ok(ids)
}
