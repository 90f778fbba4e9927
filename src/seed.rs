use crate::domain::StudentRecord;
use crate::error::Result;
use crate::storage::RecordStore;
use tracing::info;

/// Fixed simulated roster standing in for the real student API.
///
/// GPAs span 6.8..9.1 so every tip template is reachable.
pub fn seed_records() -> Vec<StudentRecord> {
    vec![
        record(1, "Alice", "Computer Science", 8.5),
        record(2, "Bruno", "Civil Engineering", 7.2),
        record(3, "Carla", "Medicine", 9.1),
        record(4, "Daniel", "Law", 6.8),
        record(5, "Eduarda", "Architecture", 8.0),
    ]
}

fn record(id: u32, name: &str, course: &str, gpa: f64) -> StudentRecord {
    StudentRecord {
        id,
        name: name.to_string(),
        course: course.to_string(),
        current_gpa: gpa,
        tips: Vec::new(),
    }
}

/// Write the simulated roster into `store`. Callers working against
/// real data skip this step entirely.
pub async fn write_seed_data(store: &dyn RecordStore) -> Result<()> {
    let records = seed_records();
    store.save_all(&records).await?;
    info!("Seeded store with {} simulated student records", records.len());
    Ok(())
}
