use serde::{Deserialize, Serialize};

/// A short study recommendation attached to a student record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tip {
    pub icon: String,
    pub description: String,
}

/// One student row in the record store.
///
/// `id` is the sole merge key across the pipeline; `tips` only grows
/// within a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: u32,
    pub name: String,
    pub course: String,
    pub current_gpa: f64,
    pub tips: Vec<Tip>,
}
