use crate::config::EtlConfig;
use crate::error::{EtlError, Result};
use crate::pipeline::{transform, Extractor, Loader};
use crate::source;
use crate::storage::{JsonFileStore, RecordStore};
use chrono::{DateTime, Utc};
use metrics::{counter, histogram};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// Counters for one completed pipeline run.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub ids_read: usize,
    pub records_extracted: usize,
    pub records_missed: usize,
    pub records_loaded: usize,
}

/// How a pipeline run ended.
///
/// Controlled aborts (missing identifier source, empty extraction) are
/// outcomes, not errors; `Err` is reserved for unexpected I/O failures.
#[derive(Debug)]
pub enum RunOutcome {
    Completed(RunSummary),
    Aborted {
        stage: &'static str,
        reason: String,
    },
}

/// Sequences identifier source, extractor, tip generator and loader
/// over a pair of record stores. No stage is retried or rolled back;
/// side effects are immediate.
pub struct EtlPipeline {
    config: EtlConfig,
    store: Arc<dyn RecordStore>,
    output: Arc<dyn RecordStore>,
}

impl EtlPipeline {
    /// Pipeline over the JSON-file stores named in `config`.
    pub fn from_config(config: EtlConfig) -> Self {
        let store: Arc<dyn RecordStore> = Arc::new(JsonFileStore::new(&config.store_file));
        let output: Arc<dyn RecordStore> = Arc::new(JsonFileStore::new(&config.output_file));
        Self {
            config,
            store,
            output,
        }
    }

    /// Pipeline over caller-supplied stores, for tests and future
    /// API-backed deployments.
    pub fn with_stores(
        config: EtlConfig,
        store: Arc<dyn RecordStore>,
        output: Arc<dyn RecordStore>,
    ) -> Self {
        Self {
            config,
            store,
            output,
        }
    }

    #[instrument(skip(self))]
    pub async fn run(&self) -> Result<RunOutcome> {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        let t_run = std::time::Instant::now();
        info!("🚀 Starting ETL run {}", run_id);
        println!("🚀 Starting ETL run {run_id}");
        counter!("etl_runs_total").increment(1);

        println!("\n--- Extract ---");
        let ids = match source::read_student_ids(&self.config.source_csv) {
            Ok(ids) => ids,
            Err(EtlError::SourceMissing(path)) => {
                warn!("Identifier source {} not found, aborting", path.display());
                println!("⚠️  Identifier source {} not found. Nothing to do.", path.display());
                counter!("etl_runs_aborted_total").increment(1);
                return Ok(RunOutcome::Aborted {
                    stage: "identifiers",
                    reason: format!("source file {} not found", path.display()),
                });
            }
            Err(e) => return Err(e),
        };
        println!("Student ids to process: {ids:?}");
        counter!("etl_ids_read_total").increment(ids.len() as u64);

        let extractor = Extractor::new(self.store.clone());
        let extracted = extractor.extract(&ids).await?;
        let extracted_count = extracted.len();
        let missed = ids.len() - extracted_count;
        if extracted.is_empty() {
            warn!("No student records extracted, aborting before transform");
            println!("⚠️  No student records extracted. Nothing to do.");
            counter!("etl_runs_aborted_total").increment(1);
            return Ok(RunOutcome::Aborted {
                stage: "extract",
                reason: "no records matched the identifier list".to_string(),
            });
        }
        info!("✅ Extracted {} records ({} missed)", extracted_count, missed);
        println!("✅ Extracted {extracted_count} records ({missed} missed)");
        counter!("etl_records_extracted_total").increment(extracted_count as u64);
        counter!("etl_records_missed_total").increment(missed as u64);

        println!("\n--- Transform ---");
        let transformed = transform::attach_tips(extracted);
        counter!("etl_tips_generated_total").increment(transformed.len() as u64);

        println!("\n--- Load ---");
        let loader = Loader::new(self.store.clone(), self.output.clone());
        let loaded = loader.load(transformed).await?;

        let finished_at = Utc::now();
        histogram!("etl_run_duration_seconds").record(t_run.elapsed().as_secs_f64());
        info!("✅ ETL run {} completed, {} records written", run_id, loaded.len());
        println!("\n✅ ETL pipeline completed");

        Ok(RunOutcome::Completed(RunSummary {
            run_id,
            started_at,
            finished_at,
            ids_read: ids.len(),
            records_extracted: extracted_count,
            records_missed: missed,
            records_loaded: loaded.len(),
        }))
    }
}
