use anyhow::Result;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::tempdir;

use tips_etl::config::EtlConfig;
use tips_etl::domain::StudentRecord;
use tips_etl::pipeline::{transform, EtlPipeline, Extractor, Loader, RunOutcome};
use tips_etl::seed;
use tips_etl::storage::{JsonFileStore, RecordStore};

fn test_config(dir: &Path) -> EtlConfig {
    EtlConfig {
        source_csv: dir.join("student_ids.csv"),
        store_file: dir.join("student_data.json"),
        output_file: dir.join("student_data_updated.json"),
    }
}

fn read_snapshot(path: &Path) -> Result<Vec<StudentRecord>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[tokio::test]
async fn run_for_carla_attaches_one_congratulatory_tip() -> Result<()> {
    let dir = tempdir()?;
    let config = test_config(dir.path());

    seed::write_seed_data(&JsonFileStore::new(&config.store_file)).await?;
    fs::write(&config.source_csv, "student_id\n3\n")?;

    let outcome = EtlPipeline::from_config(config.clone()).run().await?;
    let summary = match outcome {
        RunOutcome::Completed(summary) => summary,
        other => panic!("expected a completed run, got {other:?}"),
    };
    assert_eq!(summary.ids_read, 1);
    assert_eq!(summary.records_extracted, 1);
    assert_eq!(summary.records_missed, 0);
    assert_eq!(summary.records_loaded, 5);

    let output = read_snapshot(&config.output_file)?;
    let carla = output.iter().find(|r| r.id == 3).expect("record 3 in output");
    assert_eq!(carla.tips.len(), 1);
    assert_eq!(carla.tips[0].icon, "📚");
    assert!(carla.tips[0].description.starts_with("Congratulations, Carla!"));

    // The seed snapshot is never rewritten by the run itself.
    let store = read_snapshot(&config.store_file)?;
    let carla_in_store = store.iter().find(|r| r.id == 3).unwrap();
    assert!(carla_in_store.tips.is_empty());

    Ok(())
}

#[tokio::test]
async fn absent_identifier_aborts_without_writing_output() -> Result<()> {
    let dir = tempdir()?;
    let config = test_config(dir.path());

    seed::write_seed_data(&JsonFileStore::new(&config.store_file)).await?;
    fs::write(&config.source_csv, "student_id\n99\n")?;

    let outcome = EtlPipeline::from_config(config.clone()).run().await?;
    match outcome {
        RunOutcome::Aborted { stage, .. } => assert_eq!(stage, "extract"),
        other => panic!("expected an aborted run, got {other:?}"),
    }
    assert!(!config.output_file.exists());

    Ok(())
}

#[tokio::test]
async fn missing_source_csv_aborts_before_extraction() -> Result<()> {
    let dir = tempdir()?;
    let config = test_config(dir.path());

    seed::write_seed_data(&JsonFileStore::new(&config.store_file)).await?;

    let outcome = EtlPipeline::from_config(config.clone()).run().await?;
    match outcome {
        RunOutcome::Aborted { stage, .. } => assert_eq!(stage, "identifiers"),
        other => panic!("expected an aborted run, got {other:?}"),
    }
    assert!(!config.output_file.exists());

    Ok(())
}

#[tokio::test]
async fn repeated_transform_and_load_accumulates_tips() -> Result<()> {
    let dir = tempdir()?;
    let config = test_config(dir.path());

    let store: Arc<dyn RecordStore> = Arc::new(JsonFileStore::new(&config.store_file));
    let output: Arc<dyn RecordStore> = Arc::new(JsonFileStore::new(&config.output_file));
    seed::write_seed_data(store.as_ref()).await?;

    let extracted = Extractor::new(store.clone()).extract(&[3]).await?;
    let loader = Loader::new(store.clone(), output.clone());

    let transformed = transform::attach_tips(extracted);
    loader.load(transformed.clone()).await?;
    let after_first = read_snapshot(&config.output_file)?;
    let carla = after_first.iter().find(|r| r.id == 3).unwrap();
    assert_eq!(carla.tips.len(), 1);

    // Load never deduplicates; a second transform pass over the same
    // records accumulates a second tip.
    let transformed_again = transform::attach_tips(transformed);
    loader.load(transformed_again).await?;
    let after_second = read_snapshot(&config.output_file)?;
    let carla = after_second.iter().find(|r| r.id == 3).unwrap();
    assert_eq!(carla.tips.len(), 2);

    Ok(())
}
