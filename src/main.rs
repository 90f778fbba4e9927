use clap::{Parser, Subcommand};
use tracing::info;

use tips_etl::config::EtlConfig;
use tips_etl::logging;
use tips_etl::pipeline::{EtlPipeline, RunOutcome};
use tips_etl::seed;
use tips_etl::storage::JsonFileStore;

#[derive(Parser)]
#[command(name = "tips_etl")]
#[command(about = "Student-record enrichment ETL with rule-generated study tips")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the simulated student roster into the record store
    Seed,
    /// Run the extract-transform-load pipeline
    Run {
        /// Seed the record store before running
        #[arg(long)]
        seed: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging();

    let config = EtlConfig::load()?;

    match cli.command {
        Commands::Seed => {
            seed_store(&config).await?;
        }
        Commands::Run { seed: seed_first } => {
            if seed_first {
                seed_store(&config).await?;
            }

            let pipeline = EtlPipeline::from_config(config);
            match pipeline.run().await? {
                RunOutcome::Completed(summary) => {
                    info!("Run {} finished", summary.run_id);
                    println!("\n📊 Run summary:");
                    println!("   Ids read: {}", summary.ids_read);
                    println!("   Extracted: {}", summary.records_extracted);
                    println!("   Missed: {}", summary.records_missed);
                    println!("   Loaded: {}", summary.records_loaded);
                }
                RunOutcome::Aborted { stage, reason } => {
                    println!("\n⚠️  Pipeline aborted during {stage}: {reason}");
                }
            }
        }
    }

    Ok(())
}

async fn seed_store(config: &EtlConfig) -> anyhow::Result<()> {
    let store = JsonFileStore::new(&config.store_file);
    seed::write_seed_data(&store).await?;
    println!("💾 Seed data written to {}", config.store_file.display());
    Ok(())
}
