//! Seeds the portfolio collection.
//!
//! Run with:
//! ```
//! cargo run -p portfolio-seed --bin seed                   # all documents
//! cargo run -p portfolio-seed --bin seed -- skills about   # a subset
//! cargo run -p portfolio-seed --bin seed -- --dry-run
//! ```

use std::path::PathBuf;

use clap::Parser;
use portfolio::{PORTFOLIO_COLLECTION, document_store::DEFAULT_DATABASE};
use portfolio_seed::{
    catalog::SeedTarget,
    config::{DEFAULT_CREDENTIALS_PATH, SeedConfig},
    db::{Seeder, open_session},
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "seed", about = "Write the portfolio documents to Firestore")]
struct Cli {
    /// Documents to seed; all of them when omitted.
    #[arg(value_enum)]
    documents: Vec<SeedTarget>,

    /// Service-account key file.
    #[arg(long, env = "PORTFOLIO_CREDENTIALS", default_value = DEFAULT_CREDENTIALS_PATH)]
    credentials: PathBuf,

    /// Project id; defaults to the one in the key file.
    #[arg(long, env = "PORTFOLIO_PROJECT_ID")]
    project: Option<String>,

    #[arg(long, env = "PORTFOLIO_DATABASE", default_value = DEFAULT_DATABASE)]
    database: String,

    #[arg(long, env = "PORTFOLIO_COLLECTION", default_value = PORTFOLIO_COLLECTION)]
    collection: String,

    /// Firestore emulator `host:port`; skips authentication.
    #[arg(long, env = "FIRESTORE_EMULATOR_HOST")]
    emulator_host: Option<String>,

    /// Log payloads instead of writing them.
    #[arg(long)]
    dry_run: bool,
}

impl From<Cli> for SeedConfig {
    fn from(cli: Cli) -> Self {
        Self {
            credentials_path: cli.credentials,
            project_id: cli.project,
            database_id: cli.database,
            collection: cli.collection,
            emulator_host: cli.emulator_host,
            dry_run: cli.dry_run,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let targets = if cli.documents.is_empty() {
        SeedTarget::ALL.to_vec()
    } else {
        cli.documents.clone()
    };
    let config = SeedConfig::from(cli);

    let store = match open_session(&config).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("❌ Error connecting to the document store: {e}");
            return Err(e.into());
        }
    };

    let seeder = Seeder::new(store).with_collection(config.collection.clone());
    let report = seeder.seed_all(&targets).await;

    tracing::info!(
        "Seeding finished: {} succeeded, {} failed",
        report.succeeded.len(),
        report.failed.len()
    );

    if !report.is_success() {
        anyhow::bail!(
            "{} of {} documents failed to seed",
            report.failed.len(),
            report.attempted()
        );
    }

    Ok(())
}
