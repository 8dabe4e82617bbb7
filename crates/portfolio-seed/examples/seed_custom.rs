//! Example: seed a document that is not part of the fixed catalog.
//!
//! Writes a `talks` list next to the catalog documents and reads it back.
//! Point it at an emulator to try it without credentials:
//!
//! ```
//! FIRESTORE_EMULATOR_HOST=localhost:8080 cargo run --example seed_custom
//! ```

use portfolio_seed::prelude::*;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Talk {
    title: String,
    venue: String,
    year: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::var("FIRESTORE_EMULATOR_HOST") {
        Ok(host) => SeedConfig::emulator(host),
        Err(_) => SeedConfig::default(),
    };

    let seeder = Seeder::new(open_session(&config).await?);

    let talks = ItemList::new(vec![
        Talk {
            title: "Causal Consistency at the Edge".to_string(),
            venue: "Workshop on Replicated Data Systems".to_string(),
            year: 2024,
        },
        Talk {
            title: "Model Checking Anti-Entropy".to_string(),
            venue: "Systems Research Colloquium".to_string(),
            year: 2023,
        },
    ]);

    seeder.seed("talks", &talks).await?;
    tracing::info!("✅ Talks seeded to {}/talks", seeder.collection());

    if let Some(stored) = seeder.fetch("talks").await? {
        tracing::info!("Read back: {}", serde_json::to_string_pretty(&stored)?);
    }

    Ok(())
}
