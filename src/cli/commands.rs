//! CLI command implementations: serve and seed.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::http::{HttpServer, HttpServerConfig};
use crate::store::{NewTranslationKey, TranslationStore};

use super::args::{Cli, Command};
use super::errors::CliError;

const DEFAULT_DATABASE_URL: &str = "sqlite://locman.db?mode=rwc";

/// One key in a seed file, with its per-language values.
#[derive(Debug, Deserialize)]
struct SeedKey {
    key: String,
    category: Option<String>,
    description: Option<String>,
    #[serde(default)]
    translations: BTreeMap<String, String>,
}

/// Dispatch a parsed CLI to its command.
pub async fn dispatch(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Serve {
            host,
            port,
            database_url,
        } => serve(host, port, resolve_database_url(database_url)).await,
        Command::Seed { file, database_url } => {
            seed(&file, resolve_database_url(database_url)).await
        }
    }
}

fn resolve_database_url(arg: Option<String>) -> String {
    arg.or_else(|| std::env::var("LOCMAN_DATABASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
}

async fn serve(host: String, port: u16, database_url: String) -> Result<(), CliError> {
    let store = TranslationStore::connect(&database_url).await?;

    let config = HttpServerConfig {
        host,
        port,
        ..Default::default()
    };

    HttpServer::new(config, store).start().await?;
    Ok(())
}

/// Load keys and values from a JSON seed file. Keys are created if absent;
/// values are upserted, so reseeding is idempotent.
async fn seed(file: &Path, database_url: String) -> Result<(), CliError> {
    let raw = std::fs::read_to_string(file)?;
    let entries: Vec<SeedKey> = serde_json::from_str(&raw)?;

    let store = TranslationStore::connect(&database_url).await?;

    let mut keys = 0usize;
    let mut values = 0usize;
    for entry in entries {
        let key = match store.find_key_by_name(&entry.key).await? {
            Some(existing) => existing,
            None => {
                keys += 1;
                store
                    .insert_key(&NewTranslationKey {
                        key: entry.key,
                        category: entry.category,
                        description: entry.description,
                    })
                    .await?
            }
        };

        for (language_code, value) in &entry.translations {
            store
                .upsert_translation(&key.id, language_code, value, "system")
                .await?;
            values += 1;
        }
    }

    tracing::info!(keys, values, "seed complete");
    store.close().await;
    Ok(())
}
