//! One-time seed loader: reads a user document and a topic list from local
//! disk and inserts them through the notes store client. Any error is
//! fatal and the process exits non-zero.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use tracing::info;

use notes_api::{NotesConfig, UserInsert};

/// Seed the notes table with an initial user and topic set
#[derive(Parser)]
#[command(name = "notes-seed")]
#[command(about = "Seed the notes table with an initial user and topic set")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to the user document
    #[arg(long, default_value = "user.json")]
    user_file: PathBuf,

    /// Path to the topic list
    #[arg(long, default_value = "topics.json")]
    topics_file: PathBuf,

    /// Table name (overrides NOTES_TABLE)
    #[arg(long)]
    table: Option<String>,

    /// Store endpoint override, e.g. a local DynamoDB instance
    #[arg(long)]
    endpoint_url: Option<String>,
}

/// User document: `{"email", "name", "surname"}`.
#[derive(Debug, Deserialize)]
struct SeedUser {
    email: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    surname: String,
}

/// Topic list entry; only the title is seeded.
#[derive(Debug, Deserialize)]
struct SeedTopic {
    title: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = NotesConfig::from_env();
    if let Some(table) = cli.table {
        config.table = table;
    }
    if let Some(endpoint) = cli.endpoint_url {
        config.endpoint_url = Some(endpoint);
    }

    let seed_user = read_user(&cli.user_file)?;
    let topics = read_topics(&cli.topics_file)?;

    let store = notes_api::init_store(&config).await?;

    info!(email = %seed_user.email, "inserting user");
    let user = store
        .insert_user(UserInsert {
            email: seed_user.email,
            name: seed_user.name,
            surname: seed_user.surname,
        })
        .await?;

    for topic in &topics {
        info!(title = %topic.title, "inserting topic");
        store.insert_topic(&user.id, &topic.title).await?;
    }

    info!(user_id = %user.id, topics = topics.len(), "seed complete");
    Ok(())
}

fn read_user(path: &Path) -> Result<SeedUser> {
    let input = std::fs::read_to_string(path)
        .with_context(|| format!("read {}", path.display()))?;
    parse_user(&input).with_context(|| format!("parse {}", path.display()))
}

fn read_topics(path: &Path) -> Result<Vec<SeedTopic>> {
    let input = std::fs::read_to_string(path)
        .with_context(|| format!("read {}", path.display()))?;
    parse_topics(&input).with_context(|| format!("parse {}", path.display()))
}

fn parse_user(input: &str) -> Result<SeedUser> {
    Ok(serde_json::from_str(input)?)
}

fn parse_topics(input: &str) -> Result<Vec<SeedTopic>> {
    Ok(serde_json::from_str(input)?)
}
