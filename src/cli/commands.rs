use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::api::ApiClient;
use crate::config::{self, Config};
use crate::models::IngestRequest;
use crate::tui;
use crate::utils::derive_title;

#[derive(Parser)]
#[command(name = "knowledge-box")]
#[command(version = "0.1.0")]
#[command(about = "Terminal client for a knowledge-ingestion service", long_about = None)]
pub struct Cli {
    /// Service origin (overrides KNOWLEDGE_BOX_URL and the built-in default)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List ingested items
    Items,
    /// Ingest a note, a URL, or both
    Add {
        /// Free-text note content
        #[arg(long)]
        note: Option<String>,
        /// URL for the service to fetch and ingest
        #[arg(long)]
        url: Option<String>,
    },
    /// Ask a question against the knowledge base
    Ask {
        /// Natural-language question
        question: String,
    },
}

/// Parse arguments and dispatch. No subcommand launches the interactive TUI.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::resolve(cli.base_url.clone());
    let client = ApiClient::new(config.base_url);

    match &cli.command {
        Some(Commands::Items) => {
            init_stderr_logging();
            list_items(&client).await
        }
        Some(Commands::Add { note, url }) => {
            init_stderr_logging();
            add(&client, note.as_deref(), url.as_deref()).await
        }
        Some(Commands::Ask { question }) => {
            init_stderr_logging();
            ask(&client, question).await
        }
        None => {
            // Raw mode owns the terminal, so TUI diagnostics go to a file.
            // Running without logging beats refusing to start.
            let _ = init_file_logging();
            tui::run_interactive(client).await
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_stderr_logging() {
    tracing_subscriber::fmt().with_env_filter(env_filter()).with_writer(std::io::stderr).init();
}

fn init_file_logging() -> Result<()> {
    let path = config::log_file_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

async fn list_items(client: &ApiClient) -> Result<()> {
    let items = client.list_items().await?;

    if items.is_empty() {
        println!("No knowledge stored yet");
        return Ok(());
    }

    for item in &items {
        println!(
            "{:>5}  {:<4}  {}  {}",
            item.id,
            item.source,
            item.created_at.format("%Y-%m-%d"),
            derive_title(&item.content, item.source)
        );
    }
    println!();
    println!("Total items: {}", items.len());

    Ok(())
}

async fn add(client: &ApiClient, note: Option<&str>, url: Option<&str>) -> Result<()> {
    let request = IngestRequest {
        content: note.unwrap_or_default().to_string(),
        url: url.unwrap_or_default().to_string(),
    };
    if request.is_blank() {
        bail!("nothing to ingest: provide --note and/or --url");
    }

    client.ingest(&request).await?;
    println!("Ingested");

    Ok(())
}

async fn ask(client: &ApiClient, question: &str) -> Result<()> {
    if question.trim().is_empty() {
        bail!("question must not be empty");
    }

    let result = client.query(question).await?;

    println!("{}", result.answer);
    if !result.sources.is_empty() {
        println!();
        println!("Sources:");
        for (idx, source) in result.sources.iter().enumerate() {
            println!("  {}. {}", idx + 1, source.label());
        }
    }

    Ok(())
}
