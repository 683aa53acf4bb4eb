//! knowledge-box - Terminal client for a knowledge-ingestion service
//!
//! This library implements a thin client shell around a remote knowledge
//! service reached over plain HTTP. It supports:
//!
//! - Submitting text notes or URLs for ingestion (`POST /ingest`)
//! - Listing previously ingested items (`GET /items`, tuple-shaped records
//!   mapped onto a named schema at the boundary)
//! - Asking natural-language questions and rendering the answer with its
//!   sources (`POST /query`)
//!
//! All ingestion parsing, embedding/retrieval, and question answering live
//! in the external service; this crate is presentation logic plus three
//! request/response exchanges.
//!
//! # Example
//!
//! ```no_run
//! use knowledge_box::{ApiClient, Config};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::resolve(None);
//! let client = ApiClient::new(config.base_url);
//! let items = client.list_items().await?;
//! println!("{} items ingested", items.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod models;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use api::ApiClient;
pub use config::Config;
pub use models::{IngestRequest, KnowledgeItem, QueryAnswer, SourceRef, SourceType};
pub use utils::derive_title;
