//! Data models for the knowledge-box client.
//!
//! This module defines the structures exchanged with the knowledge service:
//!
//! - [`KnowledgeItem`] - one ingested unit of content from `GET /items`
//! - [`IngestRequest`] - body for `POST /ingest`
//! - [`QueryRequest`] / [`QueryAnswer`] - question in, answer plus sources out
//!
//! The list endpoint reports items as fixed-position JSON tuples; a custom
//! deserializer in the `item` module maps them onto named, validated fields.

pub mod item;
pub mod query;

pub use item::{KnowledgeItem, SourceType};
pub use query::{IngestRequest, QueryAnswer, QueryRequest, SourceRef};
