//! HTTP client for the knowledge service.
//!
//! Three request/response exchanges against a fixed origin:
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/items`  | Full list of ingested items (JSON tuples) |
//! | `POST` | `/ingest` | Submit a note or URL for ingestion |
//! | `POST` | `/query`  | Ask a question, get an answer plus sources |
//!
//! Plain JSON over HTTP, no authentication, no client-side timeout beyond
//! reqwest's defaults. Errors carry request context; callers flatten them to
//! the coarse user-facing categories (log-only, generic status, fixed answer
//! string).

use anyhow::{Context, Result, ensure};

use crate::models::{IngestRequest, KnowledgeItem, QueryAnswer, QueryRequest};

/// Client for the remote knowledge-ingestion service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given service origin (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), base_url: base_url.into() }
    }

    /// Fetch the full current list of ingested items.
    pub async fn list_items(&self) -> Result<Vec<KnowledgeItem>> {
        let url = format!("{}/items", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?;
        ensure!(response.status().is_success(), "GET {} returned {}", url, response.status());

        response.json().await.context("parsing /items response")
    }

    /// Submit content for ingestion. The response body is not consumed; a
    /// non-success status is an error.
    pub async fn ingest(&self, request: &IngestRequest) -> Result<()> {
        let url = format!("{}/ingest", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .with_context(|| format!("POST {} failed", url))?;
        ensure!(response.status().is_success(), "POST {} returned {}", url, response.status());

        Ok(())
    }

    /// Submit a natural-language question and parse the answer.
    pub async fn query(&self, question: &str) -> Result<QueryAnswer> {
        let url = format!("{}/query", self.base_url);
        let body = QueryRequest { question: question.to_string() };
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("POST {} failed", url))?;
        ensure!(response.status().is_success(), "POST {} returned {}", url, response.status());

        response.json().await.context("parsing /query response")
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
