/// ApiClient integration tests against an in-process mock service
mod common;

use chrono::DateTime;
use knowledge_box::{ApiClient, IngestRequest, SourceType};
use serde_json::json;

use common::MockServiceBuilder;

#[tokio::test]
async fn test_list_items_parses_tuple_records() {
    let service = MockServiceBuilder::new()
        .items(json!([
            [1, "a plain note", "note", 1762076480016i64],
            [2, "Title: Example\nbody", "url", "2025-11-02T09:41:20.016Z"]
        ]))
        .spawn()
        .await;

    let client = ApiClient::new(service.base_url());
    let items = client.list_items().await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, 1);
    assert_eq!(items[0].content, "a plain note");
    assert_eq!(items[0].source, SourceType::Note);
    assert_eq!(items[0].created_at, DateTime::from_timestamp_millis(1762076480016).unwrap());

    assert_eq!(items[1].source, SourceType::Url);
    assert_eq!(items[1].created_at.timestamp_millis(), 1762076480016);
}

#[tokio::test]
async fn test_list_items_empty() {
    let service = MockServiceBuilder::new().spawn().await;

    let client = ApiClient::new(service.base_url());
    let items = client.list_items().await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_list_items_server_error() {
    let service = MockServiceBuilder::new().items_status(500).spawn().await;

    let client = ApiClient::new(service.base_url());
    let err = client.list_items().await.unwrap_err();
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_list_items_malformed_tuple_is_error() {
    // Third slot must be "note" or "url"; this must surface as a parse
    // error, not a panic
    let service = MockServiceBuilder::new()
        .items(json!([[1, "content", "pdf", 1000]]))
        .spawn()
        .await;

    let client = ApiClient::new(service.base_url());
    assert!(client.list_items().await.is_err());
}

#[tokio::test]
async fn test_list_items_unreachable_server() {
    // Nothing listens on port 1
    let client = ApiClient::new("http://127.0.0.1:1");
    assert!(client.list_items().await.is_err());
}

#[tokio::test]
async fn test_ingest_sends_content_and_url_fields() {
    let service = MockServiceBuilder::new().spawn().await;

    let client = ApiClient::new(service.base_url());
    let request =
        IngestRequest { content: "note body".to_string(), url: String::new() };
    client.ingest(&request).await.unwrap();

    let recorded = service.recorded_ingests();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0], json!({"content": "note body", "url": ""}));
}

#[tokio::test]
async fn test_ingest_server_error() {
    let service = MockServiceBuilder::new().ingest_status(500).spawn().await;

    let client = ApiClient::new(service.base_url());
    let request = IngestRequest { content: "note".to_string(), url: String::new() };
    assert!(client.ingest(&request).await.is_err());
}

#[tokio::test]
async fn test_query_sends_question_and_parses_answer() {
    let service = MockServiceBuilder::new()
        .answer(json!({
            "answer": "the answer",
            "sources": [{"title": "Doc A", "url": "https://a.example"}, "bare source"]
        }))
        .spawn()
        .await;

    let client = ApiClient::new(service.base_url());
    let result = client.query("what is it?").await.unwrap();

    assert_eq!(result.answer, "the answer");
    assert_eq!(result.sources.len(), 2);
    assert_eq!(result.sources[0].label(), "Doc A");
    assert_eq!(result.sources[1].label(), "bare source");

    let recorded = service.recorded_queries();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0], json!({"question": "what is it?"}));
}

#[tokio::test]
async fn test_query_missing_sources_defaults_empty() {
    let service =
        MockServiceBuilder::new().answer(json!({"answer": "just text"})).spawn().await;

    let client = ApiClient::new(service.base_url());
    let result = client.query("anything").await.unwrap();

    assert_eq!(result.answer, "just text");
    assert!(result.sources.is_empty());
}

#[tokio::test]
async fn test_query_server_error() {
    let service = MockServiceBuilder::new().query_status(500).spawn().await;

    let client = ApiClient::new(service.base_url());
    assert!(client.query("anything").await.is_err());
}

#[tokio::test]
async fn test_list_reflects_service_updates() {
    // The client holds no cache: a second fetch sees the updated list
    let service = MockServiceBuilder::new().spawn().await;
    let client = ApiClient::new(service.base_url());

    assert!(client.list_items().await.unwrap().is_empty());

    service.set_items(json!([[10, "fresh item", "note", 1000]]));
    let items = client.list_items().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, 10);
}
