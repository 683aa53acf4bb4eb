use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body for `POST /ingest`. Either field may be empty, but not both at
/// submission time; the field not in use is sent as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestRequest {
    pub content: String,
    pub url: String,
}

impl IngestRequest {
    /// True when neither a note nor a URL was provided.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty() && self.url.trim().is_empty()
    }
}

/// Body for `POST /query`.
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest {
    pub question: String,
}

/// Response from `POST /query`. `sources` defaults to empty when absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryAnswer {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<SourceRef>,
}

/// One source reference attached to an answer.
///
/// The service treats sources as opaque entries; this client accepts either
/// an object with any of `title`/`url`/`snippet`, or a bare string (treated
/// as a title-only reference).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRef {
    pub title: Option<String>,
    pub url: Option<String>,
    pub snippet: Option<String>,
}

impl SourceRef {
    /// Short single-line label used when rendering a source list.
    pub fn label(&self) -> &str {
        self.title
            .as_deref()
            .or(self.url.as_deref())
            .or(self.snippet.as_deref())
            .unwrap_or("(unknown source)")
    }
}

impl<'de> Deserialize<'de> for SourceRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::String(s) => Ok(SourceRef { title: Some(s), ..Default::default() }),
            Value::Object(map) => {
                let field = |key: &str| {
                    map.get(key).and_then(Value::as_str).map(str::to_string)
                };
                Ok(SourceRef {
                    title: field("title"),
                    url: field("url"),
                    snippet: field("snippet"),
                })
            }
            _ => Err(Error::custom("source must be a string or object")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest_request_blank_detection() {
        let blank = IngestRequest { content: "  ".to_string(), url: "\t".to_string() };
        assert!(blank.is_blank());

        let with_note = IngestRequest { content: "a note".to_string(), url: String::new() };
        assert!(!with_note.is_blank());

        let with_url = IngestRequest {
            content: String::new(),
            url: "https://example.com".to_string(),
        };
        assert!(!with_url.is_blank());
    }

    #[test]
    fn test_query_answer_missing_sources_defaults_empty() {
        let json = r#"{"answer":"42"}"#;
        let parsed: QueryAnswer = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.answer, "42");
        assert!(parsed.sources.is_empty());
    }

    #[test]
    fn test_query_answer_with_object_sources() {
        let json = r#"{
            "answer": "see below",
            "sources": [
                {"title": "Doc A", "url": "https://a.example", "snippet": "..."},
                {"url": "https://b.example"}
            ]
        }"#;

        let parsed: QueryAnswer = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.sources.len(), 2);
        assert_eq!(parsed.sources[0].label(), "Doc A");
        assert_eq!(parsed.sources[1].label(), "https://b.example");
    }

    #[test]
    fn test_query_answer_with_string_sources() {
        let json = r#"{"answer":"ok","sources":["note 12","note 31"]}"#;
        let parsed: QueryAnswer = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.sources[0].title.as_deref(), Some("note 12"));
        assert_eq!(parsed.sources[1].label(), "note 31");
    }

    #[test]
    fn test_source_ref_rejects_array_entry() {
        let json = r#"{"answer":"ok","sources":[[1,2]]}"#;
        assert!(serde_json::from_str::<QueryAnswer>(json).is_err());
    }

    #[test]
    fn test_source_ref_empty_object_label() {
        let json = r#"{"answer":"ok","sources":[{}]}"#;
        let parsed: QueryAnswer = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.sources[0].label(), "(unknown source)");
    }
}
