use chrono::{DateTime, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Origin of an ingested item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Note,
    Url,
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceType::Note => write!(f, "note"),
            SourceType::Url => write!(f, "url"),
        }
    }
}

/// One previously ingested unit of content, as reported by the list endpoint.
///
/// The wire format is a fixed-position JSON array `[id, content, sourceType,
/// timestamp]`. Deserialization maps it onto named fields and rejects
/// malformed shapes with a descriptive error instead of indexing blindly.
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeItem {
    pub id: i64,
    pub content: String,
    pub source: SourceType,
    pub created_at: DateTime<Utc>,
}

impl<'de> Deserialize<'de> for KnowledgeItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (id, content, source, timestamp) =
            <(i64, String, SourceType, Value)>::deserialize(deserializer)?;

        Ok(KnowledgeItem { id, content, source, created_at: parse_timestamp(timestamp)? })
    }
}

/// Parse the timestamp slot, which the service has emitted both as epoch
/// milliseconds and as an RFC3339 string.
fn parse_timestamp<E: Error>(value: Value) -> Result<DateTime<Utc>, E> {
    match value {
        Value::Number(n) => {
            let ms = n.as_i64().ok_or_else(|| E::custom("invalid timestamp"))?;
            DateTime::from_timestamp_millis(ms).ok_or_else(|| E::custom("timestamp out of range"))
        }
        Value::String(s) => s
            .parse::<DateTime<Utc>>()
            .map_err(|e| E::custom(format!("invalid RFC3339 timestamp: {}", e))),
        _ => Err(E::custom("timestamp must be a number or string")),
    }
}
