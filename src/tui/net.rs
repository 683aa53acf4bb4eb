use tokio::sync::mpsc;
use tracing::warn;

use crate::api::ApiClient;
use crate::models::{IngestRequest, KnowledgeItem, QueryAnswer};

/// Completion events reported by background request tasks.
///
/// Each network call runs on its own tokio task and reports back over an
/// unbounded channel, drained by the render loop each tick. Query events
/// carry the sequence number of the request that produced them so stale
/// responses can be discarded.
#[derive(Debug)]
pub enum NetEvent {
    ItemsLoaded(Vec<KnowledgeItem>),
    ItemsFailed(String),
    IngestDone,
    IngestFailed(String),
    QueryDone { seq: u64, answer: QueryAnswer },
    QueryFailed { seq: u64 },
}

/// Fetch the full item list in the background.
pub fn spawn_list_fetch(client: ApiClient, tx: mpsc::UnboundedSender<NetEvent>) {
    tokio::spawn(async move {
        let event = match client.list_items().await {
            Ok(items) => NetEvent::ItemsLoaded(items),
            Err(e) => NetEvent::ItemsFailed(format!("{:#}", e)),
        };
        let _ = tx.send(event);
    });
}

/// Submit an ingest request in the background.
pub fn spawn_ingest(client: ApiClient, request: IngestRequest, tx: mpsc::UnboundedSender<NetEvent>) {
    tokio::spawn(async move {
        let event = match client.ingest(&request).await {
            Ok(()) => NetEvent::IngestDone,
            Err(e) => {
                warn!("ingest failed: {:#}", e);
                NetEvent::IngestFailed(format!("{:#}", e))
            }
        };
        let _ = tx.send(event);
    });
}

/// Submit a query in the background, tagged with its sequence number.
pub fn spawn_query(
    client: ApiClient,
    seq: u64,
    question: String,
    tx: mpsc::UnboundedSender<NetEvent>,
) {
    tokio::spawn(async move {
        let event = match client.query(&question).await {
            Ok(answer) => NetEvent::QueryDone { seq, answer },
            Err(e) => {
                warn!("query failed: {:#}", e);
                NetEvent::QueryFailed { seq }
            }
        };
        let _ = tx.send(event);
    });
}
