use aisearch_protocol::{IndexBatch, SearchQuery};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

use crate::error::Result;

/// Named resources managed by the search service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Index,
    Indexer,
    DataSource,
    Skillset,
}

impl EntityKind {
    /// REST collection segment for this kind.
    pub fn collection(self) -> &'static str {
        match self {
            EntityKind::Index => "indexes",
            EntityKind::Indexer => "indexers",
            EntityKind::DataSource => "datasources",
            EntityKind::Skillset => "skillsets",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityKind::Index => "index",
            EntityKind::Indexer => "indexer",
            EntityKind::DataSource => "data source",
            EntityKind::Skillset => "skillset",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    /// Approximate total match count, present when the query asked for it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    pub documents: Vec<Map<String, Value>>,
}

/// Everything the MCP tools need from the search service.
///
/// Entity definitions travel as raw JSON: callers get exactly what the service returned.
/// Errors are surfaced as-is; implementations do not retry or reinterpret them.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn list_names(&self, kind: EntityKind) -> Result<Vec<String>>;

    async fn list(&self, kind: EntityKind) -> Result<Vec<Value>>;

    async fn get(&self, kind: EntityKind, name: &str) -> Result<Value>;

    async fn create(&self, kind: EntityKind, definition: Value) -> Result<Value>;

    async fn create_or_update(&self, kind: EntityKind, name: &str, definition: Value)
        -> Result<Value>;

    async fn delete(&self, kind: EntityKind, name: &str) -> Result<()>;

    async fn document_count(&self, index: &str) -> Result<u64>;

    async fn index_documents(&self, index: &str, batch: &IndexBatch) -> Result<Value>;

    async fn search(&self, index: &str, query: &SearchQuery) -> Result<SearchResults>;
}
