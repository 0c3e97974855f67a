//! In-memory [`SearchBackend`] for handler tests.

use aisearch_backend::{BackendError, EntityKind, Result, SearchBackend, SearchResults};
use aisearch_protocol::{IndexBatch, SearchQuery};
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::sync::Mutex;

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    ListNames(EntityKind),
    List(EntityKind),
    Get(EntityKind, String),
    Create(EntityKind, Value),
    CreateOrUpdate(EntityKind, String, Value),
    Delete(EntityKind, String),
    DocumentCount(String),
    IndexDocuments(String, Value),
    Search(String, SearchQuery),
}

/// Records every call and answers with canned data, or with `failure` when set.
#[derive(Default)]
pub(crate) struct FakeBackend {
    calls: Mutex<Vec<Call>>,
    failure: Option<(u16, String)>,
}

impl FakeBackend {
    pub(crate) fn failing(status: u16, message: &str) -> Self {
        Self {
            calls: Mutex::default(),
            failure: Some((status, message.to_string())),
        }
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    fn record(&self, call: Call) -> Result<()> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        match &self.failure {
            Some((status, message)) => Err(BackendError::Api {
                status: *status,
                code: None,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SearchBackend for FakeBackend {
    async fn list_names(&self, kind: EntityKind) -> Result<Vec<String>> {
        self.record(Call::ListNames(kind))?;
        Ok(vec![format!("{}-a", kind.collection()), format!("{}-b", kind.collection())])
    }

    async fn list(&self, kind: EntityKind) -> Result<Vec<Value>> {
        self.record(Call::List(kind))?;
        Ok(vec![json!({ "name": "hotels" })])
    }

    async fn get(&self, kind: EntityKind, name: &str) -> Result<Value> {
        self.record(Call::Get(kind, name.to_string()))?;
        Ok(json!({ "name": name }))
    }

    async fn create(&self, kind: EntityKind, definition: Value) -> Result<Value> {
        self.record(Call::Create(kind, definition.clone()))?;
        Ok(definition)
    }

    async fn create_or_update(
        &self,
        kind: EntityKind,
        name: &str,
        definition: Value,
    ) -> Result<Value> {
        self.record(Call::CreateOrUpdate(kind, name.to_string(), definition.clone()))?;
        Ok(definition)
    }

    async fn delete(&self, kind: EntityKind, name: &str) -> Result<()> {
        self.record(Call::Delete(kind, name.to_string()))
    }

    async fn document_count(&self, index: &str) -> Result<u64> {
        self.record(Call::DocumentCount(index.to_string()))?;
        Ok(3)
    }

    async fn index_documents(&self, index: &str, batch: &IndexBatch) -> Result<Value> {
        let body = serde_json::to_value(batch).map_err(|err| BackendError::Decode(err.to_string()))?;
        self.record(Call::IndexDocuments(index.to_string(), body))?;
        Ok(json!({ "value": [{ "key": "1", "status": true, "statusCode": 200 }] }))
    }

    async fn search(&self, index: &str, query: &SearchQuery) -> Result<SearchResults> {
        self.record(Call::Search(index.to_string(), query.clone()))?;
        let mut document = Map::new();
        document.insert("id".to_string(), json!("1"));
        Ok(SearchResults {
            count: query.count.filter(|count| *count).map(|_| 1),
            documents: vec![document],
        })
    }
}
