use aisearch_protocol::{IndexActionKind, IndexBatch, SearchQuery};
use aisearch_tool_groups::catalog::{
    ADD_DOCUMENT, DELETE_DOCUMENT, GET_DOCUMENT_COUNT, QUERY_INDEX,
};
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;
use serde_json::{json, Map, Value};

use super::super::AiSearchService;
use super::result::{backend_failure, invalid_request, json_result, respond};
use crate::tools::schemas::document::{
    AddDocumentRequest, DeleteDocumentRequest, QueryIndexRequest,
};
use crate::tools::schemas::index::IndexNameRequest;

const MATCH_ALL: &str = "*";
/// Annotation namespace of the indexing batch format.
const RESERVED_KEY_PREFIX: &str = "@search.";

pub(in crate::tools::dispatch) async fn get_document_count(
    service: &AiSearchService,
    request: IndexNameRequest,
) -> Result<CallToolResult, McpError> {
    match service.backend.document_count(&request.index_name).await {
        Ok(count) => json_result(&json!({
            "index_name": request.index_name,
            "count": count,
        })),
        Err(err) => Ok(backend_failure(GET_DOCUMENT_COUNT, err)),
    }
}

pub(in crate::tools::dispatch) async fn add_document(
    service: &AiSearchService,
    request: AddDocumentRequest,
) -> Result<CallToolResult, McpError> {
    if let Some(key) = request
        .document
        .keys()
        .find(|key| key.starts_with(RESERVED_KEY_PREFIX))
    {
        return Ok(invalid_request(format!(
            "document key '{key}' is reserved; the upload action is set by add_document"
        )));
    }
    let batch = IndexBatch::single(IndexActionKind::Upload, request.document);
    respond(
        ADD_DOCUMENT,
        service
            .backend
            .index_documents(&request.index_name, &batch)
            .await
            .map(single_outcome),
    )
}

pub(in crate::tools::dispatch) async fn delete_document(
    service: &AiSearchService,
    request: DeleteDocumentRequest,
) -> Result<CallToolResult, McpError> {
    if request.key_field_name.trim().is_empty() {
        return Ok(invalid_request("key_field_name must not be empty"));
    }
    let mut key = Map::new();
    key.insert(request.key_field_name, Value::String(request.key_value));
    let batch = IndexBatch::single(IndexActionKind::Delete, key);
    respond(
        DELETE_DOCUMENT,
        service
            .backend
            .index_documents(&request.index_name, &batch)
            .await
            .map(single_outcome),
    )
}

pub(in crate::tools::dispatch) async fn query_index(
    service: &AiSearchService,
    request: QueryIndexRequest,
) -> Result<CallToolResult, McpError> {
    let query = search_query(&request);
    respond(
        QUERY_INDEX,
        service.backend.search(&request.index_name, &query).await,
    )
}

fn search_query(request: &QueryIndexRequest) -> SearchQuery {
    let search = request
        .search_text
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .unwrap_or(MATCH_ALL)
        .to_string();
    SearchQuery {
        search,
        filter: request.query_filter.clone(),
        orderby: request.order_by.as_ref().map(|clauses| clauses.join(",")),
        select: request.select.as_ref().map(|fields| fields.join(",")),
        skip: request.skip,
        top: request.top,
        count: request.include_total_count,
    }
}

/// The indexing response carries one status per action; a single-action batch reports its own.
fn single_outcome(mut body: Value) -> Value {
    match body.get_mut("value").and_then(Value::as_array_mut) {
        Some(items) if items.len() == 1 => items.remove(0),
        _ => body,
    }
}
