use aisearch_backend::EntityKind;
use aisearch_protocol::to_backend_index;
use aisearch_tool_groups::catalog::{
    CREATE_INDEX, DELETE_INDEX, GET_INDEX_SCHEMA, LIST_INDEX_NAMES, LIST_INDEX_SCHEMAS,
    MODIFY_INDEX,
};
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;
use serde_json::{json, Value};

use super::super::AiSearchService;
use super::result::{backend_failure, invalid_request, json_result, respond};
use crate::tools::schemas::index::{IndexDefinitionRequest, IndexNameRequest};

pub(in crate::tools::dispatch) async fn list_index_names(
    service: &AiSearchService,
) -> Result<CallToolResult, McpError> {
    respond(
        LIST_INDEX_NAMES,
        service.backend.list_names(EntityKind::Index).await,
    )
}

pub(in crate::tools::dispatch) async fn list_index_schemas(
    service: &AiSearchService,
) -> Result<CallToolResult, McpError> {
    respond(
        LIST_INDEX_SCHEMAS,
        service.backend.list(EntityKind::Index).await,
    )
}

pub(in crate::tools::dispatch) async fn get_index_schema(
    service: &AiSearchService,
    request: IndexNameRequest,
) -> Result<CallToolResult, McpError> {
    respond(
        GET_INDEX_SCHEMA,
        service
            .backend
            .get(EntityKind::Index, &request.index_name)
            .await,
    )
}

/// Convert and validate the definition; nothing reaches the backend when that fails.
fn index_definition(request: &IndexDefinitionRequest) -> Result<(String, Value), CallToolResult> {
    let index = to_backend_index(&request.index).map_err(invalid_request)?;
    let definition = serde_json::to_value(&index).map_err(invalid_request)?;
    Ok((index.name, definition))
}

pub(in crate::tools::dispatch) async fn create_index(
    service: &AiSearchService,
    request: IndexDefinitionRequest,
) -> Result<CallToolResult, McpError> {
    let (_, definition) = match index_definition(&request) {
        Ok(parts) => parts,
        Err(result) => return Ok(result),
    };
    respond(
        CREATE_INDEX,
        service.backend.create(EntityKind::Index, definition).await,
    )
}

pub(in crate::tools::dispatch) async fn modify_index(
    service: &AiSearchService,
    request: IndexDefinitionRequest,
) -> Result<CallToolResult, McpError> {
    let (name, definition) = match index_definition(&request) {
        Ok(parts) => parts,
        Err(result) => return Ok(result),
    };
    respond(
        MODIFY_INDEX,
        service
            .backend
            .create_or_update(EntityKind::Index, &name, definition)
            .await,
    )
}

pub(in crate::tools::dispatch) async fn delete_index(
    service: &AiSearchService,
    request: IndexNameRequest,
) -> Result<CallToolResult, McpError> {
    match service
        .backend
        .delete(EntityKind::Index, &request.index_name)
        .await
    {
        Ok(()) => json_result(&json!({ "deleted": request.index_name })),
        Err(err) => Ok(backend_failure(DELETE_INDEX, err)),
    }
}
