use aisearch_backend::{EntityKind, SearchBackend};
use aisearch_protocol::{to_field_mappings, SearchIndexer};
use aisearch_tool_groups::catalog::{
    CREATE_INDEXER, DELETE_INDEXER, GET_DATA_SOURCE, GET_INDEXER, GET_SKILL_SET,
    LIST_DATA_SOURCES, LIST_INDEXERS, LIST_SKILL_SETS,
};
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;
use serde_json::json;

use super::super::AiSearchService;
use super::result::{backend_failure, invalid_request, json_result, respond};
use crate::tools::schemas::indexer::{CreateIndexerRequest, NameRequest, SkillSetRequest};

async fn list_names(
    backend: &dyn SearchBackend,
    tool: &str,
    kind: EntityKind,
) -> Result<CallToolResult, McpError> {
    respond(tool, backend.list_names(kind).await)
}

async fn get_definition(
    backend: &dyn SearchBackend,
    tool: &str,
    kind: EntityKind,
    name: &str,
) -> Result<CallToolResult, McpError> {
    respond(tool, backend.get(kind, name).await)
}

pub(in crate::tools::dispatch) async fn list_indexers(
    service: &AiSearchService,
) -> Result<CallToolResult, McpError> {
    list_names(service.backend.as_ref(), LIST_INDEXERS, EntityKind::Indexer).await
}

pub(in crate::tools::dispatch) async fn get_indexer(
    service: &AiSearchService,
    request: NameRequest,
) -> Result<CallToolResult, McpError> {
    get_definition(
        service.backend.as_ref(),
        GET_INDEXER,
        EntityKind::Indexer,
        &request.name,
    )
    .await
}

pub(in crate::tools::dispatch) async fn create_indexer(
    service: &AiSearchService,
    request: CreateIndexerRequest,
) -> Result<CallToolResult, McpError> {
    for (field, value) in [
        ("name", &request.name),
        ("data_source_name", &request.data_source_name),
        ("target_index_name", &request.target_index_name),
    ] {
        if value.trim().is_empty() {
            return Ok(invalid_request(format!("{field} must not be empty")));
        }
    }

    let indexer = SearchIndexer {
        name: request.name,
        description: request.description,
        data_source_name: request.data_source_name,
        target_index_name: request.target_index_name,
        skillset_name: request.skill_set_name,
        field_mappings: to_field_mappings(request.field_mappings.as_deref().unwrap_or_default()),
        output_field_mappings: to_field_mappings(
            request.output_field_mappings.as_deref().unwrap_or_default(),
        ),
    };
    let definition = match serde_json::to_value(&indexer) {
        Ok(definition) => definition,
        Err(err) => return Ok(invalid_request(err)),
    };
    respond(
        CREATE_INDEXER,
        service
            .backend
            .create(EntityKind::Indexer, definition)
            .await,
    )
}

pub(in crate::tools::dispatch) async fn delete_indexer(
    service: &AiSearchService,
    request: NameRequest,
) -> Result<CallToolResult, McpError> {
    match service
        .backend
        .delete(EntityKind::Indexer, &request.name)
        .await
    {
        Ok(()) => json_result(&json!({ "deleted": request.name })),
        Err(err) => Ok(backend_failure(DELETE_INDEXER, err)),
    }
}

pub(in crate::tools::dispatch) async fn list_data_sources(
    service: &AiSearchService,
) -> Result<CallToolResult, McpError> {
    list_names(
        service.backend.as_ref(),
        LIST_DATA_SOURCES,
        EntityKind::DataSource,
    )
    .await
}

pub(in crate::tools::dispatch) async fn get_data_source(
    service: &AiSearchService,
    request: NameRequest,
) -> Result<CallToolResult, McpError> {
    get_definition(
        service.backend.as_ref(),
        GET_DATA_SOURCE,
        EntityKind::DataSource,
        &request.name,
    )
    .await
}

pub(in crate::tools::dispatch) async fn list_skill_sets(
    service: &AiSearchService,
) -> Result<CallToolResult, McpError> {
    list_names(service.backend.as_ref(), LIST_SKILL_SETS, EntityKind::Skillset).await
}

pub(in crate::tools::dispatch) async fn get_skill_set(
    service: &AiSearchService,
    request: SkillSetRequest,
) -> Result<CallToolResult, McpError> {
    get_definition(
        service.backend.as_ref(),
        GET_SKILL_SET,
        EntityKind::Skillset,
        &request.skill_set_name,
    )
    .await
}
