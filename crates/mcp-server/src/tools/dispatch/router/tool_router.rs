use super::super::visibility::VisibleToolRouter;
use super::super::AiSearchService;
use super::{documents, indexers, indexes};
use crate::tools::schemas::document::{
    AddDocumentRequest, DeleteDocumentRequest, QueryIndexRequest,
};
use crate::tools::schemas::index::{IndexDefinitionRequest, IndexNameRequest};
use crate::tools::schemas::indexer::{CreateIndexerRequest, NameRequest, SkillSetRequest};
use aisearch_tool_groups::AllowList;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use rmcp::{tool, tool_router, ErrorData as McpError};
use std::sync::Arc;

pub(super) fn build_visible_tool_router(
    allow_list: Arc<AllowList>,
) -> VisibleToolRouter<AiSearchService> {
    VisibleToolRouter::new(AiSearchService::tool_router(), allow_list)
}

#[tool_router]
impl AiSearchService {
    #[tool(description = "List the names of all indexes in the search service.")]
    pub async fn list_index_names(&self) -> Result<CallToolResult, McpError> {
        indexes::list_index_names(self).await
    }

    #[tool(description = "List the full definitions (fields, suggesters, scoring profiles) of all indexes.")]
    pub async fn list_index_schemas(&self) -> Result<CallToolResult, McpError> {
        indexes::list_index_schemas(self).await
    }

    #[tool(description = "Get the definition of one index.")]
    pub async fn get_index_schema(
        &self,
        Parameters(request): Parameters<IndexNameRequest>,
    ) -> Result<CallToolResult, McpError> {
        indexes::get_index_schema(self, request).await
    }

    /// Create a new index
    #[tool(
        description = "Create a new index. The definition is validated first: it needs a name, at least one field, and exactly one top-level key field."
    )]
    pub async fn create_index(
        &self,
        Parameters(request): Parameters<IndexDefinitionRequest>,
    ) -> Result<CallToolResult, McpError> {
        indexes::create_index(self, request).await
    }

    /// Create-or-update an index
    #[tool(
        description = "Replace an index definition (created if missing). Validated like create_index. Some changes, such as altering an existing field, are rejected by the service."
    )]
    pub async fn modify_index(
        &self,
        Parameters(request): Parameters<IndexDefinitionRequest>,
    ) -> Result<CallToolResult, McpError> {
        indexes::modify_index(self, request).await
    }

    #[tool(description = "Delete an index and all of its documents.")]
    pub async fn delete_index(
        &self,
        Parameters(request): Parameters<IndexNameRequest>,
    ) -> Result<CallToolResult, McpError> {
        indexes::delete_index(self, request).await
    }

    #[tool(description = "Get the number of documents in an index.")]
    pub async fn get_document_count(
        &self,
        Parameters(request): Parameters<IndexNameRequest>,
    ) -> Result<CallToolResult, McpError> {
        documents::get_document_count(self, request).await
    }

    #[tool(
        description = "Upload one document to an index. A document with the same key is replaced."
    )]
    pub async fn add_document(
        &self,
        Parameters(request): Parameters<AddDocumentRequest>,
    ) -> Result<CallToolResult, McpError> {
        documents::add_document(self, request).await
    }

    #[tool(description = "Delete one document from an index by its key.")]
    pub async fn delete_document(
        &self,
        Parameters(request): Parameters<DeleteDocumentRequest>,
    ) -> Result<CallToolResult, McpError> {
        documents::delete_document(self, request).await
    }

    /// Full-text search
    #[tool(
        description = "Search an index. Supports full-text search_text (default '*'), an OData filter, ordering, field selection, paging and an optional total count."
    )]
    pub async fn query_index(
        &self,
        Parameters(request): Parameters<QueryIndexRequest>,
    ) -> Result<CallToolResult, McpError> {
        documents::query_index(self, request).await
    }

    #[tool(description = "List the names of all indexers.")]
    pub async fn list_indexers(&self) -> Result<CallToolResult, McpError> {
        indexers::list_indexers(self).await
    }

    #[tool(description = "Get the definition of one indexer.")]
    pub async fn get_indexer(
        &self,
        Parameters(request): Parameters<NameRequest>,
    ) -> Result<CallToolResult, McpError> {
        indexers::get_indexer(self, request).await
    }

    #[tool(
        description = "Create an indexer that loads a data source into an index, with optional field mappings and skill set."
    )]
    pub async fn create_indexer(
        &self,
        Parameters(request): Parameters<CreateIndexerRequest>,
    ) -> Result<CallToolResult, McpError> {
        indexers::create_indexer(self, request).await
    }

    #[tool(description = "Delete an indexer.")]
    pub async fn delete_indexer(
        &self,
        Parameters(request): Parameters<NameRequest>,
    ) -> Result<CallToolResult, McpError> {
        indexers::delete_indexer(self, request).await
    }

    #[tool(description = "List the names of all data sources.")]
    pub async fn list_data_sources(&self) -> Result<CallToolResult, McpError> {
        indexers::list_data_sources(self).await
    }

    #[tool(description = "Get the definition of one data source.")]
    pub async fn get_data_source(
        &self,
        Parameters(request): Parameters<NameRequest>,
    ) -> Result<CallToolResult, McpError> {
        indexers::get_data_source(self, request).await
    }

    #[tool(description = "List the names of all skill sets.")]
    pub async fn list_skill_sets(&self) -> Result<CallToolResult, McpError> {
        indexers::list_skill_sets(self).await
    }

    #[tool(description = "Get the definition of one skill set.")]
    pub async fn get_skill_set(
        &self,
        Parameters(request): Parameters<SkillSetRequest>,
    ) -> Result<CallToolResult, McpError> {
        indexers::get_skill_set(self, request).await
    }
}
