use rmcp::schemars;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddDocumentRequest {
    #[schemars(description = "Name of the target index.")]
    pub index_name: String,

    /// Document body, uploaded as-is
    #[schemars(
        description = "Document to upload. Must include the index key field; an existing document with the same key is replaced."
    )]
    pub document: Map<String, Value>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DeleteDocumentRequest {
    #[schemars(description = "Name of the target index.")]
    pub index_name: String,

    #[schemars(description = "Name of the index key field.")]
    pub key_field_name: String,

    #[schemars(description = "Key value of the document to delete.")]
    pub key_value: String,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct QueryIndexRequest {
    #[schemars(description = "Name of the index to query.")]
    pub index_name: String,

    /// Full-text query. Default: "*"
    #[schemars(description = "Full-text search text. Omit to match all documents ('*').")]
    pub search_text: Option<String>,

    #[schemars(description = "OData $filter expression, e.g. \"rating ge 4\".")]
    pub query_filter: Option<String>,

    #[schemars(description = "Sort clauses, e.g. [\"rating desc\", \"name\"].")]
    pub order_by: Option<Vec<String>>,

    #[schemars(description = "Fields to return. Default: all retrievable fields.")]
    pub select: Option<Vec<String>>,

    #[schemars(description = "Number of results to skip.")]
    pub skip: Option<u64>,

    #[schemars(description = "Maximum number of results to return.")]
    pub top: Option<u64>,

    #[schemars(description = "Also return the total number of matching documents.")]
    pub include_total_count: Option<bool>,
}
