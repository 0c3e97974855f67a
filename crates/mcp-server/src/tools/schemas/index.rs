use aisearch_protocol::IndexSchema;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct IndexNameRequest {
    /// Name of the index
    #[schemars(description = "Name of the search index.")]
    pub index_name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct IndexDefinitionRequest {
    /// Index definition; exactly one top-level field must be the key
    #[schemars(
        description = "Index definition. Exactly one top-level field must set key=true. Unset flags default to retrievable=true and false for everything else."
    )]
    pub index: IndexSchema,
}
