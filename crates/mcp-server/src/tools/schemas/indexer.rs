use aisearch_protocol::FieldMappingModel;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct NameRequest {
    #[schemars(description = "Name of the resource.")]
    pub name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SkillSetRequest {
    #[schemars(description = "Name of the skill set.")]
    pub skill_set_name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateIndexerRequest {
    #[schemars(description = "Name of the new indexer.")]
    pub name: String,

    #[schemars(description = "Existing data source to read from.")]
    pub data_source_name: String,

    #[schemars(description = "Existing index to write into.")]
    pub target_index_name: String,

    pub description: Option<String>,

    /// Source-to-index field mappings
    #[schemars(
        description = "Mappings from data source fields to index fields. mapping_function is passed through as the function name."
    )]
    pub field_mappings: Option<Vec<FieldMappingModel>>,

    #[schemars(description = "Mappings from skill set outputs to index fields.")]
    pub output_field_mappings: Option<Vec<FieldMappingModel>>,

    #[schemars(description = "Skill set to run during indexing.")]
    pub skill_set_name: Option<String>,
}
