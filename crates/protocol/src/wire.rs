//! Backend wire representation (camelCase JSON as accepted by the search service REST API).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub const SUGGESTER_SEARCH_MODE: &str = "analyzingInfixMatching";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndex {
    pub name: String,
    pub fields: Vec<SearchField>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggesters: Vec<Suggester>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cors_options: Option<CorsOptions>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scoring_profiles: Vec<ScoringProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_scoring_profile: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchField {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    /// Capability flags are `None` on complex fields; their sub-fields carry them instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub searchable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retrievable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filterable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sortable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facetable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyzer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_analyzer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_analyzer: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonym_maps: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<SearchField>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Suggester {
    pub name: String,
    pub search_mode: String,
    pub source_fields: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CorsOptions {
    pub allowed_origins: Vec<String>,
    pub max_age_in_seconds: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TextWeights {
    pub weights: BTreeMap<String, f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoringProfile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextWeights>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_aggregation: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FieldMappingFunction {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldMapping {
    pub source_field_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_field_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapping_function: Option<FieldMappingFunction>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndexer {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub data_source_name: String,
    pub target_index_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skillset_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_mappings: Vec<FieldMapping>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub output_field_mappings: Vec<FieldMapping>,
}

/// Body of a `docs/search` request.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct SearchQuery {
    pub search: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orderby: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum IndexActionKind {
    Upload,
    Delete,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct IndexAction {
    #[serde(rename = "@search.action")]
    pub action: IndexActionKind,
    #[serde(flatten)]
    pub document: Map<String, Value>,
}

/// Body of a `docs/index` request.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct IndexBatch {
    pub value: Vec<IndexAction>,
}

impl IndexBatch {
    pub fn single(action: IndexActionKind, document: Map<String, Value>) -> Self {
        Self {
            value: vec![IndexAction { action, document }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn index_action_flattens_document_next_to_action() {
        let mut doc = Map::new();
        doc.insert("id".to_string(), json!("42"));
        let batch = IndexBatch::single(IndexActionKind::Delete, doc);
        assert_eq!(
            serde_json::to_value(&batch).unwrap(),
            json!({ "value": [{ "@search.action": "delete", "id": "42" }] })
        );
    }

    #[test]
    fn search_query_omits_unset_options() {
        let query = SearchQuery {
            search: "*".to_string(),
            top: Some(5),
            ..SearchQuery::default()
        };
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({ "search": "*", "top": 5 })
        );
    }
}
