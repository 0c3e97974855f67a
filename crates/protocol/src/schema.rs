//! Declarative index description as authored by MCP callers.
//!
//! These types are deliberately looser than the backend representation: every capability
//! flag is optional and gets its default applied during conversion.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_CORS_MAX_AGE_SECONDS: u64 = 300;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct FieldSchema {
    /// Field name, unique within its parent
    pub name: String,

    /// Backend data type tag, e.g. "Edm.String", "Edm.Int32", "Collection(Edm.String)", "Edm.ComplexType"
    #[serde(rename = "type")]
    pub data_type: String,

    /// Marks the document key. Exactly one top-level field must set this (default: false)
    #[serde(default)]
    pub key: Option<bool>,

    /// Full-text searchable (default: false)
    #[serde(default)]
    pub searchable: Option<bool>,

    /// Returned in search results (default: true)
    #[serde(default)]
    pub retrievable: Option<bool>,

    /// Usable in $filter expressions (default: false)
    #[serde(default)]
    pub filterable: Option<bool>,

    /// Usable in $orderby expressions (default: false)
    #[serde(default)]
    pub sortable: Option<bool>,

    /// Usable in facet queries (default: false)
    #[serde(default)]
    pub facetable: Option<bool>,

    /// Analyzer for both indexing and querying
    #[serde(default)]
    pub analyzer_name: Option<String>,

    /// Analyzer used at query time only
    #[serde(default)]
    pub search_analyzer_name: Option<String>,

    /// Analyzer used at indexing time only
    #[serde(default)]
    pub index_analyzer_name: Option<String>,

    /// Synonym maps applied to this field
    #[serde(default)]
    pub synonym_map_names: Vec<String>,

    /// Sub-fields of an "Edm.ComplexType" field
    #[serde(default)]
    pub fields: Vec<FieldSchema>,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            key: None,
            searchable: None,
            retrievable: None,
            filterable: None,
            sortable: None,
            facetable: None,
            analyzer_name: None,
            search_analyzer_name: None,
            index_analyzer_name: None,
            synonym_map_names: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn key(mut self, value: bool) -> Self {
        self.key = Some(value);
        self
    }

    pub fn searchable(mut self, value: bool) -> Self {
        self.searchable = Some(value);
        self
    }

    pub fn filterable(mut self, value: bool) -> Self {
        self.filterable = Some(value);
        self
    }

    pub fn is_key(&self) -> bool {
        self.key.unwrap_or(false)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct SuggesterSchema {
    /// Suggester name
    pub name: String,
    /// Fields the suggester draws completions from
    pub source_fields: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct CorsOptionsSchema {
    /// Origins allowed to issue browser requests ("*" for any)
    pub allowed_origins: Vec<String>,
    /// Preflight cache duration in seconds (default: 300)
    #[serde(default)]
    pub max_age_in_seconds: Option<u64>,
}

impl CorsOptionsSchema {
    pub fn max_age_in_seconds(&self) -> u64 {
        self.max_age_in_seconds.unwrap_or(DEFAULT_CORS_MAX_AGE_SECONDS)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct ScoringProfileSchema {
    /// Scoring profile name
    pub name: String,
    /// Per-field weights applied to text relevance
    #[serde(default)]
    pub text_weights: Option<BTreeMap<String, f64>>,
    /// Scoring functions in backend JSON form, passed through as-is
    #[serde(default)]
    pub functions: Vec<serde_json::Value>,
    /// How function scores combine: "sum", "average", "minimum", "maximum", "firstMatching"
    #[serde(default)]
    pub function_aggregation: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct IndexSchema {
    /// Index name
    pub name: String,
    /// Ordered field list; exactly one top-level field must be the key
    pub fields: Vec<FieldSchema>,
    #[serde(default)]
    pub suggesters: Vec<SuggesterSchema>,
    #[serde(default)]
    pub cors_options: Option<CorsOptionsSchema>,
    #[serde(default)]
    pub scoring_profiles: Vec<ScoringProfileSchema>,
    /// Scoring profile used when a query names none
    #[serde(default)]
    pub default_scoring_profile: Option<String>,
}

impl IndexSchema {
    pub fn new(name: impl Into<String>, fields: Vec<FieldSchema>) -> Self {
        Self {
            name: name.into(),
            fields,
            suggesters: Vec::new(),
            cors_options: None,
            scoring_profiles: Vec::new(),
            default_scoring_profile: None,
        }
    }
}

/// Source-to-target field mapping used when creating an indexer.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct FieldMappingModel {
    /// Field name in the data source
    pub source_field_name: String,
    /// Field name in the index (defaults to the source name on the backend)
    #[serde(default)]
    pub target_field_name: Option<String>,
    /// Mapping function expression, e.g. "base64Encode" or "extractTokenAtPosition(1)"
    #[serde(default)]
    pub mapping_function: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_flags_default_when_omitted() {
        let field: FieldSchema =
            serde_json::from_value(json!({ "name": "title", "type": "Edm.String" })).unwrap();
        assert_eq!(field.name, "title");
        assert!(!field.is_key());
        assert_eq!(field.retrievable, None);
        assert!(field.fields.is_empty());
    }

    #[test]
    fn cors_max_age_defaults_to_300() {
        let cors: CorsOptionsSchema =
            serde_json::from_value(json!({ "allowed_origins": ["*"] })).unwrap();
        assert_eq!(cors.allowed_origins, vec!["*".to_string()]);
        assert_eq!(cors.max_age_in_seconds(), 300);
    }

    #[test]
    fn index_schema_accepts_minimal_payload() {
        let schema: IndexSchema = serde_json::from_value(json!({
            "name": "products",
            "fields": [{ "name": "id", "type": "Edm.String", "key": true }]
        }))
        .unwrap();
        assert_eq!(schema.fields.len(), 1);
        assert!(schema.fields[0].is_key());
        assert!(schema.suggesters.is_empty());
        assert!(schema.cors_options.is_none());
    }
}
