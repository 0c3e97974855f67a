//! Declarative model → backend wire representation.

use crate::error::{Result, ValidationError};
use crate::schema::{
    CorsOptionsSchema, FieldMappingModel, FieldSchema, IndexSchema, ScoringProfileSchema,
    SuggesterSchema,
};
use crate::wire::{
    CorsOptions, FieldMapping, FieldMappingFunction, ScoringProfile, SearchField, SearchIndex,
    Suggester, TextWeights, SUGGESTER_SEARCH_MODE,
};

/// Validate and convert an index definition.
///
/// Field order, suggester source lists and scoring profiles are preserved as given. Unset
/// capability flags receive their defaults (`retrievable` true, everything else false); fields
/// with sub-fields carry no flags at all.
pub fn to_backend_index(schema: &IndexSchema) -> Result<SearchIndex> {
    validate_index(schema)?;

    Ok(SearchIndex {
        name: schema.name.clone(),
        fields: schema.fields.iter().map(to_backend_field).collect(),
        suggesters: schema.suggesters.iter().map(to_backend_suggester).collect(),
        cors_options: schema.cors_options.as_ref().map(to_backend_cors),
        scoring_profiles: schema
            .scoring_profiles
            .iter()
            .map(to_backend_scoring_profile)
            .collect(),
        default_scoring_profile: schema.default_scoring_profile.clone(),
    })
}

/// Convert indexer field mappings 1:1, keeping their order.
///
/// The mapping function expression is forwarded untouched; the backend rejects malformed ones.
pub fn to_field_mappings(models: &[FieldMappingModel]) -> Vec<FieldMapping> {
    models
        .iter()
        .map(|model| FieldMapping {
            source_field_name: model.source_field_name.clone(),
            target_field_name: model.target_field_name.clone(),
            mapping_function: model
                .mapping_function
                .as_ref()
                .map(|expr| FieldMappingFunction { name: expr.clone() }),
        })
        .collect()
}

fn validate_index(schema: &IndexSchema) -> Result<()> {
    if schema.name.trim().is_empty() {
        return Err(ValidationError::EmptyIndexName);
    }
    if schema.fields.is_empty() {
        return Err(ValidationError::NoFields);
    }

    let keys: Vec<String> = schema
        .fields
        .iter()
        .filter(|field| field.is_key())
        .map(|field| field.name.clone())
        .collect();
    match keys.len() {
        0 => Err(ValidationError::NoKeyField),
        1 => Ok(()),
        _ => Err(ValidationError::MultipleKeyFields(keys)),
    }
}

fn to_backend_field(field: &FieldSchema) -> SearchField {
    // Complex fields only group sub-fields; the backend rejects capability flags on them.
    let flag = |value: Option<bool>, default: bool| {
        field.fields.is_empty().then(|| value.unwrap_or(default))
    };
    SearchField {
        name: field.name.clone(),
        data_type: field.data_type.clone(),
        key: flag(field.key, false),
        searchable: flag(field.searchable, false),
        retrievable: flag(field.retrievable, true),
        filterable: flag(field.filterable, false),
        sortable: flag(field.sortable, false),
        facetable: flag(field.facetable, false),
        analyzer: field.analyzer_name.clone(),
        search_analyzer: field.search_analyzer_name.clone(),
        index_analyzer: field.index_analyzer_name.clone(),
        synonym_maps: field.synonym_map_names.clone(),
        fields: field.fields.iter().map(to_backend_field).collect(),
    }
}

fn to_backend_suggester(suggester: &SuggesterSchema) -> Suggester {
    Suggester {
        name: suggester.name.clone(),
        search_mode: SUGGESTER_SEARCH_MODE.to_string(),
        source_fields: suggester.source_fields.clone(),
    }
}

fn to_backend_cors(cors: &CorsOptionsSchema) -> CorsOptions {
    CorsOptions {
        allowed_origins: cors.allowed_origins.clone(),
        max_age_in_seconds: cors.max_age_in_seconds(),
    }
}

fn to_backend_scoring_profile(profile: &ScoringProfileSchema) -> ScoringProfile {
    ScoringProfile {
        name: profile.name.clone(),
        text: profile.text_weights.as_ref().map(|weights| TextWeights {
            weights: weights.clone(),
        }),
        functions: profile.functions.clone(),
        function_aggregation: profile.function_aggregation.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn products(fields: Vec<FieldSchema>) -> IndexSchema {
        IndexSchema::new("products", fields)
    }

    #[test]
    fn rejects_index_without_fields() {
        assert_eq!(
            to_backend_index(&products(Vec::new())),
            Err(ValidationError::NoFields)
        );
    }

    #[test]
    fn rejects_index_without_key_field() {
        let schema = products(vec![FieldSchema::new("title", "Edm.String").searchable(true)]);
        assert_eq!(to_backend_index(&schema), Err(ValidationError::NoKeyField));
    }

    #[test]
    fn rejects_index_with_two_key_fields() {
        let schema = products(vec![
            FieldSchema::new("id", "Edm.String").key(true),
            FieldSchema::new("sku", "Edm.String").key(true),
        ]);
        assert_eq!(
            to_backend_index(&schema),
            Err(ValidationError::MultipleKeyFields(vec![
                "id".to_string(),
                "sku".to_string()
            ]))
        );
    }

    #[test]
    fn rejects_blank_index_name() {
        let schema = IndexSchema::new("  ", vec![FieldSchema::new("id", "Edm.String").key(true)]);
        assert_eq!(to_backend_index(&schema), Err(ValidationError::EmptyIndexName));
    }

    #[test]
    fn keeps_field_order_and_flags() {
        let schema = products(vec![
            FieldSchema::new("id", "Edm.String").key(true),
            FieldSchema::new("title", "Edm.String").searchable(true),
        ]);
        let index = to_backend_index(&schema).unwrap();

        let names: Vec<&str> = index.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "title"]);

        assert_eq!(index.fields[0].key, Some(true));
        assert_eq!(index.fields[0].searchable, Some(false));
        assert_eq!(index.fields[0].retrievable, Some(true));

        assert_eq!(index.fields[1].key, Some(false));
        assert_eq!(index.fields[1].searchable, Some(true));
        assert_eq!(index.fields[1].retrievable, Some(true));
        assert_eq!(index.fields[1].filterable, Some(false));
    }

    #[test]
    fn converts_nested_blocks() {
        let mut schema = products(vec![
            FieldSchema::new("id", "Edm.String").key(true),
            FieldSchema {
                fields: vec![FieldSchema::new("city", "Edm.String").filterable(true)],
                ..FieldSchema::new("address", "Edm.ComplexType")
            },
        ]);
        schema.suggesters.push(SuggesterSchema {
            name: "sg".to_string(),
            source_fields: vec!["title".to_string(), "tags".to_string()],
        });
        schema.cors_options = Some(CorsOptionsSchema {
            allowed_origins: vec!["*".to_string()],
            max_age_in_seconds: None,
        });
        schema.scoring_profiles.push(ScoringProfileSchema {
            name: "boost".to_string(),
            text_weights: Some(BTreeMap::from([("title".to_string(), 2.0)])),
            functions: Vec::new(),
            function_aggregation: None,
        });

        let wire = serde_json::to_value(to_backend_index(&schema).unwrap()).unwrap();
        assert_eq!(
            wire,
            json!({
                "name": "products",
                "fields": [
                    {
                        "name": "id", "type": "Edm.String", "key": true, "searchable": false,
                        "retrievable": true, "filterable": false, "sortable": false,
                        "facetable": false
                    },
                    {
                        "name": "address", "type": "Edm.ComplexType",
                        "fields": [{
                            "name": "city", "type": "Edm.String", "key": false,
                            "searchable": false, "retrievable": true, "filterable": true,
                            "sortable": false, "facetable": false
                        }]
                    }
                ],
                "suggesters": [{
                    "name": "sg",
                    "searchMode": "analyzingInfixMatching",
                    "sourceFields": ["title", "tags"]
                }],
                "corsOptions": { "allowedOrigins": ["*"], "maxAgeInSeconds": 300 },
                "scoringProfiles": [{ "name": "boost", "text": { "weights": { "title": 2.0 } } }]
            })
        );
    }

    #[test]
    fn complex_field_carries_no_flags_of_its_own() {
        let schema = products(vec![
            FieldSchema::new("id", "Edm.String").key(true),
            FieldSchema {
                fields: vec![
                    FieldSchema::new("city", "Edm.String").filterable(true),
                    FieldSchema::new("zip", "Edm.String"),
                ],
                ..FieldSchema::new("address", "Edm.ComplexType").filterable(true)
            },
        ]);
        let index = to_backend_index(&schema).unwrap();

        let address = &index.fields[1];
        assert_eq!(address.filterable, None);
        assert_eq!(address.retrievable, None);
        assert_eq!(address.key, None);

        let wire = serde_json::to_value(address).unwrap();
        for flag in ["key", "searchable", "retrievable", "filterable", "sortable", "facetable"] {
            assert!(wire.get(flag).is_none(), "complex field emitted {flag}");
            assert!(wire["fields"][1].get(flag).is_some(), "sub-field lost {flag}");
        }
        assert_eq!(wire["fields"][0]["filterable"], json!(true));
        assert_eq!(wire["fields"][1]["retrievable"], json!(true));
    }

    #[test]
    fn key_on_sub_field_does_not_count() {
        let schema = products(vec![FieldSchema {
            fields: vec![FieldSchema::new("id", "Edm.String").key(true)],
            ..FieldSchema::new("address", "Edm.ComplexType")
        }]);
        assert_eq!(to_backend_index(&schema), Err(ValidationError::NoKeyField));
    }

    #[test]
    fn field_mappings_are_one_to_one() {
        let mappings = to_field_mappings(&[
            FieldMappingModel {
                source_field_name: "src1".to_string(),
                target_field_name: Some("tgt1".to_string()),
                mapping_function: None,
            },
            FieldMappingModel {
                source_field_name: "src2".to_string(),
                target_field_name: Some("tgt2".to_string()),
                mapping_function: Some("extractTokenAtPosition(1)".to_string()),
            },
        ]);

        assert_eq!(mappings.len(), 2);
        assert_eq!(mappings[0].source_field_name, "src1");
        assert_eq!(mappings[0].mapping_function, None);
        assert_eq!(
            mappings[1].mapping_function,
            Some(FieldMappingFunction {
                name: "extractTokenAtPosition(1)".to_string()
            })
        );
    }
}
