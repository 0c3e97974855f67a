//! # AI Search protocol types
//!
//! Two layers of index description live here:
//!
//! - [`schema`]: what MCP callers author (flags optional, defaults implied)
//! - [`wire`]: what the search service accepts (camelCase JSON, every flag explicit)
//!
//! [`to_backend_index`] and [`to_field_mappings`] translate between them and reject
//! structurally invalid definitions before any request is made.

pub mod convert;
mod error;
pub mod schema;
pub mod wire;

pub use convert::{to_backend_index, to_field_mappings};
pub use error::{Result, ValidationError};
pub use schema::{
    CorsOptionsSchema, FieldMappingModel, FieldSchema, IndexSchema, ScoringProfileSchema,
    SuggesterSchema, DEFAULT_CORS_MAX_AGE_SECONDS,
};
pub use wire::{
    FieldMapping, IndexActionKind, IndexBatch, SearchField, SearchIndex, SearchIndexer,
    SearchQuery,
};
