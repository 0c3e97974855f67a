use thiserror::Error;

pub type Result<T> = std::result::Result<T, ValidationError>;

/// Structural problems found while converting a declarative index definition.
///
/// Raised before anything is sent to the backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Index name must not be empty")]
    EmptyIndexName,

    #[error("Index must declare at least one field")]
    NoFields,

    #[error("Index must declare exactly one key field, found none")]
    NoKeyField,

    #[error("Index must declare exactly one key field, found {}: {}", .0.len(), .0.join(", "))]
    MultipleKeyFields(Vec<String>),
}
