use thiserror::Error;

pub type Result<T> = std::result::Result<T, ToolGroupError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolGroupError {
    #[error("Unknown tool group '{name}' (known groups: {})", .known.join(", "))]
    UnknownGroup { name: String, known: Vec<String> },

    #[error("Tool group table has no 'ALL' group")]
    MissingAllGroup,

    #[error("Tool group '{group}' lists '{operation}', which is not part of 'ALL'")]
    OperationOutsideAll { group: String, operation: String },
}
