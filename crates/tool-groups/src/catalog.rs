//! Operation names and the built-in role groups.

pub const LIST_INDEX_NAMES: &str = "list_index_names";
pub const LIST_INDEX_SCHEMAS: &str = "list_index_schemas";
pub const GET_INDEX_SCHEMA: &str = "get_index_schema";
pub const CREATE_INDEX: &str = "create_index";
pub const MODIFY_INDEX: &str = "modify_index";
pub const DELETE_INDEX: &str = "delete_index";
pub const GET_DOCUMENT_COUNT: &str = "get_document_count";
pub const ADD_DOCUMENT: &str = "add_document";
pub const DELETE_DOCUMENT: &str = "delete_document";
pub const QUERY_INDEX: &str = "query_index";
pub const LIST_INDEXERS: &str = "list_indexers";
pub const GET_INDEXER: &str = "get_indexer";
pub const CREATE_INDEXER: &str = "create_indexer";
pub const DELETE_INDEXER: &str = "delete_indexer";
pub const LIST_DATA_SOURCES: &str = "list_data_sources";
pub const GET_DATA_SOURCE: &str = "get_data_source";
pub const LIST_SKILL_SETS: &str = "list_skill_sets";
pub const GET_SKILL_SET: &str = "get_skill_set";

/// Every operation the server exposes, in catalog order.
pub const ALL_OPERATIONS: &[&str] = &[
    LIST_INDEX_NAMES,
    LIST_INDEX_SCHEMAS,
    GET_INDEX_SCHEMA,
    CREATE_INDEX,
    MODIFY_INDEX,
    DELETE_INDEX,
    GET_DOCUMENT_COUNT,
    ADD_DOCUMENT,
    DELETE_DOCUMENT,
    QUERY_INDEX,
    LIST_INDEXERS,
    GET_INDEXER,
    CREATE_INDEXER,
    DELETE_INDEXER,
    LIST_DATA_SOURCES,
    GET_DATA_SOURCE,
    LIST_SKILL_SETS,
    GET_SKILL_SET,
];

pub const ALL_GROUP: &str = "ALL";
pub const WRITE_OPERATIONS: &str = "WRITE_OPERATIONS";
pub const READ_OPERATIONS: &str = "READ_OPERATIONS";
pub const READ_INDEX: &str = "READ_INDEX";
pub const WRITE_INDEX: &str = "WRITE_INDEX";
pub const READ_DOCUMENTS: &str = "READ_DOCUMENTS";
pub const WRITE_DOCUMENTS: &str = "WRITE_DOCUMENTS";
pub const READ_INDEXERS: &str = "READ_INDEXERS";
pub const WRITE_INDEXERS: &str = "WRITE_INDEXERS";

const READ_INDEX_OPERATIONS: &[&str] = &[LIST_INDEX_NAMES, LIST_INDEX_SCHEMAS, GET_INDEX_SCHEMA];

const WRITE_INDEX_OPERATIONS: &[&str] = &[
    LIST_INDEX_NAMES,
    LIST_INDEX_SCHEMAS,
    GET_INDEX_SCHEMA,
    CREATE_INDEX,
    MODIFY_INDEX,
    DELETE_INDEX,
];

const READ_DOCUMENT_OPERATIONS: &[&str] = &[QUERY_INDEX, GET_DOCUMENT_COUNT];

const WRITE_DOCUMENT_OPERATIONS: &[&str] = &[ADD_DOCUMENT, DELETE_DOCUMENT, QUERY_INDEX];

const READ_INDEXER_OPERATIONS: &[&str] = &[
    LIST_INDEXERS,
    GET_INDEXER,
    LIST_DATA_SOURCES,
    GET_DATA_SOURCE,
    LIST_SKILL_SETS,
    GET_SKILL_SET,
];

const WRITE_INDEXER_OPERATIONS: &[&str] = &[
    LIST_INDEXERS,
    GET_INDEXER,
    CREATE_INDEXER,
    DELETE_INDEXER,
    LIST_DATA_SOURCES,
    GET_DATA_SOURCE,
    LIST_SKILL_SETS,
    GET_SKILL_SET,
];

// Indexers first, then indexes, then documents.
const READ_OPERATION_GROUPS: &[&[&str]] = &[
    READ_INDEXER_OPERATIONS,
    READ_INDEX_OPERATIONS,
    READ_DOCUMENT_OPERATIONS,
];

pub(crate) fn builtin_groups() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        (ALL_GROUP, ALL_OPERATIONS.to_vec()),
        (WRITE_OPERATIONS, ALL_OPERATIONS.to_vec()),
        (READ_OPERATIONS, READ_OPERATION_GROUPS.concat()),
        (READ_INDEX, READ_INDEX_OPERATIONS.to_vec()),
        (WRITE_INDEX, WRITE_INDEX_OPERATIONS.to_vec()),
        (READ_DOCUMENTS, READ_DOCUMENT_OPERATIONS.to_vec()),
        (WRITE_DOCUMENTS, WRITE_DOCUMENT_OPERATIONS.to_vec()),
        (READ_INDEXERS, READ_INDEXER_OPERATIONS.to_vec()),
        (WRITE_INDEXERS, WRITE_INDEXER_OPERATIONS.to_vec()),
    ]
}
