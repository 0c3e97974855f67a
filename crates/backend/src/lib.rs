//! # AI Search backend
//!
//! [`SearchBackend`] is the narrow capability surface the MCP tools call through: list, get,
//! create and delete for each [`EntityKind`], plus document counting, indexing and search.
//! [`RestSearchBackend`] implements it against the search service REST API.

mod capability;
mod error;
mod rest;

pub use capability::{EntityKind, SearchBackend, SearchResults};
pub use error::{BackendError, Result};
pub use rest::{RestBackendConfig, RestSearchBackend, DEFAULT_API_VERSION, DEFAULT_TIMEOUT};
