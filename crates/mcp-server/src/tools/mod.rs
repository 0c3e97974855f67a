//! MCP tool surface for the search service.
//!
//! Schemas, dispatch and per-tool handlers live in separate submodules; the catalog keeps the
//! human-facing summaries used in server instructions.

pub(crate) mod catalog;
mod dispatch;
mod schemas;

pub use dispatch::{visible_tools, AiSearchService};
