//! # AI Search MCP server
//!
//! Exposes search service management and query operations as MCP tools over stdio.
//!
//! ## Tool groups
//!
//! `AZURE_AI_SEARCH_MCP_TOOL_GROUPS` selects which tools `tools/list` advertises, as a
//! comma-separated list of group names (`READ_INDEX`, `WRITE_DOCUMENTS`, `ALL`, ...). It is
//! resolved once at startup and an unknown group name stops the server.
//!
//! This is visibility curation, not access control: every tool stays callable by name.
//! Restrict the credentials given to the server to actually limit what it can do.
//!
//! ## Usage
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "aisearch": {
//!       "command": "aisearch-mcp",
//!       "env": {
//!         "AZURE_AI_SEARCH_ENDPOINT": "https://<service>.search.windows.net",
//!         "AZURE_AI_SEARCH_API_KEY": "<admin key>",
//!         "AZURE_AI_SEARCH_MCP_TOOL_GROUPS": "READ_INDEX,READ_DOCUMENTS"
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! `aisearch-mcp --print-tools` prints the advertised tools as JSON and exits without
//! contacting the service.

use aisearch_backend::RestSearchBackend;
use aisearch_tool_groups::{AllowList, GroupSelection, GroupTable};
use anyhow::{Context, Result};
use rmcp::transport::stdio;
use rmcp::ServiceExt;
use serde_json::json;
use std::sync::Arc;

pub mod config;
mod tools;

#[cfg(test)]
mod test_support;

pub use config::ServerConfig;
pub use tools::{visible_tools, AiSearchService};

const PRINT_TOOLS_FLAG: &str = "--print-tools";

pub async fn main_entry() -> Result<()> {
    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    if std::env::args().skip(1).any(|arg| arg == PRINT_TOOLS_FLAG) {
        return print_tools();
    }

    let config = ServerConfig::from_env().context("invalid server configuration")?;
    let allow_list = resolve_allow_list(&config.tool_groups)?;
    log::info!(
        "Starting AI Search MCP server: tool groups [{}], {} tools visible",
        config.tool_groups,
        allow_list.len()
    );

    let backend = RestSearchBackend::new(config.backend).context("invalid backend settings")?;
    let service = AiSearchService::new(Arc::new(backend), allow_list);
    let server = service.serve(stdio()).await?;

    server.waiting().await?;

    log::info!("AI Search MCP server stopped");
    Ok(())
}

fn resolve_allow_list(selection: &GroupSelection) -> Result<AllowList> {
    GroupTable::builtin()
        .resolve(selection)
        .with_context(|| format!("cannot resolve {}='{selection}'", config::TOOL_GROUPS_ENV))
}

fn print_tools() -> Result<()> {
    let selection = config::tool_groups_from_lookup(|key| std::env::var(key).ok());
    let allow_list = resolve_allow_list(&selection)?;
    let payload = json!({
        "version": env!("CARGO_PKG_VERSION"),
        "tool_groups": selection.names(),
        "tools": visible_tools(&allow_list),
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
