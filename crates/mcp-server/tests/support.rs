#![allow(dead_code)]

use anyhow::{Context, Result};
use rmcp::service::{RoleClient, RunningService, ServiceExt};
use rmcp::transport::TokioChildProcess;
use std::path::PathBuf;
use std::time::Duration;
use tokio::process::Command;

/// Nothing listens here; backend calls fail fast with a connection error.
pub const UNREACHABLE_ENDPOINT: &str = "http://127.0.0.1:9";

pub fn locate_aisearch_mcp_bin() -> Result<PathBuf> {
    if let Some(path) = option_env!("CARGO_BIN_EXE_aisearch-mcp") {
        return Ok(PathBuf::from(path));
    }

    // Derive it from the test exe path:
    // `.../target/{debug|release}/deps/<test>` → `.../target/{debug|release}/aisearch-mcp`
    if let Ok(exe) = std::env::current_exe() {
        if let Some(target_profile_dir) = exe.parent().and_then(|p| p.parent()) {
            let candidate = target_profile_dir.join("aisearch-mcp");
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let repo_root = manifest_dir
        .ancestors()
        .nth(2)
        .context("failed to resolve repo root from CARGO_MANIFEST_DIR")?;
    for rel in ["target/debug/aisearch-mcp", "target/release/aisearch-mcp"] {
        let candidate = repo_root.join(rel);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    anyhow::bail!("failed to locate aisearch-mcp binary; build with: cargo build -p aisearch-mcp")
}

/// Server command with a clean environment; `tool_groups: None` leaves the variable unset.
pub fn server_command(tool_groups: Option<&str>) -> Result<Command> {
    let mut cmd = Command::new(locate_aisearch_mcp_bin()?);
    for key in [
        "AZURE_AI_SEARCH_MCP_TOOL_GROUPS",
        "AZURE_AI_SEARCH_API_KEY",
        "AZURE_AI_SEARCH_API_VERSION",
        "AZURE_AUTHENTICATION_METHOD",
        "AZURE_AI_SEARCH_TIMEOUT_SECS",
    ] {
        cmd.env_remove(key);
    }
    cmd.env("AZURE_AI_SEARCH_ENDPOINT", UNREACHABLE_ENDPOINT);
    cmd.env("AZURE_AI_SEARCH_TIMEOUT_SECS", "5");
    cmd.env("RUST_LOG", "warn");
    if let Some(groups) = tool_groups {
        cmd.env("AZURE_AI_SEARCH_MCP_TOOL_GROUPS", groups);
    }
    Ok(cmd)
}

pub async fn start_server(tool_groups: Option<&str>) -> Result<RunningService<RoleClient, ()>> {
    let transport =
        TokioChildProcess::new(server_command(tool_groups)?).context("spawn mcp server")?;
    tokio::time::timeout(Duration::from_secs(10), ().serve(transport))
        .await
        .context("timeout starting MCP server")?
        .context("initialize MCP session")
}

pub async fn visible_tool_names(service: &RunningService<RoleClient, ()>) -> Result<Vec<String>> {
    let tools = tokio::time::timeout(
        Duration::from_secs(10),
        service.list_tools(Default::default()),
    )
    .await
    .context("timeout listing tools")??;
    Ok(tools
        .tools
        .iter()
        .map(|tool| tool.name.to_string())
        .collect())
}
