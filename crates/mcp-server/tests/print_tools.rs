use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::HashSet;

mod support;

#[tokio::test]
async fn print_tools_matches_list_tools() -> Result<()> {
    let groups = "READ_INDEXERS,WRITE_INDEX";
    let output = support::server_command(Some(groups))?
        .arg("--print-tools")
        .output()
        .await
        .context("run aisearch-mcp --print-tools")?;
    assert!(
        output.status.success(),
        "print-tools failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).context("decode print-tools stdout")?;
    let payload: Value = serde_json::from_str(&stdout).context("parse print-tools JSON")?;
    assert_eq!(
        payload
            .get("version")
            .and_then(Value::as_str)
            .unwrap_or_default(),
        env!("CARGO_PKG_VERSION"),
        "print-tools version mismatch"
    );

    let printed: Vec<String> = payload
        .get("tools")
        .and_then(Value::as_array)
        .context("print-tools missing tools array")?
        .iter()
        .filter_map(|tool| tool.get("name").and_then(Value::as_str))
        .map(|name| name.to_string())
        .collect();
    assert_eq!(printed.len(), 12);

    let service = support::start_server(Some(groups)).await?;
    let listed = support::visible_tool_names(&service).await?;
    service.cancel().await.context("shutdown mcp service")?;

    assert_eq!(printed, listed, "print-tools mismatch with list_tools");
    assert_eq!(
        printed.iter().collect::<HashSet<_>>().len(),
        printed.len(),
        "duplicate tool names"
    );
    Ok(())
}

#[tokio::test]
async fn print_tools_rejects_unknown_group() -> Result<()> {
    let output = support::server_command(Some("read_index"))?
        .arg("--print-tools")
        .output()
        .await
        .context("run aisearch-mcp --print-tools")?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown tool group 'read_index'"));
    Ok(())
}
