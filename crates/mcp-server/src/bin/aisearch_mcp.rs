use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    aisearch_mcp::main_entry().await
}
