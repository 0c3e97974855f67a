use aisearch_backend::BackendError;
use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData as McpError;
use serde::Serialize;
use std::fmt::Display;

pub(in crate::tools::dispatch) fn json_result<T: Serialize>(
    value: &T,
) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|err| McpError::internal_error(format!("serialize tool result: {err}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

pub(in crate::tools::dispatch) fn invalid_request(message: impl Display) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!("Invalid request: {message}"))])
}

pub(in crate::tools::dispatch) fn backend_failure(tool: &str, err: BackendError) -> CallToolResult {
    log::warn!("{tool}: {err}");
    CallToolResult::error(vec![Content::text(err.to_string())])
}

/// Success payload for `Ok`, error tool result for a backend failure.
pub(in crate::tools::dispatch) fn respond<T: Serialize>(
    tool: &str,
    outcome: aisearch_backend::Result<T>,
) -> Result<CallToolResult, McpError> {
    match outcome {
        Ok(value) => json_result(&value),
        Err(err) => Ok(backend_failure(tool, err)),
    }
}

/// Text of the first content item.
#[cfg(test)]
pub(crate) fn result_text(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .find_map(|content| content.as_text().map(|text| text.text.clone()))
        .unwrap_or_default()
}
