use aisearch_tool_groups::{AllowList, ALL_OPERATIONS};
use rmcp::handler::server::tool::{ToolCallContext, ToolRouter};
use rmcp::model::{CallToolResult, Tool};
use rmcp::ErrorData;
use std::sync::Arc;

/// Tool router that narrows discovery to an [`AllowList`].
///
/// Only `list_all` is filtered. `call` delegates unconditionally, so a client that knows the
/// name of a hidden tool can still invoke it: this curates what is advertised, it does not
/// authorize calls.
#[derive(Clone)]
pub(crate) struct VisibleToolRouter<S> {
    inner: ToolRouter<S>,
    allow_list: Arc<AllowList>,
}

impl<S> VisibleToolRouter<S>
where
    S: Send + Sync + 'static,
{
    pub(crate) fn new(inner: ToolRouter<S>, allow_list: Arc<AllowList>) -> Self {
        Self { inner, allow_list }
    }

    /// Registered tools in catalog order; names outside the catalog sort last, by name.
    pub(crate) fn list_registered(&self) -> Vec<Tool> {
        let mut tools = self.inner.list_all();
        tools.sort_by(|a, b| catalog_key(a).cmp(&catalog_key(b)));
        tools
    }

    /// Registered tools whose name is allowed, registered order preserved.
    pub(crate) fn list_all(&self) -> Vec<Tool> {
        let registered = self.list_registered();
        let registered_count = registered.len();
        let visible = self
            .allow_list
            .filter(registered, |tool| tool.name.as_ref());
        log::debug!(
            "tools/list: {} of {registered_count} registered tools visible",
            visible.len()
        );
        visible
    }

    pub(crate) async fn call(
        &self,
        context: ToolCallContext<'_, S>,
    ) -> Result<CallToolResult, ErrorData> {
        self.inner.call(context).await
    }
}

fn catalog_key(tool: &Tool) -> (usize, &str) {
    let name = tool.name.as_ref();
    let position = ALL_OPERATIONS
        .iter()
        .position(|operation| *operation == name)
        .unwrap_or(usize::MAX);
    (position, name)
}
