//! MCP tool dispatch for the search service.
//!
//! Every operation is registered with the router; the allow-list resolved at startup only
//! decides which of them `tools/list` advertises.

use aisearch_backend::SearchBackend;
use aisearch_tool_groups::AllowList;
use rmcp::model::Tool;
use std::sync::Arc;

mod router;
mod service;
mod visibility;

use visibility::VisibleToolRouter;

/// Search service MCP server.
#[derive(Clone)]
pub struct AiSearchService {
    backend: Arc<dyn SearchBackend>,
    allow_list: Arc<AllowList>,
    tool_router: VisibleToolRouter<Self>,
}

impl AiSearchService {
    pub fn new(backend: Arc<dyn SearchBackend>, allow_list: AllowList) -> Self {
        let allow_list = Arc::new(allow_list);
        Self {
            backend,
            tool_router: router::build_visible_tool_router(allow_list.clone()),
            allow_list,
        }
    }

    /// Tools advertised by `tools/list`, in catalog order.
    pub fn visible_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }
}

/// Tools a server with `allow_list` would advertise; no backend involved.
pub fn visible_tools(allow_list: &AllowList) -> Vec<Tool> {
    router::build_visible_tool_router(Arc::new(allow_list.clone())).list_all()
}

#[cfg(test)]
mod tests {
    mod discovery;
    mod handlers;
}
