// Per-tool dispatch functions used by the MCP tool router.

pub(super) mod documents;
pub(super) mod indexers;
pub(super) mod indexes;
pub(super) mod result;
mod tool_router;

pub(super) fn build_visible_tool_router(
    allow_list: std::sync::Arc<aisearch_tool_groups::AllowList>,
) -> super::visibility::VisibleToolRouter<super::AiSearchService> {
    tool_router::build_visible_tool_router(allow_list)
}
