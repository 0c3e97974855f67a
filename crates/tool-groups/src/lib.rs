//! # AI Search tool groups
//!
//! Decides which tools a deployment advertises during MCP discovery.
//!
//! ```text
//! "READ_INDEX,READ_DOCUMENTS"
//!     │
//!     ├──> GroupSelection::parse   (trim, skip empty entries)
//!     │
//!     ├──> GroupTable::resolve     (concat groups in order, dedup first-wins)
//!     │      └─> AllowList
//!     │
//!     └──> AllowList::filter       (membership only, registered order kept)
//!            └─> visible tools
//! ```
//!
//! This is visibility curation, not access control: a client that already knows a hidden
//! tool's name can still invoke it. Nothing here is consulted on the invocation path.
//!
//! ## Example
//!
//! ```
//! use aisearch_tool_groups::{GroupSelection, GroupTable};
//!
//! let table = GroupTable::builtin();
//! let allow = table.resolve(&GroupSelection::parse("READ_INDEX,READ_DOCUMENTS"))?;
//!
//! let registered = ["list_index_names", "create_index", "query_index", "delete_indexer"];
//! let visible = allow.filter(registered, |name| *name);
//! assert_eq!(visible, ["list_index_names", "query_index"]);
//! # Ok::<(), aisearch_tool_groups::ToolGroupError>(())
//! ```

mod allow_list;
pub mod catalog;
mod error;
mod selection;
mod table;

pub use allow_list::AllowList;
pub use catalog::{ALL_GROUP, ALL_OPERATIONS};
pub use error::{Result, ToolGroupError};
pub use selection::GroupSelection;
pub use table::GroupTable;

/// Selection used when the deployment does not configure one.
pub const DEFAULT_SELECTION: &str = ALL_GROUP;
