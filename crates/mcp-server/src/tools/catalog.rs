use aisearch_tool_groups::catalog::*;
use aisearch_tool_groups::AllowList;

#[derive(Clone, Copy, Debug)]
pub(crate) struct ToolDescriptor {
    pub(crate) name: &'static str,
    pub(crate) summary: &'static str,
}

pub(crate) const TOOL_CATALOG: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: LIST_INDEX_NAMES,
        summary: "Names of every index.",
    },
    ToolDescriptor {
        name: LIST_INDEX_SCHEMAS,
        summary: "Full definitions of every index.",
    },
    ToolDescriptor {
        name: GET_INDEX_SCHEMA,
        summary: "Definition of one index.",
    },
    ToolDescriptor {
        name: CREATE_INDEX,
        summary: "Create an index (validated: exactly one key field).",
    },
    ToolDescriptor {
        name: MODIFY_INDEX,
        summary: "Create or update an index definition.",
    },
    ToolDescriptor {
        name: DELETE_INDEX,
        summary: "Delete an index and its documents.",
    },
    ToolDescriptor {
        name: GET_DOCUMENT_COUNT,
        summary: "Number of documents in an index.",
    },
    ToolDescriptor {
        name: ADD_DOCUMENT,
        summary: "Upload one document (replaces by key).",
    },
    ToolDescriptor {
        name: DELETE_DOCUMENT,
        summary: "Delete one document by key.",
    },
    ToolDescriptor {
        name: QUERY_INDEX,
        summary: "Full-text search with filter/order/select/paging.",
    },
    ToolDescriptor {
        name: LIST_INDEXERS,
        summary: "Names of every indexer.",
    },
    ToolDescriptor {
        name: GET_INDEXER,
        summary: "Definition of one indexer.",
    },
    ToolDescriptor {
        name: CREATE_INDEXER,
        summary: "Create an indexer from a data source into an index.",
    },
    ToolDescriptor {
        name: DELETE_INDEXER,
        summary: "Delete an indexer.",
    },
    ToolDescriptor {
        name: LIST_DATA_SOURCES,
        summary: "Names of every data source.",
    },
    ToolDescriptor {
        name: GET_DATA_SOURCE,
        summary: "Definition of one data source.",
    },
    ToolDescriptor {
        name: LIST_SKILL_SETS,
        summary: "Names of every skill set.",
    },
    ToolDescriptor {
        name: GET_SKILL_SET,
        summary: "Definition of one skill set.",
    },
];

const QUERY_FLOW: [&str; 3] = [LIST_INDEX_NAMES, GET_INDEX_SCHEMA, QUERY_INDEX];

/// Server instructions sent at initialize; lists only the tools this deployment advertises.
pub(crate) fn tool_instructions(allow_list: &AllowList) -> String {
    let mut lines = vec![
        "Manage and query a search service: indexes, documents, indexers, data sources and skill sets."
            .to_string(),
    ];
    if QUERY_FLOW.iter().all(|name| allow_list.contains(name)) {
        lines.push(format!("Recommended flow: {}.", QUERY_FLOW.join(" → ")));
    }
    let visible = allow_list.filter(TOOL_CATALOG.iter(), |tool| tool.name);
    if visible.is_empty() {
        lines.push("No tools are enabled for this deployment.".to_string());
        return lines.join("\n");
    }
    lines.push("Tools:".to_string());
    for tool in visible {
        lines.push(format!("- {}: {}", tool.name, tool.summary));
    }
    lines.join("\n")
}
