use std::collections::{BTreeMap, HashSet};

use crate::allow_list::AllowList;
use crate::catalog::{builtin_groups, ALL_GROUP};
use crate::error::{Result, ToolGroupError};
use crate::selection::GroupSelection;

/// Immutable mapping from group name to its ordered operation names.
///
/// Groups may overlap freely. Every operation listed anywhere must also be listed in `ALL`.
#[derive(Debug, Clone)]
pub struct GroupTable {
    groups: BTreeMap<String, Vec<String>>,
}

impl GroupTable {
    /// Build and validate a table.
    pub fn new<I, G, O, S>(groups: I) -> Result<Self>
    where
        I: IntoIterator<Item = (G, O)>,
        G: Into<String>,
        O: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let table = Self::from_groups(groups);
        table.validate()?;
        Ok(table)
    }

    /// The server's built-in groups (see [`crate::catalog`]).
    pub fn builtin() -> Self {
        Self::from_groups(builtin_groups())
    }

    fn from_groups<I, G, O, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = (G, O)>,
        G: Into<String>,
        O: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let groups = groups
            .into_iter()
            .map(|(name, ops)| (name.into(), ops.into_iter().map(Into::into).collect()))
            .collect();
        Self { groups }
    }

    pub fn validate(&self) -> Result<()> {
        let all: HashSet<&str> = self
            .groups
            .get(ALL_GROUP)
            .ok_or(ToolGroupError::MissingAllGroup)?
            .iter()
            .map(String::as_str)
            .collect();

        for (group, operations) in &self.groups {
            if let Some(operation) = operations.iter().find(|op| !all.contains(op.as_str())) {
                return Err(ToolGroupError::OperationOutsideAll {
                    group: group.clone(),
                    operation: operation.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn group(&self, name: &str) -> Option<&[String]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    /// Group names in sorted order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Resolve a selection into an [`AllowList`].
    ///
    /// Groups are concatenated in selection order and deduplicated keeping first occurrence.
    /// An unknown group name is an error; an empty selection resolves to an empty list.
    pub fn resolve(&self, selection: &GroupSelection) -> Result<AllowList> {
        let mut operations: Vec<&str> = Vec::new();
        for name in selection.names() {
            let group = self
                .group(name)
                .ok_or_else(|| ToolGroupError::UnknownGroup {
                    name: name.clone(),
                    known: self.group_names().map(ToString::to_string).collect(),
                })?;
            operations.extend(group.iter().map(String::as_str));
        }

        let allow_list = AllowList::from_names(operations);
        log::debug!(
            "Resolved tool groups [{selection}] to {} operations",
            allow_list.len()
        );
        Ok(allow_list)
    }
}

impl Default for GroupTable {
    fn default() -> Self {
        Self::builtin()
    }
}
