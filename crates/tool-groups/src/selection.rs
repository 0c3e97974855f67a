use std::fmt;

/// Ordered list of group names requested by the deployment.
///
/// Order and repeats are kept; they decide the position of each operation in the
/// resolved [`crate::AllowList`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupSelection {
    names: Vec<String>,
}

impl GroupSelection {
    /// Parse a comma-separated value such as `"READ_INDEX, READ_DOCUMENTS"`.
    ///
    /// Entries are trimmed; empty entries (`"A,,B"`, trailing commas, a blank value) are
    /// skipped rather than looked up. Names stay case-sensitive.
    pub fn parse(raw: &str) -> Self {
        Self::from_names(raw.split(','))
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl fmt::Display for GroupSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_entries_and_skips_empty_ones() {
        let selection = GroupSelection::parse(" READ_INDEX ,, READ_DOCUMENTS,");
        assert_eq!(selection.names(), ["READ_INDEX", "READ_DOCUMENTS"]);
    }

    #[test]
    fn blank_value_is_an_empty_selection() {
        assert!(GroupSelection::parse("").is_empty());
        assert!(GroupSelection::parse(" , ").is_empty());
    }

    #[test]
    fn keeps_order_repeats_and_case() {
        let selection = GroupSelection::parse("WRITE_INDEX,read_index,WRITE_INDEX");
        assert_eq!(
            selection.names(),
            ["WRITE_INDEX", "read_index", "WRITE_INDEX"]
        );
        assert_eq!(selection.to_string(), "WRITE_INDEX,read_index,WRITE_INDEX");
    }
}
