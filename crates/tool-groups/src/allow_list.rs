use std::collections::HashSet;

/// Deduplicated operation names visible for one resolved selection.
///
/// Names keep the position of their first occurrence across the selected groups.
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    names: Vec<String>,
    members: HashSet<String>,
}

impl AllowList {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        for name in names {
            let name = name.as_ref();
            if list.members.insert(name.to_string()) {
                list.names.push(name.to_string());
            }
        }
        list
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Keep the items whose name is allowed.
    ///
    /// This is a membership predicate only: the input's relative order is preserved and the
    /// allow-list's own order plays no part.
    pub fn filter<T, F>(&self, items: impl IntoIterator<Item = T>, name_of: F) -> Vec<T>
    where
        F: Fn(&T) -> &str,
    {
        items
            .into_iter()
            .filter(|item| self.contains(name_of(item)))
            .collect()
    }
}

impl PartialEq for AllowList {
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names
    }
}

impl Eq for AllowList {}
