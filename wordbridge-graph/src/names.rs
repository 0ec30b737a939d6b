use crate::error::{GraphError, Result};
use crate::graph::NodeId;
use std::collections::HashMap;

/// A two-way mapping between node indexes and word names.
///
/// Each index carries at most one name and each name belongs to at most
/// one index.
#[derive(Debug, Default, Clone)]
pub struct NameTable {
    /// Name bound to each index, if any.
    by_index: Vec<Option<String>>,

    /// Reverse map of name to index.
    by_name: HashMap<String, NodeId>,
}

impl NameTable {
    /// Creates a table for `len` indexes with no names bound.
    pub fn with_len(len: usize) -> Self {
        Self {
            by_index: vec![None; len],
            by_name: HashMap::with_capacity(len),
        }
    }

    /// Binds `name` to `index`.
    ///
    /// A previous name on `index` is released. Binding a name that
    /// already belongs to another index fails and leaves the table
    /// unchanged.
    pub fn bind(&mut self, index: NodeId, name: String) -> Result<()> {
        if let Some(&owner) = self.by_name.get(&name) {
            if owner == index {
                return Ok(());
            }
            return Err(GraphError::NameTaken {
                name,
                index: owner.index(),
            });
        }

        let len = self.by_index.len();
        let slot = self
            .by_index
            .get_mut(index.index())
            .ok_or(GraphError::IndexOutOfRange {
                index: index.index(),
                len,
            })?;
        if let Some(old) = slot.replace(name.clone()) {
            self.by_name.remove(&old);
        }
        self.by_name.insert(name, index);
        Ok(())
    }

    /// Resolves a name to its index.
    pub fn resolve(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// Returns the name bound to `index`.
    pub fn name(&self, index: NodeId) -> Option<&str> {
        self.by_index.get(index.index())?.as_deref()
    }

    /// Number of bound names.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_resolve() {
        let mut table = NameTable::with_len(3);
        let id = NodeId::new(1);

        table.bind(id, "main".to_string()).unwrap();

        assert_eq!(table.resolve("main"), Some(id));
        assert_eq!(table.resolve("other"), None);
        assert_eq!(table.name(id), Some("main"));
        assert_eq!(table.name(NodeId::new(0)), None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_rename_releases_old_name() {
        let mut table = NameTable::with_len(2);
        let id = NodeId::new(0);

        table.bind(id, "old".to_string()).unwrap();
        table.bind(id, "new".to_string()).unwrap();

        assert_eq!(table.resolve("old"), None);
        assert_eq!(table.resolve("new"), Some(id));
        assert_eq!(table.name(id), Some("new"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_name_taken_by_other_index() {
        let mut table = NameTable::with_len(2);
        table.bind(NodeId::new(0), "word".to_string()).unwrap();

        let err = table.bind(NodeId::new(1), "word".to_string()).unwrap_err();
        assert_eq!(
            err,
            GraphError::NameTaken {
                name: "word".to_string(),
                index: 0
            }
        );
        assert_eq!(table.name(NodeId::new(1)), None);
        assert_eq!(table.resolve("word"), Some(NodeId::new(0)));
    }

    #[test]
    fn test_rebind_same_pair_is_noop() {
        let mut table = NameTable::with_len(1);
        table.bind(NodeId::new(0), "same".to_string()).unwrap();
        table.bind(NodeId::new(0), "same".to_string()).unwrap();
        assert_eq!(table.len(), 1);
    }
}
