//! Validated forest of root nodes.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

use crate::error::{NodePath, TreeError, TreeResult};

use super::flatten::{VisibleItem, flatten};
use super::item::{NodeId, TreeItem};

/// Ordered list of root nodes with ids unique across every level.
///
/// A forest is built once per render by the caller and never mutated by
/// the widget.
#[derive(Debug, Clone)]
pub struct Forest<T> {
    roots: Vec<T>,
}

impl<T> Default for Forest<T> {
    fn default() -> Self {
        Self { roots: Vec::new() }
    }
}

impl<T: TreeItem> Forest<T> {
    /// Build a forest, rejecting duplicate ids anywhere in the hierarchy.
    pub fn new(roots: Vec<T>) -> TreeResult<Self> {
        validate_unique_ids(&roots)?;
        Ok(Self { roots })
    }

    /// A forest without any nodes.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn roots(&self) -> &[T] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes, visible or not.
    pub fn len(&self) -> usize {
        fn count<T: TreeItem>(nodes: &[T]) -> usize {
            nodes
                .iter()
                .map(|node| 1 + node.children().map_or(0, count))
                .sum()
        }
        count(&self.roots)
    }

    /// Find a node anywhere in the forest.
    pub fn find(&self, id: &NodeId) -> Option<&T> {
        fn search<'a, T: TreeItem>(nodes: &'a [T], id: &NodeId) -> Option<&'a T> {
            nodes.iter().find_map(|node| {
                if node.id() == id {
                    Some(node)
                } else {
                    node.children().and_then(|children| search(children, id))
                }
            })
        }
        search(&self.roots, id)
    }

    /// Visible items for the given expanded set.
    pub fn flatten(&self, expanded: &[NodeId]) -> Vec<VisibleItem<'_, T>> {
        flatten(&self.roots, expanded)
    }
}

impl<T> IntoIterator for Forest<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.into_iter()
    }
}

impl<'de, T> Deserialize<'de> for Forest<T>
where
    T: TreeItem + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let roots = Vec::<T>::deserialize(deserializer)?;
        Forest::new(roots).map_err(serde::de::Error::custom)
    }
}

/// Check that no id appears twice anywhere in the forest.
pub fn validate_unique_ids<T: TreeItem>(roots: &[T]) -> TreeResult<()> {
    let mut seen: HashMap<&NodeId, NodePath> = HashMap::new();
    let mut path = Vec::new();
    visit(roots, &mut path, &mut seen)
}

fn visit<'a, T: TreeItem>(
    nodes: &'a [T],
    path: &mut Vec<usize>,
    seen: &mut HashMap<&'a NodeId, NodePath>,
) -> TreeResult<()> {
    for (index, node) in nodes.iter().enumerate() {
        path.push(index);
        let here = NodePath(path.clone());
        if let Some(first) = seen.insert(node.id(), here.clone()) {
            log::debug!("[forest] duplicate id {} at {} and {}", node.id(), first, here);
            return Err(TreeError::DuplicateId {
                id: node.id().clone(),
                first,
                second: here,
            });
        }
        if let Some(children) = node.children() {
            visit(children, path, seen)?;
        }
        path.pop();
    }
    Ok(())
}
