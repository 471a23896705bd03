// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tree value: nodes with an ordered list of children.

use alloc::string::String;
use alloc::vec::Vec;

/// A node of the chart together with its subtree.
///
/// Children are ordered left to right. Two trees compare equal when their ids,
/// names, edge labels and child order match; there is no notion of identity
/// beyond that.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeNode {
    /// Identifier, unique across the whole tree.
    pub id: String,
    /// Display label.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Children in left-to-right order.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub children: Vec<Self>,
    /// Label of the edge from this node's parent, if any.
    #[cfg_attr(
        feature = "serde",
        serde(default, rename = "edgeLabel", skip_serializing_if = "Option::is_none")
    )]
    pub edge_label: Option<String>,
}

impl TreeNode {
    /// Creates a leaf.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            children: Vec::new(),
            edge_label: None,
        }
    }

    /// Appends `child` and returns `self`, for building fixtures inline.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Appends every child in `children` and returns `self`.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    /// Sets the label of the incoming edge.
    #[must_use]
    pub fn with_edge_label(mut self, label: impl Into<String>) -> Self {
        self.edge_label = Some(label.into());
        self
    }

    /// Depth-first search for `id` within this subtree (including `self`).
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Self> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Mutable variant of [`TreeNode::find`].
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Self> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }

    /// Returns `true` if `id` names this node or one of its descendants.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(Self::len).sum::<usize>()
    }

    /// Always `false`: a subtree holds at least its own root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over the subtree in pre-order (parent before children, left to right).
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: alloc::vec![self] }
    }

    /// Child-index path from this node to `id`, or `None` if `id` is absent.
    ///
    /// The path of `self` is empty.
    pub(crate) fn path_to(&self, id: &str) -> Option<Vec<usize>> {
        if self.id == id {
            return Some(Vec::new());
        }
        for (i, child) in self.children.iter().enumerate() {
            if let Some(mut path) = child.path_to(id) {
                path.insert(0, i);
                return Some(path);
            }
        }
        None
    }

    /// Node reached by following `path`, mutable.
    pub(crate) fn at_path_mut(&mut self, path: &[usize]) -> Option<&mut Self> {
        let mut node = self;
        for &i in path {
            node = node.children.get_mut(i)?;
        }
        Some(node)
    }
}

/// Pre-order iterator over a subtree. See [`TreeNode::iter`].
#[derive(Clone, Debug)]
pub struct PreOrder<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl<'a> IntoIterator for &'a TreeNode {
    type Item = &'a TreeNode;
    type IntoIter = PreOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
