// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The owning store and its structural operations.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::error::{StructuralViolation, TreeError};
use crate::node::TreeNode;
use crate::position::{MoveParent, MovePosition};

/// A node located in the tree together with its parent and slot.
#[derive(Copy, Clone, Debug)]
pub struct Located<'a> {
    /// The node itself.
    pub node: &'a TreeNode,
    /// Its parent, `None` for the root.
    pub parent: Option<&'a TreeNode>,
    /// Index among the parent's children; `0` for the root.
    pub sibling_index: usize,
}

/// Owner of the canonical tree.
///
/// Every mutation goes through the store so the invariants hold after each call:
/// exactly one root, every id unique, children kept in order. Failed operations
/// leave the tree exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeStore {
    root: TreeNode,
}

impl TreeStore {
    /// Creates a store from a snapshot.
    ///
    /// The snapshot is cloned, so later edits never alias the caller's value.
    /// Fails with [`TreeError::DuplicateId`] if an id occurs twice.
    pub fn new(snapshot: &TreeNode) -> Result<Self, TreeError> {
        ensure_unique(snapshot)?;
        Ok(Self {
            root: snapshot.clone(),
        })
    }

    /// The root of the tree.
    #[must_use]
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// A detached copy of the whole tree.
    #[must_use]
    pub fn snapshot(&self) -> TreeNode {
        self.root.clone()
    }

    /// Consumes the store and returns the tree.
    #[must_use]
    pub fn into_tree(self) -> TreeNode {
        self.root
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Always `false`: the tree has a root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` if `id` is in the tree.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.root.contains(id)
    }

    /// Depth-first search for `id`.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&TreeNode> {
        self.root.find(id)
    }

    /// Finds `id` along with its parent and its index among the parent's children.
    #[must_use]
    pub fn find_with_parent(&self, id: &str) -> Option<Located<'_>> {
        fn walk<'a>(
            node: &'a TreeNode,
            parent: Option<&'a TreeNode>,
            index: usize,
            id: &str,
        ) -> Option<Located<'a>> {
            if node.id == id {
                return Some(Located {
                    node,
                    parent,
                    sibling_index: index,
                });
            }
            node.children
                .iter()
                .enumerate()
                .find_map(|(i, child)| walk(child, Some(node), i, id))
        }
        walk(&self.root, None, 0, id)
    }

    /// Returns `true` if `id` is `ancestor` or lies anywhere below it.
    #[must_use]
    pub fn is_in_subtree(&self, ancestor: &str, id: &str) -> bool {
        self.find_by_id(ancestor)
            .is_some_and(|node| node.contains(id))
    }

    /// Ids of the children of `parent`, left to right.
    ///
    /// For [`MoveParent::VirtualRoot`] this is the root alone. Unknown parents yield
    /// an empty list.
    #[must_use]
    pub fn child_ids(&self, parent: &MoveParent) -> Vec<&str> {
        match parent {
            MoveParent::VirtualRoot => alloc::vec![self.root.id.as_str()],
            MoveParent::Node(id) => self
                .find_by_id(id)
                .map(|node| node.children.iter().map(|c| c.id.as_str()).collect())
                .unwrap_or_default(),
        }
    }

    /// Id of the child of `parent` currently at `index`, if any.
    #[must_use]
    pub fn child_at(&self, parent: &MoveParent, index: usize) -> Option<&str> {
        match parent {
            MoveParent::VirtualRoot => (index == 0).then_some(self.root.id.as_str()),
            MoveParent::Node(id) => self
                .find_by_id(id)?
                .children
                .get(index)
                .map(|c| c.id.as_str()),
        }
    }

    /// Detaches and returns the subtree rooted at `id`.
    pub fn remove(&mut self, id: &str) -> Result<TreeNode, TreeError> {
        if self.root.id == id {
            return Err(StructuralViolation::RootRemoval.into());
        }
        let mut path = self
            .root
            .path_to(id)
            .ok_or_else(|| TreeError::NotFound(String::from(id)))?;
        let slot = path.pop().ok_or(StructuralViolation::RootRemoval)?;
        let parent = self
            .root
            .at_path_mut(&path)
            .ok_or_else(|| TreeError::NotFound(String::from(id)))?;
        Ok(parent.children.remove(slot))
    }

    /// Inserts `subtree` at `position`.
    ///
    /// Fails without touching the tree when the parent is the synthetic root, when
    /// the parent does not exist, or when the subtree reuses an existing id.
    pub fn add(&mut self, subtree: TreeNode, position: &MovePosition) -> Result<(), TreeError> {
        let parent_id = real_parent(position)?;
        if let Some(dup) = subtree.iter().find(|n| self.root.contains(&n.id)) {
            return Err(TreeError::DuplicateId(dup.id.clone()));
        }
        ensure_unique(&subtree)?;
        let parent = self
            .root
            .find_mut(parent_id)
            .ok_or_else(|| TreeError::NotFound(String::from(parent_id)))?;
        let index = position.insert_index.resolve(parent.children.len());
        parent.children.insert(index, subtree);
        Ok(())
    }

    /// Moves the subtree rooted at `id` to `position`.
    ///
    /// The move is all-or-nothing: every precondition is checked before the
    /// subtree is detached, so a failure leaves the tree unchanged.
    ///
    /// `position.insert_index` refers to the parent's children as they are before
    /// the move. Moving a node directly before or directly after its own slot
    /// therefore leaves the tree structurally unchanged.
    pub fn move_node(&mut self, id: &str, position: &MovePosition) -> Result<(), TreeError> {
        if self.root.id == id {
            return Err(StructuralViolation::RootRemoval.into());
        }
        let parent_id = real_parent(position)?;
        let source = self
            .find_with_parent(id)
            .ok_or_else(|| TreeError::NotFound(String::from(id)))?;
        if source.node.contains(parent_id) {
            return Err(StructuralViolation::IntoOwnSubtree.into());
        }
        let new_parent = self
            .find_by_id(parent_id)
            .ok_or_else(|| TreeError::NotFound(String::from(parent_id)))?;

        let old_index = source.sibling_index;
        let old_parent = source
            .parent
            .map(|p| String::from(p.id.as_str()))
            .ok_or(StructuralViolation::RootRemoval)?;
        let mut index = position.insert_index.resolve(new_parent.children.len());
        if old_parent == parent_id && index > old_index {
            index -= 1;
        }

        let subtree = self.remove(id)?;
        match self.root.find_mut(parent_id) {
            Some(parent) => {
                let index = index.min(parent.children.len());
                parent.children.insert(index, subtree);
                Ok(())
            }
            None => {
                // Unreachable after the checks above; put the subtree back.
                if let Some(parent) = self.root.find_mut(&old_parent) {
                    let index = old_index.min(parent.children.len());
                    parent.children.insert(index, subtree);
                }
                Err(TreeError::NotFound(String::from(parent_id)))
            }
        }
    }

    /// Replaces the whole tree with a clone of `tree`.
    ///
    /// Fails with [`TreeError::DuplicateId`], keeping the current tree, if an id
    /// occurs twice.
    pub fn replace_all(&mut self, tree: &TreeNode) -> Result<(), TreeError> {
        ensure_unique(tree)?;
        self.root = tree.clone();
        Ok(())
    }

    /// Changes the label of `id`, returning the previous label.
    pub fn rename(&mut self, id: &str, name: &str) -> Result<String, TreeError> {
        if name.is_empty() {
            return Err(TreeError::EmptyName);
        }
        let node = self
            .root
            .find_mut(id)
            .ok_or_else(|| TreeError::NotFound(String::from(id)))?;
        Ok(core::mem::replace(&mut node.name, String::from(name)))
    }

    /// Sets the label of the edge from the parent of `id` to `id`, returning
    /// the previous label.
    ///
    /// Empty text and the root, which has no incoming edge, are rejected.
    pub fn set_edge_label(&mut self, id: &str, label: &str) -> Result<Option<String>, TreeError> {
        if label.is_empty() {
            return Err(TreeError::EmptyEdgeLabel);
        }
        if self.root.id == id {
            return Err(StructuralViolation::RootEdge.into());
        }
        let node = self
            .root
            .find_mut(id)
            .ok_or_else(|| TreeError::NotFound(String::from(id)))?;
        Ok(node.edge_label.replace(String::from(label)))
    }
}

fn real_parent(position: &MovePosition) -> Result<&str, TreeError> {
    match &position.parent {
        MoveParent::Node(id) => Ok(id),
        MoveParent::VirtualRoot => Err(StructuralViolation::SiblingOfRoot.into()),
    }
}

fn ensure_unique(tree: &TreeNode) -> Result<(), TreeError> {
    let mut seen = HashSet::new();
    for node in tree {
        if !seen.insert(node.id.as_str()) {
            return Err(TreeError::DuplicateId(node.id.clone()));
        }
    }
    Ok(())
}
