// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insertion points for structural edits.

use alloc::string::String;
use core::fmt;

/// Whether the inserted node becomes a sibling of the drop target or one of its children.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TargetLevel {
    /// Insert next to the target, under the target's parent.
    Sibling,
    /// Insert under the target.
    Child,
}

/// The node that receives the inserted subtree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MoveParent {
    /// A real node of the tree.
    Node(String),
    /// The synthetic parent of the root.
    ///
    /// The root has no real parent, so "before the root" and "after the root"
    /// are expressed against this placeholder. The store rejects it: a tree has
    /// exactly one root.
    VirtualRoot,
}

impl MoveParent {
    /// Shorthand for [`MoveParent::Node`].
    pub fn node(id: impl Into<String>) -> Self {
        Self::Node(id.into())
    }

    /// The id of the real parent, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Node(id) => Some(id),
            Self::VirtualRoot => None,
        }
    }
}

impl fmt::Display for MoveParent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(id) => f.write_str(id),
            Self::VirtualRoot => f.write_str("<root>"),
        }
    }
}

/// Slot among the parent's children.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InsertIndex {
    /// Splice before the child currently at this index. Indices past the end append.
    At(usize),
    /// Append after the last child, whatever the count is when the edit applies.
    Append,
}

impl InsertIndex {
    /// Resolves the slot against a sibling list of `len` children.
    #[must_use]
    pub fn resolve(self, len: usize) -> usize {
        match self {
            Self::At(i) => i.min(len),
            Self::Append => len,
        }
    }
}

/// A pending or committed structural edit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MovePosition {
    /// Sibling or child placement, relative to the drop target.
    pub target_level: TargetLevel,
    /// The node whose child list receives the subtree.
    pub parent: MoveParent,
    /// Slot in that child list.
    pub insert_index: InsertIndex,
}

impl MovePosition {
    /// A sibling placement under `parent` at `index`.
    pub fn sibling(parent: MoveParent, index: usize) -> Self {
        Self {
            target_level: TargetLevel::Sibling,
            parent,
            insert_index: InsertIndex::At(index),
        }
    }

    /// A child placement under the node `parent` at `index`.
    pub fn child(parent: impl Into<String>, index: InsertIndex) -> Self {
        Self {
            target_level: TargetLevel::Child,
            parent: MoveParent::Node(parent.into()),
            insert_index: index,
        }
    }

    /// A child placement that appends under `parent`.
    pub fn append_to(parent: impl Into<String>) -> Self {
        Self::child(parent, InsertIndex::Append)
    }
}

impl fmt::Display for MovePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.target_level {
            TargetLevel::Sibling => "sibling",
            TargetLevel::Child => "child",
        };
        match self.insert_index {
            InsertIndex::At(i) => write!(f, "{level} of {} at {i}", self.parent),
            InsertIndex::Append => write!(f, "{level} of {} at end", self.parent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn resolve_clamps_and_appends() {
        assert_eq!(InsertIndex::At(0).resolve(3), 0);
        assert_eq!(InsertIndex::At(7).resolve(3), 3);
        assert_eq!(InsertIndex::Append.resolve(3), 3);
        assert_eq!(InsertIndex::Append.resolve(0), 0);
    }

    #[test]
    fn display_is_readable_in_logs() {
        let pos = MovePosition::sibling(MoveParent::node("a"), 1);
        assert_eq!(pos.to_string(), "sibling of a at 1");
        let root = MovePosition::sibling(MoveParent::VirtualRoot, 0);
        assert_eq!(root.to_string(), "sibling of <root> at 0");
        assert_eq!(MovePosition::append_to("b").to_string(), "child of b at end");
    }
}
