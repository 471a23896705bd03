// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by [`TreeStore`](crate::TreeStore) operations.

use alloc::string::String;

/// An edit that would break the single-root shape of the tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum StructuralViolation {
    /// The root cannot be removed or moved.
    #[error("the root node cannot be removed or moved")]
    RootRemoval,
    /// Nothing can be inserted next to the root.
    #[error("the root node cannot have siblings")]
    SiblingOfRoot,
    /// A node cannot become its own descendant.
    #[error("a node cannot be moved into its own subtree")]
    IntoOwnSubtree,
    /// The root has no incoming edge to label.
    #[error("the root node has no incoming edge")]
    RootEdge,
}

/// Failure of a tree store operation. The tree is unchanged whenever one is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The referenced id is not in the tree.
    #[error("node not found: {0}")]
    NotFound(String),
    /// The edit would break the single-root invariant.
    #[error("structural violation: {0}")]
    Structural(#[from] StructuralViolation),
    /// An inserted subtree reuses an id that is already in the tree.
    #[error("duplicate node id: {0}")]
    DuplicateId(String),
    /// Node labels cannot be empty.
    #[error("node names cannot be empty")]
    EmptyName,
    /// Edge labels cannot be set to empty text.
    #[error("edge labels cannot be empty")]
    EmptyEdgeLabel,
}
