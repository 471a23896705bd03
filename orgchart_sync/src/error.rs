// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported while syncing to, or rebuilding from, a render surface.

use alloc::string::String;

/// Render content that does not describe a single-root tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InconsistentRenderState {
    /// Every node has a parent, or there are no nodes at all.
    #[error("no node without an incoming edge")]
    NoRoot,
    /// More than one node has no parent.
    #[error("several nodes without an incoming edge: {first} and {second}")]
    MultipleRoots {
        /// First parentless node, in surface order.
        first: String,
        /// Second parentless node, in surface order.
        second: String,
    },
    /// An edge references a node that is not on the surface.
    #[error("edge {0} references a missing node")]
    DanglingEdge(String),
    /// A node is the target of more than one edge.
    #[error("node {0} has more than one parent")]
    MultipleParents(String),
    /// A node cannot be reached from the root, which means it sits on a cycle.
    #[error("node {0} is not reachable from the root")]
    Unreachable(String),
}

/// Failure of a sync or rebuild. The surface and the tree are unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    /// The render content cannot be turned back into a tree.
    #[error("inconsistent render state: {0}")]
    Inconsistent(#[from] InconsistentRenderState),
    /// The layout engine did not position this node.
    #[error("layout is missing node {0}")]
    Layout(String),
}
