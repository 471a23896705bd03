// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=orgchart_sync --heading-base-level=0

//! Orgchart Sync: keep a render surface and the chart tree in step.
//!
//! The tree is the source of truth for edits made through the chart. The
//! render surface owns what is on screen and its own undo history. This crate
//! moves changes in both directions:
//!
//! - Tree to render: [`Reconciler::sync`] lays the tree out through a
//!   [`LayoutEngine`], flattens it into [`RenderNode`]s and [`RenderEdge`]s and
//!   applies the difference to a [`RenderSurface`].
//! - Render to tree: after the surface undoes or redoes a step, its content is
//!   the truth. [`Reconciler::rebuild_from_render`] reads it back into a
//!   [`TreeNode`](orgchart_tree::TreeNode).
//!
//! ## History
//!
//! A sync made while rebuilding must not land in the surface's undo history,
//! or the next undo would undo the rebuild instead of the user's edit. Bracket
//! the rebuild with [`Reconciler::begin_rebuild`] and
//! [`Reconciler::end_rebuild`] (or use [`Reconciler::rebuilding`]); syncs in
//! between switch recording off and restore it afterwards.
//!
//! ## Edge ids
//!
//! Edges are keyed `edge-{parent}#{child}` (see [`edge_id`]), so a move shows up
//! as one removed and one added edge.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod layout;
mod rebuild;
mod reconcile;
mod surface;

pub use error::{InconsistentRenderState, SyncError};
pub use layout::{LaidOutNode, LayoutEngine, LayoutParams, RenderScene, flatten};
pub use rebuild::tree_from_render;
pub use reconcile::{HistoryGuard, Reconciler, SYNC_BATCH, SyncReport};
pub use surface::{RenderEdge, RenderNode, RenderSurface, edge_id};
