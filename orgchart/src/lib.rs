// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=orgchart --heading-base-level=0

//! Orgchart: an editable organization chart over a render surface.
//!
//! [`OrgChart`] ties the kernels together:
//!
//! - [`orgchart_tree`] owns the tree and its structural edits.
//! - [`orgchart_drag`] turns pointer movement into a staged move.
//! - [`orgchart_sync`] pushes the tree to the surface and reads it back after
//!   the surface undoes or redoes a step.
//!
//! The canvas itself (drawing, hit testing, pan/zoom, undo stacks) and the
//! hierarchical layout are collaborators, reached through
//! [`RenderSurface`](orgchart_sync::RenderSurface) and
//! [`LayoutEngine`](orgchart_sync::LayoutEngine).
//!
//! ## Event contract
//!
//! | Canvas event                   | Chart call                                  |
//! |--------------------------------|---------------------------------------------|
//! | press on a node                | [`OrgChart::pointer_down`]                  |
//! | pointer move                   | [`OrgChart::pointer_move`]                  |
//! | release on a node or on canvas | [`OrgChart::pointer_up`]                    |
//! | "add" button of a node         | [`OrgChart::add_child`]                     |
//! | delete key                     | [`OrgChart::delete_selected`]               |
//! | inline text edit committed     | [`OrgChart::edit_label`]                    |
//! | edge label edit committed      | [`OrgChart::edit_edge_label`]               |
//! | surface undo / redo            | [`OrgChart::history_changed`]               |
//!
//! ## Logging
//!
//! Everything is reported through `tracing`: drop-target decisions and sync
//! diffs at `debug`, committed edits at `info`, rejected edits and inconsistent
//! render state at `warn`. Install any subscriber to see them.
//!
//! ## Features
//!
//! - `serde`: deserialize [`OrgChartConfig`] from partial documents and
//!   [`TreeNode`] snapshots from JSON.

mod chart;
mod config;
mod error;

pub use chart::{
    GHOST_ID, HistoryEvent, OrgChart, PREVIEW_EDGE_ID, PREVIEW_NODE_ID, PointerTarget,
    ReleaseOutcome, SyncCallback,
};
pub use config::OrgChartConfig;
pub use error::ChartError;

pub use orgchart_drag::{DragSession, NoDecision, Resolution};
pub use orgchart_geometry::Quadrant;
pub use orgchart_sync::{SyncError, SyncReport};
pub use orgchart_tree::{
    InsertIndex, MoveParent, MovePosition, StructuralViolation, TargetLevel, TreeError, TreeNode,
    TreeStore,
};
