// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=orgchart_headless --heading-base-level=0

//! Orgchart Headless: canvas stand-ins for driving the chart without a UI.
//!
//! - [`MemorySurface`]: a [`RenderSurface`](orgchart_sync::RenderSurface) that
//!   keeps nodes, edges and overlays in memory, answers area queries, tracks
//!   selection and panning, and records model changes in an undo [`History`].
//! - [`SlotLayout`]: a simple deterministic [`LayoutEngine`](orgchart_sync::LayoutEngine).
//!
//! Tests, benches and the demo drive the chart through these.
//!
//! ## Minimal example
//!
//! ```rust
//! use orgchart_headless::{MemorySurface, SlotLayout};
//! use orgchart_sync::{Reconciler, RenderSurface};
//! use orgchart_tree::TreeNode;
//!
//! let tree = TreeNode::new("ceo", "CEO").with_child(TreeNode::new("cto", "CTO"));
//! let mut surface = MemorySurface::new();
//! let mut reconciler = Reconciler::default();
//! reconciler.sync(&mut surface, &SlotLayout, &tree, true).unwrap();
//! assert_eq!(surface.node_ids(), ["ceo", "cto"]);
//!
//! // The load is one undo step.
//! assert!(surface.undo());
//! assert!(surface.node_ids().is_empty());
//! ```

mod history;
mod layout;
mod surface;

pub use history::{Change, History};
pub use layout::SlotLayout;
pub use surface::MemorySurface;
