// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=orgchart_drag --heading-base-level=0

//! Orgchart Drag: turn live pointer movement into a structural edit.
//!
//! A dragged node is represented on the canvas by a ghost: a proxy box that
//! follows the pointer while the real node stays put. Every throttled tick, the
//! nodes overlapping the ghost are scored and the best one, together with the
//! quadrant the overlap falls into, decides where the dragged subtree would go
//! if it were released now.
//!
//! - [`DragSession`]: press, threshold, throttle and the staged edit.
//! - [`resolve`]: candidates to a [`Resolution`].
//! - [`preview_placement`]: where to draw the drop marker for a staged edit.
//!
//! The crate never mutates the tree. Committing the staged edit on release is
//! up to the caller, through [`TreeStore::move_node`](orgchart_tree::TreeStore::move_node).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use orgchart_drag::{DragConfig, DragSession, Resolution, ghost_bounds, resolve};
//! use orgchart_tree::{InsertIndex, MovePosition, TreeNode, TreeStore};
//!
//! let tree = TreeNode::new("a", "A").with_children([
//!     TreeNode::new("b", "B"),
//!     TreeNode::new("c", "C"),
//! ]);
//! let store = TreeStore::new(&tree).unwrap();
//! let b_box = Rect::new(0.0, 100.0, 200.0, 160.0);
//!
//! let mut drag = DragSession::press("c", Point::new(400.0, 130.0), DragConfig::default());
//! drag.update(Point::new(150.0, 150.0));
//! assert!(drag.is_active());
//!
//! // The ghost overlaps the lower-right part of `b`: make `c` its last child.
//! let ghost = ghost_bounds(Point::new(150.0, 150.0), b_box.size());
//! let resolution = resolve(&store, drag.source(), "ghost", ghost, [("b", b_box)]);
//! assert_eq!(
//!     resolution.position(),
//!     Some(&MovePosition::child("b", InsertIndex::At(0)))
//! );
//! if let Some(position) = resolution.into_position() {
//!     drag.stage(position);
//! }
//! assert!(drag.staged().is_some());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod preview;
mod resolve;
mod session;

pub use preview::{PREVIEW_SIZE, PreviewPlacement, preview_placement};
pub use resolve::{
    NoDecision, Resolution, ScoredCandidate, is_redundant, pick_drop_target, position_for,
    resolve, score_candidates,
};
pub use session::{DragConfig, DragSession, DragUpdate, ghost_bounds};
