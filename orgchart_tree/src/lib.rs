// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=orgchart_tree --heading-base-level=0

//! Orgchart Tree: the canonical single-root tree behind an editable chart.
//!
//! The chart is a plain value, [`TreeNode`]: an id, a label and an ordered list
//! of children. [`TreeStore`] owns one such tree and is the only way to change
//! it, so the invariants hold after every call:
//!
//! - Exactly one root.
//! - Every id appears exactly once.
//! - Children keep their left-to-right order.
//!
//! Structural edits are described by a [`MovePosition`]: which node receives
//! the subtree ([`MoveParent`]), whether the edit was aimed at a sibling or a
//! child slot ([`TargetLevel`]), and where in the child list it goes
//! ([`InsertIndex`]).
//!
//! ## Minimal example
//!
//! ```rust
//! use orgchart_tree::{InsertIndex, MoveParent, MovePosition, TreeNode, TreeStore};
//!
//! let snapshot = TreeNode::new("ceo", "CEO").with_children([
//!     TreeNode::new("cto", "CTO"),
//!     TreeNode::new("cfo", "CFO"),
//! ]);
//! let mut store = TreeStore::new(&snapshot).unwrap();
//!
//! // Hire someone under the CTO.
//! store
//!     .add(TreeNode::new("dev", "Developer"), &MovePosition::append_to("cto"))
//!     .unwrap();
//!
//! // Move them to report to the CFO instead, as the first child.
//! store
//!     .move_node("dev", &MovePosition::child("cfo", InsertIndex::At(0)))
//!     .unwrap();
//!
//! let located = store.find_with_parent("dev").unwrap();
//! assert_eq!(located.parent.unwrap().id, "cfo");
//! assert_eq!(located.sibling_index, 0);
//!
//! // The root can neither be removed nor given siblings.
//! assert!(store.remove("ceo").is_err());
//! assert!(store
//!     .move_node("cto", &MovePosition::sibling(MoveParent::VirtualRoot, 1))
//!     .is_err());
//! ```
//!
//! ## Failure semantics
//!
//! Every operation either applies completely or returns a [`TreeError`] and
//! leaves the tree untouched. In particular [`TreeStore::move_node`] validates
//! the destination before detaching anything, so a rejected move never orphans
//! the subtree.
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`TreeNode`], using the
//!   `{ "id", "name", "children", "edgeLabel" }` document shape.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod node;
mod position;
mod store;

pub use error::{StructuralViolation, TreeError};
pub use node::{PreOrder, TreeNode};
pub use position::{InsertIndex, MoveParent, MovePosition, TargetLevel};
pub use store::{Located, TreeStore};
