// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `orgchart_headless` crate.
//!
//! These pair `MemorySurface` and `SlotLayout` with the reconciler: edits are
//! synced, undone on the surface, and read back into a tree.

use kurbo::Rect;
use orgchart_headless::{MemorySurface, SlotLayout};
use orgchart_sync::{Reconciler, RenderSurface};
use orgchart_tree::{InsertIndex, MovePosition, TreeNode, TreeStore};

fn org() -> TreeNode {
    TreeNode::new("ceo", "CEO").with_children([
        TreeNode::new("cto", "CTO").with_child(TreeNode::new("dev", "Dev")),
        TreeNode::new("cfo", "CFO"),
    ])
}

#[test]
fn undo_then_rebuild_restores_previous_tree() {
    let mut store = TreeStore::new(&org()).unwrap();
    let mut surface = MemorySurface::new();
    let mut reconciler = Reconciler::default();
    reconciler
        .sync(&mut surface, &SlotLayout, store.root(), true)
        .unwrap();

    store
        .move_node("dev", &MovePosition::child("cfo", InsertIndex::At(0)))
        .unwrap();
    reconciler
        .sync(&mut surface, &SlotLayout, store.root(), false)
        .unwrap();
    assert_eq!(reconciler.rebuild_from_render(&surface).unwrap(), *store.root());
    assert_eq!(surface.history().undo_len(), 2);

    assert!(surface.undo());
    let rebuilt = reconciler.rebuild_from_render(&surface).unwrap();
    assert_eq!(rebuilt, org());

    // Re-sync the rebuilt tree as the chart does after an undo: nothing is recorded.
    let report = reconciler.rebuilding(|r| r.sync(&mut surface, &SlotLayout, &rebuilt, false));
    assert!(!report.unwrap().recorded);
    assert_eq!(surface.history().undo_len(), 1);
    assert_eq!(surface.history().redo_len(), 1);

    assert!(surface.redo());
    assert_eq!(reconciler.rebuild_from_render(&surface).unwrap(), *store.root());
}

#[test]
fn area_query_finds_laid_out_nodes() {
    let mut surface = MemorySurface::new();
    Reconciler::default()
        .sync(&mut surface, &SlotLayout, &org(), true)
        .unwrap();
    let dev = surface.node_bounds("dev").unwrap();
    let probe = Rect::from_center_size(dev.center(), dev.size());
    let hits = surface.nodes_in_area(probe);
    assert!(hits.contains(&"dev".to_string()));
    assert!(!hits.contains(&"cfo".to_string()));
}
