// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `orgchart_drag` crate.
//!
//! These drive `resolve` the way a controller does: a ghost box plus the
//! candidates a render surface reports for it.

use kurbo::{Point, Rect, Size};
use orgchart_drag::{
    DragConfig, DragSession, NoDecision, Resolution, ghost_bounds, preview_placement, resolve,
};
use orgchart_geometry::Quadrant;
use orgchart_tree::{InsertIndex, MoveParent, MovePosition, TreeNode, TreeStore};

const NODE: Size = Size::new(200.0, 60.0);

fn a_with_b() -> TreeStore {
    TreeStore::new(&TreeNode::new("A", "A").with_child(TreeNode::new("B", "B"))).unwrap()
}

fn b_box() -> Rect {
    Rect::from_origin_size(Point::new(0.0, 100.0), NODE)
}

#[test]
fn lower_right_of_childless_node_becomes_first_child() {
    let store = a_with_b();
    // B center is (100, 130); the ghost hangs off its lower-right corner.
    let ghost = ghost_bounds(Point::new(180.0, 170.0), NODE);
    let resolution = resolve(&store, "N", "ghost", ghost, [("B", b_box())]);
    assert_eq!(
        resolution,
        Resolution::Move {
            target: "B".into(),
            quadrant: Quadrant::SouthEast,
            position: MovePosition::child("B", InsertIndex::At(0)),
        }
    );
}

#[test]
fn upper_right_becomes_next_sibling() {
    let store = a_with_b();
    let ghost = ghost_bounds(Point::new(180.0, 90.0), NODE);
    let resolution = resolve(&store, "N", "ghost", ghost, [("B", b_box())]);
    assert_eq!(
        resolution.position(),
        Some(&MovePosition::sibling(MoveParent::node("A"), 1))
    );
}

#[test]
fn upper_left_and_lower_left() {
    let store = a_with_b();
    let nw = ghost_bounds(Point::new(20.0, 90.0), NODE);
    assert_eq!(
        resolve(&store, "N", "ghost", nw, [("B", b_box())]).position(),
        Some(&MovePosition::sibling(MoveParent::node("A"), 0))
    );
    let sw = ghost_bounds(Point::new(20.0, 170.0), NODE);
    assert_eq!(
        resolve(&store, "N", "ghost", sw, [("B", b_box())]).position(),
        Some(&MovePosition::child("B", InsertIndex::At(0)))
    );
}

#[test]
fn exact_center_overlap_yields_nothing() {
    let store = a_with_b();
    let ghost = ghost_bounds(b_box().center(), NODE);
    assert_eq!(
        resolve(&store, "N", "ghost", ghost, [("B", b_box())]),
        Resolution::None(NoDecision::CenterHit)
    );
}

#[test]
fn source_ghost_and_overlays_are_not_candidates() {
    let store = a_with_b();
    let ghost = ghost_bounds(Point::new(180.0, 170.0), NODE);
    let candidates = [
        ("B", ghost),
        ("ghost", ghost),
        ("preview-node", ghost),
    ];
    assert_eq!(
        resolve(&store, "B", "ghost", ghost, candidates),
        Resolution::None(NoDecision::NoCandidates)
    );
}

#[test]
fn dropping_on_own_descendant_is_ignored() {
    let tree = TreeNode::new("A", "A")
        .with_child(TreeNode::new("B", "B").with_child(TreeNode::new("C", "C")));
    let store = TreeStore::new(&tree).unwrap();
    let c_box = Rect::from_origin_size(Point::new(0.0, 200.0), NODE);
    let ghost = ghost_bounds(Point::new(180.0, 270.0), NODE);
    assert_eq!(
        resolve(&store, "B", "ghost", ghost, [("C", c_box)]),
        Resolution::None(NoDecision::InsideDraggedSubtree)
    );
}

#[test]
fn equal_overlaps_keep_the_first_reported() {
    let tree = TreeNode::new("A", "A")
        .with_children([TreeNode::new("B", "B"), TreeNode::new("C", "C")]);
    let store = TreeStore::new(&tree).unwrap();
    let left = Rect::new(0.0, 100.0, 200.0, 160.0);
    let right = Rect::new(200.0, 100.0, 400.0, 160.0);
    // Ghost straddles both boxes evenly.
    let ghost = Rect::new(100.0, 120.0, 300.0, 180.0);

    let first_c = resolve(&store, "N", "ghost", ghost, [("C", right), ("B", left)]);
    assert!(matches!(first_c, Resolution::Move { ref target, .. } if target == "C"));
    let first_b = resolve(&store, "N", "ghost", ghost, [("B", left), ("C", right)]);
    assert!(matches!(first_b, Resolution::Move { ref target, .. } if target == "B"));
}

#[test]
fn dropping_next_to_own_slot_is_redundant() {
    let tree = TreeNode::new("A", "A")
        .with_children([TreeNode::new("B", "B"), TreeNode::new("C", "C")]);
    let store = TreeStore::new(&tree).unwrap();
    let b = Rect::new(0.0, 100.0, 200.0, 160.0);
    // Upper-right of B: "after B", which is where C already is.
    let ghost = ghost_bounds(Point::new(180.0, 90.0), NODE);
    assert_eq!(
        resolve(&store, "C", "ghost", ghost, [("B", b)]),
        Resolution::Redundant { target: "B".into() }
    );
}

#[test]
fn root_sibling_resolution_is_reported_but_has_no_preview() {
    let store = a_with_b();
    let a_box = Rect::from_origin_size(Point::ZERO, NODE);
    let ghost = ghost_bounds(Point::new(180.0, -10.0), NODE);
    let resolution = resolve(&store, "N", "ghost", ghost, [("A", a_box)]);
    let position = resolution.into_position().unwrap();
    assert_eq!(position, MovePosition::sibling(MoveParent::VirtualRoot, 1));
    assert!(preview_placement(&store, &position, |_| Some(Point::ZERO)).is_none());
}

#[test]
fn session_drives_a_full_drag() {
    let store = a_with_b();
    let config = DragConfig::default();
    let mut drag = DragSession::press("N", Point::new(500.0, 170.0), config);

    for (t, x) in [(0_u64, 502.0), (5, 180.0), (30, 181.0)] {
        let pointer = Point::new(x, 170.0);
        if drag.update(pointer).delta().is_none() || !drag.ready(t) {
            continue;
        }
        let ghost = ghost_bounds(pointer, NODE);
        match resolve(&store, drag.source(), "ghost", ghost, [("B", b_box())]).into_position() {
            Some(position) => drag.stage(position),
            None => drag.clear_staged(),
        }
    }
    assert!(drag.is_active());
    assert_eq!(
        drag.take_staged(),
        Some(MovePosition::child("B", InsertIndex::At(0)))
    );
}
