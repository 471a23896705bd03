// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A deterministic top-to-bottom layout.

use kurbo::Point;
use orgchart_sync::{LaidOutNode, LayoutEngine, LayoutParams};
use orgchart_tree::TreeNode;

/// Leaves take consecutive horizontal slots; each parent is centered over its
/// first and last child. Level `d` sits at `y = d * (node height + v_gap)`.
///
/// This is not a compact-box layout: subtrees never share columns. It is good
/// enough to give every node a distinct, stable position.
#[derive(Copy, Clone, Debug, Default)]
pub struct SlotLayout;

impl LayoutEngine for SlotLayout {
    fn layout(&self, tree: &TreeNode, params: &LayoutParams) -> LaidOutNode {
        let mut next_slot = 0_u32;
        place(tree, 0, params, &mut next_slot)
    }
}

fn place(node: &TreeNode, depth: u32, params: &LayoutParams, next_slot: &mut u32) -> LaidOutNode {
    let y = f64::from(depth) * (params.node_size.height + params.v_gap);
    let children: Vec<LaidOutNode> = node
        .children
        .iter()
        .map(|child| place(child, depth + 1, params, next_slot))
        .collect();
    let x = match (children.first(), children.last()) {
        (Some(first), Some(last)) => (first.position.x + last.position.x) / 2.0,
        _ => {
            let x = f64::from(*next_slot) * (params.node_size.width + params.h_gap);
            *next_slot += 1;
            x
        }
    };
    LaidOutNode {
        id: node.id.clone(),
        position: Point::new(x, y),
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;

    #[test]
    fn leaves_fill_slots_and_parents_center() {
        let params = LayoutParams {
            node_size: Size::new(100.0, 40.0),
            h_gap: 20.0,
            v_gap: 30.0,
        };
        let tree = TreeNode::new("a", "A").with_children([
            TreeNode::new("b", "B")
                .with_children([TreeNode::new("d", "D"), TreeNode::new("e", "E")]),
            TreeNode::new("c", "C"),
        ]);
        let out = SlotLayout.layout(&tree, &params);
        let b = &out.children[0];
        assert_eq!(b.children[0].position, Point::new(0.0, 140.0));
        assert_eq!(b.children[1].position, Point::new(120.0, 140.0));
        assert_eq!(b.position, Point::new(60.0, 70.0));
        assert_eq!(out.children[1].position, Point::new(240.0, 70.0));
        assert_eq!(out.position, Point::new(150.0, 0.0));
    }

    #[test]
    fn single_node_sits_at_origin() {
        let out = SlotLayout.layout(&TreeNode::new("a", "A"), &LayoutParams::default());
        assert_eq!(out.position, Point::ZERO);
        assert!(out.children.is_empty());
    }
}
