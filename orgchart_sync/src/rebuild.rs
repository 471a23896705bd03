// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reconstructing the tree from render content.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use orgchart_tree::TreeNode;

use crate::error::InconsistentRenderState;
use crate::surface::{RenderEdge, RenderNode};

/// Builds a tree from render nodes and parent-to-child edges.
///
/// The root is the only node without an incoming edge. Children are ordered by
/// ascending x of their render position; equal x keeps edge order. Node labels
/// become names and each incoming edge's label becomes the child's edge label.
pub fn tree_from_render(
    nodes: &[RenderNode],
    edges: &[RenderEdge],
) -> Result<TreeNode, InconsistentRenderState> {
    let by_id: HashMap<&str, &RenderNode> = nodes.iter().map(|n| (n.id.as_str(), n)).collect();

    let mut children: HashMap<&str, Vec<&RenderEdge>> = HashMap::new();
    let mut has_parent: HashSet<&str> = HashSet::new();
    for edge in edges {
        if !by_id.contains_key(edge.source.as_str()) || !by_id.contains_key(edge.target.as_str()) {
            return Err(InconsistentRenderState::DanglingEdge(edge.id.clone()));
        }
        if !has_parent.insert(edge.target.as_str()) {
            return Err(InconsistentRenderState::MultipleParents(edge.target.clone()));
        }
        children.entry(edge.source.as_str()).or_default().push(edge);
    }

    let mut roots = nodes.iter().filter(|n| !has_parent.contains(n.id.as_str()));
    let root = roots.next().ok_or(InconsistentRenderState::NoRoot)?;
    if let Some(second) = roots.next() {
        return Err(InconsistentRenderState::MultipleRoots {
            first: root.id.clone(),
            second: second.id.clone(),
        });
    }

    for list in children.values_mut() {
        list.sort_by(|a, b| {
            let ax = by_id.get(a.target.as_str()).map_or(0.0, |n| n.position.x);
            let bx = by_id.get(b.target.as_str()).map_or(0.0, |n| n.position.x);
            ax.total_cmp(&bx)
        });
    }

    let mut visited = 0_usize;
    let tree = build(root, None, &by_id, &children, &mut visited);
    if visited != nodes.len() {
        let reachable: HashSet<&str> = tree.iter().map(|n| n.id.as_str()).collect();
        let stray = nodes
            .iter()
            .find(|n| !reachable.contains(n.id.as_str()))
            .map_or_else(String::new, |n| n.id.clone());
        return Err(InconsistentRenderState::Unreachable(stray));
    }
    Ok(tree)
}

fn build(
    node: &RenderNode,
    incoming: Option<&RenderEdge>,
    by_id: &HashMap<&str, &RenderNode>,
    children: &HashMap<&str, Vec<&RenderEdge>>,
    visited: &mut usize,
) -> TreeNode {
    *visited += 1;
    let mut tree = TreeNode::new(node.id.as_str(), node.label.as_str());
    tree.edge_label = incoming.and_then(|e| e.label.clone());
    if let Some(edges) = children.get(node.id.as_str()) {
        for edge in edges {
            if let Some(child) = by_id.get(edge.target.as_str()) {
                tree.children
                    .push(build(child, Some(edge), by_id, children, visited));
            }
        }
    }
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Size};

    fn node(id: &str, x: f64) -> RenderNode {
        RenderNode {
            id: id.into(),
            label: id.to_lowercase(),
            position: Point::new(x, 0.0),
            size: Size::new(10.0, 10.0),
            is_root: false,
        }
    }

    fn edge(source: &str, target: &str) -> RenderEdge {
        RenderEdge::between(source, target, None)
    }

    #[test]
    fn children_sort_by_x() {
        let nodes = [node("A", 0.0), node("B", 100.0), node("C", 50.0)];
        let edges = [edge("A", "B"), edge("A", "C")];
        let tree = tree_from_render(&nodes, &edges).unwrap();
        assert_eq!(tree.id, "A");
        assert_eq!(tree.name, "a");
        let ids: Vec<&str> = tree.children.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["C", "B"]);
    }

    #[test]
    fn equal_x_keeps_edge_order() {
        let nodes = [node("A", 0.0), node("B", 10.0), node("C", 10.0)];
        let edges = [edge("A", "C"), edge("A", "B")];
        let tree = tree_from_render(&nodes, &edges).unwrap();
        let ids: Vec<&str> = tree.children.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["C", "B"]);
    }

    #[test]
    fn edge_labels_come_back() {
        let nodes = [node("A", 0.0), node("B", 0.0)];
        let edges = [RenderEdge::between("A", "B", Some("advises".into()))];
        let tree = tree_from_render(&nodes, &edges).unwrap();
        assert_eq!(tree.edge_label, None);
        assert_eq!(tree.children[0].edge_label.as_deref(), Some("advises"));
    }

    #[test]
    fn inconsistent_states_are_reported() {
        assert_eq!(
            tree_from_render(&[], &[]).unwrap_err(),
            InconsistentRenderState::NoRoot
        );
        assert_eq!(
            tree_from_render(&[node("A", 0.0), node("B", 0.0)], &[]).unwrap_err(),
            InconsistentRenderState::MultipleRoots {
                first: "A".into(),
                second: "B".into()
            }
        );
        assert_eq!(
            tree_from_render(&[node("A", 0.0)], &[edge("A", "Z")]).unwrap_err(),
            InconsistentRenderState::DanglingEdge("edge-A#Z".into())
        );
        let nodes = [node("A", 0.0), node("B", 0.0), node("C", 0.0)];
        assert_eq!(
            tree_from_render(&nodes, &[edge("A", "C"), edge("B", "C"), edge("A", "B")])
                .unwrap_err(),
            InconsistentRenderState::MultipleParents("C".into())
        );
        assert_eq!(
            tree_from_render(&nodes, &[edge("B", "C"), edge("C", "B")]).unwrap_err(),
            InconsistentRenderState::Unreachable("B".into())
        );
    }
}
