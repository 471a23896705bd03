// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout collaborator and the flattening of a laid-out tree into render content.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Point, Size};
use orgchart_tree::TreeNode;

use crate::error::SyncError;
use crate::surface::{RenderEdge, RenderNode};

/// Sizing handed to the layout engine.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutParams {
    /// Size of every node box.
    pub node_size: Size,
    /// Horizontal gap between neighbouring subtrees.
    pub h_gap: f64,
    /// Vertical gap between levels.
    pub v_gap: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            node_size: Size::new(200.0, 60.0),
            h_gap: 40.0,
            v_gap: 60.0,
        }
    }
}

/// A tree node annotated with its top-left position.
#[derive(Clone, Debug, PartialEq)]
pub struct LaidOutNode {
    /// Id of the tree node.
    pub id: String,
    /// Top-left corner in canvas coordinates.
    pub position: Point,
    /// Laid-out children.
    pub children: Vec<Self>,
}

/// Hierarchical top-to-bottom layout.
pub trait LayoutEngine {
    /// Positions every node of `tree`.
    fn layout(&self, tree: &TreeNode, params: &LayoutParams) -> LaidOutNode;
}

/// Render content produced from one laid-out tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderScene {
    /// One node per tree node, parents before children.
    pub nodes: Vec<RenderNode>,
    /// One edge per parent/child pair.
    pub edges: Vec<RenderEdge>,
}

/// Flattens `tree` positioned by `laid_out` into render nodes and edges.
///
/// Fails with [`SyncError::Layout`] if the layout omitted a node of the tree.
pub fn flatten(
    tree: &TreeNode,
    laid_out: &LaidOutNode,
    node_size: Size,
) -> Result<RenderScene, SyncError> {
    let mut positions = HashMap::new();
    let mut stack = alloc::vec![laid_out];
    while let Some(node) = stack.pop() {
        positions.insert(node.id.as_str(), node.position);
        stack.extend(node.children.iter());
    }

    let mut scene = RenderScene::default();
    let mut pending: Vec<(&TreeNode, Option<&str>)> = alloc::vec![(tree, None)];
    while let Some((node, parent)) = pending.pop() {
        let position = *positions
            .get(node.id.as_str())
            .ok_or_else(|| SyncError::Layout(node.id.clone()))?;
        scene.nodes.push(RenderNode {
            id: node.id.clone(),
            label: node.name.clone(),
            position,
            size: node_size,
            is_root: parent.is_none(),
        });
        if let Some(parent) = parent {
            scene.edges.push(RenderEdge::between(
                parent,
                &node.id,
                node.edge_label.clone(),
            ));
        }
        // Reverse so children come out left to right.
        pending.extend(node.children.iter().rev().map(|c| (c, Some(node.id.as_str()))));
    }
    Ok(scene)
}
