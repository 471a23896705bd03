// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The render collaborator: what the core needs from a canvas.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

/// A node as the render surface knows it.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderNode {
    /// Id shared with the tree node it renders.
    pub id: String,
    /// Text shown inside the box.
    pub label: String,
    /// Top-left corner in canvas coordinates.
    pub position: Point,
    /// Box size.
    pub size: Size,
    /// Set on the tree's root, for styling.
    pub is_root: bool,
}

impl RenderNode {
    /// Box in canvas coordinates.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }
}

/// A parent-to-child connector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderEdge {
    /// Edge id, see [`edge_id`].
    pub id: String,
    /// Parent node id.
    pub source: String,
    /// Child node id.
    pub target: String,
    /// Optional text on the connector.
    pub label: Option<String>,
}

impl RenderEdge {
    /// A connector from `source` to `target` with the canonical id.
    pub fn between(source: &str, target: &str, label: Option<String>) -> Self {
        Self {
            id: edge_id(source, target),
            source: String::from(source),
            target: String::from(target),
            label,
        }
    }
}

/// Canonical id of the edge from `parent` to `child`: `edge-{parent}#{child}`.
#[must_use]
pub fn edge_id(parent: &str, child: &str) -> String {
    alloc::format!("edge-{parent}#{child}")
}

/// Canvas operations used by the reconciler and the session controller.
///
/// The surface holds two kinds of content:
///
/// - Model content: nodes and edges that mirror the tree. Changes to them are
///   recorded in the surface's undo history while recording is on.
/// - Overlays: the drag ghost and the drop preview. They are never recorded,
///   never reported by [`node_ids`](Self::node_ids) or
///   [`edges`](Self::edges), but they do show up in
///   [`nodes_in_area`](Self::nodes_in_area) and [`node_bounds`](Self::node_bounds).
///
/// Lookups take ids and return `None` for ids the surface no longer knows.
pub trait RenderSurface {
    /// Ids of all model nodes.
    fn node_ids(&self) -> Vec<String>;
    /// Ids of all model edges.
    fn edge_ids(&self) -> Vec<String>;
    /// All model nodes, in surface order.
    fn nodes(&self) -> Vec<RenderNode>;
    /// All model edges, in surface order.
    fn edges(&self) -> Vec<RenderEdge>;
    /// A model node by id.
    fn node(&self, id: &str) -> Option<RenderNode>;
    /// A model edge by id.
    fn edge(&self, id: &str) -> Option<RenderEdge>;
    /// Bounds of a model node or overlay.
    fn node_bounds(&self, id: &str) -> Option<Rect>;
    /// Ids of model nodes and overlays whose bounds overlap `area`, in surface order.
    fn nodes_in_area(&self, area: Rect) -> Vec<String>;
    /// Converts a client (viewport) point to canvas coordinates.
    fn client_to_local(&self, client: Point) -> Point;

    /// Replaces all model content.
    fn load(&mut self, nodes: Vec<RenderNode>, edges: Vec<RenderEdge>);
    /// Adds a model node.
    fn add_node(&mut self, node: RenderNode);
    /// Replaces the model node with the same id.
    fn update_node(&mut self, node: RenderNode);
    /// Removes a model node.
    fn remove_node(&mut self, id: &str);
    /// Adds a model edge.
    fn add_edge(&mut self, edge: RenderEdge);
    /// Removes a model edge.
    fn remove_edge(&mut self, id: &str);

    /// Adds or replaces an overlay node.
    fn put_overlay_node(&mut self, node: RenderNode);
    /// Adds or replaces an overlay edge.
    fn put_overlay_edge(&mut self, edge: RenderEdge);
    /// Removes an overlay node or edge. Unknown ids are ignored.
    fn remove_overlay(&mut self, id: &str);

    /// The currently selected model node, if any.
    fn selected_node(&self) -> Option<String>;
    /// Enables or disables canvas panning.
    fn set_panning(&mut self, enabled: bool);

    /// Opens a named group of changes that undo as one step.
    fn start_batch(&mut self, name: &str);
    /// Closes the group opened by [`start_batch`](Self::start_batch).
    fn stop_batch(&mut self, name: &str);
    /// Switches undo recording on or off.
    fn set_history_recording(&mut self, enabled: bool);
    /// Whether changes are currently recorded.
    fn is_history_recording(&self) -> bool;
}
