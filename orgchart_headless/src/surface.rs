// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory [`RenderSurface`].

use hashbrown::HashMap;
use kurbo::{Affine, Point, Rect};
use orgchart_sync::{RenderEdge, RenderNode, RenderSurface};

use crate::history::{Change, History};

/// Render surface that keeps everything in memory.
///
/// Model nodes live in slots that are reused after removal, with an id index
/// on the side. Area queries scan the slots, then the overlays. Model changes
/// are recorded in a [`History`] that [`undo`](Self::undo) and
/// [`redo`](Self::redo) replay, the way a canvas library's history plugin
/// would.
#[derive(Clone, Debug)]
pub struct MemorySurface {
    slots: Vec<Option<RenderNode>>,
    free: Vec<usize>,
    index: HashMap<String, usize>,
    edges: Vec<RenderEdge>,
    overlay_nodes: Vec<RenderNode>,
    overlay_edges: Vec<RenderEdge>,
    selected: Option<String>,
    panning: bool,
    view: Affine,
    history: History,
    open_batches: Vec<String>,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySurface {
    /// Creates an empty surface with panning enabled and an identity view.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            overlay_nodes: Vec::new(),
            overlay_edges: Vec::new(),
            selected: None,
            panning: true,
            view: Affine::IDENTITY,
            history: History::default(),
            open_batches: Vec::new(),
        }
    }

    /// Sets the canvas-to-client transform (pan and zoom).
    pub fn set_view(&mut self, view: Affine) {
        self.view = view;
    }

    /// Selects a model node, or clears the selection.
    pub fn select(&mut self, id: Option<&str>) {
        self.selected = id.map(String::from);
    }

    /// Whether panning is enabled.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.panning
    }

    /// Overlay nodes currently shown.
    #[must_use]
    pub fn overlay_nodes(&self) -> &[RenderNode] {
        &self.overlay_nodes
    }

    /// Overlay edges currently shown.
    #[must_use]
    pub fn overlay_edges(&self) -> &[RenderEdge] {
        &self.overlay_edges
    }

    /// The undo history.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Names of the batches currently open.
    #[must_use]
    pub fn open_batches(&self) -> &[String] {
        &self.open_batches
    }

    /// Reverts the latest recorded step. Returns `false` if there was none.
    pub fn undo(&mut self) -> bool {
        let Some(changes) = self.history.take_undo() else {
            return false;
        };
        self.replay(changes);
        true
    }

    /// Re-applies the latest undone step. Returns `false` if there was none.
    pub fn redo(&mut self) -> bool {
        let Some(changes) = self.history.take_redo() else {
            return false;
        };
        self.replay(changes);
        true
    }

    fn replay(&mut self, changes: Vec<Change>) {
        tracing::debug!(changes = changes.len(), "replaying history step");
        for change in changes {
            match change {
                Change::AddNode(node) => self.insert_node(node),
                Change::RemoveNode(node) => {
                    self.take_node(&node.id);
                }
                Change::UpdateNode { after, .. } => {
                    self.replace_node(after);
                }
                Change::AddEdge(edge) => self.edges.push(edge),
                Change::RemoveEdge(edge) => self.edges.retain(|e| e.id != edge.id),
                Change::Load { after, .. } => self.replace_all(after.0, after.1),
            }
        }
    }

    fn insert_node(&mut self, node: RenderNode) {
        if let Some(&slot) = self.index.get(&node.id) {
            self.slots[slot] = Some(node);
            return;
        }
        let id = node.id.clone();
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                slot
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };
        self.index.insert(id, slot);
    }

    fn take_node(&mut self, id: &str) -> Option<RenderNode> {
        let slot = self.index.remove(id)?;
        self.free.push(slot);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        self.slots.get_mut(slot)?.take()
    }

    fn replace_node(&mut self, node: RenderNode) -> Option<RenderNode> {
        let slot = *self.index.get(&node.id)?;
        self.slots.get_mut(slot)?.replace(node)
    }

    fn replace_all(&mut self, nodes: Vec<RenderNode>, edges: Vec<RenderEdge>) {
        self.slots.clear();
        self.free.clear();
        self.index.clear();
        for node in nodes {
            self.insert_node(node);
        }
        self.edges = edges;
        if let Some(selected) = &self.selected
            && !self.index.contains_key(selected)
        {
            self.selected = None;
        }
    }

    fn model_nodes(&self) -> impl Iterator<Item = &RenderNode> {
        self.slots.iter().flatten()
    }
}

impl RenderSurface for MemorySurface {
    fn node_ids(&self) -> Vec<String> {
        self.model_nodes().map(|n| n.id.clone()).collect()
    }

    fn edge_ids(&self) -> Vec<String> {
        self.edges.iter().map(|e| e.id.clone()).collect()
    }

    fn nodes(&self) -> Vec<RenderNode> {
        self.model_nodes().cloned().collect()
    }

    fn edges(&self) -> Vec<RenderEdge> {
        self.edges.clone()
    }

    fn node(&self, id: &str) -> Option<RenderNode> {
        let slot = *self.index.get(id)?;
        self.slots.get(slot)?.clone()
    }

    fn edge(&self, id: &str) -> Option<RenderEdge> {
        self.edges.iter().find(|e| e.id == id).cloned()
    }

    fn node_bounds(&self, id: &str) -> Option<Rect> {
        self.node(id)
            .or_else(|| self.overlay_nodes.iter().find(|n| n.id == id).cloned())
            .map(|n| n.bounds())
    }

    fn nodes_in_area(&self, area: Rect) -> Vec<String> {
        self.model_nodes()
            .chain(self.overlay_nodes.iter())
            .filter(|n| n.bounds().overlaps(area))
            .map(|n| n.id.clone())
            .collect()
    }

    fn client_to_local(&self, client: Point) -> Point {
        self.view.inverse() * client
    }

    fn load(&mut self, nodes: Vec<RenderNode>, edges: Vec<RenderEdge>) {
        if self.history.is_enabled() {
            let before = (self.nodes(), self.edges.clone());
            let after = (nodes.clone(), edges.clone());
            self.history.record(Change::Load { before, after });
        }
        self.replace_all(nodes, edges);
    }

    fn add_node(&mut self, node: RenderNode) {
        self.history.record(Change::AddNode(node.clone()));
        self.insert_node(node);
    }

    fn update_node(&mut self, node: RenderNode) {
        let after = node.clone();
        if let Some(before) = self.replace_node(node) {
            self.history.record(Change::UpdateNode { before, after });
        }
    }

    fn remove_node(&mut self, id: &str) {
        if let Some(node) = self.take_node(id) {
            self.history.record(Change::RemoveNode(node));
        }
    }

    fn add_edge(&mut self, edge: RenderEdge) {
        self.history.record(Change::AddEdge(edge.clone()));
        self.edges.push(edge);
    }

    fn remove_edge(&mut self, id: &str) {
        if let Some(at) = self.edges.iter().position(|e| e.id == id) {
            let edge = self.edges.remove(at);
            self.history.record(Change::RemoveEdge(edge));
        }
    }

    fn put_overlay_node(&mut self, node: RenderNode) {
        match self.overlay_nodes.iter_mut().find(|n| n.id == node.id) {
            Some(slot) => *slot = node,
            None => self.overlay_nodes.push(node),
        }
    }

    fn put_overlay_edge(&mut self, edge: RenderEdge) {
        match self.overlay_edges.iter_mut().find(|e| e.id == edge.id) {
            Some(slot) => *slot = edge,
            None => self.overlay_edges.push(edge),
        }
    }

    fn remove_overlay(&mut self, id: &str) {
        self.overlay_nodes.retain(|n| n.id != id);
        self.overlay_edges.retain(|e| e.id != id);
    }

    fn selected_node(&self) -> Option<String> {
        self.selected
            .as_ref()
            .filter(|id| self.index.contains_key(id.as_str()))
            .cloned()
    }

    fn set_panning(&mut self, enabled: bool) {
        self.panning = enabled;
    }

    fn start_batch(&mut self, name: &str) {
        self.open_batches.push(String::from(name));
        self.history.begin();
    }

    fn stop_batch(&mut self, name: &str) {
        if let Some(at) = self.open_batches.iter().rposition(|b| b == name) {
            self.open_batches.remove(at);
            self.history.end();
        } else {
            tracing::warn!(batch = name, "stop_batch without matching start_batch");
        }
    }

    fn set_history_recording(&mut self, enabled: bool) {
        self.history.set_enabled(enabled);
    }

    fn is_history_recording(&self) -> bool {
        self.history.is_enabled()
    }
}
