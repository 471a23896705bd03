// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart controller.

use std::fmt;

use kurbo::{Point, Rect};
use orgchart_drag::{DragSession, DragUpdate, Resolution, ghost_bounds, preview_placement, resolve};
use orgchart_sync::{LayoutEngine, Reconciler, RenderEdge, RenderNode, RenderSurface, SyncReport};
use orgchart_tree::{MovePosition, TreeError, TreeNode, TreeStore};

use crate::config::OrgChartConfig;
use crate::error::ChartError;

/// Overlay id of the drag ghost.
pub const GHOST_ID: &str = "orgchart-drag-ghost";
/// Overlay id of the drop marker.
pub const PREVIEW_NODE_ID: &str = "orgchart-drop-preview";
/// Overlay id of the edge from the destination parent to the drop marker.
pub const PREVIEW_EDGE_ID: &str = "orgchart-drop-preview-edge";

/// Where the pointer was released.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    /// Over a node.
    Node(String),
    /// Over empty canvas.
    Blank,
}

/// Which way the surface's history moved.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HistoryEvent {
    /// A step was undone.
    Undo,
    /// A step was redone.
    Redo,
}

/// What a pointer release did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// No drag was active: a click, or a release with nothing pressed.
    Click,
    /// A drag ended without a staged move.
    Dropped,
    /// The staged move was applied.
    Moved(MovePosition),
    /// The staged move was rejected; the tree is unchanged.
    Rejected(TreeError),
}

/// Called with the tree rebuilt after an undo or redo.
pub type SyncCallback = Box<dyn FnMut(&TreeNode)>;

/// An editable chart over a render surface `S` laid out by `L`.
///
/// The chart owns the [`TreeStore`] and keeps the surface in step with it.
/// Pointer and keyboard handlers never panic or propagate: failures are logged
/// and the last good tree is kept.
pub struct OrgChart<S, L> {
    surface: S,
    layout: L,
    config: OrgChartConfig,
    reconciler: Reconciler,
    store: Option<TreeStore>,
    drag: Option<DragSession>,
    on_sync: Option<SyncCallback>,
}

impl<S: fmt::Debug, L: fmt::Debug> fmt::Debug for OrgChart<S, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrgChart")
            .field("surface", &self.surface)
            .field("layout", &self.layout)
            .field("config", &self.config)
            .field("reconciler", &self.reconciler)
            .field("store", &self.store)
            .field("drag", &self.drag)
            .field("on_sync", &self.on_sync.is_some())
            .finish()
    }
}

impl<S, L> OrgChart<S, L>
where
    S: RenderSurface,
    L: LayoutEngine,
{
    /// Creates a chart over `surface`. Nothing is shown until [`render_data`](Self::render_data).
    pub fn initialize(mut surface: S, layout: L, config: OrgChartConfig) -> Self {
        surface.set_panning(true);
        let reconciler = Reconciler::new(config.layout_params());
        tracing::debug!(
            width = config.width,
            height = config.height,
            background = %config.background,
            "chart initialized"
        );
        Self {
            surface,
            layout,
            config,
            reconciler,
            store: None,
            drag: None,
            on_sync: None,
        }
    }

    /// The configuration.
    pub fn config(&self) -> &OrgChartConfig {
        &self.config
    }

    /// The render surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the render surface, e.g. to undo a step or select a node.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The tree store, once a tree has been rendered.
    pub fn store(&self) -> Option<&TreeStore> {
        self.store.as_ref()
    }

    /// The current tree, once one has been rendered.
    pub fn tree(&self) -> Option<&TreeNode> {
        self.store.as_ref().map(TreeStore::root)
    }

    /// The drag in progress, if any.
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Returns `true` while a press has turned into a drag.
    pub fn is_dragging(&self) -> bool {
        self.drag.as_ref().is_some_and(DragSession::is_active)
    }

    /// Registers `callback`, invoked with the rebuilt tree after every undo or redo.
    pub fn set_tree_data_sync_callback(&mut self, callback: impl FnMut(&TreeNode) + 'static) {
        self.on_sync = Some(Box::new(callback));
    }

    /// Replaces the chart's tree with a copy of `tree` and shows it.
    ///
    /// With `is_first_render` the surface content is replaced wholesale,
    /// otherwise only the difference is applied.
    pub fn render_data(
        &mut self,
        tree: &TreeNode,
        is_first_render: bool,
    ) -> Result<SyncReport, ChartError> {
        let store = TreeStore::new(tree)?;
        let report = self
            .reconciler
            .sync(&mut self.surface, &self.layout, store.root(), is_first_render)?;
        tracing::info!(nodes = store.len(), is_first_render, "rendered tree");
        self.store = Some(store);
        Ok(report)
    }

    /// A node was pressed at `client` (viewport coordinates).
    ///
    /// Presses on ids the tree does not know, such as overlays, are ignored.
    /// A drag still in progress is abandoned along with its overlays.
    pub fn pointer_down(&mut self, node_id: &str, client: Point) {
        if let Some(mut stale) = self.drag.take() {
            tracing::debug!(source = stale.source(), "press abandons unfinished drag");
            self.surface.remove_overlay(GHOST_ID);
            clear_preview(&mut self.surface, &mut stale);
            self.surface.set_panning(true);
        }
        let Some(store) = &self.store else {
            return;
        };
        if !store.contains(node_id) {
            return;
        }
        self.surface.set_panning(false);
        self.drag = Some(DragSession::press(node_id, client, self.config.drag_config()));
    }

    /// The pointer moved to `client` at time `now_ms`.
    ///
    /// Moves the ghost while a drag is active, and at most once per configured
    /// interval resolves the drop target, stages the resulting move and refreshes
    /// the drop marker. Returns the resolution when one ran.
    pub fn pointer_move(&mut self, client: Point, now_ms: u64) -> Option<Resolution> {
        let drag = self.drag.as_mut()?;
        let update = drag.update(client);
        if update == DragUpdate::Pending {
            return None;
        }
        let store = self.store.as_ref()?;
        let Some(source) = self.surface.node(drag.source()) else {
            tracing::warn!(source = drag.source(), "dragged node left the surface");
            return None;
        };
        if matches!(update, DragUpdate::Started { .. }) {
            tracing::debug!(source = %source.id, "drag started");
        }

        let local = self.surface.client_to_local(client);
        let ghost = ghost_bounds(local, source.size);
        self.surface.put_overlay_node(RenderNode {
            id: String::from(GHOST_ID),
            label: source.label,
            position: ghost.origin(),
            size: source.size,
            is_root: false,
        });

        if !drag.ready(now_ms) {
            return None;
        }

        let candidates: Vec<(String, Rect)> = self
            .surface
            .nodes_in_area(ghost)
            .into_iter()
            .filter_map(|id| {
                let bounds = self.surface.node_bounds(&id)?;
                Some((id, bounds))
            })
            .collect();
        let resolution = resolve(
            store,
            drag.source(),
            GHOST_ID,
            ghost,
            candidates.iter().map(|(id, bounds)| (id.as_str(), *bounds)),
        );

        match resolution.position() {
            Some(position) => {
                let surface = &self.surface;
                let placement =
                    preview_placement(store, position, |id| surface.node(id).map(|n| n.position));
                match placement {
                    Some(placement) => {
                        self.surface.put_overlay_node(RenderNode {
                            id: String::from(PREVIEW_NODE_ID),
                            label: String::new(),
                            position: placement.bounds.origin(),
                            size: placement.bounds.size(),
                            is_root: false,
                        });
                        self.surface.put_overlay_edge(RenderEdge {
                            id: String::from(PREVIEW_EDGE_ID),
                            source: placement.parent,
                            target: String::from(PREVIEW_NODE_ID),
                            label: None,
                        });
                        drag.set_preview_shown(true);
                    }
                    None => clear_preview(&mut self.surface, drag),
                }
                drag.stage(position.clone());
            }
            None => {
                drag.clear_staged();
                clear_preview(&mut self.surface, drag);
            }
        }
        Some(resolution)
    }

    /// The pointer was released over `target`.
    ///
    /// Commits the staged move of an active drag, whatever `target` is. On every
    /// path the ghost and drop marker are removed, the drag ends and panning is
    /// re-enabled.
    pub fn pointer_up(&mut self, target: PointerTarget) -> ReleaseOutcome {
        self.surface.set_panning(true);
        let Some(mut drag) = self.drag.take() else {
            return ReleaseOutcome::Click;
        };
        self.surface.remove_overlay(GHOST_ID);
        clear_preview(&mut self.surface, &mut drag);
        if !drag.is_active() {
            return ReleaseOutcome::Click;
        }
        let Some(position) = drag.take_staged() else {
            tracing::debug!(source = drag.source(), ?target, "drag ended without a drop target");
            return ReleaseOutcome::Dropped;
        };
        let Some(store) = self.store.as_mut() else {
            return ReleaseOutcome::Dropped;
        };
        match store.move_node(drag.source(), &position) {
            Ok(()) => {
                tracing::info!(source = drag.source(), %position, ?target, "moved node");
                if let Err(err) =
                    self.reconciler
                        .sync(&mut self.surface, &self.layout, store.root(), false)
                {
                    tracing::warn!(%err, "sync after move failed");
                }
                ReleaseOutcome::Moved(position)
            }
            Err(err) => {
                tracing::warn!(source = drag.source(), %position, %err, "move rejected");
                ReleaseOutcome::Rejected(err)
            }
        }
    }

    /// Appends a new leaf under `parent_id` and returns its id.
    pub fn add_child(&mut self, parent_id: &str) -> Result<String, ChartError> {
        let store = self.store.as_mut().ok_or(ChartError::NotRendered)?;
        let id = fresh_id(store);
        let node = TreeNode::new(id.as_str(), self.config.new_node_name.as_str());
        if let Err(err) = store.add(node, &MovePosition::append_to(parent_id)) {
            tracing::warn!(parent = parent_id, %err, "add rejected");
            return Err(err.into());
        }
        tracing::info!(parent = parent_id, id = %id, "added node");
        self.reconciler
            .sync(&mut self.surface, &self.layout, store.root(), false)?;
        Ok(id)
    }

    /// Removes the selected node and its subtree.
    ///
    /// Does nothing when nothing is selected or the root is selected.
    pub fn delete_selected(&mut self) -> Option<TreeNode> {
        let id = self.surface.selected_node()?;
        let store = self.store.as_mut()?;
        match store.remove(&id) {
            Ok(removed) => {
                tracing::info!(id = %id, nodes = removed.len(), "removed subtree");
                if let Err(err) =
                    self.reconciler
                        .sync(&mut self.surface, &self.layout, store.root(), false)
                {
                    tracing::warn!(%err, "sync after removal failed");
                }
                Some(removed)
            }
            Err(err) => {
                tracing::warn!(id = %id, %err, "removal rejected");
                None
            }
        }
    }

    /// Replaces the label of `id` with `text`. Empty text is rejected.
    pub fn edit_label(&mut self, id: &str, text: &str) -> Result<(), ChartError> {
        let store = self.store.as_mut().ok_or(ChartError::NotRendered)?;
        let previous = store.rename(id, text).inspect_err(|err| {
            tracing::warn!(id, %err, "label edit rejected");
        })?;
        tracing::info!(id, from = %previous, to = text, "renamed node");
        self.reconciler
            .sync(&mut self.surface, &self.layout, store.root(), false)?;
        Ok(())
    }

    /// Replaces the label of the edge leading into `id` with `text`.
    ///
    /// Empty text is rejected, as is the root. An unchanged label touches
    /// nothing.
    pub fn edit_edge_label(&mut self, id: &str, text: &str) -> Result<(), ChartError> {
        let store = self.store.as_mut().ok_or(ChartError::NotRendered)?;
        let previous = store.set_edge_label(id, text).inspect_err(|err| {
            tracing::warn!(id, %err, "edge label edit rejected");
        })?;
        if previous.as_deref() == Some(text) {
            return Ok(());
        }
        tracing::info!(id, from = ?previous, to = text, "relabelled edge");
        self.reconciler
            .sync(&mut self.surface, &self.layout, store.root(), false)?;
        Ok(())
    }

    /// The surface undid or redid a step: its content is now the truth.
    ///
    /// The tree is rebuilt from the surface, stored, re-synced without recording
    /// history and handed to the sync callback. If the surface content is not a
    /// valid tree the previous tree is kept.
    pub fn history_changed(&mut self, event: HistoryEvent) -> Result<(), ChartError> {
        self.reconciler.begin_rebuild();
        let result = self.rebuild(event);
        self.reconciler.end_rebuild();
        result
    }

    fn rebuild(&mut self, event: HistoryEvent) -> Result<(), ChartError> {
        let tree = self.reconciler.rebuild_from_render(&self.surface)?;
        let store = self.store.as_mut().ok_or(ChartError::NotRendered)?;
        store.replace_all(&tree)?;
        tracing::info!(?event, nodes = store.len(), "tree rebuilt from surface");
        self.reconciler
            .sync(&mut self.surface, &self.layout, store.root(), false)?;
        if let Some(callback) = self.on_sync.as_mut() {
            callback(store.root());
        }
        Ok(())
    }
}

fn clear_preview<S: RenderSurface>(surface: &mut S, drag: &mut DragSession) {
    if drag.preview_shown() {
        surface.remove_overlay(PREVIEW_EDGE_ID);
        surface.remove_overlay(PREVIEW_NODE_ID);
        drag.set_preview_shown(false);
    }
}

fn fresh_id(store: &TreeStore) -> String {
    loop {
        let id = uuid::Uuid::new_v4().simple().to_string();
        if !store.contains(&id) {
            return id;
        }
    }
}
