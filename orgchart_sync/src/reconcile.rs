// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree to render diffing, and the guard that keeps rebuilds out of history.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use orgchart_tree::TreeNode;

use crate::error::SyncError;
use crate::layout::{LayoutEngine, LayoutParams, flatten};
use crate::rebuild::tree_from_render;
use crate::surface::{RenderEdge, RenderNode, RenderSurface};

/// Name of the surface batch wrapping one sync.
pub const SYNC_BATCH: &str = "orgchart-sync";

/// Counts nested rebuilds in flight.
///
/// While the depth is non-zero, syncs do not record surface history.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryGuard {
    depth: u32,
}

impl HistoryGuard {
    /// Enters one rebuild.
    pub fn enter(&mut self) {
        self.depth += 1;
    }

    /// Leaves one rebuild. Extra calls are ignored.
    pub fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Returns `true` while at least one rebuild is in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.depth > 0
    }

    /// Current nesting depth.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

/// What a sync changed on the surface.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// The surface content was replaced wholesale.
    pub full_load: bool,
    /// Nodes created.
    pub nodes_added: usize,
    /// Nodes whose position or payload changed.
    pub nodes_updated: usize,
    /// Nodes deleted.
    pub nodes_removed: usize,
    /// Edges created.
    pub edges_added: usize,
    /// Edges deleted.
    pub edges_removed: usize,
    /// Whether the changes were recorded in the surface history.
    pub recorded: bool,
}

impl SyncReport {
    /// Returns `true` if the sync did not touch the surface.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        !self.full_load
            && self.nodes_added == 0
            && self.nodes_updated == 0
            && self.nodes_removed == 0
            && self.edges_added == 0
            && self.edges_removed == 0
    }
}

/// Keeps a render surface in step with the tree.
#[derive(Clone, Debug, Default)]
pub struct Reconciler {
    params: LayoutParams,
    guard: HistoryGuard,
}

impl Reconciler {
    /// Creates a reconciler that lays trees out with `params`.
    #[must_use]
    pub fn new(params: LayoutParams) -> Self {
        Self {
            params,
            guard: HistoryGuard::default(),
        }
    }

    /// Layout parameters.
    #[must_use]
    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// The rebuild guard.
    #[must_use]
    pub fn guard(&self) -> HistoryGuard {
        self.guard
    }

    /// Marks the start of a rebuild: syncs stop recording history.
    pub fn begin_rebuild(&mut self) {
        self.guard.enter();
    }

    /// Marks the end of a rebuild.
    pub fn end_rebuild(&mut self) {
        self.guard.exit();
    }

    /// Returns `true` while a rebuild is in flight.
    #[must_use]
    pub fn is_rebuilding(&self) -> bool {
        self.guard.is_active()
    }

    /// Runs `f` between [`begin_rebuild`](Self::begin_rebuild) and
    /// [`end_rebuild`](Self::end_rebuild).
    pub fn rebuilding<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.begin_rebuild();
        let out = f(self);
        self.end_rebuild();
        out
    }

    /// Pushes `tree` to `surface`.
    ///
    /// On the first render the surface content is replaced wholesale. Later
    /// renders apply the difference: stale edges, then stale nodes, are
    /// removed; surviving nodes are updated only if their position or payload
    /// changed; new nodes, then new edges, are added. Everything happens inside
    /// one [`SYNC_BATCH`], so one sync is one undo step.
    ///
    /// During a rebuild the surface's history recording is switched off for the
    /// duration of the sync and restored afterwards.
    pub fn sync<S, L>(
        &mut self,
        surface: &mut S,
        layout: &L,
        tree: &TreeNode,
        first_render: bool,
    ) -> Result<SyncReport, SyncError>
    where
        S: RenderSurface + ?Sized,
        L: LayoutEngine + ?Sized,
    {
        let laid_out = layout.layout(tree, &self.params);
        let scene = flatten(tree, &laid_out, self.params.node_size)?;

        let was_recording = surface.is_history_recording();
        let suppress = self.guard.is_active();
        if suppress {
            surface.set_history_recording(false);
        }
        surface.start_batch(SYNC_BATCH);
        let mut report = if first_render {
            let report = SyncReport {
                full_load: true,
                nodes_added: scene.nodes.len(),
                edges_added: scene.edges.len(),
                ..SyncReport::default()
            };
            surface.load(scene.nodes, scene.edges);
            report
        } else {
            apply_diff(surface, scene.nodes, scene.edges)
        };
        surface.stop_batch(SYNC_BATCH);
        report.recorded = surface.is_history_recording();
        if suppress {
            surface.set_history_recording(was_recording);
        }

        tracing::debug!(
            full_load = report.full_load,
            nodes_added = report.nodes_added,
            nodes_updated = report.nodes_updated,
            nodes_removed = report.nodes_removed,
            edges_added = report.edges_added,
            edges_removed = report.edges_removed,
            recorded = report.recorded,
            "synced tree to surface"
        );
        Ok(report)
    }

    /// Reads the tree back from the surface's model content.
    ///
    /// See [`tree_from_render`](crate::tree_from_render) for the rules. Failures
    /// are logged; the caller keeps its previous tree.
    pub fn rebuild_from_render<S>(&self, surface: &S) -> Result<TreeNode, SyncError>
    where
        S: RenderSurface + ?Sized,
    {
        let nodes = surface.nodes();
        let edges = surface.edges();
        tree_from_render(&nodes, &edges).map_err(|err| {
            tracing::warn!(%err, "cannot rebuild tree from render state");
            SyncError::from(err)
        })
    }
}

fn apply_diff<S>(surface: &mut S, nodes: Vec<RenderNode>, edges: Vec<RenderEdge>) -> SyncReport
where
    S: RenderSurface + ?Sized,
{
    let mut report = SyncReport::default();

    let fresh_edges: HashMap<&str, &RenderEdge> = edges.iter().map(|e| (e.id.as_str(), e)).collect();

    // Edges whose payload changed are replaced.
    let mut kept_edges = HashSet::new();
    for id in surface.edge_ids() {
        let keep = match (fresh_edges.get(id.as_str()), surface.edge(&id)) {
            (Some(fresh), Some(current)) => **fresh == current,
            _ => false,
        };
        if keep {
            kept_edges.insert(id);
        } else {
            surface.remove_edge(&id);
            report.edges_removed += 1;
        }
    }

    let current_nodes = surface.node_ids();
    {
        let fresh_nodes: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        for id in &current_nodes {
            if !fresh_nodes.contains(id.as_str()) {
                surface.remove_node(id);
                report.nodes_removed += 1;
            }
        }
    }
    let existing_nodes: HashSet<&str> = current_nodes.iter().map(String::as_str).collect();

    let mut created = Vec::new();
    for node in nodes {
        if !existing_nodes.contains(node.id.as_str()) {
            created.push(node);
        } else if surface.node(&node.id).as_ref() != Some(&node) {
            surface.update_node(node);
            report.nodes_updated += 1;
        }
    }
    for node in created {
        surface.add_node(node);
        report.nodes_added += 1;
    }

    for edge in &edges {
        if !kept_edges.contains(edge.id.as_str()) {
            surface.add_edge(edge.clone());
            report.edges_added += 1;
        }
    }
    report
}
