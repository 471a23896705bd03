// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Undo/redo stacks of model changes.

use orgchart_sync::{RenderEdge, RenderNode};

/// One recorded model change.
#[derive(Clone, Debug, PartialEq)]
pub enum Change {
    /// A node was added.
    AddNode(RenderNode),
    /// A node was removed.
    RemoveNode(RenderNode),
    /// A node was replaced.
    UpdateNode {
        /// Before the change.
        before: RenderNode,
        /// After the change.
        after: RenderNode,
    },
    /// An edge was added.
    AddEdge(RenderEdge),
    /// An edge was removed.
    RemoveEdge(RenderEdge),
    /// All model content was replaced.
    Load {
        /// Content before the load.
        before: (Vec<RenderNode>, Vec<RenderEdge>),
        /// Content after the load.
        after: (Vec<RenderNode>, Vec<RenderEdge>),
    },
}

impl Change {
    /// The change that undoes this one.
    #[must_use]
    pub fn inverse(&self) -> Self {
        match self {
            Self::AddNode(node) => Self::RemoveNode(node.clone()),
            Self::RemoveNode(node) => Self::AddNode(node.clone()),
            Self::UpdateNode { before, after } => Self::UpdateNode {
                before: after.clone(),
                after: before.clone(),
            },
            Self::AddEdge(edge) => Self::RemoveEdge(edge.clone()),
            Self::RemoveEdge(edge) => Self::AddEdge(edge.clone()),
            Self::Load { before, after } => Self::Load {
                before: after.clone(),
                after: before.clone(),
            },
        }
    }
}

/// Grouped undo/redo stacks.
///
/// Changes recorded between [`begin`](Self::begin) and [`end`](Self::end) form
/// one undo step; nested groups merge into the outermost one. Outside a group
/// every change is its own step. Recording a new step clears the redo stack.
#[derive(Clone, Debug)]
pub struct History {
    undo: Vec<Vec<Change>>,
    redo: Vec<Vec<Change>>,
    open: Vec<Change>,
    depth: u32,
    enabled: bool,
}

impl Default for History {
    fn default() -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            open: Vec::new(),
            depth: 0,
            enabled: true,
        }
    }
}

impl History {
    /// Whether changes are recorded.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Switches recording on or off.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Records `change` if recording is on.
    pub fn record(&mut self, change: Change) {
        if !self.enabled {
            return;
        }
        if self.depth > 0 {
            self.open.push(change);
        } else {
            self.push_step(vec![change]);
        }
    }

    /// Opens a group.
    pub fn begin(&mut self) {
        self.depth += 1;
    }

    /// Closes a group. The outermost close turns the group into one step.
    pub fn end(&mut self) {
        if self.depth == 0 {
            return;
        }
        self.depth -= 1;
        if self.depth == 0 && !self.open.is_empty() {
            let step = std::mem::take(&mut self.open);
            self.push_step(step);
        }
    }

    /// Number of steps that can be undone.
    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    /// Number of steps that can be redone.
    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Pops the latest step and returns the changes that revert it, in apply order.
    pub fn take_undo(&mut self) -> Option<Vec<Change>> {
        let step = self.undo.pop()?;
        let revert = step.iter().rev().map(Change::inverse).collect();
        self.redo.push(step);
        Some(revert)
    }

    /// Pops the latest undone step and returns its changes, in apply order.
    pub fn take_redo(&mut self) -> Option<Vec<Change>> {
        let step = self.redo.pop()?;
        let replay = step.clone();
        self.undo.push(step);
        Some(replay)
    }

    fn push_step(&mut self, step: Vec<Change>) {
        self.undo.push(step);
        self.redo.clear();
    }
}
