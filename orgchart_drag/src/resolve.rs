// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drop-target resolution: from a ghost box and overlapping nodes to a [`MovePosition`].
//!
//! ## Algorithm
//!
//! 1) Score every candidate: overlap area with the ghost, overlap center, and the
//!    [`Quadrant`] of that center relative to the candidate's own center.
//! 2) The candidate with the largest overlap is the drop target. Exact ties keep
//!    the candidate seen first.
//! 3) Map `(target, quadrant)` to a structural edit:
//!    - north-east: sibling after the target,
//!    - north-west: sibling before the target,
//!    - south-west: first child of the target,
//!    - south-east: last child of the target.
//!
//!    For the root target the sibling cases are expressed against
//!    [`MoveParent::VirtualRoot`]; the store refuses those on commit.
//! 4) If the dragged node already sits at the resulting slot, report
//!    [`Resolution::Redundant`] so the drop does not produce an empty edit.

use alloc::string::String;

use kurbo::{Point, Rect};
use orgchart_geometry::{Quadrant, intersection, quadrant};
use orgchart_tree::{InsertIndex, MoveParent, MovePosition, TreeStore};
use smallvec::SmallVec;

/// A candidate scored against the ghost.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredCandidate<'a> {
    /// Candidate id.
    pub id: &'a str,
    /// Overlap area with the ghost.
    pub area: f64,
    /// Center of the overlap.
    pub overlap_center: Point,
    /// Center of the candidate's own box.
    pub node_center: Point,
    /// Quadrant of `overlap_center` relative to `node_center`.
    pub quadrant: Quadrant,
}

/// Why resolution produced no edit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NoDecision {
    /// Nothing overlaps the ghost.
    NoCandidates,
    /// The overlap center coincides with the target's center.
    CenterHit,
    /// The target is the dragged node or one of its descendants.
    InsideDraggedSubtree,
}

/// Outcome of one resolution tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Releasing now would perform this edit.
    Move {
        /// The drop target.
        target: String,
        /// The quadrant that selected the edit.
        quadrant: Quadrant,
        /// The edit to stage.
        position: MovePosition,
    },
    /// Releasing now would put the node back where it already is.
    Redundant {
        /// The drop target.
        target: String,
    },
    /// No edit; any staged edit should be cleared.
    None(NoDecision),
}

impl Resolution {
    /// The edit to stage, if any.
    #[must_use]
    pub fn position(&self) -> Option<&MovePosition> {
        match self {
            Self::Move { position, .. } => Some(position),
            Self::Redundant { .. } | Self::None(_) => None,
        }
    }

    /// Consumes the resolution and returns the edit to stage, if any.
    #[must_use]
    pub fn into_position(self) -> Option<MovePosition> {
        match self {
            Self::Move { position, .. } => Some(position),
            Self::Redundant { .. } | Self::None(_) => None,
        }
    }
}

/// Scores `candidates` against `ghost`.
///
/// Candidates that do not overlap at all are dropped. Order is preserved.
pub fn score_candidates<'a, I>(ghost: Rect, candidates: I) -> SmallVec<[ScoredCandidate<'a>; 8]>
where
    I: IntoIterator<Item = (&'a str, Rect)>,
{
    candidates
        .into_iter()
        .filter_map(|(id, bounds)| {
            let overlap = intersection(ghost, bounds);
            if overlap.is_empty() {
                return None;
            }
            let node_center = bounds.center();
            Some(ScoredCandidate {
                id,
                area: overlap.area,
                overlap_center: overlap.center,
                node_center,
                quadrant: quadrant(overlap.center, node_center),
            })
        })
        .collect()
}

/// The candidate with the largest overlap. The first one wins exact ties.
#[must_use]
pub fn pick_drop_target<'s, 'a>(
    scored: &'s [ScoredCandidate<'a>],
) -> Option<&'s ScoredCandidate<'a>> {
    let mut best: Option<&ScoredCandidate<'a>> = None;
    for candidate in scored {
        if best.is_none_or(|b| candidate.area > b.area) {
            best = Some(candidate);
        }
    }
    best
}

/// Maps a drop on `target` in `quadrant` to an edit.
///
/// Returns `None` for [`Quadrant::Center`] or when `target` is not in the store.
#[must_use]
pub fn position_for(store: &TreeStore, target: &str, quadrant: Quadrant) -> Option<MovePosition> {
    let located = store.find_with_parent(target)?;
    let sibling_parent = || match located.parent {
        Some(parent) => MoveParent::Node(parent.id.clone()),
        None => MoveParent::VirtualRoot,
    };
    match quadrant {
        Quadrant::NorthEast => Some(MovePosition::sibling(
            sibling_parent(),
            located.sibling_index + 1,
        )),
        Quadrant::NorthWest => Some(MovePosition::sibling(
            sibling_parent(),
            located.sibling_index,
        )),
        Quadrant::SouthWest => Some(MovePosition::child(target, InsertIndex::At(0))),
        Quadrant::SouthEast => Some(MovePosition::child(
            target,
            InsertIndex::At(located.node.children.len()),
        )),
        Quadrant::Center => None,
    }
}

/// Returns `true` if moving `source` to `position` would leave the tree unchanged.
///
/// That is the case when the source already has the same parent and the slot
/// is either its own index or the one right after it. The root is redundant
/// against either slot of [`MoveParent::VirtualRoot`]. Sources that are not in
/// the store are never redundant.
#[must_use]
pub fn is_redundant(store: &TreeStore, source: &str, position: &MovePosition) -> bool {
    let Some(located) = store.find_with_parent(source) else {
        return false;
    };
    let index = match (located.parent, &position.parent) {
        (Some(parent), MoveParent::Node(target_parent)) if parent.id == *target_parent => {
            position.insert_index.resolve(parent.children.len())
        }
        (None, MoveParent::VirtualRoot) => position.insert_index.resolve(1),
        _ => return false,
    };
    index == located.sibling_index || index == located.sibling_index + 1
}

/// Runs one resolution tick for the node `source` dragged as `ghost`.
///
/// `candidates` are the boxes the render collaborator reports as overlapping
/// the ghost. The source and `ghost_id` are skipped, as are ids the store does
/// not know (overlays such as a drop preview).
pub fn resolve<'a, I>(
    store: &TreeStore,
    source: &str,
    ghost_id: &str,
    ghost: Rect,
    candidates: I,
) -> Resolution
where
    I: IntoIterator<Item = (&'a str, Rect)>,
{
    let filtered = candidates
        .into_iter()
        .filter(|(id, _)| *id != source && *id != ghost_id && store.contains(id));
    let scored = score_candidates(ghost, filtered);
    let Some(best) = pick_drop_target(&scored) else {
        return Resolution::None(NoDecision::NoCandidates);
    };

    if store.is_in_subtree(source, best.id) {
        tracing::debug!(target_id = best.id, "drop target lies inside the dragged subtree");
        return Resolution::None(NoDecision::InsideDraggedSubtree);
    }
    let Some(position) = position_for(store, best.id, best.quadrant) else {
        return Resolution::None(NoDecision::CenterHit);
    };
    if is_redundant(store, source, &position) {
        tracing::debug!(target_id = best.id, "drop would not change the tree");
        return Resolution::Redundant {
            target: String::from(best.id),
        };
    }
    tracing::debug!(
        target_id = best.id,
        quadrant = best.quadrant.code(),
        area = best.area,
        "resolved drop position"
    );
    Resolution::Move {
        target: String::from(best.id),
        quadrant: best.quadrant,
        position,
    }
}
