// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where to draw the drop marker for a staged move.

use alloc::string::String;

use kurbo::{Point, Rect, Size, Vec2};
use orgchart_tree::{MovePosition, TreeStore};

/// Size of the drop marker.
pub const PREVIEW_SIZE: Size = Size::new(100.0, 28.0);

/// Marker offset from a node that already occupies the insertion slot.
const BEFORE_OCCUPANT: Vec2 = Vec2::new(-60.0, -10.0);
/// Marker offset from a parent without children.
const BELOW_PARENT: Vec2 = Vec2::new(10.0, 120.0);
/// Marker offset from the last child when appending.
const AFTER_LAST_CHILD: Vec2 = Vec2::new(100.0, -10.0);

/// Drop marker geometry for a staged move.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewPlacement {
    /// The node the preview edge starts from.
    pub parent: String,
    /// Marker bounds in canvas coordinates.
    pub bounds: Rect,
}

/// Places the drop marker for `position`.
///
/// `position_of` returns the top-left corner of a rendered node. The marker is
/// placed next to the node currently in the insertion slot, below the parent
/// when it has no children, or after the last child otherwise.
///
/// Returns `None` for positions next to the root, for unknown parents, and
/// when `position_of` does not know the anchor node.
pub fn preview_placement(
    store: &TreeStore,
    position: &MovePosition,
    position_of: impl Fn(&str) -> Option<Point>,
) -> Option<PreviewPlacement> {
    let parent_id = position.parent.id()?;
    let parent = store.find_by_id(parent_id)?;
    let index = position.insert_index.resolve(parent.children.len());
    let origin = match (parent.children.get(index), parent.children.last()) {
        (Some(occupant), _) => position_of(&occupant.id)? + BEFORE_OCCUPANT,
        (None, None) => position_of(&parent.id)? + BELOW_PARENT,
        (None, Some(last)) => position_of(&last.id)? + AFTER_LAST_CHILD,
    };
    Some(PreviewPlacement {
        parent: String::from(parent_id),
        bounds: Rect::from_origin_size(origin, PREVIEW_SIZE),
    })
}
