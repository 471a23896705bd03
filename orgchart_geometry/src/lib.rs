// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=orgchart_geometry --heading-base-level=0

//! Orgchart Geometry: overlap and quadrant helpers for drop-target resolution.
//!
//! Two pure functions sit underneath the drag engine:
//!
//! - [`intersection`]: area and center of the axis-aligned overlap of two rectangles.
//! - [`quadrant`]: which of the four directional zones around a center a point falls in.
//!
//! Both work in canvas coordinates, where `y` grows downward. "North" therefore
//! means a smaller `y` than the reference center.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use orgchart_geometry::{Quadrant, intersection, quadrant};
//!
//! let ghost = Rect::new(50.0, 0.0, 150.0, 40.0);
//! let target = Rect::new(0.0, 0.0, 100.0, 100.0);
//!
//! let overlap = intersection(ghost, target);
//! assert_eq!(overlap.area, 2_000.0);
//! assert_eq!(overlap.center, Point::new(75.0, 20.0));
//!
//! // The overlap sits up and to the right of the target's center.
//! assert_eq!(quadrant(overlap.center, target.center()), Quadrant::NorthEast);
//! ```
//!
//! Non-overlapping rectangles are not an error: they produce an empty
//! [`Intersection`], which callers read as "no drop target here".
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Point, Rect};

/// Overlap of two rectangles.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersection {
    /// Area of the overlapping region, `0.0` when the rectangles do not overlap.
    pub area: f64,
    /// Center of the overlapping region, [`Point::ZERO`] when there is no overlap.
    pub center: Point,
}

impl Intersection {
    /// The empty overlap.
    pub const EMPTY: Self = Self {
        area: 0.0,
        center: Point::ZERO,
    };

    /// Returns `true` if the rectangles did not overlap.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.area <= 0.0
    }
}

/// Computes the axis-aligned overlap of `a` and `b`.
///
/// Rectangles that only touch along an edge or a corner do not overlap.
/// Inputs are expected to be finite; unordered rectangles are normalized first.
#[must_use]
pub fn intersection(a: Rect, b: Rect) -> Intersection {
    let a = a.abs();
    let b = b.abs();
    let x0 = a.x0.max(b.x0);
    let y0 = a.y0.max(b.y0);
    let x1 = a.x1.min(b.x1);
    let y1 = a.y1.min(b.y1);
    if x1 <= x0 || y1 <= y0 {
        return Intersection::EMPTY;
    }
    let overlap = Rect::new(x0, y0, x1, y1);
    Intersection {
        area: overlap.area(),
        center: overlap.center(),
    }
}

/// Directional zone of a point relative to a center.
///
/// The numeric codes match the conventional `1..=4` counter-clockwise
/// numbering starting at the top right; `0` is reserved for the degenerate
/// case where the point is the center.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Quadrant {
    /// The point coincides with the center. Callers treat this as "no decision".
    Center = 0,
    /// Right of and above the center.
    NorthEast = 1,
    /// Left of and above the center.
    NorthWest = 2,
    /// Left of and below the center.
    SouthWest = 3,
    /// Right of and below the center.
    SouthEast = 4,
}

impl Quadrant {
    /// Numeric code of the quadrant (`0..=4`).
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Classifies `point` relative to `center`.
///
/// Returns [`Quadrant::Center`] only for an exact match. Points lying on one of
/// the axes are assigned deterministically: `x >= center.x` counts as east and
/// `y <= center.y` counts as north.
#[must_use]
pub fn quadrant(point: Point, center: Point) -> Quadrant {
    if point == center {
        return Quadrant::Center;
    }
    let east = point.x >= center.x;
    let north = point.y <= center.y;
    match (north, east) {
        (true, true) => Quadrant::NorthEast,
        (true, false) => Quadrant::NorthWest,
        (false, false) => Quadrant::SouthWest,
        (false, true) => Quadrant::SouthEast,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disjoint_rects_have_no_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 20.0, 30.0, 30.0);
        let hit = intersection(a, b);
        assert_eq!(hit.area, 0.0);
        assert_eq!(hit.center, Point::ZERO);
        assert!(hit.is_empty());
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 20.0, 10.0);
        assert!(intersection(a, b).is_empty());
    }

    #[test]
    fn rect_with_itself_is_full_area_at_own_center() {
        let r = Rect::new(10.0, 20.0, 110.0, 80.0);
        let hit = intersection(r, r);
        assert_eq!(hit.area, r.width() * r.height());
        assert_eq!(hit.center, r.center());
    }

    #[test]
    fn partial_overlap_is_symmetric() {
        let a = Rect::new(0.0, 0.0, 100.0, 60.0);
        let b = Rect::new(40.0, 30.0, 140.0, 90.0);
        let ab = intersection(a, b);
        let ba = intersection(b, a);
        assert_eq!(ab, ba);
        assert_eq!(ab.area, 60.0 * 30.0);
        assert_eq!(ab.center, Point::new(70.0, 45.0));
    }

    #[test]
    fn contained_rect_overlap_is_inner_rect() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(25.0, 25.0, 50.0, 75.0);
        let hit = intersection(outer, inner);
        assert_eq!(hit.area, inner.area());
        assert_eq!(hit.center, inner.center());
    }

    #[test]
    fn strict_quadrants() {
        let c = Point::new(50.0, 50.0);
        assert_eq!(quadrant(Point::new(60.0, 40.0), c), Quadrant::NorthEast);
        assert_eq!(quadrant(Point::new(40.0, 40.0), c), Quadrant::NorthWest);
        assert_eq!(quadrant(Point::new(40.0, 60.0), c), Quadrant::SouthWest);
        assert_eq!(quadrant(Point::new(60.0, 60.0), c), Quadrant::SouthEast);
    }

    #[test]
    fn center_is_degenerate() {
        let c = Point::new(12.5, -3.0);
        assert_eq!(quadrant(c, c), Quadrant::Center);
        assert_eq!(quadrant(c, c).code(), 0);
    }

    #[test]
    fn axis_points_are_assigned_deterministically() {
        let c = Point::new(0.0, 0.0);
        // Straight up and straight right both land in the north-east zone.
        assert_eq!(quadrant(Point::new(0.0, -5.0), c), Quadrant::NorthEast);
        assert_eq!(quadrant(Point::new(5.0, 0.0), c), Quadrant::NorthEast);
        assert_eq!(quadrant(Point::new(-5.0, 0.0), c), Quadrant::NorthWest);
        assert_eq!(quadrant(Point::new(0.0, 5.0), c), Quadrant::SouthEast);
    }

    #[test]
    fn codes_match_numbering() {
        assert_eq!(Quadrant::NorthEast.code(), 1);
        assert_eq!(Quadrant::NorthWest.code(), 2);
        assert_eq!(Quadrant::SouthWest.code(), 3);
        assert_eq!(Quadrant::SouthEast.code(), 4);
    }
}
