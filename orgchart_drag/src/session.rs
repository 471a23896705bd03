// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session: press/move/release bookkeeping for one dragged node.
//!
//! ## Usage
//!
//! 1) Create a session with [`DragSession::press`] when a node is pressed.
//! 2) On each pointer move call [`DragSession::update`]. It returns the delta
//!    since the last move and promotes the session to an active drag once the
//!    pointer has travelled past the threshold.
//! 3) While active, gate the expensive resolution with [`DragSession::ready`]
//!    and keep the latest result with [`DragSession::stage`] or
//!    [`DragSession::clear_staged`].
//! 4) On release, take the staged move with [`DragSession::take_staged`] and drop
//!    the session.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use orgchart_drag::{DragConfig, DragSession};
//!
//! let mut drag = DragSession::press("n1", Point::new(10.0, 20.0), DragConfig::default());
//! assert!(!drag.is_active());
//!
//! // Within the threshold: still a click.
//! drag.update(Point::new(13.0, 22.0));
//! assert!(!drag.is_active());
//!
//! // Past it on one axis: now a drag.
//! drag.update(Point::new(16.0, 22.0));
//! assert!(drag.is_active());
//! assert_eq!(drag.total_offset(Point::new(16.0, 22.0)).x, 6.0);
//! ```

use alloc::string::String;

use kurbo::{Point, Rect, Size, Vec2};
use orgchart_tree::MovePosition;

/// Tuning for drag detection and resolution frequency.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragConfig {
    /// Travel, per axis, that turns a press into a drag. Strictly greater counts.
    pub threshold: f64,
    /// Minimum time between two resolution ticks, in milliseconds.
    pub check_interval_ms: u64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            threshold: 5.0,
            check_interval_ms: 16,
        }
    }
}

/// What a call to [`DragSession::update`] did.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DragUpdate {
    /// Still within the threshold.
    Pending,
    /// This move crossed the threshold.
    Started {
        /// Movement since the previous position.
        delta: Vec2,
    },
    /// An already active drag moved.
    Moved {
        /// Movement since the previous position.
        delta: Vec2,
    },
}

impl DragUpdate {
    /// Movement since the previous position, if the session is active.
    #[must_use]
    pub fn delta(self) -> Option<Vec2> {
        match self {
            Self::Pending => None,
            Self::Started { delta } | Self::Moved { delta } => Some(delta),
        }
    }
}

/// Tracks one press of a node until release.
#[derive(Clone, Debug)]
pub struct DragSession {
    source: String,
    config: DragConfig,
    press_pos: Point,
    last_pos: Point,
    active: bool,
    last_check_ms: Option<u64>,
    staged: Option<MovePosition>,
    preview_shown: bool,
}

impl DragSession {
    /// Starts tracking a press of `source` at `pos`.
    pub fn press(source: impl Into<String>, pos: Point, config: DragConfig) -> Self {
        Self {
            source: source.into(),
            config,
            press_pos: pos,
            last_pos: pos,
            active: false,
            last_check_ms: None,
            staged: None,
            preview_shown: false,
        }
    }

    /// Id of the pressed node.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Where the press happened.
    #[must_use]
    pub fn press_pos(&self) -> Point {
        self.press_pos
    }

    /// The latest pointer position.
    #[must_use]
    pub fn last_pos(&self) -> Point {
        self.last_pos
    }

    /// Returns `true` once the pointer moved past the threshold.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The configuration the session was pressed with.
    #[must_use]
    pub fn config(&self) -> DragConfig {
        self.config
    }

    /// Records a move to `pos`.
    pub fn update(&mut self, pos: Point) -> DragUpdate {
        let delta = pos - self.last_pos;
        self.last_pos = pos;
        if self.active {
            return DragUpdate::Moved { delta };
        }
        let total = self.total_offset(pos);
        if total.x.abs() > self.config.threshold || total.y.abs() > self.config.threshold {
            self.active = true;
            DragUpdate::Started { delta }
        } else {
            DragUpdate::Pending
        }
    }

    /// Offset of `pos` from the press position.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Vec2 {
        pos - self.press_pos
    }

    /// Returns `true`, and records `now_ms`, if a resolution tick may run now.
    ///
    /// The first tick of a session always runs.
    pub fn ready(&mut self, now_ms: u64) -> bool {
        match self.last_check_ms {
            Some(last) if now_ms.saturating_sub(last) < self.config.check_interval_ms => false,
            _ => {
                self.last_check_ms = Some(now_ms);
                true
            }
        }
    }

    /// Stages `position` as the edit to apply on release.
    pub fn stage(&mut self, position: MovePosition) {
        self.staged = Some(position);
    }

    /// Forgets the staged edit.
    pub fn clear_staged(&mut self) {
        self.staged = None;
    }

    /// The staged edit, if any.
    #[must_use]
    pub fn staged(&self) -> Option<&MovePosition> {
        self.staged.as_ref()
    }

    /// Takes the staged edit out of the session.
    pub fn take_staged(&mut self) -> Option<MovePosition> {
        self.staged.take()
    }

    /// Whether a drop preview is currently on screen for this session.
    #[must_use]
    pub fn preview_shown(&self) -> bool {
        self.preview_shown
    }

    /// Records whether a drop preview is on screen.
    pub fn set_preview_shown(&mut self, shown: bool) {
        self.preview_shown = shown;
    }
}

/// Bounds of a ghost of `size` centered on `pos`.
#[must_use]
pub fn ghost_bounds(pos: Point, size: Size) -> Rect {
    Rect::from_center_size(pos, size)
}
