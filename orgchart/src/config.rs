// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration.

use kurbo::Size;
use orgchart_drag::DragConfig;
use orgchart_sync::LayoutParams;

/// Canvas, layout and interaction settings.
///
/// `Default` carries the stock values. With the `serde` feature a partial
/// document deserializes over those defaults:
///
/// ```
/// # #[cfg(feature = "serde")] {
/// let config: orgchart::OrgChartConfig =
///     serde_json::from_str(r#"{ "nodeWidth": 160 }"#).unwrap();
/// assert_eq!(config.node_width, 160.0);
/// assert_eq!(config.node_height, 60.0);
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct OrgChartConfig {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
    /// Canvas background color, as a CSS color string.
    pub background: String,
    /// Width of every node box.
    pub node_width: f64,
    /// Height of every node box.
    pub node_height: f64,
    /// Horizontal gap between neighbouring subtrees.
    pub node_h_gap: f64,
    /// Vertical gap between levels.
    pub node_v_gap: f64,
    /// Pointer travel, per axis, before a press becomes a drag.
    pub drag_threshold: f64,
    /// Minimum time between two drop-target resolutions, in milliseconds.
    pub intersection_check_interval_ms: u64,
    /// Label given to nodes created with [`OrgChart::add_child`](crate::OrgChart::add_child).
    pub new_node_name: String,
}

impl Default for OrgChartConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            background: String::from("#F3F7FF"),
            node_width: 200.0,
            node_height: 60.0,
            node_h_gap: 40.0,
            node_v_gap: 60.0,
            drag_threshold: 5.0,
            intersection_check_interval_ms: 16,
            new_node_name: String::from("New node"),
        }
    }
}

impl OrgChartConfig {
    /// Sets the canvas size.
    #[must_use]
    pub fn with_canvas_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the canvas background color.
    #[must_use]
    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }

    /// Sets the node box size.
    #[must_use]
    pub fn with_node_size(mut self, width: f64, height: f64) -> Self {
        self.node_width = width;
        self.node_height = height;
        self
    }

    /// Sets the horizontal and vertical layout gaps.
    #[must_use]
    pub fn with_gaps(mut self, h_gap: f64, v_gap: f64) -> Self {
        self.node_h_gap = h_gap;
        self.node_v_gap = v_gap;
        self
    }

    /// Sets the drag threshold.
    #[must_use]
    pub fn with_drag_threshold(mut self, threshold: f64) -> Self {
        self.drag_threshold = threshold;
        self
    }

    /// Sets the resolution interval.
    #[must_use]
    pub fn with_intersection_check_interval_ms(mut self, interval: u64) -> Self {
        self.intersection_check_interval_ms = interval;
        self
    }

    /// Sets the label of new nodes.
    #[must_use]
    pub fn with_new_node_name(mut self, name: impl Into<String>) -> Self {
        self.new_node_name = name.into();
        self
    }

    /// Node box size.
    #[must_use]
    pub fn node_size(&self) -> Size {
        Size::new(self.node_width, self.node_height)
    }

    /// Parameters for the layout engine.
    #[must_use]
    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            node_size: self.node_size(),
            h_gap: self.node_h_gap,
            v_gap: self.node_v_gap,
        }
    }

    /// Parameters for drag sessions.
    #[must_use]
    pub fn drag_config(&self) -> DragConfig {
        DragConfig {
            threshold: self.drag_threshold,
            check_interval_ms: self.intersection_check_interval_ms,
        }
    }
}
