// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared setup for the orgchart demos.

use orgchart::{OrgChartConfig, TreeNode};
use orgchart_headless::MemorySurface;
use orgchart_sync::RenderSurface;
use tracing_subscriber::EnvFilter;

const SAMPLE_ORG: &str = include_str!("../data/org.json");
const SAMPLE_CONFIG: &str = include_str!("../data/config.json");

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// The bundled sample organization.
pub fn sample_org() -> Result<TreeNode, serde_json::Error> {
    serde_json::from_str(SAMPLE_ORG)
}

/// The bundled partial configuration, merged over the defaults.
pub fn sample_config() -> Result<OrgChartConfig, serde_json::Error> {
    serde_json::from_str(SAMPLE_CONFIG)
}

/// Prints every node on `surface` with its top-left corner.
pub fn print_surface(surface: &MemorySurface) {
    for node in surface.nodes() {
        let marker = if node.is_root { " (root)" } else { "" };
        println!(
            "  {:<12} {:<16} at ({:>6.1}, {:>6.1}){marker}",
            node.id, node.label, node.position.x, node.position.y
        );
    }
}
