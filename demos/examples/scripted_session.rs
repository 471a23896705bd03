// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted editing session against the headless surface.
//!
//! Loads the bundled organization, drags a team under another, adds a node
//! and labels it and its edge, deletes one, then undoes the deletion and
//! prints the rebuilt tree as JSON.
//!
//! Run:
//! - `cargo run -p orgchart_demos --example scripted_session`
//! - `RUST_LOG=debug cargo run -p orgchart_demos --example scripted_session` for
//!   drop-target and sync details

use std::error::Error;

use kurbo::Point;
use orgchart::{HistoryEvent, OrgChart, PointerTarget};
use orgchart_demos::{init_tracing, print_surface, sample_config, sample_org};
use orgchart_headless::{MemorySurface, SlotLayout};

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let config = sample_config()?;
    let mut chart = OrgChart::initialize(MemorySurface::new(), SlotLayout, config);
    chart.set_tree_data_sync_callback(|tree| {
        tracing::info!(nodes = tree.len(), "tree rebuilt from surface");
    });
    chart.render_data(&sample_org()?, true)?;
    println!("initial layout:");
    print_surface(chart.surface());

    // Payroll sits at (368, 240). Drag it onto the lower-right part of
    // Applications at (184, 240) so it becomes its first child.
    chart.pointer_down("payroll", Point::new(448.0, 270.0));
    chart.pointer_move(Point::new(440.0, 270.0), 0);
    if let Some(resolution) = chart.pointer_move(Point::new(330.0, 290.0), 20) {
        tracing::info!(?resolution, "drop target");
    }
    let outcome = chart.pointer_up(PointerTarget::Node("apps".into()));
    tracing::info!(?outcome, "released");

    let hire = chart.add_child("cfo")?;
    chart.edit_label(&hire, "Treasury")?;
    chart.edit_edge_label(&hire, "interim")?;

    chart.surface_mut().select(Some("platform"));
    if let Some(removed) = chart.delete_selected() {
        tracing::info!(name = %removed.name, nodes = removed.len(), "deleted subtree");
    }
    println!("after edits:");
    print_surface(chart.surface());

    if chart.surface_mut().undo() {
        chart.history_changed(HistoryEvent::Undo)?;
    }
    println!("after undo:");
    print_surface(chart.surface());

    if let Some(tree) = chart.tree() {
        println!("{}", serde_json::to_string_pretty(tree)?);
    }
    Ok(())
}
