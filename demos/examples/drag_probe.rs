// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drop-target probe.
//!
//! Sweeps the drag ghost across the bundled organization and prints what a
//! release at each point would do. Committed moves are reverted by rendering
//! the original tree again.
//!
//! Run:
//! - `cargo run -p orgchart_demos --example drag_probe`

use std::error::Error;

use kurbo::Point;
use orgchart::{OrgChart, PointerTarget, ReleaseOutcome, Resolution};
use orgchart_demos::{init_tracing, sample_config, sample_org};
use orgchart_headless::{MemorySurface, SlotLayout};

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let config = sample_config()?.with_intersection_check_interval_ms(0);
    let mut chart = OrgChart::initialize(MemorySurface::new(), SlotLayout, config);
    let org = sample_org()?;
    chart.render_data(&org, true)?;

    let press = Point::new(448.0, 270.0);
    for y in [20.0, 140.0, 260.0, 290.0] {
        for x in [60.0, 200.0, 300.0, 440.0] {
            chart.pointer_down("payroll", press);
            let point = Point::new(x, y);
            let line = match chart.pointer_move(point, 0) {
                Some(Resolution::Move {
                    target,
                    quadrant,
                    position,
                }) => format!("{quadrant:?} of {target}: {position}"),
                Some(Resolution::Redundant { target }) => format!("already next to {target}"),
                Some(Resolution::None(reason)) => format!("no drop ({reason:?})"),
                None => String::from("within threshold"),
            };
            println!("({x:>5.1}, {y:>5.1})  {line}");
            if let ReleaseOutcome::Moved(_) = chart.pointer_up(PointerTarget::Blank) {
                chart.render_data(&org, false)?;
            }
        }
    }
    Ok(())
}
