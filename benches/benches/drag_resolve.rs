// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Vec2};
use orgchart_drag::{ghost_bounds, resolve};
use orgchart_headless::SlotLayout;
use orgchart_sync::{LayoutEngine, LayoutParams, flatten};
use orgchart_tree::{TreeNode, TreeStore};

/// A complete tree with `fanout` children per inner node.
fn org(fanout: usize, depth: usize) -> TreeNode {
    fn build(next: &mut usize, fanout: usize, depth: usize) -> TreeNode {
        let id = format!("n{next}");
        *next += 1;
        let mut node = TreeNode::new(id.as_str(), id.as_str());
        if depth > 0 {
            for _ in 0..fanout {
                node.children.push(build(next, fanout, depth - 1));
            }
        }
        node
    }
    build(&mut 0, fanout, depth)
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag/resolve");
    let params = LayoutParams::default();

    for (fanout, depth) in [(4_usize, 3_usize), (8, 3), (4, 6)] {
        let tree = org(fanout, depth);
        let laid_out = SlotLayout.layout(&tree, &params);
        let scene = flatten(&tree, &laid_out, params.node_size).unwrap();
        let store = TreeStore::new(&tree).unwrap();
        let bounds: Vec<(String, Rect)> = scene
            .nodes
            .iter()
            .map(|n| (n.id.clone(), n.bounds()))
            .collect();

        // Drag the last leaf over the lower-right corner of the middle leaf.
        let source = scene.nodes.last().unwrap().id.clone();
        let anchor = &scene.nodes[scene.nodes.len() / 2];
        let ghost = ghost_bounds(
            anchor.bounds().center() + Vec2::new(60.0, 20.0),
            params.node_size,
        );

        group.throughput(Throughput::Elements(bounds.len() as u64));

        // Every rendered node is offered, as a surface without spatial indexing would.
        group.bench_with_input(
            BenchmarkId::new("all_nodes", bounds.len()),
            &bounds,
            |b, bounds| {
                b.iter(|| {
                    black_box(resolve(
                        &store,
                        &source,
                        "ghost",
                        ghost,
                        bounds.iter().map(|(id, r)| (id.as_str(), *r)),
                    ))
                });
            },
        );

        let nearby: Vec<(String, Rect)> = bounds
            .iter()
            .filter(|(_, r)| r.intersect(ghost).area() > 0.0)
            .cloned()
            .collect();
        group.bench_with_input(
            BenchmarkId::new("area_query", bounds.len()),
            &nearby,
            |b, nearby| {
                b.iter(|| {
                    black_box(resolve(
                        &store,
                        &source,
                        "ghost",
                        ghost,
                        nearby.iter().map(|(id, r)| (id.as_str(), *r)),
                    ))
                });
            },
        );
    }

    group.finish();
}

fn bench_ghost(c: &mut Criterion) {
    let size = LayoutParams::default().node_size;
    c.bench_function("drag/ghost_bounds", |b| {
        b.iter(|| black_box(ghost_bounds(black_box(Point::new(512.0, 384.0)), size)));
    });
}

criterion_group!(benches, bench_resolve, bench_ghost);
criterion_main!(benches);
