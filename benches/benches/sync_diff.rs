// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use orgchart_headless::{MemorySurface, SlotLayout};
use orgchart_sync::{LayoutParams, Reconciler};
use orgchart_tree::{InsertIndex, MovePosition, TreeNode, TreeStore};

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

/// `tree` with its first grandchild subtree moved under the last child of the root.
fn moved(tree: &TreeNode) -> TreeNode {
    let mut store = TreeStore::new(tree).unwrap();
    let source = tree.children[0].children[0].id.clone();
    let parent = tree.children.last().unwrap().id.clone();
    store
        .move_node(&source, &MovePosition::child(parent, InsertIndex::At(0)))
        .unwrap();
    store.into_tree()
}

fn loaded(tree: &TreeNode) -> MemorySurface {
    let mut surface = MemorySurface::new();
    Reconciler::new(LayoutParams::default())
        .sync(&mut surface, &SlotLayout, tree, true)
        .unwrap();
    surface
}

fn bench_sync(c: &mut Criterion) {
    let mut group = c.benchmark_group("sync");
    let mut reconciler = Reconciler::new(LayoutParams::default());

    for (fanout, depth) in [(4_usize, 3_usize), (4, 5), (8, 4)] {
        let before = org(fanout, depth);
        let after = moved(&before);
        let n = before.len();
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("first_render", n), &before, |b, tree| {
            b.iter_batched(
                MemorySurface::new,
                |mut surface| {
                    black_box(reconciler.sync(&mut surface, &SlotLayout, tree, true))
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("noop", n), &before, |b, tree| {
            b.iter_batched(
                || loaded(tree),
                |mut surface| {
                    black_box(reconciler.sync(&mut surface, &SlotLayout, tree, false))
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("move_diff", n), &after, |b, tree| {
            b.iter_batched(
                || loaded(&before),
                |mut surface| {
                    black_box(reconciler.sync(&mut surface, &SlotLayout, tree, false))
                },
                BatchSize::LargeInput,
            );
        });

        let surface = loaded(&before);
        group.bench_with_input(BenchmarkId::new("rebuild", n), &surface, |b, surface| {
            b.iter(|| black_box(reconciler.rebuild_from_render(surface)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sync);
criterion_main!(benches);
