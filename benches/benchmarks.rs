//! Performance benchmarks for matwiz

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use matwiz::test_utils::{full_tree, simulate};
use matwiz::{MatrixTree, NodeId, OutputConfig, TraversalState, TreeFormatter, next_node};

fn bench_full_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_session");

    let small = full_tree(2, 3);
    let medium = full_tree(4, 4);
    let large = full_tree(6, 4);

    group.bench_function("binary_depth_3", |b| b.iter(|| simulate(black_box(&small))));
    group.bench_function("fanout_4_depth_4", |b| {
        b.iter(|| simulate(black_box(&medium)))
    });
    group.bench_function("fanout_6_depth_4", |b| b.iter(|| simulate(black_box(&large))));

    group.finish();
}

fn bench_single_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_step");

    // The last leaf has to climb all the way back to the root
    let (_order, store) = simulate(&full_tree(4, 6));
    let deepest = NodeId::parse("0333333").expect("valid id");

    group.bench_function("ascend_from_last_leaf", |b| {
        b.iter(|| {
            let mut state = TraversalState::resumed();
            next_node(black_box(&deepest), &store, &mut state)
        })
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let (_order, store) = simulate(&full_tree(4, 5));
    let tree = MatrixTree::from_store(&store);
    let formatter = TreeFormatter::new(OutputConfig { use_color: false });

    c.bench_function("build_matrix_tree", |b| {
        b.iter(|| MatrixTree::from_store(black_box(&store)))
    });
    c.bench_function("format_tree", |b| b.iter(|| formatter.format(black_box(&tree))));
}

criterion_group!(benches, bench_full_session, bench_single_step, bench_render);
criterion_main!(benches);
