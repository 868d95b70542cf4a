//! Benchmarks for world stepping, transform chains and mesh building.

use criterion::{criterion_group, criterion_main, Criterion};
use locus::{Drift, Locus2D, LocusTree, RenderMesh2D, Seek, Vec2, World, WorldConfig};

fn bench_world_step(c: &mut Criterion) {
    c.bench_function("world_200_nodes_springs_60_steps", |b| {
        b.iter(|| {
            let mut world: World<f32> = World::new(WorldConfig::new().with_friction(0.05));
            let ids: Vec<_> = (0..200).map(|_| world.create_node()).collect();
            for (i, &id) in ids.iter().enumerate() {
                world.node_mut(id).teleport(Vec2::new(i as f32 * 2.0, 0.0));
            }
            for pair in ids.windows(2) {
                world.connect(pair[0], pair[1], 0.8).unwrap();
            }
            world.add_effector(Drift::new(Vec2::new(0.0, 0.1)));
            world.add_effector(Seek::new(Vec2::new(200.0, 0.0), 0.001));
            for _ in 0..60 {
                world.step(1.0 / 60.0);
            }
            world.positions()
        });
    });
}

fn bench_deep_locus_chain(c: &mut Criterion) {
    let mut tree: LocusTree<f32> = LocusTree::new();
    let mut parent = tree.insert(Locus2D::new());
    for i in 0..32 {
        let child = tree.insert(
            Locus2D::at(Vec2::new(1.0, 0.0))
                .with_rotation(0.05 * i as f32)
                .with_registration_point(Vec2::new(0.5, 0.5)),
        );
        tree.set_parent(child, Some(parent)).unwrap();
        parent = child;
    }
    let leaf = parent;
    c.bench_function("locus_depth_32_to_matrix", |b| {
        b.iter(|| tree.to_matrix(leaf));
    });
}

fn bench_ribbon(c: &mut Criterion) {
    let skeleton: Vec<_> = (0..256)
        .map(|i| {
            let t = i as f32 * 0.1;
            Vec2::new(t * 10.0, t.sin() * 20.0)
        })
        .collect();
    c.bench_function("ribbon_256_points", |b| {
        let mut mesh = RenderMesh2D::default();
        b.iter(|| {
            mesh.set_as_ribbon(&skeleton, 4.0, false).unwrap();
            mesh.len()
        });
    });
}

criterion_group!(benches, bench_world_step, bench_deep_locus_chain, bench_ribbon);
criterion_main!(benches);
