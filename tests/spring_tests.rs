use locus::{Node, NodeId, PhysicsError, Spring, Vec2, World, WorldConfig};

fn pair(world: &mut World<f64>, b_x: f64) -> (NodeId, NodeId) {
    let a = world.create_node();
    let b = world.create_node();
    world.node_mut(b).teleport(Vec2::new(b_x, 0.0));
    (a, b)
}

fn world() -> World<f64> {
    World::new(WorldConfig::new().with_friction(0.0).with_initial_dt(1.0 / 60.0))
}

#[test]
fn rest_length_is_captured_at_construction() {
    let mut w = world();
    let (a, b) = pair(&mut w, 10.0);
    let spring = Spring::between(a, b, w.nodes(), 0.5).unwrap();
    assert_eq!(spring.rest_length, 10.0);
}

#[test]
fn stretched_spring_pulls_symmetrically() {
    let mut w = world();
    let (a, b) = pair(&mut w, 10.0);
    let spring = Spring::between(a, b, w.nodes(), 1.0).unwrap();

    let mut nodes = [Node::new(Vec2::new(0.0, 0.0)), Node::new(Vec2::new(14.0, 0.0))];
    spring.solve(&mut nodes);

    assert!((nodes[0].pos.x - 2.0).abs() < 1e-9);
    assert!((nodes[1].pos.x - 12.0).abs() < 1e-9);
    assert!((nodes[0].pos.distance(nodes[1].pos) - 10.0).abs() < 1e-9);
}

#[test]
fn compressed_spring_pushes_symmetrically() {
    let mut w = world();
    let (a, b) = pair(&mut w, 10.0);
    let spring = Spring::between(a, b, w.nodes(), 1.0).unwrap();

    let mut nodes = [Node::new(Vec2::new(0.0, 0.0)), Node::new(Vec2::new(6.0, 0.0))];
    spring.solve(&mut nodes);

    assert!((nodes[0].pos.x + 2.0).abs() < 1e-9);
    assert!((nodes[1].pos.x - 8.0).abs() < 1e-9);
}

#[test]
fn partial_stiffness_corrects_partially() {
    let mut w = world();
    let (a, b) = pair(&mut w, 10.0);
    let spring = Spring::between(a, b, w.nodes(), 0.5).unwrap();

    let mut nodes = [Node::new(Vec2::new(0.0, 0.0)), Node::new(Vec2::new(14.0, 0.0))];
    spring.solve(&mut nodes);

    let dist = nodes[0].pos.distance(nodes[1].pos);
    assert!((dist - 12.0).abs() < 1e-9, "half the error should remain, got {}", dist);
}

#[test]
fn zero_stiffness_does_nothing() {
    let mut w = world();
    let (a, b) = pair(&mut w, 10.0);
    let spring = Spring::between(a, b, w.nodes(), 0.0).unwrap();

    let mut nodes = [Node::new(Vec2::new(0.0, 0.0)), Node::new(Vec2::new(30.0, 5.0))];
    spring.solve(&mut nodes);

    assert_eq!(nodes[0].pos, Vec2::new(0.0, 0.0));
    assert_eq!(nodes[1].pos, Vec2::new(30.0, 5.0));
}

#[test]
fn connected_nodes_settle_near_rest_length() {
    let mut w = World::new(WorldConfig::new().with_friction(0.2).with_initial_dt(1.0 / 60.0));
    let (a, b) = pair(&mut w, 5.0);
    w.connect(a, b, 0.8).unwrap();
    assert_eq!(w.constraint_count(), 1);

    w.node_mut(b).nudge(Vec2::new(6.0, 3.0));
    for _ in 0..300 {
        w.step(1.0 / 60.0);
    }

    let dist = w.node(a).pos.distance(w.node(b).pos);
    assert!((dist - 5.0).abs() < 0.05, "distance should settle near 5.0, got {}", dist);
}

#[test]
fn connect_rejects_bad_input() {
    let mut w = world();
    let (a, b) = pair(&mut w, 1.0);

    assert_eq!(w.connect(a, b, -0.1), Err(PhysicsError::InvalidStiffness));
    assert_eq!(w.connect(a, b, f64::NAN), Err(PhysicsError::InvalidStiffness));

    let mut other = world();
    for _ in 0..5 {
        other.create_node();
    }
    let far = other.create_node();
    assert_eq!(
        w.connect(a, far, 0.5),
        Err(PhysicsError::NodeOutOfBounds { index: 5, count: 2 })
    );
    assert_eq!(w.constraint_count(), 0);
}
