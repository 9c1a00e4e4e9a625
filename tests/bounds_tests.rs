use tearcloth::{Cloth, NoOpStepObserver, PointMass, SimConfig, Simulation, TickInput, Vec2};

fn lone_point(point: PointMass<f32>) -> Simulation<f32> {
    let mut cloth = Cloth::new();
    cloth.add_point(point);
    Simulation::new(cloth, SimConfig::new().with_viewport(1200.0, 800.0).with_radius(1.0)).unwrap()
}

#[test]
fn left_wall_clamps_and_flips_vertical_velocity() {
    let mut sim = lone_point(PointMass::with_velocity(
        Vec2::new(-5.0, 50.0),
        Vec2::new(-2.0, -2.0),
        1.0,
    ));

    sim.step(&TickInput::idle(), &mut NoOpStepObserver);

    let p = sim.cloth().point(0);
    assert_eq!(p.pos.x, 1.0);
    // prev_pos - pos is the bounced velocity: x keeps its sign, y is flipped.
    let bounced = p.prev_pos - p.pos;
    assert!(bounced.x < 0.0, "x component should keep its sign, got {}", bounced.x);
    assert!(bounced.y > 0.0, "y component should flip, got {}", bounced.y);
    // (-2, -2) * drag, y flipped, times bounce.
    let expected = 2.0 * 0.99 * 0.3;
    assert!((bounced.x + expected).abs() < 1e-4);
    assert!((bounced.y - expected).abs() < 1e-4);
}

#[test]
fn floor_stops_a_falling_point() {
    let mut sim = lone_point(PointMass::new(Vec2::new(600.0, 780.0), 1.0));

    for _ in 0..200 {
        sim.step(&TickInput::idle(), &mut NoOpStepObserver);
        let p = sim.cloth().point(0);
        assert!(p.pos.y <= 799.0, "point sank through the floor: {}", p.pos.y);
        assert!(p.pos.y >= 1.0);
    }
}

#[test]
fn pinned_point_outside_walls_is_left_alone() {
    let mut sim = lone_point(PointMass::pinned(Vec2::new(-20.0, -20.0)));
    sim.step(&TickInput::idle(), &mut NoOpStepObserver);
    assert_eq!(sim.cloth().point(0).pos, Vec2::new(-20.0, -20.0));
}
