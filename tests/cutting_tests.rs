use tearcloth::{
    nearest_link, Cloth, ClothConfig, Link, NoOpStepObserver, PointMass, SimConfig,
    Simulation, TearCounter, TickInput, Vec2,
};

fn grid() -> Simulation<f32> {
    Simulation::from_config(
        &ClothConfig::new(3, 3, 10.0, Vec2::new(100.0, 100.0)),
        SimConfig::new(),
    )
    .unwrap()
}

#[test]
fn cut_at_midpoint_removes_that_link() {
    let mut sim = grid();
    let target = sim.cloth().links()[4].clone();
    let midpoint = target.midpoint(sim.cloth().points());

    let removed = sim.cut_at(midpoint, &mut NoOpStepObserver).unwrap();
    assert_eq!(removed, target);
    assert_eq!(sim.cloth().link_count(), 11);
    assert!(!sim.cloth().links().contains(&target));
}

#[test]
fn equidistant_links_cut_earlier_one() {
    let mut cloth = Cloth::new();
    let a = cloth.add_point(PointMass::pinned(Vec2::new(100.0, 100.0)));
    let b = cloth.add_point(PointMass::pinned(Vec2::new(110.0, 100.0)));
    let c = cloth.add_point(PointMass::pinned(Vec2::new(120.0, 100.0)));
    let first = Link::new(a, b, cloth.points());
    let second = Link::new(b, c, cloth.points());
    cloth.add_link(first.clone()).unwrap();
    cloth.add_link(second.clone()).unwrap();
    let mut sim = Simulation::new(cloth, SimConfig::new()).unwrap();

    // Midpoints at x=105 and x=115; the cursor sits exactly between them.
    let removed = sim.cut_at(Vec2::new(110.0, 103.0), &mut NoOpStepObserver);
    assert_eq!(removed, Some(first));
    assert_eq!(sim.cloth().links(), &[second]);
}

#[test]
fn cut_requested_through_tick_input() {
    let mut sim = grid();
    let mut counter = TearCounter::default();
    let midpoint = sim.cloth().links()[2].midpoint(sim.cloth().points());

    // Row 0 is pinned, so the horizontal link between pinned points stays put.
    sim.step(&TickInput::cut_at(midpoint), &mut counter);

    assert_eq!(sim.cloth().link_count(), 11);
    assert_eq!(counter.cut, 1);
}

#[test]
fn cut_outside_radius_is_ignored() {
    let mut sim = grid();
    let cloth = sim.cloth();
    let cursor = Vec2::new(500.0, 500.0);
    let nearest = nearest_link(cloth.links(), cloth.points(), cursor).unwrap();
    assert!(nearest.distance > sim.config().cut_radius);

    sim.step(&TickInput::cut_at(cursor), &mut NoOpStepObserver);
    assert_eq!(sim.cloth().link_count(), 12);
}

#[test]
fn cut_on_empty_cloth_is_noop() {
    let mut cloth: Cloth<f32> = Cloth::new();
    cloth.add_point(PointMass::new(Vec2::new(50.0, 50.0), 1.0));
    let mut sim = Simulation::new(cloth, SimConfig::new()).unwrap();
    assert_eq!(sim.cut_at(Vec2::new(50.0, 50.0), &mut NoOpStepObserver), None);
}
