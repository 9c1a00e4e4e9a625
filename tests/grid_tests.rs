use tearcloth::{Cloth, ClothConfig, ClothError, Material, NoOpStepObserver, SimConfig, Simulation, TickInput, Vec2};

#[test]
fn three_by_three_grid() {
    let cloth = Cloth::build(&ClothConfig::new(3, 3, 10.0f32, Vec2::new(0.0, 0.0))).unwrap();

    assert_eq!(cloth.point_count(), 9);
    assert_eq!(cloth.link_count(), 3 * (3 - 1) + (3 - 1) * 3);
    for (i, p) in cloth.points().iter().enumerate() {
        assert_eq!(p.pinned, [0, 3, 6].contains(&i), "point {} pinned flag", i);
    }
    // Column-major: index = x * height + y.
    assert_eq!(cloth.point(5).pos, Vec2::new(10.0, 20.0));
}

#[test]
fn rigid_grid_material() {
    let config = ClothConfig::new(4, 2, 5.0f64, Vec2::new(1.0, 1.0)).with_material(Material::Rigid);
    let cloth = Cloth::build(&config).unwrap();
    assert!(cloth.links().iter().all(|l| l.material == Material::Rigid));
}

#[test]
fn non_positive_spacing_fails() {
    let result = Cloth::build(&ClothConfig::new(3, 3, -1.0f32, Vec2::new(0.0, 0.0)));
    assert_eq!(result.unwrap_err(), ClothError::InvalidSpacing);
}

#[test]
fn pinned_top_row_drapes_under_gravity() {
    let mut sim = Simulation::from_config(
        &ClothConfig::new(5, 5, 10.0f32, Vec2::new(100.0, 50.0)),
        SimConfig::new().with_iterations(8),
    )
    .unwrap();

    let top: Vec<usize> = (0..5).map(|x| sim.cloth().index(x, 0).unwrap()).collect();
    let bottom: Vec<usize> = (0..5).map(|x| sim.cloth().index(x, 4).unwrap()).collect();
    let top_initial: Vec<Vec2<f32>> = top.iter().map(|&i| sim.cloth().point(i).pos).collect();
    let bottom_initial: Vec<Vec2<f32>> = bottom.iter().map(|&i| sim.cloth().point(i).pos).collect();

    for _ in 0..120 {
        sim.step(&TickInput::idle(), &mut NoOpStepObserver);
    }

    for (k, &i) in top.iter().enumerate() {
        assert_eq!(sim.cloth().point(i).pos, top_initial[k], "top row point {} moved", i);
    }
    // Screen space: y grows downward.
    for (k, &i) in bottom.iter().enumerate() {
        let pos = sim.cloth().point(i).pos;
        assert!(
            pos.y > bottom_initial[k].y,
            "bottom row point {} should sag below y {}, but y is {}",
            i, bottom_initial[k].y, pos.y,
        );
    }
}
