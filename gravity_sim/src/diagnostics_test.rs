use approx::assert_relative_eq;
use glam::DVec3;

use crate::body::{Body, BodyStore};
use crate::diagnostics::*;
use crate::gravity::GravityParams;
use crate::simulation::{SimParams, Simulation};

fn bodies() -> BodyStore {
    BodyStore::new(vec![
        Body::with_radius(10.0, 1.0, DVec3::ZERO, DVec3::new(1.0, 0.0, 0.0)).unwrap(),
        Body::with_radius(30.0, 1.0, DVec3::new(100.0, 0.0, 0.0), DVec3::new(0.0, -2.0, 0.0)).unwrap(),
    ])
    .unwrap()
}

#[test]
fn test_kinetic_energy() {
    assert_relative_eq!(kinetic_energy(&bodies()), 0.5 * 10.0 * 1.0 + 0.5 * 30.0 * 4.0);
}

#[test]
fn test_potential_energy() {
    let params = GravityParams::new(300.0, 1e-6).unwrap();
    assert_relative_eq!(
        potential_energy(&bodies(), &params),
        -300.0 * 10.0 * 30.0 / 100.0,
        epsilon = 1e-9
    );
}

#[test]
fn test_center_of_mass() {
    let com = center_of_mass(&bodies());
    assert_relative_eq!(com.x, 75.0, epsilon = 1e-12);
    assert_relative_eq!(com.y, 0.0);
}

#[test]
fn test_total_momentum() {
    assert_eq!(total_momentum(&bodies()), DVec3::new(10.0, -60.0, 0.0));
}

#[test]
fn test_heaviest_body_first_wins_ties() {
    let store = BodyStore::new(vec![
        Body::with_radius(10.0, 1.0, DVec3::ZERO, DVec3::ZERO).unwrap(),
        Body::with_radius(30.0, 1.0, DVec3::X, DVec3::ZERO).unwrap(),
        Body::with_radius(30.0, 1.0, DVec3::Y, DVec3::ZERO).unwrap(),
    ])
    .unwrap();
    assert_eq!(heaviest_body(&store).id().0, 1);
}

#[test]
fn test_gravity_conserves_momentum() {
    let mut sim = Simulation::new(bodies(), SimParams::default()).unwrap();
    let before = total_momentum(sim.bodies());

    for _ in 0..200 {
        sim.step(0.01).unwrap();
    }

    let after = total_momentum(sim.bodies());
    assert!((after - before).length() < 1e-9, "momentum drifted to {after}");
}
