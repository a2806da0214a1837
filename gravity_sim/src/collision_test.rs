use approx::assert_relative_eq;
use glam::DVec3;

use crate::body::{Body, BodyId, BodyStore};
use crate::collision::{overlap, reflect, resolve, CollisionParams};
use crate::diagnostics::kinetic_energy;
use crate::error::SimError;

const DAMPING: f64 = 0.9999;

fn pair(separation: f64, v_a: DVec3, v_b: DVec3) -> BodyStore {
    BodyStore::new(vec![
        Body::with_radius(25.0, 25.0, DVec3::ZERO, v_a).unwrap(),
        Body::with_radius(25.0, 25.0, DVec3::new(separation, 0.0, 0.0), v_b).unwrap(),
    ])
    .unwrap()
}

fn params() -> CollisionParams {
    CollisionParams::new(DAMPING).unwrap()
}

#[test]
fn test_overlapping_pair_is_separated() {
    let mut bodies = pair(40.0, DVec3::X, -DVec3::X);
    let contacts = resolve(&mut bodies, &params()).unwrap();

    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].first, BodyId(0));
    assert_eq!(contacts[0].second, BodyId(1));
    assert_relative_eq!(contacts[0].penetration, 10.0, epsilon = 1e-12);

    assert_relative_eq!(bodies[0].position.x, -5.0, epsilon = 1e-12);
    assert_relative_eq!(bodies[1].position.x, 45.0, epsilon = 1e-12);
    assert!(bodies[0].distance_to(&bodies[1]) >= 50.0 - 1e-9);
}

#[test]
fn test_head_on_velocities_reflect_and_damp() {
    let mut bodies = pair(40.0, DVec3::X, -DVec3::X);
    resolve(&mut bodies, &params()).unwrap();

    assert_relative_eq!(bodies[0].velocity.x, -DAMPING, epsilon = 1e-12);
    assert_relative_eq!(bodies[1].velocity.x, DAMPING, epsilon = 1e-12);
}

#[test]
fn test_kinetic_energy_drops_by_damping_squared() {
    let mut bodies = pair(40.0, DVec3::new(1.0, 0.5, 0.0), DVec3::new(-2.0, 0.0, 0.3));
    let before = kinetic_energy(&bodies);

    resolve(&mut bodies, &params()).unwrap();
    let after = kinetic_energy(&bodies);

    assert!(after < before);
    assert_relative_eq!(after, before * DAMPING * DAMPING, epsilon = 1e-12);
}

#[test]
fn test_tangential_velocity_is_kept() {
    let mut bodies = pair(40.0, DVec3::Y, DVec3::Z);
    resolve(&mut bodies, &params()).unwrap();

    assert_relative_eq!(bodies[0].velocity.y, DAMPING, epsilon = 1e-12);
    assert_relative_eq!(bodies[1].velocity.z, DAMPING, epsilon = 1e-12);
    assert_relative_eq!(bodies[0].velocity.x, 0.0);
}

#[test]
fn test_separated_pair_untouched() {
    let mut bodies = pair(60.0, DVec3::X, -DVec3::X);
    let before = bodies.clone();
    let contacts = resolve(&mut bodies, &params()).unwrap();

    assert!(contacts.is_empty());
    assert_eq!(bodies, before);
}

#[test]
fn test_touching_pair_is_not_a_collision() {
    let bodies = pair(50.0, DVec3::ZERO, DVec3::ZERO);
    assert_eq!(overlap(&bodies[0], &bodies[1]), None);
}

#[test]
fn test_overlap_depth() {
    let bodies = pair(42.5, DVec3::ZERO, DVec3::ZERO);
    assert_relative_eq!(overlap(&bodies[0], &bodies[1]).unwrap(), 7.5, epsilon = 1e-12);
}

#[test]
fn test_coincident_pair_is_degenerate() {
    let mut bodies = pair(30.0, DVec3::ZERO, DVec3::ZERO);
    bodies.get_mut(BodyId(1)).unwrap().position = DVec3::ZERO;
    let result = resolve(&mut bodies, &params());

    assert_eq!(
        result,
        Err(SimError::DegenerateConfiguration {
            first: BodyId(0),
            second: BodyId(1),
        })
    );
}

#[test]
fn test_every_overlapping_pair_resolved_once() {
    let mut bodies = BodyStore::new(vec![
        Body::with_radius(10.0, 10.0, DVec3::ZERO, DVec3::ZERO).unwrap(),
        Body::with_radius(10.0, 10.0, DVec3::new(15.0, 0.0, 0.0), DVec3::ZERO).unwrap(),
        Body::with_radius(10.0, 10.0, DVec3::new(500.0, 0.0, 0.0), DVec3::ZERO).unwrap(),
        Body::with_radius(10.0, 10.0, DVec3::new(500.0, 12.0, 0.0), DVec3::ZERO).unwrap(),
    ])
    .unwrap();

    let contacts = resolve(&mut bodies, &params()).unwrap();
    let ids: Vec<_> = contacts.iter().map(|c| (c.first.0, c.second.0)).collect();
    assert_eq!(ids, vec![(0, 1), (2, 3)]);
}

#[test]
fn test_reflect_matches_normalised_form() {
    let v = DVec3::new(1.5, -2.0, 0.7);
    let r = DVec3::new(3.0, 1.0, -2.0);
    let n = r.normalize();

    let expected = v - 2.0 * v.dot(n) * n;
    let reflected = reflect(v, r);
    assert_relative_eq!(reflected.x, expected.x, epsilon = 1e-12);
    assert_relative_eq!(reflected.y, expected.y, epsilon = 1e-12);
    assert_relative_eq!(reflected.z, expected.z, epsilon = 1e-12);
    assert_relative_eq!(reflected.length(), v.length(), epsilon = 1e-12);
}

#[test]
fn test_damping_range() {
    assert!(CollisionParams::new(1.0).is_ok());
    assert!(CollisionParams::new(0.0).is_err());
    assert!(CollisionParams::new(1.01).is_err());
}
