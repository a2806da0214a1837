//! Conserved quantities and other whole-system measurements

use glam::DVec3;

use crate::body::{Body, BodyStore};
use crate::gravity::GravityParams;

pub fn kinetic_energy(bodies: &BodyStore) -> f64 {
    bodies.iter().map(Body::kinetic_energy).sum()
}

/// Pairwise potential, using the same separation clamp as the force law
pub fn potential_energy(bodies: &BodyStore, params: &GravityParams) -> f64 {
    let mut potential = 0.0;

    for (i, body_i) in bodies.iter().enumerate() {
        for body_j in bodies.iter().skip(i + 1) {
            let r = body_i.distance_to(body_j).max(params.min_separation);
            potential -= params.g * body_i.mass() * body_j.mass() / r;
        }
    }

    potential
}

pub fn total_energy(bodies: &BodyStore, params: &GravityParams) -> f64 {
    kinetic_energy(bodies) + potential_energy(bodies, params)
}

pub fn total_momentum(bodies: &BodyStore) -> DVec3 {
    bodies.iter().map(Body::momentum).sum()
}

pub fn center_of_mass(bodies: &BodyStore) -> DVec3 {
    let mut total_mass = 0.0;
    let mut com = DVec3::ZERO;

    for body in bodies {
        com += body.position * body.mass();
        total_mass += body.mass();
    }

    // mass > 0 for every body, so total_mass > 0
    com / total_mass
}

/// Heaviest body; the lowest index wins ties.
pub fn heaviest_body(bodies: &BodyStore) -> &Body {
    let mut heaviest = &bodies[0];
    for body in bodies.iter().skip(1) {
        if body.mass() > heaviest.mass() {
            heaviest = body;
        }
    }
    heaviest
}
