//! Sphere overlap detection and bounce resolution
//!
//! For every overlapping pair, in canonical order:
//! - both velocities are reflected about the line of centres,
//! - both velocities are scaled by the damping factor,
//! - each body is pushed half the penetration depth apart along that line.
//!
//! Damping applies on every step the pair overlaps, not once per contact.

use glam::DVec3;

use crate::body::{Body, BodyId, BodyStore};
use crate::error::{SimError, SimResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionParams {
    pub damping: f64,
}

impl CollisionParams {
    pub fn new(damping: f64) -> SimResult<Self> {
        let params = Self { damping };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.damping.is_finite() && self.damping > 0.0 && self.damping <= 1.0 {
            Ok(())
        } else {
            Err(SimError::invalid("damping", self.damping, "must lie in (0, 1]"))
        }
    }
}

impl Default for CollisionParams {
    fn default() -> Self {
        Self {
            damping: common::constants::DAMPING,
        }
    }
}

/// A resolved overlap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub first: BodyId,
    pub second: BodyId,
    /// Overlap depth measured before correction
    pub penetration: f64,
}

/// Whether two spheres overlap, and by how much.
pub fn overlap(a: &Body, b: &Body) -> Option<f64> {
    let dist = a.distance_to(b);
    let reach = a.radius() + b.radius();
    (dist < reach).then_some(reach - dist)
}

/// Reflect `v` about the plane whose normal is `r`.
pub fn reflect(v: DVec3, r: DVec3) -> DVec3 {
    v - 2.0 * v.dot(r) * r / r.dot(r)
}

/// Detect and resolve every overlapping pair once.
pub fn resolve(bodies: &mut BodyStore, params: &CollisionParams) -> SimResult<Vec<Contact>> {
    let n = bodies.len();
    let mut contacts = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = bodies.pair_mut(i, j);
            if let Some(contact) = resolve_pair(a, b, params)? {
                contacts.push(contact);
            }
        }
    }

    Ok(contacts)
}

fn resolve_pair(a: &mut Body, b: &mut Body, params: &CollisionParams) -> SimResult<Option<Contact>> {
    let Some(penetration) = overlap(a, b) else {
        return Ok(None);
    };

    let r = b.position - a.position;
    let dist = r.length();
    if dist == 0.0 {
        return Err(SimError::DegenerateConfiguration {
            first: a.id(),
            second: b.id(),
        });
    }

    a.velocity = reflect(a.velocity, r) * params.damping;
    b.velocity = reflect(b.velocity, r) * params.damping;

    let nudge = 0.5 * penetration * (r / dist);
    a.position -= nudge;
    b.position += nudge;

    log::trace!(
        "contact {} <-> {} penetration {:.6}",
        a.id(),
        b.id(),
        penetration
    );

    Ok(Some(Contact {
        first: a.id(),
        second: b.id(),
        penetration,
    }))
}
