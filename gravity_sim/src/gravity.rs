//! Pairwise Newtonian gravity
//!
//! Accelerations are computed from one consistent snapshot of positions and
//! returned in a separate buffer. Each unordered pair `(i, j)` with `i < j` is
//! visited exactly once and contributes to both members:
//!
//! - `a_i += G * m_j * r / d³`
//! - `a_j -= G * m_i * r / d³`
//!
//! where `r = x_j - x_i` and `d = max(|r|, min_separation)`.

use glam::DVec3;

use crate::body::BodyStore;
use crate::error::{ensure_positive, SimError, SimResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityParams {
    pub g: f64,
    pub min_separation: f64,
}

impl GravityParams {
    pub fn new(g: f64, min_separation: f64) -> SimResult<Self> {
        let params = Self { g, min_separation };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> SimResult<()> {
        if !self.g.is_finite() || self.g < 0.0 {
            return Err(SimError::invalid("g", self.g, "must be finite and >= 0"));
        }
        ensure_positive("min_separation", self.min_separation)?;
        Ok(())
    }
}

impl Default for GravityParams {
    fn default() -> Self {
        Self {
            g: common::constants::G,
            min_separation: common::constants::MIN_SEPARATION,
        }
    }
}

/// Acceleration on every body from every other body, for this step only.
pub fn accelerations(bodies: &BodyStore, params: &GravityParams) -> Vec<DVec3> {
    let n = bodies.len();
    let mut acc = vec![DVec3::ZERO; n];

    for i in 0..n {
        for j in (i + 1)..n {
            let (a_i, a_j) = pair_acceleration(bodies, i, j, params);
            acc[i] += a_i;
            acc[j] += a_j;
        }
    }

    acc
}

/// Contributions of the pair `(i, j)` to the accelerations of `i` and `j`.
pub fn pair_acceleration(
    bodies: &BodyStore,
    i: usize,
    j: usize,
    params: &GravityParams,
) -> (DVec3, DVec3) {
    let r = bodies[j].position - bodies[i].position;
    let dist = r.length().max(params.min_separation);
    let scaled = params.g * r / (dist * dist * dist);

    (scaled * bodies[j].mass(), -scaled * bodies[i].mass())
}
