//! Semi-implicit (symplectic) Euler integration
//!
//! 1. `v += a * dt`
//! 2. `x += v * dt`, using the velocity just updated
//!
//! No clamping is applied to either quantity.

use glam::DVec3;

use crate::body::BodyStore;
use crate::error::{ensure_positive, SimError, SimResult};

/// Advance every body by `dt` using the precomputed `accelerations`.
pub fn integrate(bodies: &mut BodyStore, accelerations: &[DVec3], dt: f64) -> SimResult<()> {
    ensure_positive("dt", dt)?;
    if accelerations.len() != bodies.len() {
        return Err(SimError::LengthMismatch {
            expected: bodies.len(),
            actual: accelerations.len(),
        });
    }

    for (body, acc) in bodies.iter_mut().zip(accelerations) {
        body.velocity += *acc * dt;
        body.position += body.velocity * dt;
    }

    Ok(())
}
