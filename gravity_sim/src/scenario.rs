//! Initial conditions
//!
//! The reference layout staggers bodies along the (1,1,1) diagonal with
//! integer masses drawn uniformly from [10, 30].

use common::constants::{DEMO_SPEED, DIAGONAL_SPACING, MASS_MAX, MASS_MIN};
use glam::DVec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::body::{Body, BodyStore, RadiusModel};
use crate::error::{SimError, SimResult};

/// Initial state of one body before the store is built
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySpec {
    pub mass: f64,
    pub position: DVec3,
    pub velocity: DVec3,
    /// Overrides the scenario's radius model when set
    pub radius: Option<f64>,
}

impl BodySpec {
    pub fn new(mass: f64, position: DVec3) -> Self {
        Self {
            mass,
            position,
            velocity: DVec3::ZERO,
            radius: None,
        }
    }

    pub fn with_velocity(mut self, velocity: DVec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    specs: Vec<BodySpec>,
    radius_model: RadiusModel,
}

impl Scenario {
    pub fn from_bodies(specs: Vec<BodySpec>) -> Self {
        Self {
            specs,
            radius_model: RadiusModel::default(),
        }
    }

    /// `n` bodies at `i * 100 * (1,1,1)` with seeded random masses.
    pub fn diagonal(n: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let specs = (0..n)
            .map(|i| {
                let mass = rng.gen_range(MASS_MIN..=MASS_MAX) as f64;
                BodySpec::new(mass, diagonal_position(i, DIAGONAL_SPACING))
            })
            .collect();

        Self::from_bodies(specs)
    }

    /// Three diagonal bodies moving along x, y, and z respectively.
    pub fn three_body_demo(seed: u64) -> Self {
        Self::diagonal(3, seed).with_velocities(&[
            DVec3::X * DEMO_SPEED,
            DVec3::Y * DEMO_SPEED,
            DVec3::Z * DEMO_SPEED,
        ])
    }

    /// Re-place every body along the diagonal with a new spacing.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        for (i, spec) in self.specs.iter_mut().enumerate() {
            spec.position = diagonal_position(i, spacing);
        }
        self
    }

    /// Assign initial velocities in order; bodies past the end of
    /// `velocities` keep theirs.
    pub fn with_velocities(mut self, velocities: &[DVec3]) -> Self {
        for (spec, velocity) in self.specs.iter_mut().zip(velocities) {
            spec.velocity = *velocity;
        }
        self
    }

    pub fn with_radius_model(mut self, model: RadiusModel) -> Self {
        self.radius_model = model;
        self
    }

    pub fn specs(&self) -> &[BodySpec] {
        &self.specs
    }

    pub fn build(&self) -> SimResult<BodyStore> {
        if self.specs.is_empty() {
            return Err(SimError::EmptySystem);
        }

        let bodies = self
            .specs
            .iter()
            .map(|spec| match spec.radius {
                Some(radius) => Body::with_radius(spec.mass, radius, spec.position, spec.velocity),
                None => Body::new(spec.mass, spec.position, spec.velocity, self.radius_model),
            })
            .collect::<SimResult<Vec<_>>>()?;

        BodyStore::new(bodies)
    }
}

fn diagonal_position(index: usize, spacing: f64) -> DVec3 {
    DVec3::ONE * (index as f64 * spacing)
}
