//! YAML scenario files
//!
//! ```yaml
//! physics:
//!   g: 300.0
//!   damping: 0.9999
//!   min_separation: 1.0e-6
//!   dt: 0.01
//!   substeps: 1
//!
//! bodies:
//!   count: 3
//!   seed: 7
//!   spacing: 100.0
//!   demo_velocities: true
//! ```
//!
//! or with an explicit list of bodies:
//!
//! ```yaml
//! bodies:
//!   - mass: 20.0
//!     position: [0.0, 0.0, 0.0]
//!   - mass: 20.0
//!     position: [200.0, 0.0, 0.0]
//!     velocity: [0.0, 1.0, 0.0]
//!     radius: 5.0
//! ```

use common::constants;
use glam::DVec3;
use serde::Deserialize;

use crate::scenario::{BodySpec, Scenario};
use crate::simulation::SimParams;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub g: f64,
    pub damping: f64,
    pub min_separation: f64,
    pub dt: f64,
    pub substeps: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            g: constants::G,
            damping: constants::DAMPING,
            min_separation: constants::MIN_SEPARATION,
            dt: constants::DT,
            substeps: 1,
        }
    }
}

impl PhysicsConfig {
    pub fn sim_params(&self) -> SimParams {
        SimParams {
            g: self.g,
            damping: self.damping,
            min_separation: self.min_separation,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub mass: f64,
    pub position: [f64; 3],
    #[serde(default)]
    pub velocity: [f64; 3],
    #[serde(default)]
    pub radius: Option<f64>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GeneratedConfig {
    pub count: usize,
    #[serde(default)]
    pub seed: u64,
    #[serde(default = "default_spacing")]
    pub spacing: f64,
    /// Start the first three bodies moving along x, y, z
    #[serde(default)]
    pub demo_velocities: bool,
}

fn default_spacing() -> f64 {
    constants::DIAGONAL_SPACING
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum BodiesConfig {
    Explicit(Vec<BodyConfig>),
    Generated(GeneratedConfig),
}

impl Default for BodiesConfig {
    fn default() -> Self {
        BodiesConfig::Generated(GeneratedConfig {
            count: 3,
            seed: 0,
            spacing: constants::DIAGONAL_SPACING,
            demo_velocities: true,
        })
    }
}

/// Top-level scenario file
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub physics: PhysicsConfig,
    pub bodies: BodiesConfig,
}

impl ScenarioConfig {
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    pub fn scenario(&self) -> Scenario {
        match &self.bodies {
            BodiesConfig::Generated(generated) => {
                let scenario = Scenario::diagonal(generated.count, generated.seed).with_spacing(generated.spacing);
                if generated.demo_velocities {
                    scenario.with_velocities(&[
                        DVec3::X * constants::DEMO_SPEED,
                        DVec3::Y * constants::DEMO_SPEED,
                        DVec3::Z * constants::DEMO_SPEED,
                    ])
                } else {
                    scenario
                }
            }
            BodiesConfig::Explicit(bodies) => Scenario::from_bodies(
                bodies
                    .iter()
                    .map(|b| {
                        let spec = BodySpec::new(b.mass, DVec3::from_array(b.position))
                            .with_velocity(DVec3::from_array(b.velocity));
                        match b.radius {
                            Some(radius) => spec.with_radius(radius),
                            None => spec,
                        }
                    })
                    .collect(),
            ),
        }
    }
}
