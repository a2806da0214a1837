//! N-body gravity with sphere collisions
//!
//! A deterministic, display-independent kernel:
//! - Newtonian pairwise gravity, each unordered pair evaluated once
//! - Semi-implicit Euler integration
//! - Overlap detection with reflection, damping and positional correction
//!
//! Rendering is left to the caller, which receives per-step [`snapshot::BodyState`]s
//! through the [`driver`] loop or directly from [`Simulation::snapshot`].

pub mod body;
pub mod collision;
pub mod config;
pub mod diagnostics;
pub mod driver;
pub mod error;
pub mod gravity;
pub mod integrator;
pub mod scenario;
pub mod simulation;
pub mod snapshot;

pub use body::{Body, BodyId, BodyStore, RadiusModel};
pub use error::{SimError, SimResult};
pub use scenario::{BodySpec, Scenario};
pub use simulation::{RunState, SimParams, Simulation, StepOutcome};

#[cfg(test)]
mod collision_test;
#[cfg(test)]
mod diagnostics_test;
#[cfg(test)]
mod driver_test;
