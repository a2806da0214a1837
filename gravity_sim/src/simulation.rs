//! The simulation controller
//!
//! Owns the body store and the run/pause state, and runs one step as
//! gravity -> integration -> collision resolution.

use crate::body::{Body, BodyStore};
use crate::collision::{self, CollisionParams, Contact};
use crate::diagnostics;
use crate::error::{ensure_positive, SimResult};
use crate::gravity::{self, GravityParams};
use crate::snapshot::BodyState;

/// Physical parameters of a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimParams {
    pub g: f64,
    pub damping: f64,
    pub min_separation: f64,
}

impl SimParams {
    pub fn validate(&self) -> SimResult<()> {
        self.gravity().validate()?;
        self.collision().validate()
    }

    pub fn gravity(&self) -> GravityParams {
        GravityParams {
            g: self.g,
            min_separation: self.min_separation,
        }
    }

    pub fn collision(&self) -> CollisionParams {
        CollisionParams {
            damping: self.damping,
        }
    }
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            g: common::constants::G,
            damping: common::constants::DAMPING,
            min_separation: common::constants::MIN_SEPARATION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
}

/// What a call to [`Simulation::step`] did
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    Paused,
    Advanced { contacts: Vec<Contact> },
}

/// The simulation state
pub struct Simulation {
    bodies: BodyStore,
    params: SimParams,
    state: RunState,
    elapsed_time: f64,
    steps_taken: u64,
}

impl Simulation {
    pub fn new(bodies: BodyStore, params: SimParams) -> SimResult<Self> {
        params.validate()?;

        log::info!(
            "simulation created: {} bodies, G = {}, damping = {}",
            bodies.len(),
            params.g,
            params.damping
        );

        Ok(Self {
            bodies,
            params,
            state: RunState::Running,
            elapsed_time: 0.0,
            steps_taken: 0,
        })
    }

    /// Step the simulation forward by `dt`.
    ///
    /// Does nothing while paused. A failed step leaves the state untouched.
    ///
    /// Explicit Euler stays well behaved while `|v| * dt` is small compared to
    /// the smallest radius sum; past that, bodies can tunnel through each other
    /// or pick up large accelerations at close approach.
    pub fn step(&mut self, dt: f64) -> SimResult<StepOutcome> {
        ensure_positive("dt", dt)?;

        if self.state == RunState::Paused {
            return Ok(StepOutcome::Paused);
        }

        let mut next = self.bodies.clone();
        let accelerations = gravity::accelerations(&next, &self.params.gravity());
        crate::integrator::integrate(&mut next, &accelerations, dt)?;
        let contacts = collision::resolve(&mut next, &self.params.collision())?;

        if !contacts.is_empty() {
            log::debug!(
                "step {}: {} contact(s) resolved",
                self.steps_taken + 1,
                contacts.len()
            );
        }
        if let Some(body) = next.iter().find(|b| !b.is_finite()) {
            log::warn!(
                "body {} left the finite range at t = {:.4}",
                body.id(),
                self.elapsed_time + dt
            );
        }

        self.bodies = next;
        self.elapsed_time += dt;
        self.steps_taken += 1;

        Ok(StepOutcome::Advanced { contacts })
    }

    pub fn toggle(&mut self) -> RunState {
        self.state = match self.state {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
        };
        log::info!("simulation {:?} at t = {:.4}", self.state, self.elapsed_time);
        self.state
    }

    pub fn pause(&mut self) {
        if self.is_running() {
            self.toggle();
        }
    }

    pub fn resume(&mut self) {
        if !self.is_running() {
            self.toggle();
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn bodies(&self) -> &BodyStore {
        &self.bodies
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    /// Read-only copy of every body's state
    pub fn snapshot(&self) -> Vec<BodyState> {
        self.bodies.iter().map(BodyState::from).collect()
    }

    /// The body a following camera would track
    pub fn heaviest_body(&self) -> &Body {
        diagnostics::heaviest_body(&self.bodies)
    }

    pub fn total_energy(&self) -> f64 {
        diagnostics::total_energy(&self.bodies, &self.params.gravity())
    }
}
