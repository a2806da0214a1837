//! The external driver loop
//!
//! Each tick: apply scheduled run/pause toggles, step the controller if it is
//! running, then hand a frame to the sink. No wall-clock pacing.

use crate::error::{ensure_positive, SimError, SimResult};
use crate::simulation::{RunState, Simulation, StepOutcome};
use crate::snapshot::BodyState;

/// What the renderer receives after each tick
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub tick: u64,
    pub elapsed_time: f64,
    pub state: RunState,
    pub contacts: usize,
    pub bodies: Vec<BodyState>,
}

/// Consumer of per-tick frames
pub trait FrameSink {
    fn present(&mut self, frame: &Frame);
}

impl<F: FnMut(&Frame)> FrameSink for F {
    fn present(&mut self, frame: &Frame) {
        self(frame)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DriverConfig {
    pub dt: f64,
    pub substeps: u32,
    pub ticks: u64,
    /// Ticks at which the pause button is pressed
    pub toggle_at: Vec<u64>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            dt: common::constants::DT,
            substeps: 1,
            ticks: 1000,
            toggle_at: Vec::new(),
        }
    }
}

/// Run `config.ticks` ticks, presenting a frame after each.
pub fn run(sim: &mut Simulation, config: &DriverConfig, sink: &mut dyn FrameSink) -> SimResult<()> {
    ensure_positive("dt", config.dt)?;
    if config.substeps == 0 {
        return Err(SimError::invalid("substeps", 0.0, "must be >= 1"));
    }
    let sub_dt = config.dt / config.substeps as f64;

    for tick in 0..config.ticks {
        for _ in config.toggle_at.iter().filter(|&&t| t == tick) {
            sim.toggle();
        }

        let mut contacts = 0;
        if sim.is_running() {
            for _ in 0..config.substeps {
                if let StepOutcome::Advanced { contacts: c } = sim.step(sub_dt)? {
                    contacts += c.len();
                }
            }
        }

        sink.present(&Frame {
            tick,
            elapsed_time: sim.elapsed_time(),
            state: sim.state(),
            contacts,
            bodies: sim.snapshot(),
        });
    }

    Ok(())
}
