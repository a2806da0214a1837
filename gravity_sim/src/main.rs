//! Headless N-body driver
//!
//! Runs a scenario for a fixed number of ticks and logs the body states.
//!
//! ```text
//! gravity_sim --bodies 3 --seed 7 --ticks 5000 --log-every 500
//! gravity_sim --bodies 3 --demo-velocities
//! gravity_sim --scenario scenarios/head_on.yaml --toggle-at 100 --toggle-at 200
//! ```
//!
//! Set `RUST_LOG=debug` to see collision contacts.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glam::DVec3;

use gravity_sim::config::{BodiesConfig, GeneratedConfig, ScenarioConfig};
use gravity_sim::driver::{self, DriverConfig, Frame, FrameSink};
use gravity_sim::Simulation;

#[derive(Parser, Debug)]
#[command(name = "gravity_sim", about = "N-body gravity with sphere collisions")]
struct Args {
    /// YAML scenario file
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Generate this many bodies along the diagonal
    #[arg(short, long)]
    bodies: Option<usize>,

    /// Seed for generated masses
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Start the first three generated bodies moving along x, y, z
    #[arg(long, requires = "bodies")]
    demo_velocities: bool,

    /// Number of driver ticks to run
    #[arg(short, long, default_value_t = 1000)]
    ticks: u64,

    #[arg(long)]
    dt: Option<f64>,

    #[arg(long)]
    substeps: Option<u32>,

    /// Gravitational constant
    #[arg(long)]
    g: Option<f64>,

    #[arg(long)]
    damping: Option<f64>,

    /// Press pause/resume at these ticks
    #[arg(long)]
    toggle_at: Vec<u64>,

    /// Log a frame every N ticks (0 = only the last)
    #[arg(long, default_value_t = 100)]
    log_every: u64,
}

/// Logs frames and follows the heaviest body, like a tracking camera
struct LogSink {
    every: u64,
    last_tick: u64,
    follow: usize,
}

impl FrameSink for LogSink {
    fn present(&mut self, frame: &Frame) {
        let due = self.every > 0 && frame.tick % self.every == 0;
        if !due && frame.tick != self.last_tick {
            return;
        }

        let target = frame.bodies[self.follow].position;
        log::info!(
            "tick {:>6}  t = {:>9.3}  {:?}  contacts = {}  camera -> ({:.2}, {:.2}, {:.2})",
            frame.tick,
            frame.elapsed_time,
            frame.state,
            frame.contacts,
            target.x,
            target.y,
            target.z
        );
        for body in &frame.bodies {
            log::info!(
                "  {}  m = {:>5.1}  r = {:>5.1}  x = {}  v = {}",
                body.id,
                body.mass,
                body.radius,
                fmt_vec(body.position),
                fmt_vec(body.velocity)
            );
        }
    }
}

fn fmt_vec(v: DVec3) -> String {
    format!("({:>10.3}, {:>10.3}, {:>10.3})", v.x, v.y, v.z)
}

fn load_config(args: &Args) -> Result<ScenarioConfig> {
    let mut config = match &args.scenario {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read scenario {}", path.display()))?;
            ScenarioConfig::from_yaml(&text)
                .with_context(|| format!("failed to parse scenario {}", path.display()))?
        }
        None => ScenarioConfig::default(),
    };

    if let Some(count) = args.bodies {
        config.bodies = BodiesConfig::Generated(GeneratedConfig {
            count,
            seed: args.seed,
            spacing: common::constants::DIAGONAL_SPACING,
            demo_velocities: args.demo_velocities,
        });
    }
    if let Some(dt) = args.dt {
        config.physics.dt = dt;
    }
    if let Some(substeps) = args.substeps {
        config.physics.substeps = substeps;
    }
    if let Some(g) = args.g {
        config.physics.g = g;
    }
    if let Some(damping) = args.damping {
        config.physics.damping = damping;
    }

    Ok(config)
}

fn main() -> Result<()> {
    common::logging::init();

    let args = Args::parse();
    let config = load_config(&args)?;

    let bodies = config
        .scenario()
        .build()
        .context("invalid initial conditions")?;
    let mut sim = Simulation::new(bodies, config.physics.sim_params())
        .context("invalid physics parameters")?;

    let mut sink = LogSink {
        every: args.log_every,
        last_tick: args.ticks.saturating_sub(1),
        follow: sim.heaviest_body().id().0,
    };
    let driver_config = DriverConfig {
        dt: config.physics.dt,
        substeps: config.physics.substeps,
        ticks: args.ticks,
        toggle_at: args.toggle_at.clone(),
    };

    let energy_before = sim.total_energy();
    driver::run(&mut sim, &driver_config, &mut sink).context("simulation failed")?;

    log::info!(
        "done: {} steps, t = {:.3}, energy {:.3} -> {:.3}",
        sim.steps_taken(),
        sim.elapsed_time(),
        energy_before,
        sim.total_energy()
    );

    Ok(())
}
