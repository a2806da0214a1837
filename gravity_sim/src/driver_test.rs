use glam::DVec3;

use crate::driver::{run, DriverConfig, Frame};
use crate::scenario::{BodySpec, Scenario};
use crate::simulation::{RunState, SimParams, Simulation};

fn sim() -> Simulation {
    let bodies = Scenario::from_bodies(vec![
        BodySpec::new(20.0, DVec3::ZERO),
        BodySpec::new(20.0, DVec3::new(200.0, 0.0, 0.0)),
    ])
    .build()
    .unwrap();
    Simulation::new(bodies, SimParams::default()).unwrap()
}

#[test]
fn test_one_frame_per_tick() {
    let mut sim = sim();
    let mut frames: Vec<Frame> = Vec::new();
    let config = DriverConfig {
        ticks: 5,
        ..DriverConfig::default()
    };

    run(&mut sim, &config, &mut |frame: &Frame| frames.push(frame.clone())).unwrap();

    assert_eq!(frames.len(), 5);
    assert_eq!(frames[4].tick, 4);
    assert_eq!(frames[4].bodies.len(), 2);
    assert_eq!(sim.steps_taken(), 5);
}

#[test]
fn test_toggle_schedule_pauses_and_resumes() {
    let mut sim = sim();
    let mut states = Vec::new();
    let config = DriverConfig {
        ticks: 6,
        toggle_at: vec![2, 4],
        ..DriverConfig::default()
    };

    run(&mut sim, &config, &mut |frame: &Frame| states.push(frame.state)).unwrap();

    assert_eq!(
        states,
        vec![
            RunState::Running,
            RunState::Running,
            RunState::Paused,
            RunState::Paused,
            RunState::Running,
            RunState::Running,
        ]
    );
    assert_eq!(sim.steps_taken(), 4);
}

#[test]
fn test_paused_frames_repeat_state() {
    let mut sim = sim();
    let mut frames: Vec<Frame> = Vec::new();
    let config = DriverConfig {
        ticks: 3,
        toggle_at: vec![1],
        ..DriverConfig::default()
    };

    run(&mut sim, &config, &mut |frame: &Frame| frames.push(frame.clone())).unwrap();

    assert_eq!(frames[1].bodies, frames[0].bodies);
    assert_eq!(frames[2].bodies, frames[0].bodies);
}

#[test]
fn test_substeps_split_dt() {
    let mut sim = sim();
    let config = DriverConfig {
        dt: 0.04,
        substeps: 4,
        ticks: 3,
        toggle_at: Vec::new(),
    };

    run(&mut sim, &config, &mut |_: &Frame| {}).unwrap();

    assert_eq!(sim.steps_taken(), 12);
    assert!((sim.elapsed_time() - 0.12).abs() < 1e-12);
}

#[test]
fn test_zero_substeps_rejected() {
    let mut sim = sim();
    let config = DriverConfig {
        substeps: 0,
        ..DriverConfig::default()
    };
    assert!(run(&mut sim, &config, &mut |_: &Frame| {}).is_err());
}
