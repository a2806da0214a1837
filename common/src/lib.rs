//! Common utilities for the gravity simulation
//!
//! This crate provides the reference constants and logging setup shared by the
//! simulation library and its driver binary.

pub mod logging;

/// Reference values used when a run does not override them
pub mod constants {
    /// Gravitational constant (scaled for simulation units)
    pub const G: f64 = 300.0;

    /// Time step of the reference driver loop
    pub const DT: f64 = 0.01;

    /// Velocity scale applied after every collision reflection
    pub const DAMPING: f64 = 0.9999;

    /// Lower clamp on pair separation in the force law
    pub const MIN_SEPARATION: f64 = 1e-6;

    /// Inclusive range of randomly drawn body masses
    pub const MASS_MIN: u32 = 10;
    pub const MASS_MAX: u32 = 30;

    /// Offset between consecutive bodies along the (1,1,1) diagonal
    pub const DIAGONAL_SPACING: f64 = 100.0;

    /// Speed of each body in the three-body demo
    pub const DEMO_SPEED: f64 = 5.0;
}
