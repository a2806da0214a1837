//! Per-step output handed to an external renderer

use glam::DVec3;

use crate::body::{Body, BodyId};

/// Owned copy of one body's state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub id: BodyId,
    pub position: DVec3,
    pub velocity: DVec3,
    pub mass: f64,
    pub radius: f64,
}

impl From<&Body> for BodyState {
    fn from(body: &Body) -> Self {
        Self {
            id: body.id(),
            position: body.position,
            velocity: body.velocity,
            mass: body.mass(),
            radius: body.radius(),
        }
    }
}

/// Instance data for GPU upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BodyInstance {
    pub position: [f32; 3],
    pub radius: f32,
    pub velocity: [f32; 3],
    pub mass: f32,
}

impl From<&BodyState> for BodyInstance {
    fn from(state: &BodyState) -> Self {
        Self {
            position: state.position.as_vec3().to_array(),
            radius: state.radius as f32,
            velocity: state.velocity.as_vec3().to_array(),
            mass: state.mass as f32,
        }
    }
}

/// Pack a snapshot for a vertex buffer.
pub fn to_instances(states: &[BodyState]) -> Vec<BodyInstance> {
    states.iter().map(BodyInstance::from).collect()
}

/// Raw bytes of packed instances, ready for `write_buffer`
pub fn instance_bytes(instances: &[BodyInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
