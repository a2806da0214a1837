//! Body records and the fixed-size store that owns them

use std::fmt;

use glam::DVec3;

use crate::error::{ensure_positive, SimError, SimResult};

/// Stable index of a body inside its store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a body's collision radius is derived from its mass
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RadiusModel {
    /// `radius = scale * mass`
    Linear { scale: f64 },
    /// Constant-density spheres: `radius = (mass / reference_mass)^(1/3) * scale`
    CubeRoot { reference_mass: f64, scale: f64 },
    /// Same radius for every body
    Fixed(f64),
}

impl RadiusModel {
    pub fn radius_for(&self, mass: f64) -> SimResult<f64> {
        let radius = match *self {
            RadiusModel::Linear { scale } => scale * mass,
            RadiusModel::CubeRoot {
                reference_mass,
                scale,
            } => {
                ensure_positive("reference_mass", reference_mass)?;
                (mass / reference_mass).cbrt() * scale
            }
            RadiusModel::Fixed(radius) => radius,
        };
        ensure_positive("radius", radius)
    }
}

impl Default for RadiusModel {
    fn default() -> Self {
        RadiusModel::Linear { scale: 1.0 }
    }
}

/// A sphere with mass, position, and velocity.
///
/// Mass and radius are fixed at construction; position and velocity are
/// mutated every step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    id: BodyId,
    mass: f64,
    radius: f64,
    pub position: DVec3,
    pub velocity: DVec3,
}

impl Body {
    /// Create a body whose radius is derived from `mass` by `model`.
    pub fn new(
        mass: f64,
        position: DVec3,
        velocity: DVec3,
        model: RadiusModel,
    ) -> SimResult<Self> {
        let mass = ensure_positive("mass", mass)?;
        let radius = model.radius_for(mass)?;
        Self::with_radius(mass, radius, position, velocity)
    }

    /// Create a body with an explicit radius.
    pub fn with_radius(
        mass: f64,
        radius: f64,
        position: DVec3,
        velocity: DVec3,
    ) -> SimResult<Self> {
        if !position.is_finite() {
            return Err(SimError::invalid("position", f64::NAN, "must be finite"));
        }
        if !velocity.is_finite() {
            return Err(SimError::invalid("velocity", f64::NAN, "must be finite"));
        }

        Ok(Self {
            id: BodyId(0),
            mass: ensure_positive("mass", mass)?,
            radius: ensure_positive("radius", radius)?,
            position,
            velocity,
        })
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn momentum(&self) -> DVec3 {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (other.position - self.position).length()
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}

/// Ordered, fixed-cardinality collection of bodies.
///
/// Bodies are never added, removed, or merged after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyStore {
    bodies: Vec<Body>,
}

impl BodyStore {
    /// Take ownership of `bodies`, assigning each its slot index as id.
    ///
    /// Two bodies sharing a centre have no line of centres to collide along,
    /// so such a system is rejected here rather than on its first step.
    pub fn new(mut bodies: Vec<Body>) -> SimResult<Self> {
        if bodies.is_empty() {
            return Err(SimError::EmptySystem);
        }
        for (slot, body) in bodies.iter_mut().enumerate() {
            body.id = BodyId(slot);
        }
        for (i, a) in bodies.iter().enumerate() {
            if let Some(b) = bodies[i + 1..].iter().find(|b| b.position == a.position) {
                return Err(SimError::DegenerateConfiguration {
                    first: a.id,
                    second: b.id,
                });
            }
        }
        Ok(Self { bodies })
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Always false; a store holds at least one body.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id.0)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Body> {
        self.bodies.iter_mut()
    }

    pub fn as_slice(&self) -> &[Body] {
        &self.bodies
    }

    /// Mutable access to the pair `(i, j)` with `i < j`.
    pub(crate) fn pair_mut(&mut self, i: usize, j: usize) -> (&mut Body, &mut Body) {
        debug_assert!(i < j);
        let (head, tail) = self.bodies.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    }
}

impl std::ops::Index<usize> for BodyStore {
    type Output = Body;

    fn index(&self, index: usize) -> &Body {
        &self.bodies[index]
    }
}

impl<'a> IntoIterator for &'a BodyStore {
    type Item = &'a Body;
    type IntoIter = std::slice::Iter<'a, Body>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}
