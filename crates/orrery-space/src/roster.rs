//! The fixed set of bodies in the simulation.

use glam::Vec3;
use tracing::info;

use crate::body::{BodyId, CelestialBody, TextureSlot};
use crate::error::SpaceError;

/// Index of the central star in [`BodyRoster::solar_system`].
pub const SUN: BodyId = BodyId(0);
/// Index of Earth in [`BodyRoster::solar_system`].
pub const EARTH: BodyId = BodyId(3);
/// Index of the Moon in [`BodyRoster::solar_system`].
pub const MOON: BodyId = BodyId(4);

/// Distance scale: one astronomical unit in scene units.
pub const AU: f32 = 2.5;

/// An immutable, validated list of bodies plus a parent-before-child
/// update order.
///
/// Index 0 is the central body; the follow camera cycles over the rest.
#[derive(Clone, Debug)]
pub struct BodyRoster {
    bodies: Vec<CelestialBody>,
    update_order: Vec<BodyId>,
}

impl BodyRoster {
    /// Validate `bodies` and compute their update order.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::EmptyRoster`] for an empty list,
    /// [`SpaceError::UnknownParent`] when a parent index is out of range, and
    /// [`SpaceError::ParentCycle`] when parent links loop.
    pub fn new(bodies: Vec<CelestialBody>) -> Result<Self, SpaceError> {
        if bodies.is_empty() {
            return Err(SpaceError::EmptyRoster);
        }

        let mut depths = Vec::with_capacity(bodies.len());
        for (i, body) in bodies.iter().enumerate() {
            if let Some(parent) = body.parent
                && parent.index() >= bodies.len()
            {
                return Err(SpaceError::UnknownParent {
                    body: BodyId(i),
                    parent,
                });
            }
            depths.push(depth_of(&bodies, BodyId(i))?);
        }

        let mut update_order: Vec<BodyId> = (0..bodies.len()).map(BodyId).collect();
        // Stable: siblings keep roster order.
        update_order.sort_by_key(|id| depths[id.index()]);

        Ok(Self {
            bodies,
            update_order,
        })
    }

    /// The star, eight planets, and Earth's moon.
    ///
    /// Distances use `1 AU = 2.5` scene units; speeds and sizes are scaled for
    /// legibility rather than realism.
    pub fn solar_system() -> Self {
        let bodies = vec![
            CelestialBody::new("Sun", 0.0, 0.0, 0.5, 0.625, TextureSlot::Sun)
                .with_tint(Vec3::new(1.0, 0.9, 0.3)),
            CelestialBody::new("Mercury", 0.39 * AU, 4.15, 1.0, 0.045, TextureSlot::Mercury)
                .with_tint(Vec3::new(0.7, 0.7, 0.7)),
            CelestialBody::new("Venus", 0.72 * AU, 1.62, 1.2, 0.1125, TextureSlot::Venus)
                .with_tint(Vec3::new(1.0, 0.8, 0.5)),
            CelestialBody::new("Earth", AU, 1.0, 1.5, 0.125, TextureSlot::Earth)
                .with_tint(Vec3::new(0.5, 0.7, 1.0)),
            CelestialBody::new("Moon", 0.2, 12.0, 2.0, 0.0325, TextureSlot::Moon)
                .orbiting(EARTH)
                .with_tint(Vec3::new(0.8, 0.8, 0.8)),
            CelestialBody::new("Mars", 1.52 * AU, 0.53, 1.0, 0.0675, TextureSlot::Mars)
                .with_tint(Vec3::new(1.0, 0.5, 0.3)),
            CelestialBody::new("Jupiter", 5.20 * AU, 0.08, 0.8, 0.25, TextureSlot::Jupiter)
                .with_tint(Vec3::new(1.0, 0.8, 0.5)),
            CelestialBody::new("Saturn", 9.58 * AU, 0.03, 0.7, 0.2125, TextureSlot::Saturn)
                .with_tint(Vec3::new(1.0, 0.9, 0.6)),
            CelestialBody::new("Uranus", 19.18 * AU, 0.011, 0.6, 0.15, TextureSlot::Uranus)
                .with_tint(Vec3::new(0.7, 0.9, 1.0)),
            CelestialBody::new("Neptune", 30.07 * AU, 0.006, 0.5, 0.145, TextureSlot::Neptune)
                .with_tint(Vec3::new(0.5, 0.7, 1.0)),
        ];

        let roster = Self {
            update_order: vec![
                BodyId(0),
                BodyId(1),
                BodyId(2),
                BodyId(3),
                BodyId(5),
                BodyId(6),
                BodyId(7),
                BodyId(8),
                BodyId(9),
                BodyId(4),
            ],
            bodies,
        };
        info!(bodies = roster.len(), "built solar system roster");
        roster
    }

    /// Number of bodies, including the central star.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Always `false` for a validated roster.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Look up a body.
    pub fn get(&self, id: BodyId) -> Option<&CelestialBody> {
        self.bodies.get(id.index())
    }

    /// Replace a body's orbit parameters. Kinematic state is derived, so the
    /// change shows up at the next [`Kinematics::update`](crate::Kinematics::update).
    /// Unknown ids are ignored; parent links are fixed at construction.
    pub fn set_orbit(&mut self, id: BodyId, orbit_radius: f32, orbit_angular_speed: f32) {
        if let Some(body) = self.bodies.get_mut(id.index()) {
            body.orbit_radius = orbit_radius;
            body.orbit_angular_speed = orbit_angular_speed;
        }
    }

    /// All bodies in roster order.
    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    /// Body ids ordered so that every parent precedes its children.
    pub fn update_order(&self) -> &[BodyId] {
        &self.update_order
    }

    /// Iterate `(id, body)` pairs in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &CelestialBody)> {
        self.bodies.iter().enumerate().map(|(i, b)| (BodyId(i), b))
    }

    /// How many bodies the follow camera can target: every body except the
    /// central one at index 0.
    pub fn cyclable_count(&self) -> usize {
        self.bodies.len().saturating_sub(1)
    }
}

/// Number of parent hops from `id` to a root.
fn depth_of(bodies: &[CelestialBody], id: BodyId) -> Result<usize, SpaceError> {
    let mut depth = 0;
    let mut current = bodies[id.index()].parent;
    while let Some(parent) = current {
        depth += 1;
        if depth > bodies.len() {
            return Err(SpaceError::ParentCycle(id));
        }
        current = bodies.get(parent.index()).and_then(|b| b.parent);
    }
    Ok(depth)
}
