//! Procedural asteroid belt: static decoration scattered in an annulus.

use std::f32::consts::TAU;

use glam::{Mat4, Vec3};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::error::SpaceError;

/// Shape of the belt.
#[derive(Clone, Debug, PartialEq)]
pub struct BeltParams {
    /// Number of asteroids.
    pub count: usize,
    /// Closest distance from the origin.
    pub inner_radius: f32,
    /// Farthest distance from the origin.
    pub outer_radius: f32,
    /// Total vertical spread, centered on the orbital plane.
    pub vertical_jitter: f32,
    /// Smallest asteroid scale.
    pub scale_base: f32,
    /// Random extra scale added on top of `scale_base`.
    pub scale_spread: f32,
}

impl Default for BeltParams {
    /// A belt between Mars and Jupiter: 2.2–3.2 AU at 2.5 units per AU.
    fn default() -> Self {
        Self {
            count: 200,
            inner_radius: 5.5,
            outer_radius: 8.0,
            vertical_jitter: 0.25,
            scale_base: 0.02,
            scale_spread: 0.0175,
        }
    }
}

impl BeltParams {
    fn validate(&self) -> Result<(), SpaceError> {
        let values = [
            self.inner_radius,
            self.outer_radius,
            self.vertical_jitter,
            self.scale_base,
            self.scale_spread,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(SpaceError::InvalidBelt("parameters must be finite"));
        }
        if self.inner_radius < 0.0 {
            return Err(SpaceError::InvalidBelt("inner radius is negative"));
        }
        if self.outer_radius < self.inner_radius {
            return Err(SpaceError::InvalidBelt("outer radius is below inner radius"));
        }
        if self.vertical_jitter < 0.0 {
            return Err(SpaceError::InvalidBelt("vertical jitter is negative"));
        }
        if self.scale_base <= 0.0 || self.scale_spread < 0.0 {
            return Err(SpaceError::InvalidBelt("scale must be positive"));
        }
        Ok(())
    }
}

/// One asteroid: where it sits and how big it is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AsteroidInstance {
    /// World position.
    pub position: Vec3,
    /// Uniform scale applied to the unit sphere.
    pub scale: f32,
}

impl AsteroidInstance {
    /// Model transform: translate then scale. Asteroids do not spin.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_scale(Vec3::splat(self.scale))
    }

    /// Distance from the vertical axis.
    pub fn horizontal_radius(&self) -> f32 {
        Vec3::new(self.position.x, 0.0, self.position.z).length()
    }
}

/// The full belt. Generated once and never modified.
#[derive(Clone, Debug, PartialEq)]
pub struct AsteroidField {
    instances: Vec<AsteroidInstance>,
}

impl AsteroidField {
    /// Scatter `params.count` asteroids using `rng`.
    ///
    /// Angles are evenly spaced around the belt; only the radial offset,
    /// the height, and the scale are random.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::InvalidBelt`] when the parameters are out of range.
    pub fn generate<R: Rng + ?Sized>(params: &BeltParams, rng: &mut R) -> Result<Self, SpaceError> {
        params.validate()?;

        let band = params.outer_radius - params.inner_radius;
        let mut instances = Vec::with_capacity(params.count);

        for i in 0..params.count {
            let angle = i as f32 / params.count as f32 * TAU;
            let radius = params.inner_radius + rng.random::<f32>() * band;
            let height = (rng.random::<f32>() - 0.5) * params.vertical_jitter;
            let scale = params.scale_base + rng.random::<f32>() * params.scale_spread;

            instances.push(AsteroidInstance {
                position: Vec3::new(angle.cos() * radius, height, angle.sin() * radius),
                scale,
            });
        }

        Ok(Self { instances })
    }

    /// Generate from a seed. The same seed always produces the same belt.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::InvalidBelt`] when the parameters are out of range.
    pub fn from_seed(params: &BeltParams, seed: u64) -> Result<Self, SpaceError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let field = Self::generate(params, &mut rng)?;
        info!(
            count = field.len(),
            seed,
            inner = params.inner_radius,
            outer = params.outer_radius,
            "generated asteroid belt"
        );
        Ok(field)
    }

    /// All instances, in generation order.
    pub fn instances(&self) -> &[AsteroidInstance] {
        &self.instances
    }

    /// Number of asteroids.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether the belt is empty.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Iterate the instances.
    pub fn iter(&self) -> std::slice::Iter<'_, AsteroidInstance> {
        self.instances.iter()
    }
}
