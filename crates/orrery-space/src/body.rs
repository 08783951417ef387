//! Celestial body descriptors.

use glam::Vec3;

/// Index of a body within its [`BodyRoster`](crate::BodyRoster).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

impl BodyId {
    /// Raw index into the roster.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Opaque texture reference handed to the renderer.
///
/// The core never loads or inspects pixel data; a renderer maps each slot to
/// whatever handle its graphics API uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    /// The central star.
    Sun,
    /// First planet.
    Mercury,
    /// Second planet.
    Venus,
    /// Third planet.
    Earth,
    /// Earth's satellite.
    Moon,
    /// Fourth planet.
    Mars,
    /// Fifth planet.
    Jupiter,
    /// Sixth planet.
    Saturn,
    /// Seventh planet.
    Uranus,
    /// Eighth planet.
    Neptune,
    /// Shared by every asteroid instance.
    Asteroid,
}

impl TextureSlot {
    /// Every slot, in roster order followed by the asteroid texture.
    pub const ALL: [TextureSlot; 11] = [
        TextureSlot::Sun,
        TextureSlot::Mercury,
        TextureSlot::Venus,
        TextureSlot::Earth,
        TextureSlot::Moon,
        TextureSlot::Mars,
        TextureSlot::Jupiter,
        TextureSlot::Saturn,
        TextureSlot::Uranus,
        TextureSlot::Neptune,
        TextureSlot::Asteroid,
    ];

    /// Conventional image file name for this slot, e.g. `earth.jpg`.
    pub fn file_name(self) -> &'static str {
        match self {
            TextureSlot::Sun => "sun.jpg",
            TextureSlot::Mercury => "mercury.jpg",
            TextureSlot::Venus => "venus.jpg",
            TextureSlot::Earth => "earth.jpg",
            TextureSlot::Moon => "moon.jpg",
            TextureSlot::Mars => "mars.jpg",
            TextureSlot::Jupiter => "jupiter.jpg",
            TextureSlot::Saturn => "saturn.jpg",
            TextureSlot::Uranus => "uranus.jpg",
            TextureSlot::Neptune => "neptune.jpg",
            TextureSlot::Asteroid => "asteroid.jpg",
        }
    }
}

/// One orbiting or central object.
///
/// Orbits are circular, in the horizontal (XZ) plane, around the parent's
/// current position. The orbit angle is never stored: it is always
/// `time * orbit_angular_speed`.
#[derive(Clone, Debug, PartialEq)]
pub struct CelestialBody {
    /// Display name, used in logs and UI.
    pub name: String,
    /// Distance from the parent. Zero for the central star.
    pub orbit_radius: f32,
    /// Orbital rate in radians per second. Zero means stationary.
    pub orbit_angular_speed: f32,
    /// Spin about the vertical axis in radians per second.
    pub self_rotation_speed: f32,
    /// Uniform scale applied to the unit sphere.
    pub size: f32,
    /// Body this one orbits. `None` orbits the world origin.
    pub parent: Option<BodyId>,
    /// Texture used when drawing this body.
    pub texture: TextureSlot,
    /// Flat display color for untextured fallbacks.
    pub tint: Vec3,
}

impl CelestialBody {
    /// Create a body orbiting the world origin.
    pub fn new(
        name: impl Into<String>,
        orbit_radius: f32,
        orbit_angular_speed: f32,
        self_rotation_speed: f32,
        size: f32,
        texture: TextureSlot,
    ) -> Self {
        Self {
            name: name.into(),
            orbit_radius,
            orbit_angular_speed,
            self_rotation_speed,
            size,
            parent: None,
            texture,
            tint: Vec3::ONE,
        }
    }

    /// Set the parent body.
    pub fn orbiting(mut self, parent: BodyId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Set the display tint.
    pub fn with_tint(mut self, tint: Vec3) -> Self {
        self.tint = tint;
        self
    }

    /// Whether this body sits still at its parent's position.
    pub fn is_stationary(&self) -> bool {
        self.orbit_radius == 0.0 || self.orbit_angular_speed == 0.0
    }
}
