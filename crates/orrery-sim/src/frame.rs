//! Per-frame output handed to the renderer.

use glam::{Mat4, Vec3, Vec4};
use orrery_lighting::LightSet;
use orrery_space::{BodyId, TextureSlot};

/// Scale of the unlit sphere drawn at the star's light.
pub const LIGHT_MARKER_SCALE: f32 = 0.075;

/// What a draw command depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawKind {
    /// A roster body.
    Body(BodyId),
    /// An asteroid, by index in the belt.
    Asteroid(usize),
    /// The unlit light marker.
    LightMarker,
}

/// One instance of the shared sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    /// Model transform applied to the unit sphere.
    pub model: Mat4,
    /// Texture to bind.
    pub texture: TextureSlot,
    /// What it is.
    pub kind: DrawKind,
}

impl DrawCommand {
    /// Whether the lit shader applies.
    pub fn is_lit(&self) -> bool {
        self.kind != DrawKind::LightMarker
    }

    /// World-space center of the instance.
    pub fn center(&self) -> Vec3 {
        self.model.w_axis.truncate()
    }
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone)]
pub struct FrameOutput {
    /// World to view.
    pub view: Mat4,
    /// View to clip.
    pub projection: Mat4,
    /// Eye position.
    pub eye: Vec3,
    /// Lights and shading constants.
    pub lights: LightSet,
    /// Bodies in roster order, then asteroids in belt order.
    pub draws: Vec<DrawCommand>,
    /// The star's light marker, drawn with the unlit shader.
    pub light_marker: DrawCommand,
    /// Background color.
    pub clear_color: Vec4,
    /// `false` once exit was requested.
    pub should_continue: bool,
}

impl FrameOutput {
    /// Combined view-projection.
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }

    /// Draw commands for roster bodies only.
    pub fn body_draws(&self) -> impl Iterator<Item = &DrawCommand> {
        self.draws
            .iter()
            .filter(|d| matches!(d.kind, DrawKind::Body(_)))
    }

    /// Draw commands for asteroids only.
    pub fn asteroid_draws(&self) -> impl Iterator<Item = &DrawCommand> {
        self.draws
            .iter()
            .filter(|d| matches!(d.kind, DrawKind::Asteroid(_)))
    }
}
