//! The full set of lights uploaded for one frame.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::directional::DirectionalLight;
use crate::point::{PointLight, PointLightGpu};
use crate::spot::SpotLight;

/// Number of fill lights ringed around the star.
pub const SECONDARY_LIGHT_COUNT: usize = 6;

/// Distance of the fill lights from the star center.
pub const SECONDARY_RING_RADIUS: f32 = 0.75;

/// Material shininess exponent shared by every lit body.
pub const MATERIAL_SHININESS: f32 = 1.0;

/// Offset of fill light `i` from the star.
///
/// Lights alternate between an upper and a lower latitude so the ring
/// lights the star's neighborhood from both sides of the orbital plane.
pub fn secondary_light_offset(i: usize) -> Vec3 {
    let theta = TAU * i as f32 / SECONDARY_LIGHT_COUNT as f32;
    let phi = PI * if i % 2 == 0 { 0.33 } else { 0.66 };
    Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin()) * SECONDARY_RING_RADIUS
}

/// Lights and shading constants for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct LightSet {
    /// The light at the star's center.
    pub primary: PointLight,
    /// Dimmer fill lights on a small sphere around the star.
    pub secondary: [PointLight; SECONDARY_LIGHT_COUNT],
    /// Disabled directional light.
    pub directional: DirectionalLight,
    /// Disabled camera headlamp.
    pub spot: SpotLight,
    /// Specular exponent.
    pub shininess: f32,
    /// Camera eye, for specular terms.
    pub view_position: Vec3,
}

impl LightSet {
    /// Build the frame's lights around a star at `star`, seen from `eye`
    /// looking along `front`.
    pub fn around_star(star: Vec3, eye: Vec3, front: Vec3) -> Self {
        let primary = PointLight {
            position: star,
            ambient: Vec3::splat(0.3),
            diffuse: Vec3::splat(0.7),
            specular: Vec3::ZERO,
            constant: 1.0,
            linear: 0.007,
            quadratic: 0.0002,
        };

        let secondary = std::array::from_fn(|i| PointLight {
            position: star + secondary_light_offset(i),
            ambient: Vec3::splat(0.15),
            diffuse: Vec3::splat(0.35),
            specular: Vec3::ZERO,
            constant: 1.0,
            linear: 0.07,
            quadratic: 0.017,
        });

        Self {
            primary,
            secondary,
            directional: DirectionalLight::default(),
            spot: SpotLight::headlamp(eye, front),
            shininess: MATERIAL_SHININESS,
            view_position: eye,
        }
    }

    /// Every point light, primary first.
    pub fn point_lights(&self) -> impl Iterator<Item = &PointLight> {
        std::iter::once(&self.primary).chain(self.secondary.iter())
    }

    /// Point lights packed for upload, primary first.
    pub fn point_lights_gpu(&self) -> Vec<PointLightGpu> {
        self.point_lights().map(PointLight::to_gpu).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set() -> LightSet {
        LightSet::around_star(Vec3::ZERO, Vec3::new(0.0, 5.0, 20.0), Vec3::NEG_Z)
    }

    #[test]
    fn test_seven_point_lights() {
        assert_eq!(set().point_lights().count(), 1 + SECONDARY_LIGHT_COUNT);
        assert_eq!(set().point_lights_gpu().len(), 7);
    }

    #[test]
    fn test_primary_at_star() {
        let star = Vec3::new(1.0, 2.0, 3.0);
        let s = LightSet::around_star(star, Vec3::ZERO, Vec3::X);
        assert_eq!(s.primary.position, star);
        assert_eq!(s.primary.ambient, Vec3::splat(0.3));
        assert_eq!(s.primary.diffuse, Vec3::splat(0.7));
    }

    #[test]
    fn test_fill_lights_on_ring() {
        let star = Vec3::new(-4.0, 0.0, 2.0);
        let s = LightSet::around_star(star, Vec3::ZERO, Vec3::X);
        for light in &s.secondary {
            let d = (light.position - star).length();
            assert!((d - SECONDARY_RING_RADIUS).abs() < 1e-5);
            assert_eq!(light.diffuse, Vec3::splat(0.35));
        }
    }

    #[test]
    fn test_fill_lights_alternate_hemispheres() {
        for i in 0..SECONDARY_LIGHT_COUNT {
            let y = secondary_light_offset(i).y;
            if i % 2 == 0 {
                assert!(y > 0.0);
            } else {
                assert!(y < 0.0);
            }
        }
    }

    #[test]
    fn test_first_fill_light_offset() {
        let phi = PI * 0.33;
        let expected = Vec3::new(phi.sin(), phi.cos(), 0.0) * SECONDARY_RING_RADIUS;
        assert!((secondary_light_offset(0) - expected).length() < 1e-6);
    }

    #[test]
    fn test_auxiliary_lights_are_dark() {
        let s = set();
        assert!(!s.directional.is_enabled());
        assert_eq!(s.spot.diffuse, Vec3::ZERO);
        assert_eq!(s.spot.position, s.view_position);
        assert_eq!(s.shininess, 1.0);
    }
}
