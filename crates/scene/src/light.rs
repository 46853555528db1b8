//! Light definitions for the scene.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec4};

/// A spot light, used as the scene's switchable reflector.
///
/// Laid out for direct upload as a uniform block; positions and directions
/// are stored in view space, which is how the sink consumes them.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SpotLight {
    /// Ambient contribution
    pub ambient: Vec4,
    /// Diffuse contribution
    pub diffuse: Vec4,
    /// Specular contribution
    pub specular: Vec4,
    /// Position in view space
    pub position: Vec4,
    /// Cone direction in view space
    pub spot_direction: Vec4,
    /// Cosine of the cone cutoff angle
    pub spot_cos_cutoff: f32,
    /// Falloff exponent within the cone
    pub spot_exponent: f32,
    pub _pad: [f32; 2],
}

impl Default for SpotLight {
    fn default() -> Self {
        Self {
            ambient: Vec4::ZERO,
            diffuse: Vec4::ONE,
            specular: Vec4::ONE,
            position: Vec4::ZERO,
            spot_direction: Vec4::ZERO,
            spot_cos_cutoff: 0.7, // ~45 degree cone
            spot_exponent: 3.0,
            _pad: [0.0; 2],
        }
    }
}

impl SpotLight {
    /// Reflector at a world position shining straight down, expressed in
    /// view space for the current frame.
    pub fn reflector(view: &Mat4, world_position: Vec4) -> Self {
        Self {
            position: *view * world_position,
            spot_direction: *view * Vec4::new(0.0, -1.0, 0.0, 0.0),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_reflector_transforms_into_view_space() {
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -51.0));
        let light = SpotLight::reflector(&view, Vec4::new(1.0, 20.0, 1.0, 1.0));

        assert_eq!(light.position, Vec4::new(1.0, 20.0, -50.0, 1.0));
        // directions have w = 0 and ignore the translation
        assert_eq!(light.spot_direction, Vec4::new(0.0, -1.0, 0.0, 0.0));
    }

    #[test]
    fn test_default_cone_parameters() {
        let light = SpotLight::default();
        assert_eq!(light.spot_cos_cutoff, 0.7);
        assert_eq!(light.spot_exponent, 3.0);
        assert_eq!(light.ambient, Vec4::ZERO);
    }
}
