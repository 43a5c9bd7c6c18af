// Math utilities for the room editor

use glam::{Mat4, Quat, Vec3};

/// Position, orientation and scale of an object in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    /// Create a new transform
    pub fn new(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Create an identity transform
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    /// Transform placed at `position`, rotated about its local x, then y, then z axis.
    pub fn placed(position: Vec3, euler: Vec3) -> Self {
        Self::new(position, euler_xyz(euler), Vec3::ONE)
    }

    /// Generate transformation matrix
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Copy of this transform rotated in its own frame by the rotation vector `angles`.
    ///
    /// The rotation is `|angles|` radians about `angles / |angles|`, so a single
    /// non-zero component is a plain rotation about that local axis and negating
    /// `angles` undoes it.
    pub fn rotated_local(&self, angles: Vec3) -> Self {
        Self {
            rotation: (self.rotation * Quat::from_scaled_axis(angles)).normalize(),
            ..*self
        }
    }

    /// Copy of this transform moved by `delta`.
    pub fn translated(&self, delta: Vec3) -> Self {
        Self {
            position: self.position + delta,
            ..*self
        }
    }

    /// Copy of this transform uniformly scaled by `factor` about its own position.
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            scale: self.scale * factor,
            ..*self
        }
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.rotation.is_finite() && self.scale.is_finite()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Sequential local rotations about x, then y, then z.
pub fn euler_xyz(angles: Vec3) -> Quat {
    Quat::from_rotation_x(angles.x) * Quat::from_rotation_y(angles.y) * Quat::from_rotation_z(angles.z)
}

/// Convert per-axis angles from degrees to radians.
pub fn degrees_to_radians(degrees: Vec3) -> Vec3 {
    Vec3::new(
        degrees.x.to_radians(),
        degrees.y.to_radians(),
        degrees.z.to_radians(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn identity_matrix_is_identity() {
        assert_eq!(Transform::identity().matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn single_axis_rotation_matches_axis_rotation() {
        let t = Transform::identity().rotated_local(Vec3::new(0.0, FRAC_PI_2, 0.0));
        let p = t.matrix().transform_point3(Vec3::X);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(p.z, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn negated_rotation_undoes_rotation() {
        let start = Transform::placed(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.3, -0.2, 0.9));
        let angles = Vec3::new(0.4, 1.1, -0.7);
        let back = start.rotated_local(angles).rotated_local(-angles);
        let a = start.matrix().transform_point3(Vec3::ONE);
        let b = back.matrix().transform_point3(Vec3::ONE);
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-5);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-5);
        assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-5);
    }

    #[test]
    fn scaling_keeps_position() {
        let t = Transform::placed(Vec3::new(2.0, 0.0, 0.0), Vec3::ZERO).scaled(3.0);
        assert_eq!(t.position, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(t.scale, Vec3::splat(3.0));
    }
}
