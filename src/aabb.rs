//! World-space axis-aligned bounding boxes.

use glam::Vec3;

use crate::geometry::Mesh;
use crate::math::Transform;

/// Axis-aligned bounding box. `min <= max` on every axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Box spanning the two corners, whatever their order.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Smallest box around `points`, `None` when there are none.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec3>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Box moved by `delta`.
    pub fn translated(&self, delta: Vec3) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Box scaled by `factor` about `pivot`. Corners are re-ordered so a
    /// negative factor still yields a valid box.
    pub fn scaled_about(&self, pivot: Vec3, factor: f32) -> Self {
        Self::new(
            pivot + (self.min - pivot) * factor,
            pivot + (self.max - pivot) * factor,
        )
    }

    /// Greatest value of `normal · p` over the box.
    pub fn max_along(&self, normal: Vec3) -> f32 {
        normal.x * if normal.x >= 0.0 { self.max.x } else { self.min.x }
            + normal.y * if normal.y >= 0.0 { self.max.y } else { self.min.y }
            + normal.z * if normal.z >= 0.0 { self.max.z } else { self.min.z }
    }

    /// Least value of `normal · p` over the box.
    pub fn min_along(&self, normal: Vec3) -> f32 {
        -self.max_along(-normal)
    }
}

/// Tight box around `mesh` after the full world transform.
///
/// A mesh always has at least one vertex once it is placed; an empty one
/// collapses to a point at the transform's position.
pub fn compute_aabb(mesh: &Mesh, transform: &Transform) -> Aabb {
    let matrix = transform.matrix();
    Aabb::from_points(mesh.positions().map(|p| matrix.transform_point3(p)))
        .unwrap_or(Aabb::new(transform.position, transform.position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_4;

    #[test]
    fn new_orders_corners() {
        let b = Aabb::new(Vec3::new(1.0, -1.0, 2.0), Vec3::new(-1.0, 1.0, 0.0));
        assert_eq!(b.min, Vec3::new(-1.0, -1.0, 0.0));
        assert_eq!(b.max, Vec3::new(1.0, 1.0, 2.0));
    }

    #[test]
    fn from_points_empty_is_none() {
        assert!(Aabb::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn translate_moves_both_corners() {
        let b = Aabb::new(-Vec3::ONE, Vec3::ONE).translated(Vec3::new(9.0, 0.0, 0.0));
        assert_eq!(b.min.x, 8.0);
        assert_eq!(b.max.x, 10.0);
    }

    #[test]
    fn scale_about_pivot() {
        let b = Aabb::new(Vec3::new(1.0, -1.0, -1.0), Vec3::new(3.0, 1.0, 1.0));
        let s = b.scaled_about(Vec3::new(2.0, 0.0, 0.0), 2.0);
        assert_eq!(s.min, Vec3::new(0.0, -2.0, -2.0));
        assert_eq!(s.max, Vec3::new(4.0, 2.0, 2.0));
    }

    #[test]
    fn extent_along_normal() {
        let b = Aabb::new(Vec3::new(-1.0, -2.0, -3.0), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(b.max_along(Vec3::Y), 2.0);
        assert_eq!(b.max_along(Vec3::NEG_Z), 3.0);
        assert_eq!(b.min_along(Vec3::X), -1.0);
    }

    #[test]
    fn unit_cube_at_origin() {
        let mesh = Mesh::cube(Size::new(2.0, 2.0, 2.0));
        let b = compute_aabb(&mesh, &Transform::identity());
        assert_eq!(b, Aabb::new(-Vec3::ONE, Vec3::ONE));
    }

    #[test]
    fn rotation_grows_the_box() {
        let mesh = Mesh::cube(Size::new(2.0, 2.0, 2.0));
        let t = Transform::placed(Vec3::new(3.0, 0.0, 0.0), Vec3::new(0.0, FRAC_PI_4, 0.0));
        let b = compute_aabb(&mesh, &t);
        let r = std::f32::consts::SQRT_2;
        assert_abs_diff_eq!(b.max.x, 3.0 + r, epsilon = 1e-5);
        assert_abs_diff_eq!(b.min.z, -r, epsilon = 1e-5);
        assert_abs_diff_eq!(b.max.y, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn scale_is_part_of_the_world_transform() {
        let mesh = Mesh::cube(Size::default());
        let t = Transform::identity().scaled(4.0);
        let b = compute_aabb(&mesh, &t);
        assert_eq!(b.size(), Vec3::splat(4.0));
        assert_eq!(b.center(), Vec3::ZERO);
    }
}
