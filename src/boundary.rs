//! The six planes bounding the room and the containment test against them.

use std::collections::BTreeMap;
use std::fmt;

use glam::Vec3;

use crate::aabb::Aabb;
use crate::config::{Containment, RoomConfig};

/// One face of the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
    Front,
    Back,
}

impl Side {
    pub const ALL: [Side; 6] = [
        Side::Top,
        Side::Bottom,
        Side::Left,
        Side::Right,
        Side::Front,
        Side::Back,
    ];

    /// Outward normal of the face.
    pub fn normal(self) -> Vec3 {
        match self {
            Side::Top => Vec3::Y,
            Side::Bottom => Vec3::NEG_Y,
            Side::Left => Vec3::NEG_X,
            Side::Right => Vec3::X,
            Side::Front => Vec3::Z,
            Side::Back => Vec3::NEG_Z,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
            Side::Front => "front",
            Side::Back => "back",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Half-space `normal · p <= distance`; `normal` points out of the room.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryPlane {
    pub normal: Vec3,
    pub distance: f32,
}

impl BoundaryPlane {
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.distance
    }

    /// Whether any part of `aabb` leaves the legal side of this plane.
    pub fn is_crossed_by(&self, aabb: &Aabb, containment: Containment) -> bool {
        let far = aabb.max_along(self.normal);
        match containment {
            Containment::Inclusive => far > self.distance,
            Containment::Exclusive => far >= self.distance,
        }
    }
}

/// Violated planes keyed by side. Empty means the box is contained.
pub type IntersectionResult = BTreeMap<Side, BoundaryPlane>;

/// The fixed planes of a room, built once and never moved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryPlanes {
    pub top: BoundaryPlane,
    pub bottom: BoundaryPlane,
    pub left: BoundaryPlane,
    pub right: BoundaryPlane,
    pub front: BoundaryPlane,
    pub back: BoundaryPlane,
    half_extent: f32,
    containment: Containment,
}

impl BoundaryPlanes {
    pub fn new(room: RoomConfig) -> Self {
        let plane = |side: Side| BoundaryPlane {
            normal: side.normal(),
            distance: room.half_extent,
        };
        Self {
            top: plane(Side::Top),
            bottom: plane(Side::Bottom),
            left: plane(Side::Left),
            right: plane(Side::Right),
            front: plane(Side::Front),
            back: plane(Side::Back),
            half_extent: room.half_extent,
            containment: room.containment,
        }
    }

    pub fn half_extent(&self) -> f32 {
        self.half_extent
    }

    pub fn containment(&self) -> Containment {
        self.containment
    }

    pub fn get(&self, side: Side) -> &BoundaryPlane {
        match side {
            Side::Top => &self.top,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
            Side::Right => &self.right,
            Side::Front => &self.front,
            Side::Back => &self.back,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Side, &BoundaryPlane)> + '_ {
        Side::ALL.into_iter().map(move |side| (side, self.get(side)))
    }

    /// Planes the box crosses or lies beyond.
    pub fn evaluate(&self, aabb: &Aabb) -> IntersectionResult {
        self.iter()
            .filter(|(_, plane)| plane.is_crossed_by(aabb, self.containment))
            .map(|(side, plane)| (side, *plane))
            .collect()
    }

    /// Per-axis range check on a point, always boundary-inclusive.
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.abs().cmple(Vec3::splat(self.half_extent)).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(containment: Containment) -> BoundaryPlanes {
        BoundaryPlanes::new(RoomConfig {
            half_extent: 10.0,
            containment,
        })
    }

    fn sides(result: &IntersectionResult) -> Vec<Side> {
        result.keys().copied().collect()
    }

    #[test]
    fn planes_face_outward() {
        let planes = room(Containment::Inclusive);
        assert_eq!(planes.top.normal, Vec3::Y);
        assert_eq!(planes.back.normal, Vec3::NEG_Z);
        assert!(planes.iter().all(|(_, p)| p.distance == 10.0));
        assert_eq!(planes.right.signed_distance(Vec3::new(12.0, 0.0, 0.0)), 2.0);
    }

    #[test]
    fn box_inside_is_clear() {
        let planes = room(Containment::Exclusive);
        let b = Aabb::new(Vec3::splat(-9.9), Vec3::splat(9.9));
        assert!(planes.evaluate(&b).is_empty());
    }

    #[test]
    fn crossing_names_each_side() {
        let planes = room(Containment::Inclusive);
        let b = Aabb::new(Vec3::new(-11.0, 0.0, -1.0), Vec3::new(1.0, 10.5, 1.0));
        assert_eq!(sides(&planes.evaluate(&b)), vec![Side::Top, Side::Left]);

        let b = Aabb::new(Vec3::new(0.0, -12.0, 9.0), Vec3::new(1.0, 0.0, 10.2));
        assert_eq!(sides(&planes.evaluate(&b)), vec![Side::Bottom, Side::Front]);

        let b = Aabb::new(Vec3::new(9.0, 0.0, -10.1), Vec3::new(10.5, 0.0, 0.0));
        assert_eq!(sides(&planes.evaluate(&b)), vec![Side::Right, Side::Back]);
    }

    #[test]
    fn box_entirely_outside_is_a_violation() {
        let planes = room(Containment::Inclusive);
        let b = Aabb::new(Vec3::new(20.0, 0.0, 0.0), Vec3::new(22.0, 1.0, 1.0));
        assert_eq!(sides(&planes.evaluate(&b)), vec![Side::Right]);
    }

    #[test]
    fn touching_depends_on_policy() {
        let b = Aabb::new(Vec3::new(8.0, -1.0, -1.0), Vec3::new(10.0, 1.0, 1.0));
        assert!(room(Containment::Inclusive).evaluate(&b).is_empty());
        assert_eq!(
            sides(&room(Containment::Exclusive).evaluate(&b)),
            vec![Side::Right]
        );
    }

    #[test]
    fn degenerate_box_is_not_special() {
        let planes = room(Containment::Inclusive);
        let flat = Aabb::new(Vec3::new(-1.0, 3.0, -1.0), Vec3::new(1.0, 3.0, 1.0));
        assert!(planes.evaluate(&flat).is_empty());
        let flat = Aabb::new(Vec3::new(-1.0, 11.0, -1.0), Vec3::new(1.0, 11.0, 1.0));
        assert_eq!(sides(&planes.evaluate(&flat)), vec![Side::Top]);
    }

    #[test]
    fn point_range_is_inclusive() {
        let planes = room(Containment::Exclusive);
        assert!(planes.contains_point(Vec3::new(10.0, -10.0, 0.0)));
        assert!(!planes.contains_point(Vec3::new(15.0, 0.0, 0.0)));
    }
}
