// Editor configuration

use crate::error::{EditorError, Result};

/// Default half-extent of the room, in world units.
pub const ROOM_HALF_EXTENT: f32 = 10.0;

/// How a box face lying exactly on a boundary plane is judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Containment {
    /// Touching the boundary is allowed.
    #[default]
    Inclusive,
    /// Touching the boundary counts as crossing it.
    Exclusive,
}

/// Shape of the legal placement volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomConfig {
    pub half_extent: f32,
    pub containment: Containment,
}

impl RoomConfig {
    pub fn new(half_extent: f32, containment: Containment) -> Result<Self> {
        let room = Self {
            half_extent,
            containment,
        };
        room.validate()?;
        Ok(room)
    }

    /// The half-extent must be finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        if self.half_extent.is_finite() && self.half_extent > 0.0 {
            Ok(())
        } else {
            Err(EditorError::InvalidRoom(self.half_extent))
        }
    }
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            half_extent: ROOM_HALF_EXTENT,
            containment: Containment::Inclusive,
        }
    }
}

/// Registry capacity per kind of object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectLimits {
    pub max_primitives: usize,
    pub max_models: usize,
}

impl Default for ObjectLimits {
    fn default() -> Self {
        Self {
            max_primitives: 10,
            max_models: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorConfig {
    pub room: RoomConfig,
    pub limits: ObjectLimits,
    /// Distance an object moves per key press.
    pub move_step: f32,
    /// Distance the camera moves per key press.
    pub camera_speed: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            room: RoomConfig::default(),
            limits: ObjectLimits::default(),
            move_step: 0.1,
            camera_speed: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_room_is_valid() {
        assert_eq!(RoomConfig::default().validate(), Ok(()));
        let room = RoomConfig::new(2.5, Containment::Exclusive).unwrap();
        assert_eq!(room.half_extent, 2.5);
    }

    #[test]
    fn degenerate_rooms_are_rejected() {
        for half_extent in [0.0, -1.0, f32::INFINITY] {
            assert_eq!(
                RoomConfig::new(half_extent, Containment::Inclusive),
                Err(EditorError::InvalidRoom(half_extent))
            );
        }
        assert!(matches!(
            RoomConfig::new(f32::NAN, Containment::Inclusive),
            Err(EditorError::InvalidRoom(v)) if v.is_nan()
        ));
    }
}
