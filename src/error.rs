// Error types for the room editor

use glam::Vec3;
use thiserror::Error;

use crate::boundary::Side;
use crate::geometry::Size;

pub type Result<T, E = EditorError> = std::result::Result<T, E>;

/// Why an editing operation was refused. The scene is untouched whenever one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    /// Requested position lies outside the room's coordinate range.
    #[error("position {position} is outside the room (half-extent {half_extent})")]
    OutOfRoom { position: Vec3, half_extent: f32 },

    /// Resulting bounding box would cross one or more room boundaries.
    #[error("object would cross the {} boundary", SideList(.sides))]
    BoundaryViolation { sides: Vec<Side> },

    #[error("no element at index {index} (scene has {len})")]
    OutOfRange { index: usize, len: usize },

    #[error("unsupported kind: {0}")]
    UnsupportedKind(String),

    /// Registry policy limit for the kind has been reached.
    #[error("can't add more than {limit} {kind}s to the scene")]
    LimitReached { kind: &'static str, limit: usize },

    #[error("scale factor must be a positive number, got {0}")]
    InvalidScale(f32),

    #[error("invalid size {0:?}")]
    InvalidSize(Size),

    #[error("transform values must be finite")]
    NonFinite,

    #[error("model has no vertices")]
    EmptyGeometry,

    #[error("model has {0} vertices, more than 16-bit indices can address")]
    TooManyVertices(usize),

    #[error("index {index} is out of bounds for {vertices} vertices")]
    InvalidIndex { index: u16, vertices: usize },

    #[error("room half-extent must be a positive number, got {0}")]
    InvalidRoom(f32),

    #[error("unsupported texture type {0}, expected image/jpeg or image/png")]
    UnsupportedTexture(String),

    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),
}

struct SideList<'a>(&'a [Side]);

impl std::fmt::Display for SideList<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, side) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{side}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_message_names_every_side() {
        let err = EditorError::BoundaryViolation {
            sides: vec![Side::Top, Side::Right],
        };
        assert_eq!(err.to_string(), "object would cross the top, right boundary");
    }

    #[test]
    fn out_of_room_message_has_position() {
        let err = EditorError::OutOfRoom {
            position: Vec3::new(15.0, 0.0, 0.0),
            half_extent: 10.0,
        };
        assert_eq!(
            err.to_string(),
            "position [15, 0, 0] is outside the room (half-extent 10)"
        );
    }
}
