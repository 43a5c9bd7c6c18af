//! Room editor: places and moves 3D objects inside a bounded room.
//!
//! Every object carries a world-space bounding box. Placing, moving, scaling
//! and rotating an object is refused whenever the resulting box would cross one
//! of the six planes bounding the room, and a refused edit leaves the object
//! untouched. Rendering, asset decoding and UI layout live outside this crate;
//! [`render::RenderSink`] is the seam a renderer plugs into.

pub mod aabb;
pub mod appearance;
pub mod boundary;
pub mod camera;
pub mod command;
pub mod config;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod input;
pub mod light;
pub mod math;
pub mod render;
pub mod scene;
pub mod session;

pub use aabb::{compute_aabb, Aabb};
pub use boundary::{BoundaryPlane, BoundaryPlanes, IntersectionResult, Side};
pub use config::{Containment, EditorConfig, ObjectLimits, RoomConfig, ROOM_HALF_EXTENT};
pub use editor::{Editor, Placement};
pub use error::{EditorError, Result};
pub use geometry::{Mesh, ShapeKind, Size};
pub use scene::{Scene, SceneObject};
