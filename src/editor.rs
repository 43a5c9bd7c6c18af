//! Validated editing of the scene.
//!
//! Every change to where an object is or how big it is goes through [`Editor`]:
//! the resulting bounding box is computed from a candidate transform, tested
//! against the room's boundary planes, and only committed when no plane is
//! crossed. A refused operation leaves the object exactly as it was.

use glam::Vec3;
use log::{debug, info, warn};

use crate::aabb::{compute_aabb, Aabb};
use crate::appearance::{Color, Material, TextureRef};
use crate::boundary::BoundaryPlanes;
use crate::config::EditorConfig;
use crate::error::{EditorError, Result};
use crate::geometry::{ShapeKind, Size};
use crate::light::Light;
use crate::math::{degrees_to_radians, Transform};
use crate::scene::{ObjectClass, Scene, SceneObject};

/// Intensity of the ambient light every new scene starts with.
const STARTUP_AMBIENT_INTENSITY: f32 = 10.0;

/// A request to put a new object in the room.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub kind: ShapeKind,
    pub size: Size,
    /// Radians about the local x, then y, then z axis.
    pub rotation: Vec3,
    pub position: Vec3,
    pub name: Option<String>,
    pub color_flag: bool,
}

impl Placement {
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            size: Size::default(),
            rotation: Vec3::ZERO,
            position: Vec3::ZERO,
            name: None,
            color_flag: false,
        }
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn color_flag(mut self, color_flag: bool) -> Self {
        self.color_flag = color_flag;
        self
    }
}

pub struct Editor {
    config: EditorConfig,
    planes: BoundaryPlanes,
    scene: Scene,
}

impl Editor {
    /// Editor for the configured room. Fails when the room has no volume.
    pub fn new(config: EditorConfig) -> Result<Self> {
        config.room.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: EditorConfig) -> Self {
        let mut scene = Scene::new(config.limits);
        scene
            .lights
            .push(Light::ambient(Color::WHITE, STARTUP_AMBIENT_INTENSITY));
        Self {
            planes: BoundaryPlanes::new(config.room),
            config,
            scene,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn planes(&self) -> &BoundaryPlanes {
        &self.planes
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Ok when `aabb` stays on the legal side of every plane.
    pub fn check_contained(&self, aabb: &Aabb) -> Result<()> {
        let crossed = self.planes.evaluate(aabb);
        if crossed.is_empty() {
            Ok(())
        } else {
            Err(EditorError::BoundaryViolation {
                sides: crossed.into_keys().collect(),
            })
        }
    }

    /// Adds a new object if its position is in range and its box fits the room.
    pub fn place(&mut self, placement: Placement) -> Result<usize> {
        let class = ObjectClass::of(&placement.kind);
        self.scene.check_capacity(class)?;
        let mesh = placement.kind.build_mesh(placement.size)?;

        if !placement.position.is_finite() || !placement.rotation.is_finite() {
            return Err(EditorError::NonFinite);
        }
        if !self.planes.contains_point(placement.position) {
            warn!("Initial position {} is outside the room", placement.position);
            return Err(EditorError::OutOfRoom {
                position: placement.position,
                half_extent: self.planes.half_extent(),
            });
        }

        let transform = Transform::placed(placement.position, placement.rotation);
        let bounding_box = compute_aabb(&mesh, &transform);
        if let Err(err) = self.check_contained(&bounding_box) {
            warn!("Refused to place {}: {err}", placement.kind.label());
            return Err(err);
        }

        let object = SceneObject::new(
            placement.name,
            class,
            mesh,
            transform,
            bounding_box,
            Material::new(placement.color_flag),
        );
        self.scene.add(object)
    }

    /// Moves an object by `delta`.
    pub fn translate(&mut self, index: usize, delta: Vec3) -> Result<()> {
        if !delta.is_finite() {
            return Err(EditorError::NonFinite);
        }
        let object = self.scene.get(index)?;
        if delta == Vec3::ZERO {
            return Ok(());
        }

        let candidate = object.bounding_box().translated(delta);
        self.check_contained(&candidate)?;

        let transform = object.transform().translated(delta);
        self.scene.get_mut(index)?.commit(transform, candidate);
        debug!("Moved element {index} by {delta}");
        Ok(())
    }

    /// Uniformly scales an object by `factor` about its own position.
    pub fn scale(&mut self, index: usize, factor: f32) -> Result<()> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(EditorError::InvalidScale(factor));
        }
        let object = self.scene.get(index)?;
        let transform = object.transform().scaled(factor);
        let candidate = object
            .bounding_box()
            .scaled_about(object.transform().position, factor);
        if let Err(err) = self.check_contained(&candidate) {
            warn!("Refused to scale element {index} by {factor}: {err}");
            return Err(err);
        }

        self.scene.get_mut(index)?.commit(transform, candidate);
        debug!("Scaled element {index} by {factor}");
        Ok(())
    }

    /// Rotates an object in its own frame by the rotation vector `angles` (radians).
    ///
    /// The box is recomputed from the rotated geometry before anything is
    /// committed.
    pub fn rotate(&mut self, index: usize, angles: Vec3) -> Result<()> {
        if !angles.is_finite() {
            return Err(EditorError::NonFinite);
        }
        let object = self.scene.get(index)?;
        if angles == Vec3::ZERO {
            return Ok(());
        }

        let transform = object.transform().rotated_local(angles);
        let candidate = compute_aabb(object.mesh(), &transform);
        if let Err(err) = self.check_contained(&candidate) {
            warn!("Refused to rotate element {index}: {err}");
            return Err(err);
        }

        self.scene.get_mut(index)?.commit(transform, candidate);
        debug!("Rotated element {index} by {angles}");
        Ok(())
    }

    /// [`Editor::rotate`] with angles in degrees.
    pub fn rotate_degrees(&mut self, index: usize, degrees: Vec3) -> Result<()> {
        self.rotate(index, degrees_to_radians(degrees))
    }

    pub fn remove(&mut self, index: usize) -> Result<SceneObject> {
        self.scene.remove_at(index)
    }

    pub fn apply_color(&mut self, index: usize, color: Color) -> Result<()> {
        self.scene.get_mut(index)?.material.color = color;
        info!("Color applied to element {index}");
        Ok(())
    }

    pub fn apply_texture(&mut self, index: usize, texture: TextureRef) -> Result<()> {
        let object = self.scene.get_mut(index)?;
        info!("Texture {} applied to element {index}", texture.source);
        object.material.texture = Some(texture);
        Ok(())
    }

    pub fn add_light(&mut self, light: Light) {
        info!("Light added: {:?}", light.kind());
        self.scene.lights.push(light);
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::with_valid_config(EditorConfig::default())
    }
}
