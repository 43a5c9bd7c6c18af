// Scene module for the room editor

use log::info;

use crate::aabb::Aabb;
use crate::appearance::Material;
use crate::config::ObjectLimits;
use crate::error::{EditorError, Result};
use crate::geometry::{Mesh, ShapeKind};
use crate::light::Light;
use crate::math::Transform;

/// Broad kind of a placed object, used for registry limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectClass {
    Primitive,
    Model,
}

impl ObjectClass {
    pub fn of(kind: &ShapeKind) -> Self {
        if kind.is_primitive() {
            ObjectClass::Primitive
        } else {
            ObjectClass::Model
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ObjectClass::Primitive => "primitive",
            ObjectClass::Model => "model",
        }
    }
}

/// Represents an object placed inside the room.
///
/// Transform and bounding box are only changed by the editor, which keeps the
/// box in step with the transform.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    name: Option<String>,
    class: ObjectClass,
    mesh: Mesh,
    transform: Transform,
    bounding_box: Aabb,
    pub material: Material,
}

impl SceneObject {
    pub(crate) fn new(
        name: Option<String>,
        class: ObjectClass,
        mesh: Mesh,
        transform: Transform,
        bounding_box: Aabb,
        material: Material,
    ) -> Self {
        Self {
            name,
            class,
            mesh,
            transform,
            bounding_box,
            material,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name shown in the selection list, `Element <index>` when unnamed.
    pub fn label(&self, index: usize) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("Element {index}"),
        }
    }

    pub fn class(&self) -> ObjectClass {
        self.class
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn bounding_box(&self) -> &Aabb {
        &self.bounding_box
    }

    pub(crate) fn commit(&mut self, transform: Transform, bounding_box: Aabb) {
        self.transform = transform;
        self.bounding_box = bounding_box;
    }
}

/// Placed objects in selection order, plus the lights.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    pub lights: Vec<Light>,
    limits: ObjectLimits,
}

impl Scene {
    /// Creates a new, empty scene.
    pub fn new(limits: ObjectLimits) -> Self {
        Self {
            objects: Vec::new(),
            lights: Vec::new(),
            limits,
        }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn count(&self, class: ObjectClass) -> usize {
        self.objects.iter().filter(|o| o.class == class).count()
    }

    /// Fails when another object of `class` would exceed the registry limit.
    pub fn check_capacity(&self, class: ObjectClass) -> Result<()> {
        let limit = match class {
            ObjectClass::Primitive => self.limits.max_primitives,
            ObjectClass::Model => self.limits.max_models,
        };
        if self.count(class) >= limit {
            return Err(EditorError::LimitReached {
                kind: class.label(),
                limit,
            });
        }
        Ok(())
    }

    /// Appends an object and returns its index.
    pub fn add(&mut self, object: SceneObject) -> Result<usize> {
        self.check_capacity(object.class)?;
        self.objects.push(object);
        let index = self.objects.len() - 1;
        info!("Object added: {} at index {index}", self.objects[index].label(index));
        Ok(index)
    }

    /// Removes the object at `index`; later objects move down by one.
    pub fn remove_at(&mut self, index: usize) -> Result<SceneObject> {
        self.check_index(index)?;
        let object = self.objects.remove(index);
        info!("Object removed: {}", object.label(index));
        Ok(object)
    }

    pub fn get(&self, index: usize) -> Result<&SceneObject> {
        self.check_index(index)?;
        Ok(&self.objects[index])
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Result<&mut SceneObject> {
        self.check_index(index)?;
        Ok(&mut self.objects[index])
    }

    pub fn all(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Selection list labels in index order.
    pub fn labels(&self) -> Vec<String> {
        self.objects
            .iter()
            .enumerate()
            .map(|(i, o)| o.label(i))
            .collect()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.objects.len() {
            Ok(())
        } else {
            Err(EditorError::OutOfRange {
                index,
                len: self.objects.len(),
            })
        }
    }
}
