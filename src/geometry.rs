// Geometry for placeable shapes

use glam::Vec3;

use crate::error::{EditorError, Result};

/// Vertex layout handed to the renderer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    pub fn new(position: Vec3) -> Self {
        Self {
            position: position.to_array(),
            color: [1.0, 1.0, 1.0],
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

/// Most vertices a mesh can address with `u16` indices.
pub const MAX_VERTICES: usize = u16::MAX as usize + 1;

/// Indexed triangle mesh in object-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    indices: Vec<u16>,
}

impl Mesh {
    /// Mesh from decoded model positions. Without indices the positions are
    /// taken as a plain triangle list.
    pub fn from_positions(positions: &[Vec3], indices: Option<Vec<u16>>) -> Result<Self> {
        if positions.is_empty() {
            return Err(EditorError::EmptyGeometry);
        }
        if positions.len() > MAX_VERTICES {
            return Err(EditorError::TooManyVertices(positions.len()));
        }
        if positions.iter().any(|p| !p.is_finite()) {
            return Err(EditorError::NonFinite);
        }
        let indices = match indices {
            Some(indices) => {
                if let Some(&index) = indices.iter().find(|&&i| i as usize >= positions.len()) {
                    return Err(EditorError::InvalidIndex {
                        index,
                        vertices: positions.len(),
                    });
                }
                indices
            }
            // Fits: at most MAX_VERTICES positions, so every index is <= u16::MAX.
            None => (0..positions.len()).map(|i| i as u16).collect(),
        };
        Ok(Self {
            vertices: positions.iter().copied().map(Vertex::new).collect(),
            indices,
        })
    }

    /// Box of the given size centered on the origin, one quad per face.
    pub fn cube(size: Size) -> Self {
        let (x, y, z) = (size.width / 2.0, size.height / 2.0, size.depth / 2.0);
        #[rustfmt::skip]
        let corners = [
            // Front
            [-x, -y,  z], [ x, -y,  z], [ x,  y,  z], [-x,  y,  z],
            // Back
            [-x, -y, -z], [-x,  y, -z], [ x,  y, -z], [ x, -y, -z],
            // Top
            [-x,  y, -z], [-x,  y,  z], [ x,  y,  z], [ x,  y, -z],
            // Bottom
            [-x, -y, -z], [ x, -y, -z], [ x, -y,  z], [-x, -y,  z],
            // Right
            [ x, -y, -z], [ x,  y, -z], [ x,  y,  z], [ x, -y,  z],
            // Left
            [-x, -y, -z], [-x, -y,  z], [-x,  y,  z], [-x,  y, -z],
        ];
        let indices = (0..6u16)
            .flat_map(|face| {
                let base = face * 4;
                [base, base + 1, base + 2, base + 2, base + 3, base]
            })
            .collect();
        Self {
            vertices: corners
                .iter()
                .map(|&c| Vertex::new(Vec3::from_array(c)))
                .collect(),
            indices,
        }
    }

    /// Four-sided cone: apex up, square base of circumradius `max(width, depth)`.
    pub fn pyramid(size: Size) -> Self {
        let radius = size.width.max(size.depth);
        let half = size.height / 2.0;

        let mut vertices = vec![Vertex::new(Vec3::new(0.0, half, 0.0))];
        for step in 0..4 {
            let theta = step as f32 * std::f32::consts::FRAC_PI_2;
            vertices.push(Vertex::new(Vec3::new(
                radius * theta.sin(),
                -half,
                radius * theta.cos(),
            )));
        }

        #[rustfmt::skip]
        let indices = vec![
            0, 1, 2,  0, 2, 3,  0, 3, 4,  0, 4, 1, // sides
            1, 3, 2,  1, 4, 3,                     // base
        ];
        Self { vertices, indices }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.vertices.iter().map(Vertex::position)
    }

    /// Raw vertex data ready for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Requested extent of a primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Size {
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Zero extents are allowed; negative or non-finite ones are not.
    pub fn validate(&self) -> Result<()> {
        let ok = [self.width, self.height, self.depth]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0);
        if ok {
            Ok(())
        } else {
            Err(EditorError::InvalidSize(*self))
        }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

/// What gets placed in the room.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Cube,
    Pyramid,
    /// Decoded model geometry supplied by a loader.
    Model(Mesh),
}

impl ShapeKind {
    /// Primitive kind by name, as typed in the editor.
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "cube" => Ok(ShapeKind::Cube),
            "pyramid" => Ok(ShapeKind::Pyramid),
            other => Err(EditorError::UnsupportedKind(other.to_string())),
        }
    }

    pub fn is_primitive(&self) -> bool {
        !matches!(self, ShapeKind::Model(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Cube => "cube",
            ShapeKind::Pyramid => "pyramid",
            ShapeKind::Model(_) => "model",
        }
    }

    /// Local-space mesh for this kind. Models ignore `size`.
    pub fn build_mesh(&self, size: Size) -> Result<Mesh> {
        let mesh = match self {
            ShapeKind::Cube => {
                size.validate()?;
                Mesh::cube(size)
            }
            ShapeKind::Pyramid => {
                size.validate()?;
                Mesh::pyramid(size)
            }
            ShapeKind::Model(mesh) if mesh.vertices.is_empty() => {
                return Err(EditorError::EmptyGeometry)
            }
            ShapeKind::Model(mesh) => mesh.clone(),
        };
        // A NaN vertex would silently drop out of the bounding box.
        if mesh.positions().any(|p| !p.is_finite()) {
            return Err(EditorError::NonFinite);
        }
        Ok(mesh)
    }
}

/// Model file formats the editor accepts from a loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    Obj,
    Gltf,
}

impl ModelFormat {
    /// Format from the file extension.
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        let ext = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "obj" => Ok(ModelFormat::Obj),
            "gltf" => Ok(ModelFormat::Gltf),
            _ => Err(EditorError::UnsupportedKind(file_name.to_string())),
        }
    }
}
