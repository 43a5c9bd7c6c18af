// Frame submission for an external renderer

use glam::Mat4;

use crate::camera::FirstPersonCamera;
use crate::light::Light;
use crate::scene::Scene;

// Uniform buffer structure for one draw
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    pub mvp: [[f32; 4]; 4],
    /// RGB tint, alpha unused.
    pub tint: [f32; 4],
}

impl Uniforms {
    pub fn new() -> Self {
        Self {
            mvp: Mat4::IDENTITY.to_cols_array_2d(),
            tint: [1.0; 4],
        }
    }

    pub fn update_mvp(&mut self, mvp: Mat4) {
        self.mvp = mvp.to_cols_array_2d();
    }
}

impl Default for Uniforms {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything needed to draw one scene object.
#[derive(Debug, Clone)]
pub struct DrawCall<'a> {
    pub index: usize,
    pub uniforms: Uniforms,
    pub vertices: &'a [u8],
    pub indices: &'a [u16],
    pub textured: bool,
}

impl DrawCall<'_> {
    pub fn uniform_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.uniforms)
    }
}

/// One frame's worth of draw calls, built from the committed scene.
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    pub draws: Vec<DrawCall<'a>>,
    pub lights: &'a [Light],
}

impl<'a> Frame<'a> {
    pub fn build(scene: &'a Scene, camera: &FirstPersonCamera, aspect_ratio: f32) -> Self {
        let view_projection = camera.projection_matrix(aspect_ratio) * camera.view_matrix();
        let draws = scene
            .all()
            .iter()
            .enumerate()
            .map(|(index, object)| {
                let mut uniforms = Uniforms::new();
                uniforms.update_mvp(view_projection * object.transform().matrix());
                let tint = object.material.tint().to_array();
                uniforms.tint = [tint[0], tint[1], tint[2], 1.0];
                DrawCall {
                    index,
                    uniforms,
                    vertices: object.mesh().vertex_bytes(),
                    indices: object.mesh().indices(),
                    textured: object.material.texture.is_some(),
                }
            })
            .collect();
        Self {
            draws,
            lights: &scene.lights,
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.draws.iter().map(|d| d.indices.len() / 3).sum()
    }
}

/// Consumer of committed frames, implemented by a real renderer.
pub trait RenderSink {
    fn submit(&mut self, frame: &Frame<'_>);
}

/// Sink that only logs frame statistics.
#[derive(Debug, Default)]
pub struct LogSink {
    pub frames: u64,
}

impl RenderSink for LogSink {
    fn submit(&mut self, frame: &Frame<'_>) {
        self.frames += 1;
        log::trace!(
            "frame {}: {} draws, {} triangles, {} lights",
            self.frames,
            frame.draws.len(),
            frame.triangle_count(),
            frame.lights.len()
        );
    }
}
