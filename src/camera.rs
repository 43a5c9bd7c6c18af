// First-person camera

use glam::{Mat4, Vec3};

/// Camera-relative direction a key moves along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraAxis {
    Forward,
    Right,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirstPersonCamera {
    pub position: Vec3,
    /// Radians about +y; zero looks down -z.
    pub yaw: f32,
    /// Radians above the horizon.
    pub pitch: f32,
    pub speed: f32,
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl FirstPersonCamera {
    pub fn new(position: Vec3, speed: f32) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
            speed,
            fov_y: 75.0_f32.to_radians(),
            near: 0.1,
            far: 100.0,
        }
    }

    pub fn forward(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(-sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch).normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward()).normalize()
    }

    /// Moves one step of `speed` along `axis`; `direction` is +1 or -1.
    pub fn step(&mut self, axis: CameraAxis, direction: f32) {
        let vector = match axis {
            CameraAxis::Forward => self.forward(),
            CameraAxis::Right => self.right(),
            CameraAxis::Up => self.up(),
        };
        self.position += vector * self.speed * direction;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, aspect_ratio, self.near, self.far)
    }
}

impl Default for FirstPersonCamera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 4.0), 0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn default_basis_looks_down_negative_z() {
        let camera = FirstPersonCamera::default();
        assert_abs_diff_eq!(camera.forward().z, -1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(camera.right().x, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(camera.up().y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn steps_move_by_speed() {
        let mut camera = FirstPersonCamera::new(Vec3::ZERO, 0.5);
        camera.step(CameraAxis::Forward, 1.0);
        camera.step(CameraAxis::Right, -1.0);
        camera.step(CameraAxis::Up, 1.0);
        assert_abs_diff_eq!(camera.position.x, -0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(camera.position.y, 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(camera.position.z, -0.5, epsilon = 1e-6);
    }

    #[test]
    fn view_moves_world_opposite_to_camera() {
        let camera = FirstPersonCamera::default();
        let p = camera.view_matrix().transform_point3(Vec3::ZERO);
        assert_abs_diff_eq!(p.z, -4.0, epsilon = 1e-5);
    }
}
