use super::camera_utils::{convert_matrix4_to_array, Camera, CameraUniform, OPENGL_TO_WGPU_MATRIX};
use cgmath::*;

/// Fixed perspective camera looking at the reference plane.
#[derive(Debug, Clone, Copy)]
pub struct PerspectiveCamera {
    pub eye: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub aspect: f32,
    pub fovy: Deg<f32>,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera for PerspectiveCamera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let view = Matrix4::look_at_rh(self.eye, self.target, self.up);
        let proj = perspective(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }
}

impl PerspectiveCamera {
    /// Camera five units in front of the plane, looking at its centre.
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Point3::new(0.0, 0.0, 5.0),
            target: Point3::origin(),
            up: Vector3::unit_y(),
            aspect,
            fovy: Deg(75.0),
            znear: 0.1,
            zfar: 100.0,
        }
    }

    pub fn look_at(mut self, eye: Point3<f32>, target: Point3<f32>) -> Self {
        self.eye = eye;
        self.target = target;
        self
    }

    pub fn resize_projection(&mut self, width: u32, height: u32) {
        // A minimized window reports a zero height
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    /// Uniform for a wgpu-style renderer (0..1 depth range).
    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_position: [self.eye.x, self.eye.y, self.eye.z, 1.0],
            view_proj: convert_matrix4_to_array(
                OPENGL_TO_WGPU_MATRIX * self.build_view_projection_matrix(),
            ),
        }
    }

    /// Normalized device coordinates of a world point, `None` behind the eye.
    pub fn project_to_ndc(&self, point: Point3<f32>) -> Option<Vector2<f32>> {
        let clip = self.build_view_projection_matrix() * point.to_homogeneous();
        if clip.w <= f32::EPSILON {
            return None;
        }
        Some(Vector2::new(clip.x / clip.w, clip.y / clip.w))
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_projects_to_center() {
        let camera = PerspectiveCamera::default();
        let ndc = camera.project_to_ndc(Point3::origin()).unwrap();
        assert!(ndc.magnitude() < 1e-6);
    }

    #[test]
    fn test_point_behind_eye_is_rejected() {
        let camera = PerspectiveCamera::default();
        assert!(camera.project_to_ndc(Point3::new(0.0, 0.0, 10.0)).is_none());
    }

    #[test]
    fn test_resize_ignores_zero_height() {
        let mut camera = PerspectiveCamera::default();
        camera.resize_projection(1600, 800);
        assert_eq!(camera.aspect, 2.0);
        camera.resize_projection(1600, 0);
        assert_eq!(camera.aspect, 2.0);
    }

    #[test]
    fn test_uniform_depth_range() {
        let camera = PerspectiveCamera::default();
        let uniform = camera.uniform();
        let view_proj = Matrix4::from(uniform.view_proj);

        // The target sits between the clip planes, so its depth is in 0..1
        let clip = view_proj * Point3::origin().to_homogeneous();
        let depth = clip.z / clip.w;
        assert!(depth > 0.0 && depth < 1.0);
        assert_eq!(uniform.view_position, [0.0, 0.0, 5.0, 1.0]);
    }
}
