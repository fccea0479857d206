//! # Plane Picking
//!
//! Converts a pointer position into a point on the reference plane.
//!
//! ## How it works
//!
//! 1. **Pointer to Ray**: unproject the NDC position at the near and far clip
//!    planes through the inverse view-projection matrix
//! 2. **Ray to Plane**: move the ray into the plane object's local space and
//!    intersect the local z = 0 plane
//! 3. **Extent**: keep hits inside the plane's bounds, then return the hit in
//!    world space lifted off the surface by the authoring depth
//!
//! ## Usage
//!
//! ```rust
//! use polyplane::config::SketchConfig;
//! use polyplane::gfx::camera::PerspectiveCamera;
//! use polyplane::gfx::picking::PlanePicker;
//! use polyplane::gfx::scene::Scene;
//! use cgmath::Vector2;
//!
//! let config = SketchConfig::default();
//! let scene = Scene::from_config(&config).unwrap();
//! let picker = PlanePicker::new(config.authoring_depth);
//!
//! // The centre of the screen looks at the centre of the plane
//! let hit = picker.pick(Vector2::new(0.0, 0.0), &PerspectiveCamera::default(), scene.reference_plane());
//! assert!(hit.is_some());
//! ```

use cgmath::{
    EuclideanSpace, InnerSpace, Matrix4, Point3, SquareMatrix, Transform, Vector2,
    Vector3, Vector4, Zero,
};
use log::trace;

use crate::gfx::camera::Camera;
use crate::gfx::scene::SceneObject;

/// Hits closer than this to the plane edge still count as inside.
const EXTENT_EPSILON: f32 = 1e-4;
/// Rays whose normalized direction has a smaller z are treated as parallel.
const PARALLEL_EPSILON: f32 = 1e-4;

/// A 3D ray for intersection testing
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ray origin point in world space
    pub origin: Vector3<f32>,
    /// Ray direction (normalized)
    pub direction: Vector3<f32>,
}

impl Ray {
    /// Create a new ray
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vector3<f32> {
        self.origin + self.direction * t
    }

    /// Ray from the near clip plane through an NDC position
    ///
    /// Returns `None` if the camera matrix cannot be inverted.
    pub fn from_ndc(ndc: Vector2<f32>, camera: &impl Camera) -> Option<Self> {
        let inv_view_proj = camera.inverse_view_projection()?;

        let near = unproject(&inv_view_proj, Vector4::new(ndc.x, ndc.y, -1.0, 1.0))?;
        let far = unproject(&inv_view_proj, Vector4::new(ndc.x, ndc.y, 1.0, 1.0))?;

        let direction = far - near;
        if direction.magnitude2() <= f32::EPSILON {
            return None;
        }
        Some(Ray::new(near, direction))
    }

    /// The same ray expressed in another coordinate frame
    pub fn transform(&self, matrix: &Matrix4<f32>) -> Self {
        let origin = matrix.transform_point(Point3::from_vec(self.origin)).to_vec();
        Ray::new(origin, matrix.transform_vector(self.direction))
    }

    /// Distance along the ray to the z = 0 plane, `None` if parallel or behind.
    pub fn intersect_xy_plane(&self) -> Option<f32> {
        if self.direction.z.abs() <= PARALLEL_EPSILON {
            return None;
        }
        let t = -self.origin.z / self.direction.z;
        (t >= 0.0).then_some(t)
    }
}

fn unproject(inv_view_proj: &Matrix4<f32>, clip: Vector4<f32>) -> Option<Vector3<f32>> {
    let world = inv_view_proj * clip;
    if world.w.abs() <= f32::EPSILON {
        return None;
    }
    Some(world.truncate() / world.w)
}

/// Axis-aligned bounding box for intersection testing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner of the bounding box
    pub min: Vector3<f32>,
    /// Maximum corner of the bounding box
    pub max: Vector3<f32>,
}

impl AABB {
    /// Create a new AABB
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// Create AABB from a set of vertices
    pub fn from_vertices(vertices: &[[f32; 3]]) -> Self {
        if vertices.is_empty() {
            return Self::new(Vector3::zero(), Vector3::zero());
        }

        let mut min = Vector3::new(vertices[0][0], vertices[0][1], vertices[0][2]);
        let mut max = min;

        for vertex in vertices.iter().skip(1) {
            let v = Vector3::new(vertex[0], vertex[1], vertex[2]);
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            min.z = min.z.min(v.z);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
            max.z = max.z.max(v.z);
        }

        Self::new(min, max)
    }

    /// True if the point lies within the box on X and Y, with `epsilon` slack.
    pub fn contains_xy(&self, point: Vector3<f32>, epsilon: f32) -> bool {
        point.x >= self.min.x - epsilon
            && point.x <= self.max.x + epsilon
            && point.y >= self.min.y - epsilon
            && point.y <= self.max.y + epsilon
    }
}

/// Intersects pointer rays with the reference plane object
#[derive(Debug, Clone, Copy)]
pub struct PlanePicker {
    authoring_depth: f32,
}

impl PlanePicker {
    pub fn new(authoring_depth: f32) -> Self {
        Self { authoring_depth }
    }

    /// World-space point on `plane` under the pointer, lifted by the authoring
    /// depth along the plane normal. Misses outside the plane's extent.
    pub fn pick(
        &self,
        ndc: Vector2<f32>,
        camera: &impl Camera,
        plane: &SceneObject,
    ) -> Option<Point3<f32>> {
        self.intersect(ndc, camera, plane, true)
    }

    /// Like [`PlanePicker::pick`] but treats the plane as infinite.
    pub fn pick_unbounded(
        &self,
        ndc: Vector2<f32>,
        camera: &impl Camera,
        plane: &SceneObject,
    ) -> Option<Point3<f32>> {
        self.intersect(ndc, camera, plane, false)
    }

    fn intersect(
        &self,
        ndc: Vector2<f32>,
        camera: &impl Camera,
        plane: &SceneObject,
        bounded: bool,
    ) -> Option<Point3<f32>> {
        let world_ray = Ray::from_ndc(ndc, camera)?;
        let to_local = plane.transform().invert()?;
        let local_ray = world_ray.transform(&to_local);

        let Some(t) = local_ray.intersect_xy_plane() else {
            trace!("pick ray at {:?} parallel to or behind the plane", ndc);
            return None;
        };
        let local_hit = local_ray.point_at(t);

        if bounded && !plane.geometry().bounds().contains_xy(local_hit, EXTENT_EPSILON) {
            trace!("pick at ({:.3}, {:.3}) outside the plane", local_hit.x, local_hit.y);
            return None;
        }

        let transform = plane.transform();
        let normal = transform.transform_vector(Vector3::unit_z()).normalize();
        let world_hit = transform.transform_point(Point3::from_vec(local_hit));
        Some(world_hit + normal * self.authoring_depth)
    }
}
