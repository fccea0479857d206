use std::fmt;
use std::sync::Arc;

use cgmath::{Deg, EuclideanSpace, Matrix4, Point3, SquareMatrix, Vector3};

use crate::gfx::geometry::GeometryData;
use crate::gfx::material::Style;

/// Stable identity of an object within a [`Scene`](super::Scene).
///
/// Ids are handed out in insertion order and never reused, so an id held by
/// a drag session cannot alias an object appended after a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub(crate) u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a renderable object is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Plane,
    Grid,
    Line,
    Polygon,
    DuplicatedShape,
}

impl ObjectKind {
    /// Polygons and their copies: the shapes a user can duplicate.
    pub fn is_authored_shape(self) -> bool {
        matches!(self, ObjectKind::Polygon | ObjectKind::DuplicatedShape)
    }

    pub fn name(self) -> &'static str {
        match self {
            ObjectKind::Plane => "plane",
            ObjectKind::Grid => "grid",
            ObjectKind::Line => "line",
            ObjectKind::Polygon => "polygon",
            ObjectKind::DuplicatedShape => "duplicate",
        }
    }
}

/// A renderable that has not been added to a scene yet.
///
/// Geometry is immutable and shared through an `Arc`; the transform belongs
/// to the shape alone.
#[derive(Debug, Clone)]
pub struct Shape {
    pub kind: ObjectKind,
    pub geometry: Arc<GeometryData>,
    pub style: Style,
    pub transform: Matrix4<f32>, // cgmath 4x4 transformation matrix
}

impl Shape {
    /// Create a new shape with identity transformation
    pub fn new(kind: ObjectKind, geometry: GeometryData, style: Style) -> Self {
        Self {
            kind,
            geometry: Arc::new(geometry),
            style,
            transform: Matrix4::identity(),
        }
    }

    /// Set translation, keeping any rotation already applied
    pub fn set_translation(&mut self, translation: Vector3<f32>) {
        self.transform.w = translation.extend(1.0);
    }

    /// Apply rotation around X axis
    pub fn rotate_x(&mut self, angle: Deg<f32>) {
        self.transform = self.transform * Matrix4::from_angle_x(angle);
    }

    pub fn position(&self) -> Point3<f32> {
        Point3::from_vec(self.transform.w.truncate())
    }
}

/// An object owned by the scene list
#[derive(Debug, Clone)]
pub struct SceneObject {
    id: ObjectId,
    shape: Shape,
}

impl SceneObject {
    pub(crate) fn new(id: ObjectId, shape: Shape) -> Self {
        Self { id, shape }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn kind(&self) -> ObjectKind {
        self.shape.kind
    }

    pub fn geometry(&self) -> &Arc<GeometryData> {
        &self.shape.geometry
    }

    pub fn style(&self) -> &Style {
        &self.shape.style
    }

    pub fn transform(&self) -> &Matrix4<f32> {
        &self.shape.transform
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// World-space translation of the object
    pub fn position(&self) -> Point3<f32> {
        self.shape.position()
    }

    /// Move the object without touching its rotation or its geometry
    pub fn set_position(&mut self, position: Point3<f32>) {
        self.shape.set_translation(position.to_vec());
    }

    /// True when both objects draw the same geometry allocation.
    pub fn shares_geometry_with(&self, other: &SceneObject) -> bool {
        Arc::ptr_eq(&self.shape.geometry, &other.shape.geometry)
    }
}
