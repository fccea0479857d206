//! # Procedural Geometry Generation
//!
//! This module generates the geometry used by the authoring pipeline: the
//! reference plane, the decorative grid, line segments and filled polygons.
//!
//! ## Layers
//!
//! - [`primitives`] - raw [`GeometryData`] generators (no styling)
//! - [`shapes`] - [`ShapeFactory`], which wraps the primitives into styled,
//!   positioned [`Shape`](crate::gfx::scene::Shape)s ready to append to a scene
//!
//! ## Usage
//!
//! ```rust
//! use polyplane::gfx::geometry::{generate_line, generate_plane};
//! use cgmath::Point3;
//!
//! // A 10x10 plane with one segment per unit
//! let plane = generate_plane(10.0, 10.0, 10, 10);
//! assert_eq!(plane.vertex_count(), 121);
//!
//! let line = generate_line(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 0.0));
//! assert_eq!(line.segment_count(), 1);
//! ```

pub mod primitives;
pub mod shapes;

pub use primitives::*;
pub use shapes::ShapeFactory;

use cgmath::Point3;

use crate::gfx::picking::AABB;
use crate::gfx::scene::vertex::Vertex3D;

/// Primitive assembly for an index buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Every three indices form a triangle
    TriangleList,
    /// Every two indices form a line segment
    LineList,
}

/// Generated geometry data ready for upload by the render sink
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryData {
    /// Vertex positions (x, y, z) in object-local space
    pub vertices: Vec<[f32; 3]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Indices interpreted according to `topology` (counter-clockwise winding)
    pub indices: Vec<u32>,
    pub topology: Topology,
    /// Authored outline in world space, closing vertex included. Only filled
    /// polygons carry one.
    pub outline: Vec<Point3<f32>>,
}

impl GeometryData {
    /// Create a new empty geometry data structure
    pub fn new(topology: Topology) -> Self {
        Self {
            vertices: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
            topology,
            outline: Vec::new(),
        }
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this geometry
    pub fn triangle_count(&self) -> usize {
        match self.topology {
            Topology::TriangleList => self.indices.len() / 3,
            Topology::LineList => 0,
        }
    }

    /// Get the number of line segments in this geometry
    pub fn segment_count(&self) -> usize {
        match self.topology {
            Topology::LineList => self.indices.len() / 2,
            Topology::TriangleList => 0,
        }
    }

    /// Local-space bounds of all vertices
    pub fn bounds(&self) -> AABB {
        AABB::from_vertices(&self.vertices)
    }

    /// Interleave positions and normals into the vertex format of the render sink
    pub fn to_vertex_buffer(&self) -> Vec<Vertex3D> {
        (0..self.vertices.len())
            .map(|i| Vertex3D {
                position: self.vertices[i],
                normal: self.normals.get(i).copied().unwrap_or([0.0, 0.0, 1.0]),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_follow_topology() {
        let mut lines = GeometryData::new(Topology::LineList);
        lines.vertices = vec![[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        lines.indices = vec![0, 1, 1, 2];
        assert_eq!(lines.segment_count(), 2);
        assert_eq!(lines.triangle_count(), 0);

        let mut tris = GeometryData::new(Topology::TriangleList);
        tris.indices = vec![0, 1, 2];
        assert_eq!(tris.triangle_count(), 1);
        assert_eq!(tris.segment_count(), 0);
    }

    #[test]
    fn test_vertex_buffer_defaults_missing_normals() {
        let mut data = GeometryData::new(Topology::LineList);
        data.vertices = vec![[1.0, 2.0, 3.0]];
        let buffer = data.to_vertex_buffer();
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer[0].position, [1.0, 2.0, 3.0]);
        assert_eq!(buffer[0].normal, [0.0, 0.0, 1.0]);
    }
}
