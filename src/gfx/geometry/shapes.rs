//! # Styled Shapes
//!
//! [`ShapeFactory`] turns raw primitives into [`Shape`]s carrying the palette
//! colours and the transforms that keep coplanar objects in the right place.

use cgmath::{Deg, Point3, Vector3};

use super::primitives::{generate_grid, generate_line, generate_plane, generate_polygon};
use crate::config::{Palette, SketchConfig, MAX_SEGMENTS};
use crate::error::SketchError;
use crate::gfx::material::Style;
use crate::gfx::scene::{ObjectKind, Shape};

/// Builds the renderables of the authoring pipeline
#[derive(Debug, Clone, Copy)]
pub struct ShapeFactory {
    palette: Palette,
    line_width: f32,
    authoring_depth: f32,
}

impl ShapeFactory {
    pub fn new(config: &SketchConfig) -> Self {
        Self {
            palette: config.palette,
            line_width: config.line_width,
            authoring_depth: config.authoring_depth,
        }
    }

    /// Double-sided backdrop and pick target, one segment per world unit.
    pub fn reference_plane(&self, width: f32, height: f32) -> Shape {
        let segments_x = (width.round() as u32).clamp(1, MAX_SEGMENTS);
        let segments_y = (height.round() as u32).clamp(1, MAX_SEGMENTS);
        Shape::new(
            ObjectKind::Plane,
            generate_plane(width, height, segments_x, segments_y),
            Style::solid(self.palette.plane).double_sided(),
        )
    }

    /// Decorative grid generated in XZ and rotated onto the plane.
    pub fn reference_grid(&self, size: f32, divisions: u32) -> Shape {
        let mut grid = Shape::new(
            ObjectKind::Grid,
            generate_grid(size, divisions),
            Style::stroke(self.palette.grid, 1.0).with_accent(self.palette.grid_center),
        );
        grid.rotate_x(Deg(90.0));
        grid
    }

    pub fn line_segment(&self, a: Point3<f32>, b: Point3<f32>) -> Shape {
        Shape::new(
            ObjectKind::Line,
            generate_line(a, b),
            Style::stroke(self.palette.line, self.line_width),
        )
    }

    /// Filled polygon for a closed outline, one authoring depth above the
    /// outline so it covers the edge lines drawn through the same vertices.
    pub fn closed_polygon(&self, vertices: &[Point3<f32>]) -> Result<Shape, SketchError> {
        let geometry = generate_polygon(vertices)?;
        let outline_depth = vertices.first().map_or(0.0, |p| p.z);
        let mut polygon = Shape::new(
            ObjectKind::Polygon,
            geometry,
            Style::solid(self.palette.polygon).with_accent(self.palette.polygon_edge),
        );
        polygon.set_translation(Vector3::new(0.0, 0.0, outline_depth + self.authoring_depth));
        Ok(polygon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::material::FillMode;
    use cgmath::{InnerSpace, Transform};

    fn factory() -> ShapeFactory {
        ShapeFactory::new(&SketchConfig::default())
    }

    #[test]
    fn test_reference_plane() {
        let plane = factory().reference_plane(10.0, 10.0);
        assert_eq!(plane.kind, ObjectKind::Plane);
        assert!(plane.style.double_sided);
        assert_eq!(plane.geometry.vertex_count(), 121);
        assert_eq!(plane.position(), Point3::new(0.0, 0.0, 0.0));

        // Oversized extents are capped rather than overflowing the index math
        let long = factory().reference_plane(5000.0, 2.0);
        let columns = MAX_SEGMENTS as usize + 1;
        assert_eq!(long.geometry.vertex_count(), columns * 3);
        let last = *long.geometry.indices.iter().max().unwrap() as usize;
        assert_eq!(last, long.geometry.vertex_count() - 1);
    }

    #[test]
    fn test_grid_is_coplanar_with_plane() {
        let grid = factory().reference_grid(10.0, 10);
        assert_eq!(grid.kind, ObjectKind::Grid);
        for v in &grid.geometry.vertices {
            let world = grid.transform.transform_point(Point3::new(v[0], v[1], v[2]));
            assert!(world.z.abs() < 1e-5);
            assert!(world.x.abs() <= 5.0 + 1e-5 && world.y.abs() <= 5.0 + 1e-5);
        }
    }

    #[test]
    fn test_line_style() {
        let config = SketchConfig::default();
        let line = factory().line_segment(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0));
        assert_eq!(line.kind, ObjectKind::Line);
        assert_eq!(line.style.fill, FillMode::Stroke);
        assert_eq!(line.style.color, config.palette.line);
        assert_eq!(line.style.line_width, 2.0);
    }

    #[test]
    fn test_polygon_sits_above_its_edges() {
        let factory = factory();
        let outline = [
            Point3::new(0.0, 0.0, 0.001),
            Point3::new(1.0, 0.0, 0.001),
            Point3::new(0.0, 1.0, 0.001),
            Point3::new(0.0, 0.0, 0.001),
        ];
        let polygon = factory.closed_polygon(&outline).unwrap();
        assert_eq!(polygon.kind, ObjectKind::Polygon);
        assert!((polygon.position() - Point3::new(0.0, 0.0, 0.002)).magnitude() < 1e-7);

        let edge = factory.line_segment(outline[0], outline[1]);
        let v = polygon.geometry.vertices[0];
        let polygon_z = polygon.transform.transform_point(Point3::new(v[0], v[1], v[2])).z;
        let e = edge.geometry.vertices[0];
        let edge_z = edge.transform.transform_point(Point3::new(e[0], e[1], e[2])).z;
        assert!(polygon_z > edge_z);
        assert_eq!(polygon.geometry.triangle_count(), 1);
        assert_eq!(polygon.geometry.outline.len(), 4);
    }

    #[test]
    fn test_polygon_rejects_short_outline() {
        let outline = [Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
        assert!(matches!(
            factory().closed_polygon(&outline),
            Err(SketchError::IncompletePolygon { vertices: 2 })
        ));
    }
}
