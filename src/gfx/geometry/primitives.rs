//! # Primitive Shape Generation
//!
//! Generators for the plane, grid, line and polygon geometry. Everything is
//! produced in the XY plane (Z-up) except the grid, which is generated in XZ
//! like a grid helper and rotated into place by its owner's transform.

use cgmath::Point3;
use earcutr::earcut;

use super::{GeometryData, Topology};
use crate::error::SketchError;

/// Generate a plane in the XY plane (horizontal in Z-up coordinate system)
///
/// # Arguments
/// * `width` - Width of the plane (X direction)
/// * `height` - Height of the plane (Y direction)
/// * `width_segments` - Number of subdivisions along width
/// * `height_segments` - Number of subdivisions along height
///
/// Returns a plane centered at the origin with normal pointing up (positive Z).
pub fn generate_plane(width: f32, height: f32, width_segments: u32, height_segments: u32) -> GeometryData {
    let mut data = GeometryData::new(Topology::TriangleList);

    let w_segs = width_segments.max(1);
    let h_segs = height_segments.max(1);

    for y in 0..=h_segs {
        let v = y as f32 / h_segs as f32;
        let pos_y = (v - 0.5) * height;

        for x in 0..=w_segs {
            let u = x as f32 / w_segs as f32;
            let pos_x = (u - 0.5) * width;

            data.vertices.push([pos_x, pos_y, 0.0]);
            data.normals.push([0.0, 0.0, 1.0]);
        }
    }

    // Counter-clockwise when viewed from above
    for y in 0..h_segs {
        for x in 0..w_segs {
            let i = y * (w_segs + 1) + x;
            let next_row = i + w_segs + 1;

            data.indices.push(i);
            data.indices.push(i + 1);
            data.indices.push(next_row);

            data.indices.push(next_row);
            data.indices.push(i + 1);
            data.indices.push(next_row + 1);
        }
    }

    data
}

/// Number of leading segments in [`generate_grid`] output that are centre lines.
pub fn grid_center_segments(divisions: u32) -> usize {
    if divisions % 2 == 0 {
        2
    } else {
        0
    }
}

/// Generate a square wireframe grid in the XZ plane
///
/// # Arguments
/// * `size` - Edge length of the grid
/// * `divisions` - Number of cells along each edge
///
/// Produces `divisions + 1` lines parallel to each axis. When `divisions` is
/// even the two lines through the origin come first in the index buffer (see
/// [`grid_center_segments`]) so a renderer can draw them in an accent colour.
pub fn generate_grid(size: f32, divisions: u32) -> GeometryData {
    let mut data = GeometryData::new(Topology::LineList);

    let divisions = divisions.max(1);
    let step = size / divisions as f32;
    let half = size * 0.5;

    let mut order: Vec<u32> = (0..=divisions).collect();
    if divisions % 2 == 0 {
        let center = divisions / 2;
        order.retain(|&i| i != center);
        order.insert(0, center);
    }

    let push_segment = |data: &mut GeometryData, a: [f32; 3], b: [f32; 3]| {
        let base = data.vertices.len() as u32;
        data.vertices.push(a);
        data.vertices.push(b);
        data.normals.push([0.0, 1.0, 0.0]);
        data.normals.push([0.0, 1.0, 0.0]);
        data.indices.push(base);
        data.indices.push(base + 1);
    };

    for i in order {
        let k = -half + i as f32 * step;
        push_segment(&mut data, [-half, 0.0, k], [half, 0.0, k]);
        push_segment(&mut data, [k, 0.0, -half], [k, 0.0, half]);
    }

    data
}

/// Generate a single line segment between two world-space points
pub fn generate_line(a: Point3<f32>, b: Point3<f32>) -> GeometryData {
    let mut data = GeometryData::new(Topology::LineList);
    data.vertices = vec![[a.x, a.y, a.z], [b.x, b.y, b.z]];
    data.normals = vec![[0.0, 0.0, 1.0]; 2];
    data.indices = vec![0, 1];
    data
}

/// Number of pairwise distinct points in `points`.
pub fn distinct_vertex_count(points: &[Point3<f32>]) -> usize {
    points
        .iter()
        .enumerate()
        .filter(|&(i, p)| !points[..i].contains(p))
        .count()
}

/// Drops consecutive duplicates and a trailing copy of the first vertex.
fn normalize_ring(points: &[Point3<f32>]) -> Vec<Point3<f32>> {
    let mut ring: Vec<Point3<f32>> = Vec::with_capacity(points.len());
    for &p in points {
        if ring.last() != Some(&p) {
            ring.push(p);
        }
    }
    while ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    ring
}

/// Triangulate a closed outline into a filled polygon in the XY plane
///
/// The outline is projected onto XY and ear-clipped, so concave outlines
/// fill correctly. The mesh lies at local z = 0; the caller positions it
/// along the plane normal. `outline` is stored unchanged on the result.
///
/// Fails with [`SketchError::IncompletePolygon`] when the outline has fewer
/// than three distinct vertices.
pub fn generate_polygon(outline: &[Point3<f32>]) -> Result<GeometryData, SketchError> {
    let distinct = distinct_vertex_count(outline);
    if distinct < 3 {
        return Err(SketchError::IncompletePolygon { vertices: distinct });
    }

    let ring = normalize_ring(outline);
    let coords: Vec<f64> = ring
        .iter()
        .flat_map(|p| [p.x as f64, p.y as f64])
        .collect();

    let triangles = earcut(&coords, &[], 2).map_err(|e| SketchError::Triangulation(format!("{e:?}")))?;
    if triangles.is_empty() {
        log::debug!("polygon outline of {} vertices has no area", ring.len());
    }

    let mut data = GeometryData::new(Topology::TriangleList);
    data.vertices = ring.iter().map(|p| [p.x, p.y, 0.0]).collect();
    data.normals = vec![[0.0, 0.0, 1.0]; ring.len()];
    data.indices = triangles.into_iter().map(|i| i as u32).collect();
    data.outline = outline.to_vec();

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point3<f32> {
        Point3::new(x, y, 0.001)
    }

    #[test]
    fn test_plane_generation() {
        let plane = generate_plane(2.0, 2.0, 2, 2);
        assert_eq!(plane.vertices.len(), 9); // 3x3 grid
        assert_eq!(plane.indices.len(), 24); // 4 quads * 2 triangles * 3 indices
        let bounds = plane.bounds();
        assert_eq!(bounds.min.x, -1.0);
        assert_eq!(bounds.max.y, 1.0);
    }

    #[test]
    fn test_grid_generation() {
        let grid = generate_grid(10.0, 10);
        assert_eq!(grid.segment_count(), 22); // 11 lines per axis
        assert!(grid.vertices.iter().all(|v| v[1] == 0.0));

        // Centre lines lead the buffer
        assert_eq!(grid_center_segments(10), 2);
        assert_eq!(grid.vertices[0], [-5.0, 0.0, 0.0]);
        assert_eq!(grid.vertices[2], [0.0, 0.0, -5.0]);

        assert_eq!(grid_center_segments(3), 0);
        assert_eq!(generate_grid(3.0, 3).segment_count(), 8);
    }

    #[test]
    fn test_line_generation() {
        let line = generate_line(p(0.0, 0.0), p(1.0, 2.0));
        assert_eq!(line.vertex_count(), 2);
        assert_eq!(line.segment_count(), 1);
        assert_eq!(line.vertices[1], [1.0, 2.0, 0.001]);
    }

    #[test]
    fn test_concave_polygon_triangulation() {
        // L-shaped hexagon: a fan from vertex 0 would cover the notch
        let outline = vec![
            p(0.0, 0.0),
            p(2.0, 0.0),
            p(2.0, 1.0),
            p(1.0, 1.0),
            p(1.0, 2.0),
            p(0.0, 2.0),
            p(0.0, 0.0),
        ];
        let polygon = generate_polygon(&outline).unwrap();
        assert_eq!(polygon.vertex_count(), 6); // closing vertex dropped
        assert_eq!(polygon.triangle_count(), 4);
        assert_eq!(polygon.outline, outline);
        assert!(polygon.vertices.iter().all(|v| v[2] == 0.0));

        let area: f32 = polygon
            .indices
            .chunks(3)
            .map(|t| {
                let a = polygon.vertices[t[0] as usize];
                let b = polygon.vertices[t[1] as usize];
                let c = polygon.vertices[t[2] as usize];
                ((b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1])).abs() * 0.5
            })
            .sum();
        assert!((area - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_polygon_needs_three_distinct_vertices() {
        let outline = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 0.0), p(0.0, 0.0)];
        assert_eq!(
            generate_polygon(&outline),
            Err(SketchError::IncompletePolygon { vertices: 2 })
        );
        assert_eq!(distinct_vertex_count(&[]), 0);
    }
}
