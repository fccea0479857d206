//! # Polygon Authoring
//!
//! [`PolygonAuthoring`] collects the vertices picked on the reference plane.
//! Every pick after the first yields the line segment joining it to the
//! previous vertex; closing the outline yields the final segment back to the
//! first vertex plus the filled polygon.
//!
//! The state machine produces [`Shape`]s but never touches the scene itself;
//! [`SketchApp`](crate::app::SketchApp) appends what it returns.

pub mod drag;

pub use drag::{DragController, DragState};

use cgmath::Point3;
use log::debug;

use crate::error::SketchError;
use crate::gfx::geometry::{distinct_vertex_count, ShapeFactory};
use crate::gfx::scene::Shape;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthoringState {
    /// No vertex picked since the last closure or reset
    Idle,
    /// At least one vertex picked
    Building,
}

/// Shapes produced by a successful closure, in append order.
#[derive(Debug, Clone)]
pub struct ClosedPolygon {
    pub closing_line: Shape,
    pub polygon: Shape,
}

#[derive(Debug, Clone, Default)]
pub struct PolygonAuthoring {
    vertices: Vec<Point3<f32>>,
}

impl PolygonAuthoring {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AuthoringState {
        if self.vertices.is_empty() {
            AuthoringState::Idle
        } else {
            AuthoringState::Building
        }
    }

    /// Vertices picked so far, in pick order
    pub fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    /// Records a picked vertex; returns the segment from the previous vertex.
    pub fn on_pick(&mut self, point: Point3<f32>, factory: &ShapeFactory) -> Option<Shape> {
        self.vertices.push(point);
        debug!(
            "vertex {} at ({:.3}, {:.3}, {:.3})",
            self.vertices.len(),
            point.x,
            point.y,
            point.z
        );

        match self.vertices.as_slice() {
            [.., a, b] => Some(factory.line_segment(*a, *b)),
            _ => None,
        }
    }

    /// Closes the outline back to its first vertex.
    ///
    /// Fails with [`SketchError::IncompletePolygon`] until three distinct
    /// vertices have been picked. Nothing is modified on failure.
    pub fn on_close(&mut self, factory: &ShapeFactory) -> Result<ClosedPolygon, SketchError> {
        let distinct = distinct_vertex_count(&self.vertices);
        if distinct < 3 {
            return Err(SketchError::IncompletePolygon { vertices: distinct });
        }

        let &[first, .., last] = self.vertices.as_slice() else {
            return Err(SketchError::IncompletePolygon { vertices: distinct });
        };

        let mut outline = self.vertices.clone();
        outline.push(first);
        // Triangulate before mutating so a rejected outline leaves the list intact
        let polygon = factory.closed_polygon(&outline)?;
        let closing_line = factory.line_segment(last, first);

        debug!("closed outline with {} vertices", self.vertices.len());
        self.vertices.clear();

        Ok(ClosedPolygon {
            closing_line,
            polygon,
        })
    }

    /// Discards the vertices picked so far
    pub fn reset(&mut self) {
        self.vertices.clear();
    }
}
