//! Drag-to-place for duplicated shapes.
//!
//! After a copy is created it follows the pointer across the reference plane
//! until the next click drops it. Only one copy can be in flight.

use cgmath::Point3;
use log::{debug, info};

use crate::error::SketchError;
use crate::gfx::scene::{ObjectId, Scene};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Inert,
    Dragging {
        target: ObjectId,
        /// Last position applied to the target
        position: Point3<f32>,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct DragController {
    state: DragState,
    /// Largest |x| and |y| the target may reach
    limit_x: f32,
    limit_y: f32,
}

impl DragController {
    /// Keeps dragged shapes `margin` inside a plane of the given size.
    pub fn new(plane_width: f32, plane_height: f32, margin: f32) -> Self {
        Self {
            state: DragState::Inert,
            limit_x: (plane_width * 0.5 - margin).max(0.0),
            limit_y: (plane_height * 0.5 - margin).max(0.0),
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Object currently following the pointer
    pub fn drag_target(&self) -> Option<ObjectId> {
        match self.state {
            DragState::Dragging { target, .. } => Some(target),
            DragState::Inert => None,
        }
    }

    /// Starts dragging `target` from `position`.
    pub fn begin(&mut self, target: ObjectId, position: Point3<f32>) -> Result<(), SketchError> {
        if self.is_dragging() {
            return Err(SketchError::DragInProgress);
        }
        debug!("dragging {}", target);
        self.state = DragState::Dragging { target, position };
        Ok(())
    }

    /// Moves the target to the clamped plane point, keeping its depth.
    /// Returns the applied position, or `None` when no drag is active.
    pub fn update(&mut self, point: Point3<f32>, scene: &mut Scene) -> Option<Point3<f32>> {
        let DragState::Dragging { target, position } = &mut self.state else {
            return None;
        };

        let Some(object) = scene.get_mut(*target) else {
            // The target left the scene; nothing left to drag
            self.state = DragState::Inert;
            return None;
        };

        let clamped = Point3::new(
            point.x.clamp(-self.limit_x, self.limit_x),
            point.y.clamp(-self.limit_y, self.limit_y),
            object.position().z,
        );
        object.set_position(clamped);
        *position = clamped;
        Some(clamped)
    }

    /// Ends the drag, leaving the target where it is.
    pub fn drop_target(&mut self) -> Option<ObjectId> {
        let target = self.drag_target()?;
        self.state = DragState::Inert;
        info!("placed {}", target);
        Some(target)
    }

    /// Ends the drag without logging a placement, used when the scene is reset.
    pub fn release(&mut self) {
        self.state = DragState::Inert;
    }
}
