//! # Authoring Errors
//!
//! Every failure in the authoring pipeline is recoverable. Operations that
//! return an error leave the scene, the in-progress vertex list and the drag
//! session exactly as they were before the call.

use thiserror::Error;

/// Errors produced by the authoring pipeline.
///
/// The `Display` text of the user-facing variants is the notice shown by the
/// UI glue. [`SketchError::PickMiss`] is never shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SketchError {
    /// Closure attempted with fewer than three distinct vertices.
    #[error("Make at least three vertices! ({vertices} distinct so far)")]
    IncompletePolygon { vertices: usize },

    /// Duplicate attempted while no authored polygon is the current shape.
    #[error("Create a polygon first!")]
    NoShapeToCopy,

    /// The pointer ray did not hit the reference plane.
    #[error("pointer ray missed the reference plane")]
    PickMiss,

    /// Duplicate attempted while a previous copy is still being placed.
    #[error("Place the copied polygon first!")]
    DragInProgress,

    /// Ear clipping rejected the polygon outline.
    #[error("polygon triangulation failed: {0}")]
    Triangulation(String),

    /// Configuration rejected by [`crate::config::SketchConfig::validate`].
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SketchError {
    /// Returns true for failures that are swallowed without notifying the user.
    pub fn is_silent(&self) -> bool {
        matches!(self, SketchError::PickMiss)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_notices() {
        assert!(SketchError::NoShapeToCopy
            .to_string()
            .contains("Create a polygon first"));
        assert!(SketchError::IncompletePolygon { vertices: 2 }
            .to_string()
            .starts_with("Make at least three vertices!"));
    }

    #[test]
    fn test_only_pick_miss_is_silent() {
        assert!(SketchError::PickMiss.is_silent());
        assert!(!SketchError::NoShapeToCopy.is_silent());
        assert!(!SketchError::IncompletePolygon { vertices: 0 }.is_silent());
        assert!(!SketchError::DragInProgress.is_silent());
    }
}
