//! # Polyplane Prelude
//!
//! Commonly used types of the authoring pipeline in one import.
//!
//! ```rust
//! use polyplane::prelude::*;
//!
//! let mut app = polyplane::default(PhysicalSize::new(800, 600)).unwrap();
//! app.handle_event(InputEvent::Command(Command::Reset)).unwrap();
//! assert_eq!(app.scene().get_object_count(), 2);
//! ```

// Re-export core application types
pub use crate::app::SketchApp;
pub use crate::config::{Palette, SketchConfig};
pub use crate::default;
pub use crate::error::SketchError;
pub use crate::input::{Command, InputEvent};

// Re-export graphics and scene types
pub use crate::gfx::camera::{CameraUniform, PerspectiveCamera, Viewport};
pub use crate::gfx::geometry::{GeometryData, ShapeFactory, Topology};
pub use crate::gfx::material::{Color, FillMode, Style};
pub use crate::gfx::render::{RenderItem, RenderSink};
pub use crate::gfx::scene::{ObjectId, ObjectKind, Scene, SceneObject};

// Re-export common external dependencies
pub use cgmath::{Point3, Vector2};
pub use winit::dpi::{PhysicalPosition, PhysicalSize};
