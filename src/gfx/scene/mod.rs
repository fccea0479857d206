//! # Scene Management Module
//!
//! The scene is the ordered list of renderable objects the core hands to the
//! render sink. It owns every object once appended, tracks the current
//! authored shape for duplication and knows its fixed baseline.
//!
//! ## Key Components
//!
//! - [`Scene`] - the ordered object list (append, duplicate, reset)
//! - [`SceneObject`] - an object in the list: id, kind, shared geometry, style, transform
//! - [`Shape`] - a renderable not yet added to a scene
//! - [`Vertex3D`] - GPU-compatible vertex format
//!
//! ## Usage
//!
//! ```rust
//! use polyplane::config::SketchConfig;
//! use polyplane::gfx::scene::{ObjectKind, Scene};
//!
//! let mut scene = Scene::from_config(&SketchConfig::default()).unwrap();
//! assert_eq!(scene.reference_plane().kind(), ObjectKind::Plane);
//!
//! // Nothing authored yet, so there is nothing to copy
//! assert!(scene.duplicate_last().is_err());
//! ```
//!
//! ## Baseline
//!
//! The first entries are always the reference plane and the grid
//! ([`BaselineSlot`]). Lights and the camera live with the external renderer
//! and the camera model, not in this list.

pub mod object;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use object::{ObjectId, ObjectKind, SceneObject, Shape};
pub use scene::{BaselineSlot, Scene, SceneStatistics};
pub use vertex::Vertex3D;
