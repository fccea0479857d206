//! # Graphics Module
//!
//! Everything the authoring pipeline knows about 3D: the camera model used
//! for picking, procedural geometry, styles, the scene list and the contract
//! with the external renderer.
//!
//! ## Architecture Overview
//!
//! - **Camera** ([`camera`]) - fixed perspective camera and viewport tracking
//! - **Geometry** ([`geometry`]) - plane, grid, line and polygon generation
//! - **Materials** ([`material`]) - colours and fill styles
//! - **Picking** ([`picking`]) - pointer rays against the reference plane
//! - **Scene Management** ([`scene`]) - ordered object list with a fixed baseline
//! - **Render Sink** ([`render`]) - per-frame hand-off to the host renderer
//!
//! No GPU work happens here. A host implements [`render::RenderSink`] and
//! uploads the bytes each [`render::RenderItem`] exposes.

pub mod camera;
pub mod geometry;
pub mod material;
pub mod picking;
pub mod render;
pub mod scene;

// Re-export commonly used types
pub use camera::PerspectiveCamera;
pub use render::{RenderItem, RenderSink};
pub use scene::Scene;
