//! Polyplane
//!
//! Interactive authoring of closed polygons on a 3D reference plane: pick
//! vertices with the pointer, close them into a filled shape, then duplicate
//! and drag copies into place. Rendering is left to the host through
//! [`gfx::render::RenderSink`].

pub mod app;
pub mod authoring;
pub mod config;
pub mod error;
pub mod gfx;
pub mod input;
pub mod prelude;

// Re-export main types for convenience
pub use app::SketchApp;
pub use config::SketchConfig;
pub use error::SketchError;

/// Creates an authoring context with the default configuration
pub fn default(size: winit::dpi::PhysicalSize<u32>) -> Result<SketchApp, SketchError> {
    SketchApp::new(SketchConfig::default(), size)
}
