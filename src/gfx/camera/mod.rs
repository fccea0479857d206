pub mod camera_utils;
pub mod perspective_camera;
pub mod viewport;

// Re-export main types
pub use camera_utils::{Camera, CameraUniform};
pub use perspective_camera::PerspectiveCamera;
pub use viewport::Viewport;
