use cgmath::Vector2;
use winit::dpi::{PhysicalPosition, PhysicalSize};

/// Drawable area in physical pixels, used to normalize pointer positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    size: PhysicalSize<u32>,
}

impl Viewport {
    pub fn new(size: PhysicalSize<u32>) -> Self {
        Self { size }
    }

    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        self.size = size;
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size.width == 0 || self.size.height == 0
    }

    pub fn aspect(&self) -> f32 {
        if self.is_empty() {
            return 1.0;
        }
        self.size.width as f32 / self.size.height as f32
    }

    /// Converts a pixel position (origin top-left, y down) to normalized device
    /// coordinates (x right, y up, both in -1..1).
    pub fn normalize(&self, position: PhysicalPosition<f64>) -> Option<Vector2<f32>> {
        if self.is_empty() {
            return None;
        }
        let x = (position.x / self.size.width as f64) * 2.0 - 1.0;
        let y = -(position.y / self.size.height as f64) * 2.0 + 1.0;
        Some(Vector2::new(x as f32, y as f32))
    }
}
