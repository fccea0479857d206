//! # Authoring Configuration
//!
//! [`SketchConfig`] collects every tunable of the authoring pipeline: the size
//! of the reference plane, the grid density, the depth offsets that keep
//! coplanar shapes from z-fighting, the drag clamp margin and the colour
//! palette. The defaults reproduce the classic 10 x 10 drawing board.
//!
//! ```
//! use polyplane::config::SketchConfig;
//!
//! let config = SketchConfig::default()
//!     .with_plane_size(20.0, 12.0)
//!     .with_grid_divisions(20);
//! assert!(config.validate().is_ok());
//! ```

use crate::error::SketchError;
use crate::gfx::material::Color;

/// Upper bound on plane and grid subdivisions. The plane gets one segment per
/// world unit, so this also caps the plane extent.
pub const MAX_SEGMENTS: u32 = 1024;

/// Colours used by the geometry utilities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub plane: Color,
    pub grid_center: Color,
    pub grid: Color,
    pub line: Color,
    /// Outline colour of closed polygons, carried as their style accent.
    pub polygon_edge: Color,
    pub polygon: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            plane: Color::WHITE,
            grid_center: Color::from_hex(0x444444),
            grid: Color::from_hex(0x888888),
            line: Color::from_hex(0x038509),
            polygon_edge: Color::from_hex(0x080808),
            polygon: Color::from_hex(0xfa773e),
        }
    }
}

/// Tunables shared by the geometry utilities, the picker and the drag
/// controller. Build with the `with_*` methods and check with
/// [`SketchConfig::validate`] before handing it to the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SketchConfig {
    /// Reference plane extent along X
    pub plane_width: f32,
    /// Reference plane extent along Y
    pub plane_height: f32,
    pub grid_divisions: u32,
    /// Offset along the plane normal for picked vertices, lines and polygons.
    pub authoring_depth: f32,
    /// Distance kept between a dragged shape and the plane edge.
    pub drag_clamp_margin: f32,
    pub line_width: f32,
    pub palette: Palette,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            plane_width: 10.0,
            plane_height: 10.0,
            grid_divisions: 10,
            authoring_depth: 0.001,
            drag_clamp_margin: 0.001,
            line_width: 2.0,
            palette: Palette::default(),
        }
    }
}

impl SketchConfig {
    pub fn with_plane_size(mut self, width: f32, height: f32) -> Self {
        self.plane_width = width;
        self.plane_height = height;
        self
    }

    pub fn with_grid_divisions(mut self, divisions: u32) -> Self {
        self.grid_divisions = divisions;
        self
    }

    pub fn with_authoring_depth(mut self, depth: f32) -> Self {
        self.authoring_depth = depth;
        self
    }

    pub fn with_drag_clamp_margin(mut self, margin: f32) -> Self {
        self.drag_clamp_margin = margin;
        self
    }

    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Checks the values the geometry utilities and picker depend on.
    pub fn validate(&self) -> Result<(), SketchError> {
        if !(self.plane_width > 0.0 && self.plane_height > 0.0) {
            return Err(SketchError::InvalidConfig(format!(
                "plane size must be positive, got {} x {}",
                self.plane_width, self.plane_height
            )));
        }
        if self.plane_width.round() > MAX_SEGMENTS as f32
            || self.plane_height.round() > MAX_SEGMENTS as f32
        {
            return Err(SketchError::InvalidConfig(format!(
                "plane size {} x {} exceeds {} segments per side",
                self.plane_width, self.plane_height, MAX_SEGMENTS
            )));
        }
        if self.grid_divisions == 0 || self.grid_divisions > MAX_SEGMENTS {
            return Err(SketchError::InvalidConfig(format!(
                "grid divisions must be between 1 and {}, got {}",
                MAX_SEGMENTS, self.grid_divisions
            )));
        }
        if !(self.line_width > 0.0) {
            return Err(SketchError::InvalidConfig(format!(
                "line width must be positive, got {}",
                self.line_width
            )));
        }
        if !(self.authoring_depth >= 0.0) || !(self.drag_clamp_margin >= 0.0) {
            return Err(SketchError::InvalidConfig(
                "depth offsets and clamp margin must not be negative".to_string(),
            ));
        }
        let half_min = self.plane_width.min(self.plane_height) * 0.5;
        if self.drag_clamp_margin >= half_min {
            return Err(SketchError::InvalidConfig(format!(
                "drag clamp margin {} leaves no room on the plane",
                self.drag_clamp_margin
            )));
        }
        Ok(())
    }

    /// Grid size, the larger plane extent so the grid covers the whole board.
    pub fn grid_size(&self) -> f32 {
        self.plane_width.max(self.plane_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board() {
        let config = SketchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid_size(), 10.0);
    }

    #[test]
    fn test_rejects_bad_values() {
        let flat = SketchConfig::default().with_plane_size(0.0, 10.0);
        assert!(matches!(flat.validate(), Err(SketchError::InvalidConfig(_))));

        let no_grid = SketchConfig::default().with_grid_divisions(0);
        assert!(no_grid.validate().is_err());

        let sunk = SketchConfig::default().with_authoring_depth(-0.5);
        assert!(sunk.validate().is_err());

        let wide_margin = SketchConfig::default().with_drag_clamp_margin(5.0);
        assert!(wide_margin.validate().is_err());

        let hairline = SketchConfig::default().with_line_width(0.0);
        assert!(hairline.validate().is_err());
    }

    #[test]
    fn test_segment_counts_are_bounded() {
        let largest = MAX_SEGMENTS as f32;
        assert!(SketchConfig::default()
            .with_plane_size(largest, largest)
            .with_drag_clamp_margin(0.5)
            .with_grid_divisions(MAX_SEGMENTS)
            .validate()
            .is_ok());

        let huge = SketchConfig::default().with_plane_size(1.0e5, 10.0);
        assert!(matches!(huge.validate(), Err(SketchError::InvalidConfig(_))));

        let endless = SketchConfig::default().with_plane_size(10.0, f32::INFINITY);
        assert!(endless.validate().is_err());

        let dense = SketchConfig::default().with_grid_divisions(MAX_SEGMENTS + 1);
        assert!(dense.validate().is_err());
    }
}
