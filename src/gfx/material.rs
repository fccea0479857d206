//! # Visual Styles
//!
//! Colour and fill information attached to every renderable object. Styles are
//! plain values; duplicated shapes copy the style of their source.

/// Linear RGBA colour.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Builds an opaque colour from a `0xRRGGBB` literal.
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self::rgb(channel(16), channel(8), channel(0))
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// How the renderer should rasterize an object's geometry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FillMode {
    /// Filled triangles
    Solid,
    /// Line primitives drawn with the style's line width
    Stroke,
}

/// Appearance of a renderable object
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Style {
    pub color: Color,
    /// Secondary colour, used by the grid for its centre lines.
    pub accent: Option<Color>,
    pub fill: FillMode,
    pub line_width: f32,
    pub double_sided: bool,
}

impl Style {
    pub fn solid(color: Color) -> Self {
        Self {
            color,
            accent: None,
            fill: FillMode::Solid,
            line_width: 1.0,
            double_sided: false,
        }
    }

    pub fn stroke(color: Color, line_width: f32) -> Self {
        Self {
            color,
            accent: None,
            fill: FillMode::Stroke,
            line_width,
            double_sided: false,
        }
    }

    pub fn with_accent(mut self, accent: Color) -> Self {
        self.accent = Some(accent);
        self
    }

    pub fn double_sided(mut self) -> Self {
        self.double_sided = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_colors() {
        let line = Color::from_hex(0x038509);
        assert_eq!(line.r, 3.0 / 255.0);
        assert_eq!(line.g, 133.0 / 255.0);
        assert_eq!(line.b, 9.0 / 255.0);
        assert_eq!(line.a, 1.0);
        assert_eq!(Color::from_hex(0xffffff), Color::WHITE);
    }

    #[test]
    fn test_style_builders() {
        let style = Style::stroke(Color::WHITE, 2.0).with_accent(Color::from_hex(0x444444));
        assert_eq!(style.fill, FillMode::Stroke);
        assert_eq!(style.line_width, 2.0);
        assert!(style.accent.is_some());
        assert!(!style.double_sided);
        assert!(Style::solid(Color::WHITE).double_sided().double_sided);
    }
}
