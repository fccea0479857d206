//! # Vertex Data Structures
//!
//! GPU-compatible vertex format handed to the render sink.

/// A 3D vertex with position and normal data.
///
/// # Memory Layout
///
/// The `#[repr(C)]` attribute ensures the struct has a C-compatible memory
/// layout, so a slice of vertices can be reinterpreted as bytes with
/// [`bytemuck::cast_slice`] and uploaded as-is.
///
/// # Examples
///
/// ```
/// use polyplane::gfx::scene::vertex::Vertex3D;
///
/// let vertex = Vertex3D {
///     position: [0.0, 1.0, 0.0],
///     normal: [0.0, 0.0, 1.0],
/// };
/// let bytes: &[u8] = bytemuck::bytes_of(&vertex);
/// assert_eq!(bytes.len(), Vertex3D::STRIDE);
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    /// 3D position coordinates [x, y, z]
    pub position: [f32; 3],
    /// 3D normal vector [nx, ny, nz]
    pub normal: [f32; 3],
}

impl Vertex3D {
    /// Size of one vertex in bytes
    pub const STRIDE: usize = std::mem::size_of::<Vertex3D>();
    /// Byte offset of `normal` within a vertex
    pub const NORMAL_OFFSET: usize = std::mem::size_of::<[f32; 3]>();
}
