//! # Render Sink
//!
//! The crate never talks to a GPU. Each frame, [`SketchApp::render`] walks the
//! scene in draw order and hands one [`RenderItem`] per object to a
//! [`RenderSink`] supplied by the host renderer.
//!
//! [`SketchApp::render`]: crate::app::SketchApp::render

use crate::gfx::camera::camera_utils::{convert_matrix4_to_array, CameraUniform};
use crate::gfx::geometry::{GeometryData, Topology};
use crate::gfx::material::Style;
use crate::gfx::scene::{ObjectId, ObjectKind, SceneObject, Vertex3D};

/// Receiver of the per-frame draw list.
pub trait RenderSink {
    /// Called once per frame before any item, with the camera for the frame.
    fn begin_frame(&mut self, _camera: &CameraUniform) {}

    /// Called for every scene object, in insertion order.
    fn submit(&mut self, item: RenderItem<'_>);
}

/// Borrowed view of one object, ready for upload
#[derive(Debug, Clone, Copy)]
pub struct RenderItem<'a> {
    pub id: ObjectId,
    pub kind: ObjectKind,
    pub style: &'a Style,
    /// Model matrix, column-major
    pub transform: [[f32; 4]; 4],
    pub geometry: &'a GeometryData,
}

impl<'a> RenderItem<'a> {
    pub fn from_object(object: &'a SceneObject) -> Self {
        Self {
            id: object.id(),
            kind: object.kind(),
            style: object.style(),
            transform: convert_matrix4_to_array(*object.transform()),
            geometry: object.geometry(),
        }
    }

    /// Primary colour as `[r, g, b, a]`
    pub fn color(&self) -> [f32; 4] {
        self.style.color.to_array()
    }

    pub fn topology(&self) -> Topology {
        self.geometry.topology
    }

    /// Tightly packed `[f32; 3]` positions
    pub fn position_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(&self.geometry.vertices)
    }

    /// `u32` indices, interpreted according to [`RenderItem::topology`]
    pub fn index_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(&self.geometry.indices)
    }

    /// Positions and normals interleaved as [`Vertex3D`]
    pub fn interleaved(&self) -> Vec<Vertex3D> {
        self.geometry.to_vertex_buffer()
    }

    pub fn transform_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SketchConfig;
    use crate::gfx::scene::Scene;

    #[derive(Default)]
    struct Recorder {
        frames: usize,
        items: Vec<(ObjectId, ObjectKind, usize, usize)>,
    }

    impl RenderSink for Recorder {
        fn begin_frame(&mut self, _camera: &CameraUniform) {
            self.frames += 1;
        }

        fn submit(&mut self, item: RenderItem<'_>) {
            self.items.push((
                item.id,
                item.kind,
                item.position_bytes().len(),
                item.index_bytes().len(),
            ));
        }
    }

    #[test]
    fn test_item_bytes_match_geometry() {
        let scene = Scene::from_config(&SketchConfig::default()).unwrap();
        let plane = scene.reference_plane();
        let item = RenderItem::from_object(plane);

        assert_eq!(item.topology(), Topology::TriangleList);
        assert_eq!(item.position_bytes().len(), plane.geometry().vertex_count() * 12);
        assert_eq!(item.index_bytes().len(), plane.geometry().indices.len() * 4);
        assert_eq!(item.interleaved().len(), plane.geometry().vertex_count());
        assert_eq!(item.transform_bytes().len(), 64);
        assert_eq!(item.transform[3], [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_item_color_and_normal_layout() {
        let scene = Scene::from_config(&SketchConfig::default()).unwrap();
        let item = RenderItem::from_object(scene.reference_plane());
        assert_eq!(item.color(), [1.0, 1.0, 1.0, 1.0]);

        let vertices = item.interleaved();
        let bytes = bytemuck::bytes_of(&vertices[0]);
        let normal: [f32; 3] = bytemuck::pod_read_unaligned(
            &bytes[Vertex3D::NORMAL_OFFSET..Vertex3D::NORMAL_OFFSET + 12],
        );
        assert_eq!(normal, [0.0, 0.0, 1.0]);
        assert_eq!(bytes.len(), Vertex3D::STRIDE);
    }

    #[test]
    fn test_sink_default_begin_frame() {
        struct Counter(usize);
        impl RenderSink for Counter {
            fn submit(&mut self, _item: RenderItem<'_>) {
                self.0 += 1;
            }
        }

        let scene = Scene::from_config(&SketchConfig::default()).unwrap();
        let mut sink = Counter(0);
        sink.begin_frame(&CameraUniform::default());
        for object in scene.objects() {
            sink.submit(RenderItem::from_object(object));
        }
        assert_eq!(sink.0, 2);

        let mut recorder = Recorder::default();
        recorder.begin_frame(&CameraUniform::default());
        for object in scene.objects() {
            recorder.submit(RenderItem::from_object(object));
        }
        assert_eq!(recorder.frames, 1);
        assert_eq!(recorder.items[1].1, ObjectKind::Grid);
    }
}
