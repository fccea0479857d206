use cgmath::{Point3, Vector2};
use log::{debug, info, trace, warn};
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event::WindowEvent,
};

use crate::{
    authoring::{DragController, PolygonAuthoring},
    config::SketchConfig,
    error::SketchError,
    gfx::{
        camera::{PerspectiveCamera, Viewport},
        geometry::ShapeFactory,
        picking::PlanePicker,
        render::{RenderItem, RenderSink},
        scene::{ObjectId, Scene},
    },
    input::{translate_window_event, Command, InputEvent},
};

/// The authoring context: owns the scene, the vertex list and the drag session.
///
/// Hosts feed it window events and call [`SketchApp::render`] once per frame
/// with their own [`RenderSink`]. Every handler takes `&mut self`, so events
/// are processed strictly one at a time.
pub struct SketchApp {
    config: SketchConfig,
    factory: ShapeFactory,
    picker: PlanePicker,
    camera: PerspectiveCamera,
    viewport: Viewport,
    scene: Scene,
    authoring: PolygonAuthoring,
    drag: DragController,
    /// Last pointer position in NDC
    pointer: Option<Vector2<f32>>,
}

impl SketchApp {
    /// Create an authoring context for a window of the given size
    pub fn new(config: SketchConfig, size: PhysicalSize<u32>) -> Result<Self, SketchError> {
        let scene = Scene::from_config(&config)?;
        let viewport = Viewport::new(size);
        let camera = PerspectiveCamera::new(viewport.aspect());

        info!(
            "authoring on a {} x {} plane, viewport {}x{}",
            config.plane_width, config.plane_height, size.width, size.height
        );

        Ok(Self {
            factory: ShapeFactory::new(&config),
            picker: PlanePicker::new(config.authoring_depth),
            drag: DragController::new(
                config.plane_width,
                config.plane_height,
                config.drag_clamp_margin,
            ),
            camera,
            viewport,
            scene,
            authoring: PolygonAuthoring::new(),
            pointer: None,
            config,
        })
    }

    /// Translate and handle a raw window event. Unrelated events are ignored.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> Result<(), SketchError> {
        match translate_window_event(event) {
            Some(input) => self.handle_event(input),
            None => Ok(()),
        }
    }

    /// Dispatch an input event.
    ///
    /// User-facing failures are logged and returned so the host can show their
    /// message. Pick misses are swallowed.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<(), SketchError> {
        let result = match event {
            InputEvent::PointerMoved(position) => self.pointer_moved(position),
            InputEvent::Click => self.click(),
            InputEvent::Resized(size) => {
                self.resize(size);
                Ok(())
            }
            InputEvent::Command(Command::Complete) => self.complete(),
            InputEvent::Command(Command::Copy) => self.copy().map(|_| ()),
            InputEvent::Command(Command::Reset) => {
                self.reset();
                Ok(())
            }
        };

        match result {
            Err(err) if err.is_silent() => {
                trace!("{:?} ignored: {}", event, err);
                Ok(())
            }
            Err(err) => {
                warn!("{}", err);
                Err(err)
            }
            Ok(()) => Ok(()),
        }
    }

    /// Track the pointer; while a copy is being placed, move it along.
    pub fn pointer_moved(&mut self, position: PhysicalPosition<f64>) -> Result<(), SketchError> {
        let ndc = self.viewport.normalize(position).ok_or(SketchError::PickMiss)?;
        self.pointer = Some(ndc);

        if !self.drag.is_dragging() {
            return Ok(());
        }

        let point = self
            .picker
            .pick_unbounded(ndc, &self.camera, self.scene.reference_plane())
            .ok_or(SketchError::PickMiss)?;
        self.drag.update(point, &mut self.scene);
        Ok(())
    }

    /// A click drops the dragged copy, or else adds a vertex under the pointer.
    pub fn click(&mut self) -> Result<(), SketchError> {
        if self.drag.drop_target().is_some() {
            return Ok(());
        }

        let point = self.pick_under_pointer()?;
        if let Some(line) = self.authoring.on_pick(point, &self.factory) {
            self.scene.append(line);
        }
        Ok(())
    }

    fn pick_under_pointer(&self) -> Result<Point3<f32>, SketchError> {
        let ndc = self.pointer.ok_or(SketchError::PickMiss)?;
        self.picker
            .pick(ndc, &self.camera, self.scene.reference_plane())
            .ok_or(SketchError::PickMiss)
    }

    /// Close the outline being drawn into a filled polygon.
    pub fn complete(&mut self) -> Result<(), SketchError> {
        let closed = self.authoring.on_close(&self.factory)?;
        self.scene.append(closed.closing_line);
        let id = self.scene.append(closed.polygon);
        info!("polygon {} completed", id);
        Ok(())
    }

    /// Duplicate the current polygon and start dragging the copy.
    pub fn copy(&mut self) -> Result<ObjectId, SketchError> {
        if self.drag.is_dragging() {
            return Err(SketchError::DragInProgress);
        }

        let id = self.scene.duplicate_last()?;
        let position = self
            .scene
            .get(id)
            .map(|copy| copy.position())
            .ok_or(SketchError::NoShapeToCopy)?;
        self.drag.begin(id, position)?;
        Ok(id)
    }

    /// Drop all authored shapes, the vertex list and any drag in progress.
    pub fn reset(&mut self) {
        self.scene.reset_to_baseline();
        self.authoring.reset();
        self.drag.release();
        debug!("authoring reset");
    }

    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        self.viewport.resize(size);
        self.camera.resize_projection(size.width, size.height);
    }

    /// Submit every scene object to `sink`, in draw order.
    pub fn render(&self, sink: &mut impl RenderSink) {
        sink.begin_frame(&self.camera.uniform());
        for object in self.scene.objects() {
            sink.submit(RenderItem::from_object(object));
        }
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn authoring(&self) -> &PolygonAuthoring {
        &self.authoring
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Last pointer position in normalized device coordinates
    pub fn pointer(&self) -> Option<Vector2<f32>> {
        self.pointer
    }
}
