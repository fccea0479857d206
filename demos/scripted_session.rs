//! # Scripted Session
//!
//! Drives a full authoring session without a window: draws an L-shaped
//! polygon, duplicates it, drags the copy to the far corner and drops it.
//! Each frame is handed to a render sink that only logs what it receives.
//!
//! Run with `RUST_LOG=debug cargo run --example scripted_session` to see the
//! state transitions.

use log::info;
use polyplane::prelude::*;

/// Stand-in for a GPU renderer
#[derive(Default)]
struct LoggingSink {
    frame: usize,
    bytes: usize,
}

impl RenderSink for LoggingSink {
    fn begin_frame(&mut self, camera: &CameraUniform) {
        self.frame += 1;
        self.bytes = 0;
        info!("frame {} eye {:?}", self.frame, camera.view_position);
    }

    fn submit(&mut self, item: RenderItem<'_>) {
        self.bytes += item.position_bytes().len() + item.index_bytes().len();
        info!(
            "  {} {:<9} {:?} {:>4} vertices, colour {:?}, translation {:?}",
            item.id,
            item.kind.name(),
            item.topology(),
            item.geometry.vertex_count(),
            item.color(),
            &item.transform[3][..3]
        );
    }
}

/// Screen position of a point on the plane
fn pixel_of(app: &SketchApp, x: f32, y: f32) -> anyhow::Result<PhysicalPosition<f64>> {
    let ndc = app
        .camera()
        .project_to_ndc(Point3::new(x, y, 0.0))
        .ok_or_else(|| anyhow::anyhow!("({x}, {y}) is behind the camera"))?;
    let size = app.viewport().size();
    Ok(PhysicalPosition::new(
        (ndc.x as f64 + 1.0) * 0.5 * size.width as f64,
        (1.0 - ndc.y as f64) * 0.5 * size.height as f64,
    ))
}

fn click(app: &mut SketchApp, x: f32, y: f32) -> anyhow::Result<()> {
    let position = pixel_of(app, x, y)?;
    app.handle_event(InputEvent::PointerMoved(position))?;
    app.handle_event(InputEvent::Click)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut app = polyplane::default(PhysicalSize::new(1280, 720))?;
    let mut sink = LoggingSink::default();

    // Closing with two vertices is refused
    click(&mut app, -3.0, -3.0)?;
    click(&mut app, 0.0, -3.0)?;
    if let Err(err) = app.handle_event(InputEvent::Command(Command::Complete)) {
        info!("notice: {err}");
    }

    for (x, y) in [(0.0, -2.0), (-2.0, -2.0), (-2.0, 0.0), (-3.0, 0.0)] {
        click(&mut app, x, y)?;
    }
    app.handle_event(InputEvent::Command(Command::Complete))?;
    app.render(&mut sink);

    app.handle_event(InputEvent::Command(Command::Copy))?;
    for step in 1..=4 {
        let t = step as f32 / 4.0;
        let position = pixel_of(&app, 4.0 * t, 3.0 * t)?;
        app.handle_event(InputEvent::PointerMoved(position))?;
    }
    app.handle_event(InputEvent::Click)?;
    app.render(&mut sink);

    let stats = app.scene().get_statistics();
    info!(
        "{} objects: {} lines, {} polygons, {} copies, {} triangles, {} bytes last frame",
        stats.object_count,
        stats.line_count,
        stats.polygon_count,
        stats.duplicate_count,
        stats.total_triangles,
        sink.bytes
    );

    app.handle_event(InputEvent::Command(Command::Reset))?;
    app.render(&mut sink);
    Ok(())
}
