//! # Input Translation
//!
//! Maps raw winit window events onto the handful of events the authoring
//! pipeline reacts to. Everything else is ignored.
//!
//! | winit event                          | [`InputEvent`]                   |
//! |--------------------------------------|----------------------------------|
//! | `CursorMoved`                        | `PointerMoved`                   |
//! | left `MouseInput` release            | `Click`                          |
//! | `Resized`                            | `Resized`                        |
//! | `Enter` / `D` / `R` key press        | `Command(Complete / Copy / Reset)` |

use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, KeyEvent, MouseButton, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

/// Commands issued by UI buttons or keyboard shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Close the outline being drawn
    Complete,
    /// Duplicate the current polygon and start dragging the copy
    Copy,
    /// Return the scene to its baseline
    Reset,
}

impl Command {
    pub fn from_key_code(key_code: KeyCode) -> Option<Self> {
        match key_code {
            KeyCode::Enter | KeyCode::NumpadEnter => Some(Command::Complete),
            KeyCode::KeyD => Some(Command::Copy),
            KeyCode::KeyR => Some(Command::Reset),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer position in physical pixels, origin top-left
    PointerMoved(PhysicalPosition<f64>),
    Click,
    Resized(PhysicalSize<u32>),
    Command(Command),
}

pub fn translate_window_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::CursorMoved { position, .. } => Some(InputEvent::PointerMoved(*position)),
        WindowEvent::MouseInput {
            state: ElementState::Released,
            button: MouseButton::Left,
            ..
        } => Some(InputEvent::Click),
        WindowEvent::Resized(size) => Some(InputEvent::Resized(*size)),
        WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    physical_key: PhysicalKey::Code(key_code),
                    state: ElementState::Pressed,
                    repeat: false,
                    ..
                },
            ..
        } => Command::from_key_code(*key_code).map(InputEvent::Command),
        _ => None,
    }
}
