//! Winit input adapter.
//!
//! Translates winit window events into platform-independent [`HostEvent`]s
//! and dispatches them to a [`Showcase`]. Winit reports button presses without
//! a position, so the translator remembers the last cursor position and
//! attaches it to clicks.

use glam::Vec2;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::renderer::RenderSurface;
use crate::showcase::Showcase;

/// A host signal the showcase reacts to. Positions are physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    PointerMove { x: f32, y: f32 },
    PointerClick { x: f32, y: f32 },
    Resize { width: u32, height: u32 },
    Dismiss,
}

#[derive(Debug, Clone, Default)]
pub struct HostEventTranslator {
    cursor: Option<Vec2>,
}

impl HostEventTranslator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known cursor position inside the window.
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    pub fn cursor_moved(&mut self, x: f64, y: f64) -> HostEvent {
        let (x, y) = (x as f32, y as f32);
        self.cursor = Some(Vec2::new(x, y));
        HostEvent::PointerMove { x, y }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = None;
    }

    /// A left-button press at the last cursor position is a click.
    #[must_use]
    pub fn mouse_input(&self, state: ElementState, button: MouseButton) -> Option<HostEvent> {
        if state != ElementState::Pressed || button != MouseButton::Left {
            return None;
        }
        let cursor = self.cursor?;
        Some(HostEvent::PointerClick {
            x: cursor.x,
            y: cursor.y,
        })
    }

    /// Escape dismisses the selection; key repeats are ignored.
    #[must_use]
    pub fn key(physical_key: PhysicalKey, state: ElementState, repeat: bool) -> Option<HostEvent> {
        let pressed = state == ElementState::Pressed && !repeat;
        (pressed && physical_key == PhysicalKey::Code(KeyCode::Escape)).then_some(HostEvent::Dismiss)
    }

    pub fn translate(&mut self, event: &WindowEvent) -> Option<HostEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => Some(self.cursor_moved(position.x, position.y)),
            WindowEvent::CursorLeft { .. } => {
                self.cursor_left();
                None
            }
            WindowEvent::MouseInput { state, button, .. } => self.mouse_input(*state, *button),
            WindowEvent::KeyboardInput { event, .. } => Self::key(event.physical_key, event.state, event.repeat),
            WindowEvent::Resized(size) => Some(HostEvent::Resize {
                width: size.width,
                height: size.height,
            }),
            _ => None,
        }
    }
}

/// Delivers `event` to `showcase`.
pub fn dispatch<S: RenderSurface>(showcase: &mut Showcase<S>, event: HostEvent) {
    match event {
        HostEvent::PointerMove { x, y } => showcase.on_pointer_move(x, y),
        HostEvent::PointerClick { x, y } => showcase.on_pointer_click(x, y),
        HostEvent::Resize { width, height } => showcase.on_resize(width, height),
        HostEvent::Dismiss => showcase.on_dismiss(),
    }
}
