use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event::{KeyEvent, WindowEvent},
};

/// What the shell should do once an event has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Ignored,
    Quit,
}

/// Per-category window event hooks, registered once when the shell is built.
///
/// Every hook defaults to a no-op except the destruction path, which requests
/// loop termination.
pub trait EventHandler {
    fn on_keyboard(&mut self, _event: &KeyEvent) -> EventResponse {
        EventResponse::Ignored
    }

    fn on_pointer_moved(&mut self, _position: PhysicalPosition<f64>) -> EventResponse {
        EventResponse::Ignored
    }

    fn on_activation(&mut self, _focused: bool) -> EventResponse {
        EventResponse::Ignored
    }

    fn on_resized(&mut self, _size: PhysicalSize<u32>) -> EventResponse {
        EventResponse::Ignored
    }

    fn on_moved(&mut self, _position: PhysicalPosition<i32>) -> EventResponse {
        EventResponse::Ignored
    }

    fn on_close_requested(&mut self) -> EventResponse {
        EventResponse::Quit
    }

    fn on_destroyed(&mut self) -> EventResponse {
        EventResponse::Quit
    }
}

/// Stateless handler that keeps every default response.
pub struct ShellHandler;

impl EventHandler for ShellHandler {}

/// Routes a window event to the matching handler hook. Events without a hook
/// are traced and left to the platform's default behavior.
pub fn dispatch(handler: &mut dyn EventHandler, event: &WindowEvent) -> EventResponse {
    match event {
        WindowEvent::KeyboardInput { event, .. } => handler.on_keyboard(event),
        WindowEvent::CursorMoved { position, .. } => handler.on_pointer_moved(*position),
        WindowEvent::Focused(focused) => handler.on_activation(*focused),
        WindowEvent::Resized(size) => handler.on_resized(*size),
        WindowEvent::Moved(position) => handler.on_moved(*position),
        WindowEvent::CloseRequested => handler.on_close_requested(),
        WindowEvent::Destroyed => handler.on_destroyed(),
        other => {
            log::trace!("event not handled: {other:?}");
            EventResponse::Ignored
        }
    }
}
