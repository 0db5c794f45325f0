use crate::events::{self, EventHandler, EventResponse, ShellHandler};
use crate::gfx;
use crate::window::{self, WindowConfig};
use anyhow::Context;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Window, WindowId},
};

/// Owns the single window and graphics instance for the lifetime of the
/// process and pumps OS events until the window is destroyed.
pub struct App {
    config: WindowConfig,
    handler: Box<dyn EventHandler>,
    window: Option<Window>,
    instance: Option<gfx::Instance>,
    error: Option<anyhow::Error>,
}

impl App {
    pub fn new(config: WindowConfig) -> Self {
        Self::with_handler(config, Box::new(ShellHandler))
    }

    /// The handler is registered once, before the window exists, and receives
    /// every event the window produces.
    pub fn with_handler(config: WindowConfig, handler: Box<dyn EventHandler>) -> Self {
        Self {
            config,
            handler,
            window: None,
            instance: None,
            error: None,
        }
    }

    /// Outcome of the run; a setup failure recorded here maps to a non-zero
    /// process exit.
    pub fn into_result(self) -> anyhow::Result<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // One window per process run.
        if self.window.is_some() {
            return;
        }

        let window = match window::create(event_loop, &self.config) {
            Ok(window) => window,
            Err(err) => {
                self.error = Some(err.context("window creation failed"));
                event_loop.exit();
                return;
            }
        };

        // The instance is only brought up once the window exists; a future
        // renderer would need the window surface.
        match gfx::Instance::new().context("failed to initialize the app") {
            Ok(instance) => {
                log::info!("created Vulkan instance {:?}", instance.handle());
                self.instance = Some(instance);
                self.window = Some(window);
            }
            Err(err) => {
                self.error = Some(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.as_ref() else {
            return;
        };
        if window_id != window.id() {
            return;
        }

        if events::dispatch(self.handler.as_mut(), &event) == EventResponse::Quit {
            event_loop.exit();
        }
    }
}
