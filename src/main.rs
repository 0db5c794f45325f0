use std::process::ExitCode;

use app::App;
use window::{Rect, WindowConfig};
use winit::event_loop::{ControlFlow, EventLoop};

mod app;
mod events;
mod gfx;
mod window;

const WINDOW_POS: (i32, i32) = (1400, 800);
const WINDOW_SIZE: (i32, i32) = (500, 500);

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let event_loop = EventLoop::new()?;
    // Block on the OS queue between events instead of polling.
    event_loop.set_control_flow(ControlFlow::Wait);

    let (left, top) = WINDOW_POS;
    let (width, height) = WINDOW_SIZE;
    let config = WindowConfig {
        title: String::from("VK"),
        rect: Rect {
            left,
            top,
            right: left + width,
            bottom: top + height,
        },
        fullscreen: false,
        hide_borders: false,
    };

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    app.into_result()
}
