use anyhow::Context;
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event_loop::ActiveEventLoop,
    monitor::VideoModeHandle,
    window::{Fullscreen, Window, WindowAttributes},
};

const FULLSCREEN_BIT_DEPTH: u16 = 32;

/// Requested placement of the window's client area, in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn width(&self) -> u32 {
        (self.right - self.left).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        (self.bottom - self.top).max(0) as u32
    }
}

#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub rect: Rect,
    pub fullscreen: bool,
    pub hide_borders: bool,
}

impl WindowConfig {
    /// Windowed-mode attributes. The inner size is the client area, so the
    /// requested rectangle survives decoration adjustment untouched.
    fn attributes(&self) -> WindowAttributes {
        WindowAttributes::default()
            .with_title(self.title.clone())
            .with_position(PhysicalPosition::new(self.rect.left, self.rect.top))
            .with_inner_size(PhysicalSize::new(self.rect.width(), self.rect.height()))
            .with_decorations(!(self.fullscreen || self.hide_borders))
    }
}

/// Creates the window, shows it and requests an initial repaint.
///
/// A fullscreen request is best-effort: when no display mode matches the
/// requested size, the window comes up windowed instead.
pub fn create(event_loop: &ActiveEventLoop, config: &WindowConfig) -> anyhow::Result<Window> {
    let mut attributes = config.attributes();

    if config.fullscreen {
        match exclusive_mode(event_loop, config) {
            Some(mode) => {
                log::info!("display mode changed to fullscreen");
                attributes = attributes.with_fullscreen(Some(Fullscreen::Exclusive(mode)));
            }
            None => log::warn!("failed to set fullscreen mode"),
        }
    }

    let window = event_loop
        .create_window(attributes)
        .context("failed to create the requested window")?;

    if window.fullscreen().is_some() {
        window.set_cursor_visible(false);
    }
    window.request_redraw();

    Ok(window)
}

fn exclusive_mode(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Option<VideoModeHandle> {
    event_loop.primary_monitor()?.video_modes().find(|mode| {
        mode_matches(
            mode.size(),
            mode.bit_depth(),
            config.rect.width(),
            config.rect.height(),
        )
    })
}

fn mode_matches(size: PhysicalSize<u32>, bit_depth: u16, width: u32, height: u32) -> bool {
    size.width == width && size.height == height && bit_depth == FULLSCREEN_BIT_DEPTH
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::{Position, Size};

    fn config(fullscreen: bool, hide_borders: bool) -> WindowConfig {
        WindowConfig {
            title: String::from("VK"),
            rect: Rect {
                left: 1400,
                top: 800,
                right: 1900,
                bottom: 1300,
            },
            fullscreen,
            hide_borders,
        }
    }

    #[test]
    fn test_rect_dimensions() {
        let rect = Rect {
            left: 1400,
            top: 800,
            right: 1900,
            bottom: 1300,
        };
        assert_eq!(rect.width(), 500);
        assert_eq!(rect.height(), 500);
    }

    #[test]
    fn test_inverted_rect_clamps_to_zero() {
        let rect = Rect {
            left: 100,
            top: 100,
            right: 50,
            bottom: 40,
        };
        assert_eq!(rect.width(), 0);
        assert_eq!(rect.height(), 0);
    }

    #[test]
    fn test_attributes_keep_requested_client_area() {
        let attributes = config(false, false).attributes();
        assert_eq!(
            attributes.inner_size,
            Some(Size::Physical(PhysicalSize::new(500, 500)))
        );
        assert_eq!(
            attributes.position,
            Some(Position::Physical(PhysicalPosition::new(1400, 800)))
        );
        assert_eq!(attributes.title, "VK");
    }

    #[test]
    fn test_bordered_style_by_default() {
        assert!(config(false, false).attributes().decorations);
    }

    #[test]
    fn test_borderless_style_when_requested() {
        assert!(!config(false, true).attributes().decorations);
        assert!(!config(true, false).attributes().decorations);
    }

    #[test]
    fn test_mode_matches_exact_size_at_32_bits() {
        assert!(mode_matches(PhysicalSize::new(500, 500), 32, 500, 500));
        assert!(!mode_matches(PhysicalSize::new(640, 480), 32, 500, 500));
        assert!(!mode_matches(PhysicalSize::new(500, 500), 16, 500, 500));
    }
}
