// VIEW: Native window, GPU surface and HUD
pub mod render;
pub mod gpu_init;

pub use render::HudFrame;
pub use gpu_init::GpuContext;

use thiserror::Error;
use winit::event::MouseScrollDelta;
use winit::keyboard::KeyCode;

/// Pixels per scroll "line" for touchpads reporting pixel deltas
const PIXELS_PER_LINE: f32 = 40.0;

#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to open GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
}

#[derive(Debug, Clone)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Escape Room".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

/// Key name understood by `KeyBindings` for a physical key.
pub fn key_name(code: KeyCode) -> Option<&'static str> {
    let name = match code {
        KeyCode::KeyW => "w",
        KeyCode::KeyS => "s",
        KeyCode::KeyA => "a",
        KeyCode::KeyD => "d",
        KeyCode::KeyX => "x",
        KeyCode::KeyZ => "z",
        KeyCode::KeyF => "f",
        KeyCode::Space => " ",
        KeyCode::ArrowUp => "ArrowUp",
        KeyCode::ArrowDown => "ArrowDown",
        KeyCode::Escape => "Escape",
        _ => return None,
    };
    Some(name)
}

/// Scroll amount in wheel lines, positive away from the user.
pub fn scroll_lines(delta: &MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => *y,
        MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{InputEvent, InputProcessor, InputState};
    use winit::dpi::PhysicalPosition;

    #[test]
    fn mapped_keys_reach_bindings() {
        let p = InputProcessor::default();
        let mut input = InputState::new();
        for code in [KeyCode::KeyW, KeyCode::Space, KeyCode::KeyF] {
            let name = key_name(code).map(str::to_string);
            input.process_event(&InputEvent::KeyDown(name.unwrap_or_default()));
        }
        assert!(p.is_moving_forward(&input));
        assert!(p.interact_pressed(&input));
        assert!(p.wants_to_toggle_free_fly(&input));
        assert_eq!(key_name(KeyCode::KeyQ), None);
    }

    #[test]
    fn pixel_scroll_is_scaled() {
        assert_eq!(scroll_lines(&MouseScrollDelta::LineDelta(0.0, -2.0)), -2.0);
        let px = MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 80.0));
        assert_eq!(scroll_lines(&px), 2.0);
    }
}
