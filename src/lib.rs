// Re-export all public modules so they can be used from main.rs
pub mod logging;
pub mod ui;

// MVC Architecture
pub mod model;
pub mod view;
pub mod controller;

pub use controller::{FrameClock, FrameLoopContext, FrameOutput, InputEvent, InteractionController};
pub use model::{Camera, CameraMode, Collectible, LightingMode, Movement, ProgressionState};
