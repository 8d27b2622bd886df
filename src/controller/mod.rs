// CONTROLLER: Input, game logic, and update loop
pub mod input;
pub mod interaction;
pub mod frame_loop;

pub use input::{InputEvent, InputState, InputProcessor, KeyBindings, CursorTracker};
pub use interaction::{InteractionController, Discovery, ReleaseOutcome};
pub use frame_loop::{FrameLoopContext, FrameClock, FrameOutput, CameraUniform, LightingUniform, PointLightUniform};
