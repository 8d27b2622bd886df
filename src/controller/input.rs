/// Platform-agnostic input handling system
use std::collections::HashSet;

use crate::model::Movement;

/// Platform-independent input events
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    // Keyboard events
    KeyDown(String),
    KeyUp(String),

    // Mouse events
    /// Relative motion, y grows downwards
    MouseMove { dx: f32, dy: f32 },
    /// Absolute cursor position in window pixels
    CursorMoved { x: f32, y: f32 },
    MouseWheel { delta_y: f32 },

    /// The cursor left or re-entered the window; the next position only reseeds
    CursorLeft,

    // Window events
    FocusLost,
}

/// Single letters are matched case-insensitively, named keys verbatim.
fn normalize_key(key: &str) -> String {
    if key.chars().count() == 1 {
        key.to_lowercase()
    } else {
        key.to_string()
    }
}

/// Turns absolute cursor positions into deltas. The first sample only seeds the
/// reference point so the view does not jump when the cursor first appears.
#[derive(Debug, Clone, Copy, Default)]
pub struct CursorTracker {
    last: Option<(f32, f32)>,
}

impl CursorTracker {
    /// Returns (dx, dy) with y pointing up, or None for the seeding sample.
    pub fn sample(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        let delta = self.last.map(|(lx, ly)| (x - lx, ly - y));
        self.last = Some((x, y));
        delta
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Raw input gathered between two frames
#[derive(Debug, Default)]
pub struct InputState {
    pub pressed_keys: HashSet<String>,
    just_pressed: Vec<String>,
    just_released: Vec<String>,
    look_delta: (f32, f32),
    scroll_delta: f32,
    cursor: CursorTracker,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process an input event and update state
    pub fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(key) => {
                let key = normalize_key(key);
                // Auto-repeat arrives as more KeyDowns; only the first one is an edge
                if self.pressed_keys.insert(key.clone()) {
                    self.just_pressed.push(key);
                }
            }
            InputEvent::KeyUp(key) => {
                let key = normalize_key(key);
                if self.pressed_keys.remove(&key) {
                    self.just_released.push(key);
                }
            }
            InputEvent::MouseMove { dx, dy } => {
                self.look_delta.0 += dx;
                self.look_delta.1 -= dy;
            }
            InputEvent::CursorMoved { x, y } => {
                if let Some((dx, dy)) = self.cursor.sample(*x, *y) {
                    self.look_delta.0 += dx;
                    self.look_delta.1 += dy;
                }
            }
            InputEvent::MouseWheel { delta_y } => {
                self.scroll_delta += delta_y;
            }
            InputEvent::CursorLeft => {
                self.cursor.reset();
            }
            InputEvent::FocusLost => {
                self.clear_keys();
                self.cursor.reset();
            }
        }
    }

    pub fn is_key_pressed(&self, key: &str) -> bool {
        self.pressed_keys.contains(&normalize_key(key))
    }

    pub fn was_just_pressed(&self, key: &str) -> bool {
        let key = normalize_key(key);
        self.just_pressed.iter().any(|k| *k == key)
    }

    pub fn was_just_released(&self, key: &str) -> bool {
        let key = normalize_key(key);
        self.just_released.iter().any(|k| *k == key)
    }

    /// Drops held keys without producing release edges.
    pub fn clear_keys(&mut self) {
        self.pressed_keys.clear();
    }

    /// Forget the cursor reference, e.g. after the pointer was grabbed or released.
    pub fn reset_cursor(&mut self) {
        self.cursor.reset();
    }

    pub fn consume_look(&mut self) -> (f32, f32) {
        std::mem::take(&mut self.look_delta)
    }

    pub fn consume_scroll(&mut self) -> f32 {
        std::mem::take(&mut self.scroll_delta)
    }

    /// Clear the per-frame edges once the frame has been processed.
    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }
}

/// Key mapping configuration
#[derive(Clone, Debug)]
pub struct KeyBindings {
    pub forward: String,
    pub backward: String,
    pub left: String,
    pub right: String,
    pub up: String,
    pub down: String,
    pub interact: String,
    pub toggle_free_fly: String,
    pub quit: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: "w".to_string(),
            backward: "s".to_string(),
            left: "a".to_string(),
            right: "d".to_string(),
            up: "x".to_string(),
            down: "z".to_string(),
            interact: " ".to_string(),
            toggle_free_fly: "f".to_string(),
            quit: "Escape".to_string(),
        }
    }
}

/// High-level input processor
#[derive(Clone, Debug, Default)]
pub struct InputProcessor {
    bindings: KeyBindings,
}

impl InputProcessor {
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn is_moving_forward(&self, input: &InputState) -> bool {
        input.is_key_pressed(&self.bindings.forward) || input.is_key_pressed("ArrowUp")
    }

    pub fn is_moving_backward(&self, input: &InputState) -> bool {
        input.is_key_pressed(&self.bindings.backward) || input.is_key_pressed("ArrowDown")
    }

    /// Movement commands for every held direction, in a fixed order.
    pub fn held_movements(&self, input: &InputState) -> Vec<Movement> {
        let held = [
            (Movement::Forward, self.is_moving_forward(input)),
            (Movement::Backward, self.is_moving_backward(input)),
            (Movement::Left, input.is_key_pressed(&self.bindings.left)),
            (Movement::Right, input.is_key_pressed(&self.bindings.right)),
            (Movement::Up, input.is_key_pressed(&self.bindings.up)),
            (Movement::Down, input.is_key_pressed(&self.bindings.down)),
        ];
        held.into_iter().filter(|(_, on)| *on).map(|(m, _)| m).collect()
    }

    pub fn interact_pressed(&self, input: &InputState) -> bool {
        input.was_just_pressed(&self.bindings.interact)
    }

    pub fn interact_released(&self, input: &InputState) -> bool {
        input.was_just_released(&self.bindings.interact)
    }

    pub fn wants_to_toggle_free_fly(&self, input: &InputState) -> bool {
        input.was_just_pressed(&self.bindings.toggle_free_fly)
    }

    pub fn wants_to_quit(&self, input: &InputState) -> bool {
        input.was_just_pressed(&self.bindings.quit)
    }
}
