use glam::{Mat4, Vec3};

use crate::controller::input::{InputEvent, InputProcessor, InputState};
use crate::controller::interaction::{Discovery, InteractionController, ReleaseOutcome};
use crate::model::lighting::PointLight;
use crate::model::scene;
use crate::model::{Camera, CameraMode, Collectible, LightingMode, Placement, ProgressionState};

/// Frame delta in seconds from a monotonic timestamp.
///
/// Deltas are scaled by `TIME_SCALE` so walking through the room feels brisk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    pub const TIME_SCALE: f32 = 2.0;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, now_secs: f64) -> f32 {
        let dt = match self.last {
            Some(last) => ((now_secs - last).max(0.0) as f32) * Self::TIME_SCALE,
            None => 0.0,
        };
        self.last = Some(now_secs);
        dt
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    pub view_pos: [f32; 3],
    pub _pad0: f32,
    pub hand: [f32; 3],
    pub _pad1: f32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointLightUniform {
    pub position: [f32; 3],
    pub constant: f32,
    pub ambient: [f32; 3],
    pub linear: f32,
    pub diffuse: [f32; 3],
    pub quadratic: f32,
    pub specular: [f32; 3],
    pub _pad: f32,
}

impl From<&PointLight> for PointLightUniform {
    fn from(light: &PointLight) -> Self {
        Self {
            position: light.position.to_array(),
            constant: light.constant,
            ambient: light.ambient.to_array(),
            linear: light.linear,
            diffuse: light.diffuse.to_array(),
            quadratic: light.quadratic,
            specular: light.specular.to_array(),
            _pad: 0.0,
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    pub dir_direction: [f32; 3],
    pub shininess: f32,
    pub dir_ambient: [f32; 3],
    pub _pad1: f32,
    pub dir_diffuse: [f32; 3],
    pub _pad2: f32,
    pub dir_specular: [f32; 3],
    pub _pad3: f32,
    pub point_lights: [PointLightUniform; 4],
}

/// Everything the renderer needs from one update pass
#[derive(Debug, Clone)]
pub struct FrameOutput {
    pub view: Mat4,
    pub projection: Mat4,
    pub zoom: f32,
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub hand_anchor: Vec3,
    pub camera_mode: CameraMode,
    pub progression: ProgressionState,
    pub lighting_mode: LightingMode,
    pub door: Placement,
    /// Indexed by `Collectible::index`
    pub cards: [Placement; 4],
    pub candle: Option<Placement>,
    pub discoveries: Vec<Discovery>,
    pub release: Option<ReleaseOutcome>,
    pub quit_requested: bool,
}

/// Owns the game state and runs the per-frame update
pub struct FrameLoopContext {
    pub camera: Camera,
    pub interaction: InteractionController,
    pub input_state: InputState,
    pub input_processor: InputProcessor,
    pub cam_buf_data: CameraUniform,
    pub lighting_buf_data: LightingUniform,
    aspect: f32,
}

impl FrameLoopContext {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_parts(Camera::new(), InteractionController::new(), InputProcessor::default(), width, height)
    }

    pub fn with_parts(
        camera: Camera,
        interaction: InteractionController,
        input_processor: InputProcessor,
        width: u32,
        height: u32,
    ) -> Self {
        let mut ctx = Self {
            camera,
            interaction,
            input_state: InputState::new(),
            input_processor,
            cam_buf_data: CameraUniform::default(),
            lighting_buf_data: LightingUniform::default(),
            aspect: 1.0,
        };
        ctx.set_aspect(width, height);
        ctx
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        self.input_state.process_event(event);
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// One update pass: look, zoom, mode toggle, movement, then the interact
    /// press and release edges, in that order.
    pub fn update(&mut self, dt: f32, elapsed_secs: f32) -> FrameOutput {
        let (dx, dy) = self.input_state.consume_look();
        if dx != 0.0 || dy != 0.0 {
            self.camera.update_orientation_from_mouse(dx, dy);
        }

        let scroll = self.input_state.consume_scroll();
        if scroll != 0.0 {
            self.camera.update_zoom_from_scroll(scroll);
        }

        if self.input_processor.wants_to_toggle_free_fly(&self.input_state) {
            self.camera.toggle_free_fly();
        }

        for direction in self.input_processor.held_movements(&self.input_state) {
            self.camera.move_step(direction, dt);
        }

        let discoveries = if self.input_processor.interact_pressed(&self.input_state) {
            self.interaction.on_interact_pressed(self.camera.hand_anchor())
        } else {
            Vec::new()
        };

        let release = self
            .input_processor
            .interact_released(&self.input_state)
            .then(|| self.interaction.on_interact_released(&mut self.camera));

        let quit_requested = self.input_processor.wants_to_quit(&self.input_state);
        self.input_state.end_frame();

        let progression = *self.interaction.state();
        let hand_anchor = self.camera.hand_anchor();
        let output = FrameOutput {
            view: self.camera.view_matrix(),
            projection: self.camera.projection_matrix(self.aspect),
            zoom: self.camera.zoom(),
            position: self.camera.position(),
            yaw: self.camera.yaw(),
            pitch: self.camera.pitch(),
            hand_anchor,
            camera_mode: self.camera.mode(),
            progression,
            lighting_mode: progression.lighting_mode(),
            door: scene::door_placement(&progression),
            cards: Collectible::ALL.map(|card| scene::card_placement(card, &progression)),
            candle: scene::candle_placement(hand_anchor, &progression),
            discoveries,
            release,
            quit_requested,
        };
        self.write_uniforms(&output, elapsed_secs);
        output
    }

    fn write_uniforms(&mut self, output: &FrameOutput, elapsed_secs: f32) {
        self.cam_buf_data = CameraUniform {
            view: output.view.to_cols_array_2d(),
            proj: output.projection.to_cols_array_2d(),
            view_pos: output.position.to_array(),
            _pad0: 0.0,
            hand: output.hand_anchor.to_array(),
            _pad1: 0.0,
        };

        let preset = output.lighting_mode.preset();
        let lights = preset.resolve(output.hand_anchor, elapsed_secs);
        let dir = &preset.directional;
        self.lighting_buf_data = LightingUniform {
            dir_direction: dir.direction.to_array(),
            shininess: preset.shininess,
            dir_ambient: dir.ambient.to_array(),
            _pad1: 0.0,
            dir_diffuse: dir.diffuse.to_array(),
            _pad2: 0.0,
            dir_specular: dir.specular.to_array(),
            _pad3: 0.0,
            point_lights: lights.map(|light| PointLightUniform::from(&light)),
        };
    }
}
