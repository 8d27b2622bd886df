use glam::{Mat4, Vec3};
use tracing::debug;

use super::bounds::RoomBounds;

pub const PITCH_LIMIT: f32 = 89.0; // degrees, stops the view flipping over the vertical
pub const ZOOM_MIN: f32 = 1.0;
pub const ZOOM_MAX: f32 = 90.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

// Offset of the held light in camera space
const HAND_FORWARD: f32 = 0.6;
const HAND_RIGHT: f32 = 0.35;
const HAND_DOWN: f32 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

impl Movement {
    pub const ALL: [Movement; 6] = [
        Movement::Forward,
        Movement::Backward,
        Movement::Left,
        Movement::Right,
        Movement::Up,
        Movement::Down,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// Moves are only accepted when they end inside the room
    #[default]
    Bounded,
    /// Collision disabled
    FreeFly,
}

/// Start pose and tuning for the player camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    pub position: Vec3,
    pub world_up: Vec3,
    /// Degrees
    pub yaw: f32,
    /// Degrees
    pub pitch: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    /// Vertical field of view in degrees
    pub zoom: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: Vec3::new(4.0, 6.0, 4.0),
            world_up: Vec3::Y,
            yaw: -90.0,
            pitch: 0.0,
            movement_speed: 5.0,
            mouse_sensitivity: 0.1,
            zoom: 45.0,
        }
    }
}

/// First-person camera confined to the room.
///
/// `front`, `right` and `up` are only ever written by `recompute_basis`, so they
/// stay orthonormal whatever sequence of look and move calls is applied.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    zoom: f32,
    movement_speed: f32,
    mouse_sensitivity: f32,
    mode: CameraMode,
    bounds: RoomBounds,
}

impl Camera {
    pub fn new() -> Self {
        Self::with_settings(CameraSettings::default(), RoomBounds::ROOM)
    }

    pub fn with_settings(settings: CameraSettings, bounds: RoomBounds) -> Self {
        let mut camera = Self {
            position: settings.position,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            world_up: settings.world_up.try_normalize().unwrap_or(Vec3::Y),
            yaw: settings.yaw,
            pitch: settings.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            zoom: settings.zoom.clamp(ZOOM_MIN, ZOOM_MAX),
            movement_speed: settings.movement_speed,
            mouse_sensitivity: settings.mouse_sensitivity,
            mode: CameraMode::Bounded,
            bounds,
        };
        camera.recompute_basis();
        camera
    }

    pub fn position(&self) -> Vec3 { self.position }
    pub fn front(&self) -> Vec3 { self.front }
    pub fn right(&self) -> Vec3 { self.right }
    pub fn up(&self) -> Vec3 { self.up }
    pub fn yaw(&self) -> f32 { self.yaw }
    pub fn pitch(&self) -> f32 { self.pitch }
    pub fn zoom(&self) -> f32 { self.zoom }
    pub fn mode(&self) -> CameraMode { self.mode }
    pub fn bounds(&self) -> &RoomBounds { &self.bounds }

    pub fn is_free_fly(&self) -> bool {
        self.mode == CameraMode::FreeFly
    }

    /// Apply a look delta in screen pixels (y up).
    pub fn update_orientation_from_mouse(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.mouse_sensitivity;
        self.pitch = (self.pitch + dy * self.mouse_sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.recompute_basis();
    }

    pub fn update_zoom_from_scroll(&mut self, dy: f32) {
        self.zoom = (self.zoom - dy).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Step one movement command. Returns whether the step was taken.
    ///
    /// In bounded mode the whole step is dropped if the target lies outside the
    /// room on any axis; there is no per-axis clamping or sliding along walls.
    pub fn move_step(&mut self, direction: Movement, dt: f32) -> bool {
        let velocity = self.movement_speed * dt;
        let offset = match direction {
            Movement::Forward => self.front * velocity,
            Movement::Backward => -self.front * velocity,
            Movement::Left => -self.right * velocity,
            Movement::Right => self.right * velocity,
            Movement::Up => self.world_up * velocity,
            Movement::Down => -self.world_up * velocity,
        };
        let candidate = self.position + offset;

        if self.mode == CameraMode::FreeFly || self.bounds.contains(candidate) {
            self.position = candidate;
            true
        } else {
            debug!(?direction, ?candidate, "move rejected by room bounds");
            false
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.zoom.to_radians(), aspect, Z_NEAR, Z_FAR)
    }

    /// Where the held candle sits: a little ahead, right and below the eye.
    pub fn hand_anchor(&self) -> Vec3 {
        self.position + self.front * HAND_FORWARD + self.right * HAND_RIGHT - self.up * HAND_DOWN
    }

    pub fn toggle_free_fly(&mut self) {
        self.mode = match self.mode {
            CameraMode::Bounded => CameraMode::FreeFly,
            CameraMode::FreeFly => CameraMode::Bounded,
        };
        debug!(mode = ?self.mode, "camera mode toggled");
    }

    pub fn enter_free_fly(&mut self) {
        self.mode = CameraMode::FreeFly;
    }

    fn recompute_basis(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const EPS: f32 = 1e-5;

    fn assert_orthonormal(c: &Camera) {
        assert!((c.front.length() - 1.0).abs() < EPS);
        assert!((c.right.length() - 1.0).abs() < EPS);
        assert!((c.up.length() - 1.0).abs() < EPS);
        assert!(c.front.dot(c.right).abs() < EPS);
        assert!(c.front.dot(c.up).abs() < EPS);
        assert!(c.right.dot(c.up).abs() < EPS);
    }

    fn centered() -> Camera {
        let settings = CameraSettings {
            position: RoomBounds::ROOM.center(),
            ..CameraSettings::default()
        };
        Camera::with_settings(settings, RoomBounds::ROOM)
    }

    #[test]
    fn default_looks_down_negative_z() {
        let c = Camera::new();
        assert!(c.front.abs_diff_eq(Vec3::NEG_Z, EPS));
        assert!(c.right.abs_diff_eq(Vec3::X, EPS));
        assert!(c.up.abs_diff_eq(Vec3::Y, EPS));
        assert_eq!(c.mode(), CameraMode::Bounded);
        assert_eq!(c.zoom(), 45.0);
    }

    #[test]
    fn basis_orthonormal_over_yaw_pitch_sweep() {
        let mut c = Camera::new();
        for yaw_step in -8..=8 {
            for pitch_step in -10..=10 {
                c.yaw = yaw_step as f32 * 47.0;
                c.pitch = pitch_step as f32 * 8.9;
                c.recompute_basis();
                assert_orthonormal(&c);
            }
        }
    }

    #[rstest]
    #[case(0.0, 1.0e6)]
    #[case(0.0, -1.0e6)]
    #[case(123.0, 900.0)]
    #[case(-5000.0, -890.0)]
    fn pitch_stays_clamped(#[case] dx: f32, #[case] dy: f32) {
        let mut c = Camera::new();
        for _ in 0..5 {
            c.update_orientation_from_mouse(dx, dy);
            assert!(c.pitch() <= PITCH_LIMIT && c.pitch() >= -PITCH_LIMIT);
            assert_orthonormal(&c);
        }
    }

    #[test]
    fn yaw_accumulates_without_wrapping() {
        let mut c = Camera::new();
        c.update_orientation_from_mouse(7200.0, 0.0);
        assert!((c.yaw() - (-90.0 + 720.0)).abs() < 1e-3);
        assert!(c.front.abs_diff_eq(Vec3::NEG_Z, 1e-4));
    }

    #[rstest]
    #[case(10.0, 35.0)]
    #[case(100.0, ZOOM_MIN)]
    #[case(-30.0, 75.0)]
    #[case(-1000.0, ZOOM_MAX)]
    fn zoom_is_clamped(#[case] scroll: f32, #[case] expected: f32) {
        let mut c = Camera::new();
        c.update_zoom_from_scroll(scroll);
        assert!((c.zoom() - expected).abs() < EPS);
    }

    #[rstest]
    #[case(Movement::Forward, Vec3::NEG_Z)]
    #[case(Movement::Backward, Vec3::Z)]
    #[case(Movement::Left, Vec3::NEG_X)]
    #[case(Movement::Right, Vec3::X)]
    #[case(Movement::Up, Vec3::Y)]
    #[case(Movement::Down, Vec3::NEG_Y)]
    fn move_follows_basis(#[case] dir: Movement, #[case] axis: Vec3) {
        let mut c = centered();
        let start = c.position();
        assert!(c.move_step(dir, 0.1));
        assert!(c.position().abs_diff_eq(start + axis * 0.5, EPS));
    }

    #[test]
    fn zero_delta_leaves_position() {
        let mut c = centered();
        let start = c.position();
        for dir in Movement::ALL {
            c.move_step(dir, 0.0);
        }
        assert_eq!(c.position(), start);
    }

    #[test]
    fn bounded_rejects_whole_step() {
        // Looking diagonally into the -x wall: the z part alone would be fine.
        let settings = CameraSettings {
            position: Vec3::new(RoomBounds::ROOM.min.x + 0.05, 3.0, 0.0),
            yaw: -135.0,
            ..CameraSettings::default()
        };
        let mut c = Camera::with_settings(settings, RoomBounds::ROOM);
        let start = c.position();
        assert!(!c.move_step(Movement::Forward, 0.1));
        assert_eq!(c.position(), start);
    }

    #[test]
    fn bounded_never_leaves_room() {
        let mut c = centered();
        let room = *c.bounds();
        for i in 0..600 {
            let dir = Movement::ALL[i % Movement::ALL.len()];
            c.update_orientation_from_mouse(13.0, if i % 2 == 0 { 7.0 } else { -11.0 });
            c.move_step(dir, 0.37);
            c.move_step(Movement::Forward, 0.5);
            assert!(room.contains(c.position()));
        }
    }

    #[test]
    fn free_fly_accepts_everything() {
        let mut c = centered();
        c.toggle_free_fly();
        assert!(c.is_free_fly());
        let start = c.position();
        for _ in 0..100 {
            assert!(c.move_step(Movement::Up, 1.0));
        }
        assert!(c.position().abs_diff_eq(start + Vec3::Y * 500.0, 1e-3));
        assert!(!c.bounds().contains(c.position()));

        c.toggle_free_fly();
        assert_eq!(c.mode(), CameraMode::Bounded);
        assert!(!c.move_step(Movement::Up, 0.01));
    }

    #[test]
    fn hand_anchor_offset_and_stable() {
        let c = Camera::new();
        let a = c.hand_anchor();
        assert_eq!(a, c.hand_anchor());
        assert!(a.abs_diff_eq(c.position() + Vec3::new(0.35, -0.4, -0.6), EPS));
    }

    #[test]
    fn view_matrix_maps_eye_to_origin() {
        let c = centered();
        let eye = c.view_matrix().transform_point3(c.position());
        assert!(eye.abs_diff_eq(Vec3::ZERO, 1e-4));
        let ahead = c.view_matrix().transform_point3(c.position() + c.front());
        assert!(ahead.abs_diff_eq(Vec3::NEG_Z, 1e-4));
    }

    #[test]
    fn settings_are_clamped_on_construction() {
        let settings = CameraSettings { pitch: 120.0, zoom: 0.0, ..CameraSettings::default() };
        let c = Camera::with_settings(settings, RoomBounds::ROOM);
        assert_eq!(c.pitch(), PITCH_LIMIT);
        assert_eq!(c.zoom(), ZOOM_MIN);
        assert_orthonormal(&c);
    }

    #[test]
    fn zero_world_up_falls_back_to_y() {
        let settings = CameraSettings { world_up: Vec3::ZERO, ..CameraSettings::default() };
        let c = Camera::with_settings(settings, RoomBounds::ROOM);
        assert!(c.front().is_finite());
        assert!(c.up().abs_diff_eq(Vec3::Y, EPS));
        assert_orthonormal(&c);
    }
}
