use glam::Vec3;

/// Axis-aligned box with inclusive bounds on every axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

/// The playable volume the camera is confined to outside free-fly mode.
pub type RoomBounds = Aabb;

impl Aabb {
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Walls, floor and ceiling of the escape room.
    pub const ROOM: Aabb = Aabb::new(Vec3::new(-4.0, 1.5, -4.9), Vec3::new(4.4, 7.0, 5.2));

    /// True if `p` lies inside on all three axes. NaN components are never inside.
    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::ROOM
    }
}
