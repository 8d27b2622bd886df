//! Prop transforms derived from progression state.
//!
//! The renderer owns meshes and draw calls; this module only decides where the
//! door, the key cards and the held candle go for the current flags.

use glam::{Mat4, Quat, Vec3};

use super::pickup::Collectible;
use super::progression::ProgressionState;

const PROP_SCALE: f32 = 3.0;
const CANDLE_SCALE: f32 = 0.01;
const CANDLE_DROP: f32 = 0.02;
const BOARD_ANGLE: f32 = 90.0;
/// Far enough outside the room that nothing of a parked card is visible.
const PARKED: Vec3 = Vec3::splat(100.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub translation: Vec3,
    /// Rotation about +Y in degrees
    pub angle: f32,
    pub scale: f32,
}

impl Placement {
    pub const fn new(translation: Vec3, angle: f32, scale: f32) -> Self {
        Self { translation, angle, scale }
    }

    pub fn to_matrix(self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_rotation_y(self.angle.to_radians()),
            self.translation,
        )
    }
}

pub const DOOR_CLOSED: Placement = Placement::new(Vec3::new(0.0, 0.0, -0.05), 0.0, PROP_SCALE);
pub const DOOR_OPEN: Placement = Placement::new(Vec3::new(-4.5, 0.0, 0.75), 80.0, PROP_SCALE);

/// Hiding spot of a card and the slot it is pinned to on the wall board once found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardSlot {
    pub collectible: Collectible,
    pub hidden: Placement,
    pub board: Vec3,
}

pub const CARD_SLOTS: [CardSlot; 4] = [
    CardSlot {
        collectible: Collectible::Blue,
        hidden: Placement::new(Vec3::new(-3.58, 0.02, -3.28), 35.0, PROP_SCALE),
        board: Vec3::new(-4.32, 3.70, 4.42),
    },
    CardSlot {
        collectible: Collectible::Red,
        hidden: Placement::new(Vec3::new(3.69, 1.10, -4.17), 0.0, PROP_SCALE),
        board: Vec3::new(-4.32, 3.66, 3.29),
    },
    CardSlot {
        collectible: Collectible::Green,
        hidden: Placement::new(Vec3::new(-3.36, 4.79, -4.86), 0.0, PROP_SCALE),
        board: Vec3::new(-4.32, 3.09, 4.40),
    },
    CardSlot {
        collectible: Collectible::Yellow,
        hidden: Placement::new(Vec3::new(2.30, 0.93, 2.87), 0.0, PROP_SCALE),
        board: Vec3::new(-4.32, 3.11, 3.29),
    },
];

pub fn door_placement(state: &ProgressionState) -> Placement {
    if state.door_open() { DOOR_OPEN } else { DOOR_CLOSED }
}

pub fn card_placement(card: Collectible, state: &ProgressionState) -> Placement {
    let slot = &CARD_SLOTS[card.index()];
    if !state.is_collected(card) {
        slot.hidden
    } else if state.cards_visible() {
        Placement::new(slot.board, BOARD_ANGLE, PROP_SCALE)
    } else {
        Placement::new(PARKED, BOARD_ANGLE, PROP_SCALE)
    }
}

/// The candle is drawn at the hand anchor until the room is escaped.
pub fn candle_placement(hand: Vec3, state: &ProgressionState) -> Option<Placement> {
    state
        .cards_visible()
        .then(|| Placement::new(hand - Vec3::Y * CANDLE_DROP, 0.0, CANDLE_SCALE))
}
