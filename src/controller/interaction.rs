use glam::Vec3;
use tracing::info;

use crate::model::{Camera, Collectible, LightingMode, PickupVolume, ProgressionState, PICKUP_TABLE};

/// Emitted once per card, the first time the hand reaches into its volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discovery {
    pub collectible: Collectible,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    Incomplete { remaining: usize },
    /// This release opened the door
    Escaped,
    AlreadyEscaped,
}

/// Card pickups and the exit sequence
pub struct InteractionController {
    state: ProgressionState,
    volumes: Vec<PickupVolume>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::with_volumes(PICKUP_TABLE)
    }

    pub fn with_volumes(volumes: impl IntoIterator<Item = PickupVolume>) -> Self {
        Self {
            state: ProgressionState::new(),
            volumes: volumes.into_iter().collect(),
        }
    }

    pub fn state(&self) -> &ProgressionState { &self.state }
    pub fn volumes(&self) -> &[PickupVolume] { &self.volumes }

    pub fn is_collected(&self, c: Collectible) -> bool { self.state.is_collected(c) }
    pub fn collected_count(&self) -> usize { self.state.collected_count() }
    pub fn night_mode(&self) -> bool { self.state.night_mode() }
    pub fn door_open(&self) -> bool { self.state.door_open() }
    pub fn cards_visible(&self) -> bool { self.state.cards_visible() }
    pub fn lighting_mode(&self) -> LightingMode { self.state.lighting_mode() }

    /// Interact button went down with the hand at `hand`.
    pub fn on_interact_pressed(&mut self, hand: Vec3) -> Vec<Discovery> {
        let mut found = Vec::new();
        for volume in &self.volumes {
            if self.state.is_collected(volume.collectible) || !volume.contains(hand) {
                continue;
            }
            if self.state.collect(volume.collectible) {
                info!(card = volume.label, "{} found!", volume.label);
                found.push(Discovery { collectible: volume.collectible, label: volume.label });
            }
        }
        found
    }

    /// Interact button came back up. With every card found this turns the
    /// lights on, opens the door and lets the camera fly out of the room.
    pub fn on_interact_released(&mut self, camera: &mut Camera) -> ReleaseOutcome {
        if !self.state.all_collected() {
            return ReleaseOutcome::Incomplete {
                remaining: Collectible::ALL.len() - self.state.collected_count(),
            };
        }

        let first = !self.state.door_open();
        self.state.escape();
        camera.enter_free_fly();

        if first {
            info!("All cards are found. Lights turned on, door opened");
            ReleaseOutcome::Escaped
        } else {
            ReleaseOutcome::AlreadyEscaped
        }
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Aabb, CameraMode, CameraSettings, RoomBounds};
    use rstest::rstest;

    /// Camera whose hand anchor lands exactly on `hand`.
    fn camera_with_hand_at(hand: Vec3) -> Camera {
        let probe = Camera::new();
        let offset = probe.hand_anchor() - probe.position();
        let settings = CameraSettings { position: hand - offset, ..CameraSettings::default() };
        Camera::with_settings(settings, RoomBounds::ROOM)
    }

    fn collect_all(ctl: &mut InteractionController) {
        for volume in PICKUP_TABLE {
            ctl.on_interact_pressed(volume.bounds.center());
        }
    }

    #[test]
    fn start_position_collects_nothing() {
        let mut ctl = InteractionController::new();
        let camera = Camera::new();
        assert!(ctl.on_interact_pressed(camera.hand_anchor()).is_empty());
        assert_eq!(ctl.collected_count(), 0);
    }

    #[test]
    fn blue_scenario_sets_only_blue() {
        let mut ctl = InteractionController::new();
        let camera = camera_with_hand_at(Vec3::new(-3.5, 0.05, -3.3));
        let found = ctl.on_interact_pressed(camera.hand_anchor());
        assert_eq!(found, vec![Discovery { collectible: Collectible::Blue, label: "Blue card" }]);
        assert!(ctl.is_collected(Collectible::Blue));
        assert!(!ctl.is_collected(Collectible::Red));
        assert!(!ctl.is_collected(Collectible::Green));
        assert!(!ctl.is_collected(Collectible::Yellow));
    }

    #[rstest]
    #[case(Collectible::Blue)]
    #[case(Collectible::Red)]
    #[case(Collectible::Green)]
    #[case(Collectible::Yellow)]
    fn each_volume_collects_its_card(#[case] card: Collectible) {
        let mut ctl = InteractionController::new();
        let volume = PICKUP_TABLE[card.index()];
        ctl.on_interact_pressed(volume.bounds.max);
        assert!(ctl.is_collected(card));
        assert_eq!(ctl.collected_count(), 1);
    }

    #[test]
    fn second_pickup_is_silent() {
        let mut ctl = InteractionController::new();
        let hand = PICKUP_TABLE[1].bounds.center();
        assert_eq!(ctl.on_interact_pressed(hand).len(), 1);
        assert!(ctl.on_interact_pressed(hand).is_empty());
        assert!(ctl.is_collected(Collectible::Red));
        assert_eq!(ctl.collected_count(), 1);
    }

    #[test]
    fn overlapping_volumes_all_collect() {
        let shared = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let mut ctl = InteractionController::with_volumes([
            PickupVolume { collectible: Collectible::Green, label: "Green card", bounds: shared },
            PickupVolume { collectible: Collectible::Yellow, label: "Yellow card", bounds: shared },
        ]);
        let found = ctl.on_interact_pressed(Vec3::splat(0.5));
        assert_eq!(found.len(), 2);
        assert!(ctl.is_collected(Collectible::Green) && ctl.is_collected(Collectible::Yellow));
    }

    #[test]
    fn win_transition_once() {
        let mut ctl = InteractionController::new();
        let mut camera = Camera::new();
        collect_all(&mut ctl);

        assert_eq!(ctl.on_interact_released(&mut camera), ReleaseOutcome::Escaped);
        assert!(!ctl.night_mode());
        assert!(ctl.door_open());
        assert!(!ctl.cards_visible());
        assert_eq!(ctl.lighting_mode(), LightingMode::Day);
        assert_eq!(camera.mode(), CameraMode::FreeFly);

        let before = *ctl.state();
        assert_eq!(ctl.on_interact_released(&mut camera), ReleaseOutcome::AlreadyEscaped);
        assert_eq!(*ctl.state(), before);
        assert_eq!(camera.mode(), CameraMode::FreeFly);
    }

    #[test]
    fn incomplete_release_changes_nothing() {
        let mut ctl = InteractionController::new();
        let mut camera = Camera::new();
        ctl.on_interact_pressed(PICKUP_TABLE[0].bounds.center());
        ctl.on_interact_pressed(PICKUP_TABLE[3].bounds.center());

        let before = *ctl.state();
        assert_eq!(
            ctl.on_interact_released(&mut camera),
            ReleaseOutcome::Incomplete { remaining: 2 }
        );
        assert_eq!(*ctl.state(), before);
        assert!(ctl.night_mode() && !ctl.door_open() && ctl.cards_visible());
        assert_eq!(camera.mode(), CameraMode::Bounded);
    }
}
