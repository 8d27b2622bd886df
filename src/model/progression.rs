use super::lighting::LightingMode;
use super::pickup::Collectible;

/// Flags the renderer reads every frame. Only the interaction controller writes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressionState {
    collected: [bool; 4],
    night_mode: bool,
    door_open: bool,
    cards_visible: bool,
}

impl Default for ProgressionState {
    fn default() -> Self {
        Self {
            collected: [false; 4],
            night_mode: true,
            door_open: false,
            cards_visible: true,
        }
    }
}

impl ProgressionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_collected(&self, c: Collectible) -> bool {
        self.collected[c.index()]
    }

    pub fn collected_count(&self) -> usize {
        self.collected.iter().filter(|c| **c).count()
    }

    pub fn all_collected(&self) -> bool {
        self.collected.iter().all(|c| *c)
    }

    pub fn night_mode(&self) -> bool { self.night_mode }
    pub fn door_open(&self) -> bool { self.door_open }
    pub fn cards_visible(&self) -> bool { self.cards_visible }

    pub fn lighting_mode(&self) -> LightingMode {
        if self.night_mode { LightingMode::Night } else { LightingMode::Day }
    }

    /// Returns true only the first time `c` is collected.
    pub(crate) fn collect(&mut self, c: Collectible) -> bool {
        let slot = &mut self.collected[c.index()];
        let newly = !*slot;
        *slot = true;
        newly
    }

    /// Lights on, door open, wall board cleared.
    pub(crate) fn escape(&mut self) {
        self.night_mode = false;
        self.door_open = true;
        self.cards_visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_dark_and_locked() {
        let s = ProgressionState::new();
        assert!(s.night_mode());
        assert!(!s.door_open());
        assert!(s.cards_visible());
        assert_eq!(s.collected_count(), 0);
        assert_eq!(s.lighting_mode(), LightingMode::Night);
    }

    #[test]
    fn collect_is_monotonic() {
        let mut s = ProgressionState::new();
        assert!(s.collect(Collectible::Red));
        assert!(!s.collect(Collectible::Red));
        assert!(s.is_collected(Collectible::Red));
        assert_eq!(s.collected_count(), 1);
        assert!(!s.all_collected());
    }
}
